use std::path::Path;

use anyhow::Result;

#[tracing::instrument(skip(config))]
pub async fn migrate(config: mealplanner::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = mealplanner::create_pool(&config.database.url, 1).await?;
    mealplanner::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn reset(config: mealplanner::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    let path = database_path(&config.database.url);
    for file in [
        path.to_owned(),
        format!("{path}-wal"),
        format!("{path}-shm"),
    ] {
        if Path::new(&file).exists() {
            std::fs::remove_file(&file)?;
            tracing::warn!("Dropped database file: {}", file);
        }
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}

/// File path of a `sqlite:` url, query string excluded.
fn database_path(url: &str) -> &str {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);

    path.split('?').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path() {
        assert_eq!(database_path("sqlite:mealplanner.db"), "mealplanner.db");
        assert_eq!(database_path("sqlite://data/app.db?mode=rwc"), "data/app.db");
        assert_eq!(database_path("app.db"), "app.db");
    }
}
