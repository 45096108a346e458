use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;

#[tokio::test]
async fn test_migrate_creates_tables() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;

    let mut conn = pool.acquire().await?;
    mealplanner_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    // already applied migrations are skipped
    mealplanner_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('recipe', 'meal_plan', 'shopping_list') ORDER BY name",
    )
    .fetch_all(&pool)
    .await?;

    let tables = tables.into_iter().map(|(name,)| name).collect::<Vec<_>>();
    assert_eq!(tables, vec!["meal_plan", "recipe", "shopping_list"]);

    let indexes: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await?;

    assert_eq!(indexes.len(), 4);

    Ok(())
}
