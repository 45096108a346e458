use std::time::Duration;

pub fn issue(
    config: mealplanner::Config,
    user: String,
    ttl_secs: Option<u64>,
) -> anyhow::Result<()> {
    let ttl = Duration::from_secs(ttl_secs.unwrap_or(config.auth.token_ttl_secs));
    let token = mealplanner::auth::generate_token(&config.auth, &user, ttl)?;

    tracing::info!(user = %user, ttl_secs = ttl.as_secs(), "token issued");
    println!("{token}");

    Ok(())
}
