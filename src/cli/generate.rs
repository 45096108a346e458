use mealplanner_shared::{State, parse_date};

pub async fn run(
    config: mealplanner::Config,
    user: String,
    start: Option<String>,
    end: Option<String>,
) -> anyhow::Result<()> {
    let start = start.as_deref().map(parse_date).transpose()?;
    let end = end.as_deref().map(parse_date).transpose()?;

    let pool = mealplanner::create_pool(&config.database.url, 1).await?;
    mealplanner::migrate(&pool).await?;

    let app = mealplanner::AppState::new(config, State::single(pool.clone()));
    let range = mealplanner::routes::range_or_current_week(start, end)?;

    let generated = app.generator().generate(Some(&user), range).await?;

    tracing::info!(
        user = %user,
        start = %range.start,
        end = %range.end,
        item_count = generated.item_count,
        "shopping list generated"
    );
    println!("{}", generated.item_count);

    pool.close().await;

    Ok(())
}
