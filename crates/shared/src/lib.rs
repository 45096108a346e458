mod command;
mod date;
pub mod mealplan;
pub mod recipe;
pub mod shopping;

pub use command::*;
pub use date::*;

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl State {
    /// Same pool for reads and writes, used by tools and tests.
    pub fn single(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }
}

/// Current unix timestamp in seconds.
pub fn now_timestamp() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
