use mealplanner_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Flips the favourite flag and returns its new value.
    #[tracing::instrument(skip_all)]
    pub async fn toggle_favourite(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> mealplanner_shared::Result<bool> {
        let id = id.into();
        let request_by = request_by.into();

        let (sql, values) = Query::update()
            .table(Recipe::Table)
            .value(Recipe::IsFavourite, Expr::col(Recipe::IsFavourite).not())
            .value(Recipe::UpdatedAt, mealplanner_shared::now_timestamp())
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .and_where(Expr::col(Recipe::UserId).eq(&request_by))
            .returning_col(Recipe::IsFavourite)
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, (bool,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        let Some((is_favourite,)) = row else {
            mealplanner_shared::not_found!("recipe not found");
        };

        tracing::info!(recipe_id = %id, is_favourite, "recipe favourite toggled");

        Ok(is_favourite)
    }
}
