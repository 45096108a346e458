use mealplanner_db::table::{MealPlan, Recipe, ShoppingList};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Deletes the recipe and detaches it from the owner's meal plans and
    /// shopping list items.
    #[tracing::instrument(skip_all)]
    pub async fn delete(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> mealplanner_shared::Result<()> {
        let id = id.into();
        let request_by = request_by.into();
        let mut tx = self.write_db.begin().await?;

        let (sql, values) = Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .and_where(Expr::col(Recipe::UserId).eq(&request_by))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("recipe not found");
        }

        let (sql, values) = Query::update()
            .table(MealPlan::Table)
            .value(MealPlan::RecipeId, Option::<String>::None)
            .and_where(Expr::col(MealPlan::RecipeId).eq(&id))
            .and_where(Expr::col(MealPlan::UserId).eq(&request_by))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = Query::update()
            .table(ShoppingList::Table)
            .value(ShoppingList::RecipeId, Option::<String>::None)
            .and_where(Expr::col(ShoppingList::RecipeId).eq(&id))
            .and_where(Expr::col(ShoppingList::UserId).eq(&request_by))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!(recipe_id = %id, user_id = %request_by, "recipe deleted");

        Ok(())
    }
}
