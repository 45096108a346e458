use mealplanner_db::table::ShoppingList;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    #[tracing::instrument(skip_all)]
    pub async fn delete(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> mealplanner_shared::Result<()> {
        let id = id.into();
        let request_by = request_by.into();

        let (sql, values) = Query::delete()
            .from_table(ShoppingList::Table)
            .and_where(Expr::col(ShoppingList::Id).eq(&id))
            .and_where(Expr::col(ShoppingList::UserId).eq(&request_by))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("shopping item not found");
        }

        tracing::info!(item_id = %id, "shopping item deleted");

        Ok(())
    }
}
