use mealplanner_db::table::ShoppingList;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    #[tracing::instrument(skip_all, fields(checked = checked))]
    pub async fn toggle(
        &self,
        id: impl Into<String>,
        checked: bool,
        request_by: impl Into<String>,
    ) -> mealplanner_shared::Result<()> {
        let id = id.into();
        let request_by = request_by.into();

        let (sql, values) = Query::update()
            .table(ShoppingList::Table)
            .value(ShoppingList::Checked, checked)
            .value(ShoppingList::UpdatedAt, mealplanner_shared::now_timestamp())
            .and_where(Expr::col(ShoppingList::Id).eq(&id))
            .and_where(Expr::col(ShoppingList::UserId).eq(&request_by))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("shopping item not found");
        }

        Ok(())
    }
}
