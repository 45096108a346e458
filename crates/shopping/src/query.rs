use std::ops::Deref;

use mealplanner_db::table::ShoppingList;
use mealplanner_shared::State;
use sea_query::{Expr, ExprTrait, Func, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShoppingItemView {
    pub id: String,
    pub item: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub checked: bool,
    pub recipe_id: Option<String>,
    pub generated: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShoppingStats {
    pub total: i64,
    pub checked: i64,
}

#[derive(Clone)]
pub struct Query(pub State);

impl Deref for Query {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Query {
    /// Unchecked items first, then by name ignoring case.
    pub async fn list(
        &self,
        user_id: impl Into<String>,
    ) -> mealplanner_shared::Result<Vec<ShoppingItemView>> {
        let user_id = user_id.into();
        let (sql, values) = sea_query::Query::select()
            .columns([
                ShoppingList::Id,
                ShoppingList::Item,
                ShoppingList::Quantity,
                ShoppingList::Unit,
                ShoppingList::Checked,
                ShoppingList::RecipeId,
                ShoppingList::Generated,
                ShoppingList::CreatedAt,
                ShoppingList::UpdatedAt,
            ])
            .from(ShoppingList::Table)
            .and_where(Expr::col(ShoppingList::UserId).eq(&user_id))
            .order_by(ShoppingList::Checked, Order::Asc)
            .order_by_expr(Func::lower(Expr::col(ShoppingList::Item)).into(), Order::Asc)
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingItemView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn stats(
        &self,
        user_id: impl Into<String>,
    ) -> mealplanner_shared::Result<ShoppingStats> {
        let (total, checked) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COUNT(*), COALESCE(SUM(checked), 0)
            FROM shopping_list
            WHERE user_id = ?1
            "#,
        )
        .bind(user_id.into())
        .fetch_one(&self.read_db)
        .await?;

        Ok(ShoppingStats { total, checked })
    }
}
