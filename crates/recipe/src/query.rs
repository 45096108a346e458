use std::ops::Deref;

use mealplanner_db::table::Recipe;
use mealplanner_shared::{State, recipe::Ingredients};
use sea_query::{Expr, ExprTrait, Func, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{prelude::FromRow, types::Json};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecipeView {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Json<Ingredients>,
    pub instructions: String,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub image_url: Option<String>,
    pub is_favourite: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Clone)]
pub struct Query(pub State);

impl Deref for Query {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn select_view(user_id: &str) -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Recipe::Id,
            Recipe::UserId,
            Recipe::Name,
            Recipe::Description,
            Recipe::Ingredients,
            Recipe::Instructions,
            Recipe::PrepTime,
            Recipe::CookTime,
            Recipe::Servings,
            Recipe::ImageUrl,
            Recipe::IsFavourite,
            Recipe::CreatedAt,
            Recipe::UpdatedAt,
        ])
        .from(Recipe::Table)
        .and_where(Expr::col(Recipe::UserId).eq(user_id))
        .to_owned()
}

/// `%text%` with LIKE wildcards in `text` escaped.
fn like_pattern(text: &str) -> Option<String> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    Some(pattern)
}

impl Query {
    /// All recipes of the user, newest first.
    pub async fn list(
        &self,
        user_id: impl Into<String>,
    ) -> mealplanner_shared::Result<Vec<RecipeView>> {
        self.recent_inner(user_id.into(), None, None).await
    }

    /// Recipes whose name or description contains `text`, ignoring case.
    /// Blank text lists everything.
    pub async fn search(
        &self,
        user_id: impl Into<String>,
        text: &str,
    ) -> mealplanner_shared::Result<Vec<RecipeView>> {
        self.recent_inner(user_id.into(), Some(text), None).await
    }

    pub async fn recent(
        &self,
        user_id: impl Into<String>,
        limit: u64,
    ) -> mealplanner_shared::Result<Vec<RecipeView>> {
        self.recent_inner(user_id.into(), None, Some(limit)).await
    }

    async fn recent_inner(
        &self,
        user_id: String,
        text: Option<&str>,
        limit: Option<u64>,
    ) -> mealplanner_shared::Result<Vec<RecipeView>> {
        let mut statement = select_view(&user_id);

        if let Some(pattern) = text.and_then(like_pattern) {
            statement.and_where(Expr::cust_with_values(
                r"(lower(name) LIKE ? ESCAPE '\' OR lower(coalesce(description, '')) LIKE ? ESCAPE '\')",
                [pattern.to_owned(), pattern],
            ));
        }

        statement
            .order_by(Recipe::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc);

        if let Some(limit) = limit {
            statement.limit(limit);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> mealplanner_shared::Result<Option<RecipeView>> {
        let id = id.into();
        let user_id = user_id.into();
        let (sql, values) = select_view(&user_id)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeView, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn count(&self, user_id: impl Into<String>) -> mealplanner_shared::Result<i64> {
        let user_id = user_id.into();
        let (sql, values) = sea_query::Query::select()
            .expr(Func::count(Expr::col(Recipe::Id)))
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::UserId).eq(&user_id))
            .build_sqlx(SqliteQueryBuilder);

        let (count,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(count)
    }

    /// Whether the recipe exists and belongs to the user.
    pub async fn exists(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> mealplanner_shared::Result<bool> {
        let id = id.into();
        let user_id = user_id.into();
        let (sql, values) = sea_query::Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .and_where(Expr::col(Recipe::UserId).eq(&user_id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }
}
