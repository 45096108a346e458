use mealplanner_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::RecipeInput;

impl super::Command {
    #[tracing::instrument(skip_all)]
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: RecipeInput,
        request_by: impl Into<String>,
    ) -> mealplanner_shared::Result<()> {
        let input = input.normalize();
        input.validate()?;

        let id = id.into();
        let request_by = request_by.into();
        let ingredients = serde_json::to_string(&input.ingredients)?;

        let (sql, values) = Query::update()
            .table(Recipe::Table)
            .value(Recipe::Name, input.name)
            .value(Recipe::Description, input.description)
            .value(Recipe::Ingredients, ingredients)
            .value(Recipe::Instructions, input.instructions)
            .value(Recipe::PrepTime, input.prep_time)
            .value(Recipe::CookTime, input.cook_time)
            .value(Recipe::Servings, input.servings)
            .value(Recipe::ImageUrl, input.image_url)
            .value(Recipe::UpdatedAt, mealplanner_shared::now_timestamp())
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .and_where(Expr::col(Recipe::UserId).eq(&request_by))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("recipe not found");
        }

        tracing::info!(recipe_id = %id, user_id = %request_by, "recipe updated");

        Ok(())
    }
}
