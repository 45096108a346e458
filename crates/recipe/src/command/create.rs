use mealplanner_db::table::Recipe;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::Validate;

use super::RecipeInput;

impl super::Command {
    #[tracing::instrument(skip_all)]
    pub async fn create(
        &self,
        input: RecipeInput,
        request_by: impl Into<String>,
    ) -> mealplanner_shared::Result<String> {
        let input = input.normalize();
        input.validate()?;

        let request_by = request_by.into();
        let id = Ulid::new().to_string();
        let now = mealplanner_shared::now_timestamp();
        let ingredients = serde_json::to_string(&input.ingredients)?;

        let statement = Query::insert()
            .into_table(Recipe::Table)
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
            .values_panic([
                id.to_owned().into(),
                request_by.to_owned().into(),
                input.name.into(),
                input.description.into(),
                ingredients.into(),
                input.instructions.into(),
                input.prep_time.into(),
                input.cook_time.into(),
                input.servings.into(),
                input.image_url.into(),
                false.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(recipe_id = %id, user_id = %request_by, "recipe created");

        Ok(id)
    }
}
