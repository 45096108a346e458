use mealplanner_db::table::MealPlan;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::Validate;

use super::MealPlanInput;

impl super::Command {
    #[tracing::instrument(skip_all)]
    pub async fn create(
        &self,
        input: MealPlanInput,
        request_by: impl Into<String>,
    ) -> mealplanner_shared::Result<String> {
        let input = input.normalize();
        input.validate()?;

        let request_by = request_by.into();
        self.check_recipe(input.recipe_id.as_ref(), &request_by)
            .await?;

        let id = Ulid::new().to_string();
        let now = mealplanner_shared::now_timestamp();

        let statement = Query::insert()
            .into_table(MealPlan::Table)
            .columns([
                MealPlan::Id,
                MealPlan::UserId,
                MealPlan::Date,
                MealPlan::MealType,
                MealPlan::RecipeId,
                MealPlan::Notes,
                MealPlan::CreatedAt,
                MealPlan::UpdatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                request_by.to_owned().into(),
                input.date.to_string().into(),
                input.meal_type.to_string().into(),
                input.recipe_id.into(),
                input.notes.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(meal_plan_id = %id, date = %input.date, "meal plan created");

        Ok(id)
    }
}
