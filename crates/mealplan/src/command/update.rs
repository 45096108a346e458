use mealplanner_db::table::MealPlan;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::MealPlanInput;

impl super::Command {
    #[tracing::instrument(skip_all)]
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: MealPlanInput,
        request_by: impl Into<String>,
    ) -> mealplanner_shared::Result<()> {
        let input = input.normalize();
        input.validate()?;

        let id = id.into();
        let request_by = request_by.into();
        self.check_recipe(input.recipe_id.as_ref(), &request_by)
            .await?;

        let (sql, values) = Query::update()
            .table(MealPlan::Table)
            .value(MealPlan::Date, input.date.to_string())
            .value(MealPlan::MealType, input.meal_type.to_string())
            .value(MealPlan::RecipeId, input.recipe_id)
            .value(MealPlan::Notes, input.notes)
            .value(MealPlan::UpdatedAt, mealplanner_shared::now_timestamp())
            .and_where(Expr::col(MealPlan::Id).eq(&id))
            .and_where(Expr::col(MealPlan::UserId).eq(&request_by))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("meal plan not found");
        }

        tracing::info!(meal_plan_id = %id, "meal plan updated");

        Ok(())
    }
}
