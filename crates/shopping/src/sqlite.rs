use async_trait::async_trait;
use mealplanner_db::table::ShoppingList;
use mealplanner_shared::{DateRange, State, shopping::ReplaceScope};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;

use crate::{Command, Generator, MealPlanStore, NewItem, PlannedMeal, PlannedRecipe, ShoppingListStore};

/// Rows per INSERT statement.
const INSERT_CHUNK: usize = 200;

pub type SqliteGenerator = Generator<mealplanner_mealplan::Query, Command>;

/// Generator reading meal plans and writing the list through the given pools.
pub fn sqlite_generator(state: &State) -> SqliteGenerator {
    Generator::new(
        mealplanner_mealplan::Query(state.clone()),
        Command::new(state.clone()),
    )
}

#[async_trait]
impl MealPlanStore for mealplanner_mealplan::Query {
    async fn list_meal_plans(
        &self,
        user_id: &str,
        range: DateRange,
    ) -> mealplanner_shared::Result<Vec<PlannedMeal>> {
        let meals = self
            .list(user_id, range)
            .await?
            .into_iter()
            .map(|plan| PlannedMeal {
                id: plan.id,
                date: plan.date,
                recipe: plan.recipe.map(|recipe| PlannedRecipe {
                    id: recipe.id,
                    ingredients: recipe.ingredients,
                }),
            })
            .collect();

        Ok(meals)
    }
}

#[async_trait]
impl ShoppingListStore for Command {
    async fn delete_all(
        &self,
        user_id: &str,
        scope: ReplaceScope,
    ) -> mealplanner_shared::Result<u64> {
        let mut statement = Query::delete()
            .from_table(ShoppingList::Table)
            .and_where(Expr::col(ShoppingList::UserId).eq(user_id))
            .to_owned();

        if scope == ReplaceScope::Generated {
            statement.and_where(Expr::col(ShoppingList::Generated).eq(true));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_many(
        &self,
        user_id: &str,
        items: Vec<NewItem>,
    ) -> mealplanner_shared::Result<usize> {
        let now = mealplanner_shared::now_timestamp();
        let mut tx = self.write_db.begin().await?;

        for chunk in items.chunks(INSERT_CHUNK) {
            let mut statement = Query::insert()
                .into_table(ShoppingList::Table)
                .columns([
                    ShoppingList::Id,
                    ShoppingList::UserId,
                    ShoppingList::Item,
                    ShoppingList::Quantity,
                    ShoppingList::Unit,
                    ShoppingList::Checked,
                    ShoppingList::RecipeId,
                    ShoppingList::Generated,
                    ShoppingList::CreatedAt,
                    ShoppingList::UpdatedAt,
                ])
                .to_owned();

            for item in chunk {
                statement.values_panic([
                    Ulid::new().to_string().into(),
                    user_id.into(),
                    item.item.to_owned().into(),
                    item.quantity.into(),
                    item.unit.to_owned().into(),
                    false.into(),
                    item.recipe_id.to_owned().into(),
                    true.into(),
                    now.into(),
                    now.into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(items.len())
    }
}
