use async_trait::async_trait;
use mealplanner_shared::{DateRange, recipe::Ingredients, shopping::ReplaceScope};
use time::Date;

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRecipe {
    pub id: String,
    pub ingredients: Ingredients,
}

/// A meal plan entry as seen by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMeal {
    pub id: String,
    pub date: Date,
    pub recipe: Option<PlannedRecipe>,
}

/// Row written to the shopping list by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub item: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub recipe_id: Option<String>,
}

#[async_trait]
pub trait MealPlanStore: Send + Sync {
    /// Entries owned by `user_id` dated within the inclusive range.
    async fn list_meal_plans(
        &self,
        user_id: &str,
        range: DateRange,
    ) -> mealplanner_shared::Result<Vec<PlannedMeal>>;
}

#[async_trait]
pub trait ShoppingListStore: Send + Sync {
    /// Returns the number of removed rows.
    async fn delete_all(
        &self,
        user_id: &str,
        scope: ReplaceScope,
    ) -> mealplanner_shared::Result<u64>;

    /// Returns the number of inserted rows.
    async fn insert_many(
        &self,
        user_id: &str,
        items: Vec<NewItem>,
    ) -> mealplanner_shared::Result<usize>;
}
