mod meal_plan;
mod recipe;
mod shopping_list;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealplanner",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        meal_plan::CreateTable,
        meal_plan::CreateIdx1,
        meal_plan::CreateIdx2,
        shopping_list::CreateTable,
        shopping_list::CreateIdx1
    ]
);
