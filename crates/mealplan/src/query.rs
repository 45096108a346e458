use std::ops::Deref;

use mealplanner_shared::{DateRange, State, add_days, mealplan::MealType, recipe::Ingredients};
use serde::Serialize;
use sqlx::{
    prelude::FromRow,
    types::{Json, Text},
};
use time::Date;

#[derive(FromRow)]
struct MealPlanRow {
    id: String,
    date: Date,
    meal_type: Text<MealType>,
    recipe_id: Option<String>,
    notes: Option<String>,
    created_at: i64,
    updated_at: i64,
    recipe_name: Option<String>,
    recipe_ingredients: Option<Json<Ingredients>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub ingredients: Ingredients,
}

#[derive(Debug, Clone, Serialize)]
pub struct MealPlanView {
    pub id: String,
    pub date: Date,
    pub meal_type: MealType,
    pub recipe_id: Option<String>,
    pub notes: Option<String>,
    pub recipe: Option<RecipeSummary>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<MealPlanRow> for MealPlanView {
    fn from(row: MealPlanRow) -> Self {
        let recipe = match (&row.recipe_id, row.recipe_name) {
            (Some(id), Some(name)) => Some(RecipeSummary {
                id: id.to_owned(),
                name,
                ingredients: row.recipe_ingredients.map(|v| v.0).unwrap_or_default(),
            }),
            _ => None,
        };

        Self {
            id: row.id,
            date: row.date,
            meal_type: row.meal_type.0,
            recipe_id: row.recipe_id,
            notes: row.notes,
            recipe,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub date: Date,
    pub meals: Vec<MealPlanView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekView {
    pub start: Date,
    pub end: Date,
    pub previous: Option<Date>,
    pub next: Option<Date>,
    pub days: Vec<DayView>,
}

const SELECT_WITH_RECIPE: &str = r#"
    SELECT mp.id, mp.date, mp.meal_type, mp.recipe_id, mp.notes, mp.created_at, mp.updated_at,
           r.name AS recipe_name, r.ingredients AS recipe_ingredients
    FROM meal_plan mp
    LEFT JOIN recipe r ON r.id = mp.recipe_id AND r.user_id = mp.user_id
"#;

#[derive(Clone)]
pub struct Query(pub State);

impl Deref for Query {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Query {
    /// Entries of the user dated within the inclusive range, oldest first,
    /// each carrying its recipe when one is assigned.
    pub async fn list(
        &self,
        user_id: impl Into<String>,
        range: DateRange,
    ) -> mealplanner_shared::Result<Vec<MealPlanView>> {
        if range.is_empty() {
            return Ok(vec![]);
        }

        let sql = format!(
            "{SELECT_WITH_RECIPE} WHERE mp.user_id = ?1 AND mp.date >= ?2 AND mp.date <= ?3 ORDER BY mp.date, mp.created_at, mp.rowid"
        );

        let rows = sqlx::query_as::<_, MealPlanRow>(&sql)
            .bind(user_id.into())
            .bind(range.start.to_string())
            .bind(range.end.to_string())
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> mealplanner_shared::Result<Option<MealPlanView>> {
        let sql = format!("{SELECT_WITH_RECIPE} WHERE mp.id = ?1 AND mp.user_id = ?2 LIMIT 1");

        let row = sqlx::query_as::<_, MealPlanRow>(&sql)
            .bind(id.into())
            .bind(user_id.into())
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Next entries on or after `from`.
    pub async fn upcoming(
        &self,
        user_id: impl Into<String>,
        from: Date,
        limit: u32,
    ) -> mealplanner_shared::Result<Vec<MealPlanView>> {
        let sql = format!(
            "{SELECT_WITH_RECIPE} WHERE mp.user_id = ?1 AND mp.date >= ?2 ORDER BY mp.date, mp.created_at, mp.rowid LIMIT ?3"
        );

        let rows = sqlx::query_as::<_, MealPlanRow>(&sql)
            .bind(user_id.into())
            .bind(from.to_string())
            .bind(limit)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn week(
        &self,
        user_id: impl Into<String>,
        date: Date,
    ) -> mealplanner_shared::Result<WeekView> {
        let range = DateRange::week_of(date)?;
        let meals = self.list(user_id, range).await?;

        Ok(group_by_day(range, meals))
    }
}

fn group_by_day(range: DateRange, meals: Vec<MealPlanView>) -> WeekView {
    let mut days = range
        .days()
        .into_iter()
        .map(|date| DayView {
            date,
            meals: vec![],
        })
        .collect::<Vec<_>>();

    for meal in meals {
        if let Some(day) = days.iter_mut().find(|d| d.date == meal.date) {
            day.meals.push(meal);
        }
    }

    for day in days.iter_mut() {
        day.meals.sort_by_key(|m| m.meal_type.rank());
    }

    WeekView {
        start: range.start,
        end: range.end,
        previous: add_days(range.start, -7).ok(),
        next: add_days(range.start, 7).ok(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn meal(id: &str, date: Date, meal_type: MealType) -> MealPlanView {
        MealPlanView {
            id: id.to_owned(),
            date,
            meal_type,
            recipe_id: None,
            notes: None,
            recipe: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn week_buckets_sorted_by_meal_type() {
        let range = DateRange::week_of(date!(2024 - 01 - 03)).unwrap();
        let week = group_by_day(
            range,
            vec![
                meal("a", date!(2024 - 01 - 01), MealType::Snack),
                meal("b", date!(2024 - 01 - 01), MealType::Breakfast),
                meal("c", date!(2024 - 01 - 06), MealType::Dinner),
                meal("d", date!(2024 - 01 - 01), MealType::Dinner),
            ],
        );

        assert_eq!(week.start, date!(2023 - 12 - 31));
        assert_eq!(week.previous, Some(date!(2023 - 12 - 24)));
        assert_eq!(week.next, Some(date!(2024 - 01 - 07)));
        assert_eq!(week.days.len(), 7);
        assert!(week.days[0].meals.is_empty());

        let ids = week.days[1]
            .meals
            .iter()
            .map(|m| m.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "d", "a"]);
        assert_eq!(week.days[6].meals[0].id, "c");
    }

    #[test]
    fn last_supported_week_has_no_next() {
        let range = DateRange::week_of(date!(9999 - 12 - 20)).unwrap();
        let week = group_by_day(range, vec![]);

        assert_eq!(week.previous, Some(date!(9999 - 12 - 12)));
        assert_eq!(week.next, None);
        assert_eq!(week.days.len(), 7);
    }
}
