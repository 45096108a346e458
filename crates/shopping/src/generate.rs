use std::time::Duration;

use mealplanner_shared::{DateRange, Error, shopping::ReplaceScope};
use serde::Serialize;

use crate::{MealPlanStore, NewItem, ShoppingListStore, consolidate, flatten};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generated {
    pub item_count: usize,
}

/// Rebuilds a user's shopping list from the meals planned in a date range.
pub struct Generator<M, S> {
    meal_plans: M,
    shopping_list: S,
    scope: ReplaceScope,
    timeout: Option<Duration>,
}

impl<M: MealPlanStore, S: ShoppingListStore> Generator<M, S> {
    pub fn new(meal_plans: M, shopping_list: S) -> Self {
        Self {
            meal_plans,
            shopping_list,
            scope: ReplaceScope::default(),
            timeout: None,
        }
    }

    pub fn scope(mut self, scope: ReplaceScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn timeout(mut self, timeout: impl Into<Option<Duration>>) -> Self {
        self.timeout = timeout.into();
        self
    }

    /// Replaces the list with one consolidated item per ingredient group
    /// and returns how many were written.
    ///
    /// Not transactional: when the insert fails after the delete succeeded
    /// the list is left empty. On timeout, work already done is kept.
    #[tracing::instrument(skip_all, fields(start = %range.start, end = %range.end))]
    pub async fn generate(
        &self,
        request_by: Option<&str>,
        range: DateRange,
    ) -> mealplanner_shared::Result<Generated> {
        let Some(user_id) = request_by.map(str::trim).filter(|v| !v.is_empty()) else {
            return Err(Error::Unauthenticated);
        };

        let Some(timeout) = self.timeout else {
            return self.run(user_id, range).await;
        };

        match tokio::time::timeout(timeout, self.run(user_id, range)).await {
            Ok(res) => res,
            Err(_) => {
                tracing::warn!(user_id, timeout = ?timeout, "shopping list generation timed out");
                Err(Error::Timeout)
            }
        }
    }

    async fn run(&self, user_id: &str, range: DateRange) -> mealplanner_shared::Result<Generated> {
        let meals = if range.is_empty() {
            vec![]
        } else {
            self.meal_plans.list_meal_plans(user_id, range).await?
        };

        let items = consolidate(flatten(&meals))
            .into_iter()
            .map(NewItem::from)
            .collect::<Vec<_>>();

        let deleted = self.shopping_list.delete_all(user_id, self.scope).await?;

        let item_count = if items.is_empty() {
            0
        } else {
            self.shopping_list.insert_many(user_id, items).await?
        };

        tracing::info!(
            user_id,
            meals = meals.len(),
            deleted,
            item_count,
            scope = %self.scope,
            "shopping list generated"
        );

        Ok(Generated { item_count })
    }
}
