use mealplanner_db::table::ShoppingList;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::Validate;

use super::ShoppingItemInput;

impl super::Command {
    /// Adds a manual item to the list.
    #[tracing::instrument(skip_all)]
    pub async fn create(
        &self,
        input: ShoppingItemInput,
        request_by: impl Into<String>,
    ) -> mealplanner_shared::Result<String> {
        let input = input.normalize();
        input.validate()?;

        let request_by = request_by.into();
        let id = Ulid::new().to_string();
        let now = mealplanner_shared::now_timestamp();

        let statement = Query::insert()
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
            .values_panic([
                id.to_owned().into(),
                request_by.to_owned().into(),
                input.item.into(),
                input.quantity.into(),
                input.unit.into(),
                input.checked.into(),
                Option::<String>::None.into(),
                false.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(item_id = %id, user_id = %request_by, "shopping item created");

        Ok(id)
    }
}
