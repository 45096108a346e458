use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::ShoppingList;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ShoppingList::Table)
        .col(
            ColumnDef::new(ShoppingList::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(ShoppingList::UserId).string().not_null())
        .col(ColumnDef::new(ShoppingList::Item).string().not_null())
        .col(ColumnDef::new(ShoppingList::Quantity).double().null())
        .col(ColumnDef::new(ShoppingList::Unit).string().null())
        .col(
            ColumnDef::new(ShoppingList::Checked)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(ShoppingList::RecipeId)
                .string()
                .null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(ShoppingList::Generated)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(ShoppingList::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(ShoppingList::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(ShoppingList::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_shopping_list_user")
        .table(ShoppingList::Table)
        .col(ShoppingList::UserId)
        .col(ShoppingList::Generated)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_shopping_list_user")
        .table(ShoppingList::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
