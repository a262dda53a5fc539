use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_users_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

/// `CREATE TABLE IF NOT EXISTS users (...)`.
///
/// Never alters an existing table, so column changes here are not applied to
/// databases that already have one.
pub fn create_users_table() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Users::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Users::FirstName).string_len(50).not_null())
        .col(ColumnDef::new(Users::LastName).string_len(50).not_null())
        .col(ColumnDef::new(Users::AddressStreet).string_len(100))
        .col(ColumnDef::new(Users::AddressCity).string_len(50))
        .col(ColumnDef::new(Users::AddressState).string_len(50))
        .col(ColumnDef::new(Users::AddressZip).string_len(20))
        .col(ColumnDef::new(Users::PhoneNumber).array(ColumnType::Text))
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    AddressStreet,
    AddressCity,
    AddressState,
    AddressZip,
    PhoneNumber,
}
