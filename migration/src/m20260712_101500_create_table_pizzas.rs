use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pizzas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pizzas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pizzas::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Pizzas::Ingredients).string_len(200).not_null())
                    .col(ColumnDef::new(Pizzas::Price).double().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pizzas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pizzas {
    Table,
    Id,
    Name,
    Ingredients,
    Price,
}
