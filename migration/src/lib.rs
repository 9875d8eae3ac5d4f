pub use sea_orm_migration::prelude::*;

mod m20260712_101500_create_table_pizzas;
mod m20260712_101730_create_table_reviews;
mod m20260712_101845_create_table_surveys;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_101500_create_table_pizzas::Migration),
            Box::new(m20260712_101730_create_table_reviews::Migration),
            Box::new(m20260712_101845_create_table_surveys::Migration),
        ]
    }
}
