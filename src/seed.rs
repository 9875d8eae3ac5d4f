use anyhow::Context;
use sea_orm::DatabaseConnection;

use crate::store;

const DEFAULT_PIZZAS: [(&str, &str, f64); 3] = [
    ("Margherita", "Tomato, Mozzarella, Basil", 8.99),
    ("Pepperoni", "Tomato, Mozzarella, Pepperoni", 9.99),
    ("Hawaiian", "Tomato, Mozzarella, Ham, Pineapple", 10.99),
];

/// Fills the pizza table with the fixed menu on first startup. Runs before
/// the server accepts requests; a non-empty table is left untouched.
pub async fn seed_pizzas(db: &DatabaseConnection) -> anyhow::Result<()> {
    if store::first_pizza(db)
        .await
        .context("failed to query pizzas")?
        .is_some()
    {
        trace!("pizza table already populated, skipping seeding");
        return Ok(());
    }

    for (name, ingredients, price) in DEFAULT_PIZZAS {
        store::create_pizza(db, name, ingredients, price)
            .await
            .with_context(|| format!("failed to insert pizza {name}"))?;
    }

    info!("initial pizzas added to the database");
    Ok(())
}

#[cfg(test)]
mod tests {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database, EntityTrait, QueryOrder};

    use super::*;
    use crate::entity::pizza;

    async fn fresh_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    #[tokio::test]
    async fn seeds_an_empty_database_with_three_pizzas() {
        let db = fresh_db().await;
        seed_pizzas(&db).await.unwrap();

        let pizzas = pizza::Entity::find()
            .order_by_asc(pizza::Column::Id)
            .all(&db)
            .await
            .unwrap();
        assert_eq!(pizzas.len(), 3);

        let names: Vec<_> = pizzas.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Margherita", "Pepperoni", "Hawaiian"]);

        let prices: Vec<_> = pizzas.iter().map(|p| p.price).collect();
        assert_eq!(prices, [8.99, 9.99, 10.99]);
    }

    #[tokio::test]
    async fn seeding_twice_does_not_duplicate_rows() {
        let db = fresh_db().await;
        seed_pizzas(&db).await.unwrap();
        seed_pizzas(&db).await.unwrap();

        let pizzas = pizza::Entity::find().all(&db).await.unwrap();
        assert_eq!(pizzas.len(), 3);
    }
}
