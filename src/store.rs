//! Read and write operations against the database, one set per entity.
//! Every write is a single-row insert; ids are assigned by the database.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::entity::{pizza, review, survey};
use crate::validate::ReviewInput;

pub async fn create_pizza(
    db: &DatabaseConnection,
    name: &str,
    ingredients: &str,
    price: f64,
) -> Result<pizza::Model, DbErr> {
    pizza::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ingredients: ActiveValue::Set(ingredients.to_string()),
        price: ActiveValue::Set(price),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn first_pizza(db: &DatabaseConnection) -> Result<Option<pizza::Model>, DbErr> {
    pizza::Entity::find().one(db).await
}

pub async fn create_review(
    db: &DatabaseConnection,
    input: ReviewInput,
) -> Result<review::Model, DbErr> {
    review::ActiveModel {
        name: ActiveValue::Set(input.name),
        comment: ActiveValue::Set(input.comment),
        rating: ActiveValue::Set(input.rating),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn all_reviews(db: &DatabaseConnection) -> Result<Vec<review::Model>, DbErr> {
    review::Entity::find()
        .order_by_asc(review::Column::Id)
        .all(db)
        .await
}

pub async fn create_survey(
    db: &DatabaseConnection,
    favorite_pizza: String,
) -> Result<survey::Model, DbErr> {
    survey::ActiveModel {
        favorite_pizza: ActiveValue::Set(favorite_pizza),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn all_surveys(db: &DatabaseConnection) -> Result<Vec<survey::Model>, DbErr> {
    survey::Entity::find()
        .order_by_asc(survey::Column::Id)
        .all(db)
        .await
}
