//! Example rows inserted on first startup.
//!
//! Seeding only looks at whether the table has any rows at all; it never
//! checks for the specific example records.

use models::{animal::{self, AnimalInput}, car::{self, CarInput}};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::errors::ServiceError;

pub fn example_animals() -> Vec<AnimalInput> {
    vec![
        AnimalInput::new("Leo", "Lion", 5),
        AnimalInput::new("Milo", "Cat", 3),
        AnimalInput::new("Buddy", "Dog", 4),
        AnimalInput::new("Coco", "Parrot", 2),
        AnimalInput::new("Max", "Rabbit", 1),
    ]
}

pub fn example_cars() -> Vec<CarInput> {
    vec![
        CarInput::new("Toyota", "Camry", 2000),
        CarInput::new("Honda", "Civic", 2009),
        CarInput::new("Ford", "Mustang", 2011),
    ]
}

/// Insert [`example_animals`] when the table is empty. Returns the number of rows added.
pub async fn seed_animals_if_empty(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let existing = animal::Entity::find().count(db).await.map_err(ServiceError::db)?;
    if existing > 0 {
        info!(existing, "animals table not empty; skip seeding");
        return Ok(0);
    }
    let rows = example_animals();
    let n = rows.len() as u64;
    animal::Entity::insert_many(rows.into_iter().map(AnimalInput::into_active_model))
        .exec(db)
        .await
        .map_err(ServiceError::db)?;
    info!(inserted = n, "seeded animals");
    Ok(n)
}

/// Insert [`example_cars`] when the table is empty. Returns the number of rows added.
pub async fn seed_cars_if_empty(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let existing = car::Entity::find().count(db).await.map_err(ServiceError::db)?;
    if existing > 0 {
        info!(existing, "cars table not empty; skip seeding");
        return Ok(0);
    }
    let rows = example_cars();
    let n = rows.len() as u64;
    car::Entity::insert_many(rows.into_iter().map(CarInput::into_active_model))
        .exec(db)
        .await
        .map_err(ServiceError::db)?;
    info!(inserted = n, "seeded cars");
    Ok(n)
}
