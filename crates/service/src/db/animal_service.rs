use common::pagination::PageMeta;
use models::animal::{self, AnimalPayload};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::query::AnimalListQuery;

/// One page of `GET /animals`.
#[derive(Debug, Serialize)]
pub struct AnimalPage {
    pub animals: Vec<animal::Model>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// Validate and insert an animal.
pub async fn create_animal(
    db: &DatabaseConnection,
    payload: impl Into<AnimalPayload>,
) -> Result<animal::Model, ServiceError> {
    let input = payload.into().validate()?;
    input.into_active_model().insert(db).await.map_err(ServiceError::db)
}

/// Get animal by id.
pub async fn get_animal(db: &DatabaseConnection, id: i32) -> Result<Option<animal::Model>, ServiceError> {
    animal::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

/// Replace every field but the id. A missing id wins over a validation failure.
pub async fn update_animal(
    db: &DatabaseConnection,
    id: i32,
    payload: impl Into<AnimalPayload>,
) -> Result<animal::Model, ServiceError> {
    let mut am: animal::ActiveModel = animal::Entity::find_by_id(id)
        .one(db).await.map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::not_found("animal"))?
        .into();
    let input = payload.into().validate()?;
    input.apply_to(&mut am);
    am.update(db).await.map_err(ServiceError::db)
}

/// Filter, sort and paginate animals.
#[instrument(skip(db), level = "debug")]
pub async fn list_animals(db: &DatabaseConnection, query: &AnimalListQuery) -> Result<AnimalPage, ServiceError> {
    let paginator = query.select().paginate(db, query.pagination.per_page);
    let total = paginator.num_items().await.map_err(ServiceError::db)?;
    let animals = paginator.fetch_page(query.pagination.page_index()).await.map_err(ServiceError::db)?;
    debug!(total, returned = animals.len(), "listed animals");
    Ok(AnimalPage { animals, meta: PageMeta::new(total, query.pagination) })
}
