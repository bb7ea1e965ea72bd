use common::pagination::PageMeta;
use models::car::{self, CarPayload};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::query::CarListQuery;

/// One page of `GET /cars`.
#[derive(Debug, Serialize)]
pub struct CarPage {
    pub cars: Vec<car::Model>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// Validate and insert a car.
pub async fn create_car(db: &DatabaseConnection, payload: impl Into<CarPayload>) -> Result<car::Model, ServiceError> {
    let input = payload.into().validate()?;
    input.into_active_model().insert(db).await.map_err(ServiceError::db)
}

/// Get car by id.
pub async fn get_car(db: &DatabaseConnection, id: i32) -> Result<Option<car::Model>, ServiceError> {
    car::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

/// Replace make, model and year.
pub async fn update_car(
    db: &DatabaseConnection,
    id: i32,
    payload: impl Into<CarPayload>,
) -> Result<car::Model, ServiceError> {
    let mut am: car::ActiveModel = car::Entity::find_by_id(id)
        .one(db).await.map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::not_found("car"))?
        .into();
    let input = payload.into().validate()?;
    input.apply_to(&mut am);
    am.update(db).await.map_err(ServiceError::db)
}

/// Delete car. Returns `false` when no row had that id.
pub async fn delete_car(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = car::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    Ok(res.rows_affected > 0)
}

/// Filter, search, sort and paginate cars.
#[instrument(skip(db), level = "debug")]
pub async fn list_cars(db: &DatabaseConnection, query: &CarListQuery) -> Result<CarPage, ServiceError> {
    let paginator = query.select().paginate(db, query.pagination.per_page);
    let total = paginator.num_items().await.map_err(ServiceError::db)?;
    let cars = paginator.fetch_page(query.pagination.page_index()).await.map_err(ServiceError::db)?;
    debug!(total, returned = cars.len(), "listed cars");
    Ok(CarPage { cars, meta: PageMeta::new(total, query.pagination) })
}
