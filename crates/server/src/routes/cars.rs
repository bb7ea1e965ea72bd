use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use models::car::{self, CarPayload};
use service::db::car_service::{self, CarPage};
use service::query::CarListParams;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/cars", tag = "cars",
    request_body = crate::openapi::CarInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CarDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<car::Model>), JsonApiError> {
    let Json(payload) = payload?;
    let created = car_service::create_car(&state.db, payload).await?;
    info!(id = created.id, make = %created.make, model = %created.model, year = created.year, "created car");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/cars", tag = "cars",
    params(crate::openapi::CarListParamsDoc),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::CarPageDoc),
        (status = 400, description = "Invalid filter, sort or pagination parameter", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<CarListParams>, QueryRejection>,
) -> Result<Json<CarPage>, JsonApiError> {
    let Query(params) = params?;
    let query = params.parse(state.limits)?;
    Ok(Json(car_service::list_cars(&state.db, &query).await?))
}

#[utoipa::path(
    get, path = "/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CarDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<car::Model>, JsonApiError> {
    let Path(id) = id?;
    car_service::get_car(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("car not found"))
}

#[utoipa::path(
    put, path = "/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car ID")),
    request_body = crate::openapi::CarInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CarDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<Json<car::Model>, JsonApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let updated = car_service::update_car(&state.db, id, payload).await?;
    info!(id = updated.id, "updated car");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    if car_service::delete_car(&state.db, id).await? {
        info!(id, "deleted car");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("car not found"))
    }
}
