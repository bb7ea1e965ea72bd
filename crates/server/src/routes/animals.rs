use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use models::animal::{self, AnimalPayload};
use service::db::animal_service::{self, AnimalPage};
use service::query::AnimalListParams;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/animals", tag = "animals",
    request_body = crate::openapi::AnimalInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AnimalDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AnimalPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<animal::Model>), JsonApiError> {
    let Json(payload) = payload?;
    let created = animal_service::create_animal(&state.db, payload).await?;
    info!(id = created.id, name = %created.name, species = %created.species, "created animal");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/animals", tag = "animals",
    params(crate::openapi::AnimalListParamsDoc),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::AnimalPageDoc),
        (status = 400, description = "Invalid sort or pagination parameter", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<AnimalListParams>, QueryRejection>,
) -> Result<Json<AnimalPage>, JsonApiError> {
    let Query(params) = params?;
    let query = params.parse(state.limits)?;
    let page = animal_service::list_animals(&state.db, &query).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get, path = "/animals/{id}", tag = "animals",
    params(("id" = i32, Path, description = "Animal ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AnimalDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<animal::Model>, JsonApiError> {
    let Path(id) = id?;
    match animal_service::get_animal(&state.db, id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(JsonApiError::not_found("animal not found")),
    }
}

#[utoipa::path(
    put, path = "/animals/{id}", tag = "animals",
    params(("id" = i32, Path, description = "Animal ID")),
    request_body = crate::openapi::AnimalInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AnimalDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AnimalPayload>, JsonRejection>,
) -> Result<Json<animal::Model>, JsonApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let updated = animal_service::update_animal(&state.db, id, payload).await?;
    info!(id = updated.id, "updated animal");
    Ok(Json(updated))
}
