pub mod animals;
pub mod cars;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::{AnimalsApiDoc, CarsApiDoc};
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn animals_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(AnimalsApiDoc::openapi())
}

async fn cars_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(CarsApiDoc::openapi())
}

/// Router of the animals service.
pub fn build_animals_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/animals", get(animals::list).post(animals::create))
        .route("/animals/:id", get(animals::get).put(animals::update))
        .route("/openapi.json", get(animals_openapi));
    compose(api, state, cors)
}

/// Router of the cars service.
pub fn build_cars_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/cars", get(cars::list).post(cars::create))
        .route("/cars/:id", get(cars::get).put(cars::update).delete(cars::delete))
        .route("/openapi.json", get(cars_openapi));
    compose(api, state, cors)
}

fn compose(api: Router<AppState>, state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
