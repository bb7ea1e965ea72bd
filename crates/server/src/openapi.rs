use utoipa::{IntoParams, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String, pub detail: Option<String> }

#[derive(ToSchema)]
pub struct AnimalInputDoc { pub name: String, pub species: String, pub age: i64 }

#[derive(ToSchema)]
pub struct AnimalDoc { pub id: i32, pub name: String, pub species: String, pub age: i64 }

#[derive(ToSchema)]
pub struct AnimalPageDoc {
    pub animals: Vec<AnimalDoc>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

#[derive(ToSchema)]
pub struct CarInputDoc { pub make: String, pub model: String, pub year: i32 }

#[derive(ToSchema)]
pub struct CarDoc { pub id: i32, pub make: String, pub model: String, pub year: i32 }

#[derive(ToSchema)]
pub struct CarPageDoc {
    pub cars: Vec<CarDoc>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

/// Query string of `GET /animals`.
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnimalListParamsDoc {
    /// Exact species match
    pub species: Option<String>,
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// One of `id`, `name`, `species`, `age`
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`
    pub order: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Query string of `GET /cars`.
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CarListParamsDoc {
    /// Exact make match
    pub make: Option<String>,
    /// Exact model match
    pub model: Option<String>,
    pub year: Option<i32>,
    /// Case-insensitive substring of make or model
    pub search: Option<String>,
    /// One of `id`, `make`, `model`, `year`
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`
    pub order: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::animals::create,
        crate::routes::animals::list,
        crate::routes::animals::get,
        crate::routes::animals::update,
    ),
    components(
        schemas(HealthResponse, ErrorResponse, AnimalInputDoc, AnimalDoc, AnimalPageDoc)
    ),
    tags(
        (name = "health"),
        (name = "animals")
    )
)]
pub struct AnimalsApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cars::create,
        crate::routes::cars::list,
        crate::routes::cars::get,
        crate::routes::cars::update,
        crate::routes::cars::delete,
    ),
    components(
        schemas(HealthResponse, ErrorResponse, CarInputDoc, CarDoc, CarPageDoc)
    ),
    tags(
        (name = "health"),
        (name = "cars")
    )
)]
pub struct CarsApiDoc;
