use common::pagination::PaginationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn db(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

impl From<PaginationError> for ServiceError {
    fn from(e: PaginationError) -> Self { Self::BadRequest(e.to_string()) }
}
