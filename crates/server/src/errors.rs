use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use models::errors::ModelError;
use service::errors::ServiceError;
use tracing::error;

/// Error answered to the client as `{"error": ..., "detail": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, error: error.into(), detail }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.error, detail: self.detail };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(ModelError::Validation { field }) => {
                Self::new(StatusCode::BAD_REQUEST, format!("Invalid {field}"), None)
            }
            ServiceError::BadRequest(msg) => Self::new(StatusCode::BAD_REQUEST, msg, None),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Db(msg) => {
                error!(err = %msg, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request body", Some(e.body_text()))
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(e: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid query string", Some(e.body_text()))
    }
}

/// Non-numeric ids never match a record.
impl From<PathRejection> for JsonApiError {
    fn from(e: PathRejection) -> Self {
        Self::not_found(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field() {
        let err = JsonApiError::from(ServiceError::from(ModelError::invalid("make")));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "Invalid make");
        assert!(err.detail.is_none());
    }

    #[test]
    fn service_errors_map_to_statuses() {
        assert_eq!(JsonApiError::from(ServiceError::not_found("car")).status, StatusCode::NOT_FOUND);
        assert_eq!(JsonApiError::from(ServiceError::BadRequest("x".into())).status, StatusCode::BAD_REQUEST);
        assert_eq!(JsonApiError::from(ServiceError::Db("boom".into())).status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_failure_text_stays_in_the_log() {
        let err = JsonApiError::from(ServiceError::Db("no such table: cars".into()));
        assert_eq!(err.error, "Internal Server Error");
        assert!(err.detail.is_none());
    }
}
