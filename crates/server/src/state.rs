use common::pagination::PageLimits;
use configs::PaginationConfig;
use sea_orm::DatabaseConnection;

/// Everything a handler needs, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub limits: PageLimits,
}

impl AppState {
    pub fn new(db: DatabaseConnection, pagination: &PaginationConfig) -> Self {
        Self {
            db,
            limits: PageLimits {
                default_per_page: pagination.default_per_page,
                max_per_page: pagination.max_per_page,
            },
        }
    }
}
