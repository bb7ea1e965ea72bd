use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::{AnimalsMigrator, CarsMigrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;
use service::seed;

/// Which of the two deployments this process serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    Animals,
    Cars,
}

impl ServiceKind {
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Animals => "animals",
            ServiceKind::Cars => "cars",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::Animals => 5000,
            ServiceKind::Cars => 5001,
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, migrate the service's table and seed it when configured to.
pub async fn prepare_database(kind: ServiceKind, cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    match kind {
        ServiceKind::Animals => AnimalsMigrator::up(&db, None).await?,
        ServiceKind::Cars => CarsMigrator::up(&db, None).await?,
    }
    info!(service = kind.name(), "migrations applied");

    if cfg.seed.enabled {
        match kind {
            ServiceKind::Animals => seed::seed_animals_if_empty(&db).await?,
            ServiceKind::Cars => seed::seed_cars_if_empty(&db).await?,
        };
    }
    Ok(db)
}

/// Full router for a service around an already prepared state.
pub fn build_app(kind: ServiceKind, state: AppState) -> Router {
    match kind {
        ServiceKind::Animals => routes::build_animals_router(state, build_cors()),
        ServiceKind::Cars => routes::build_cars_router(state, build_cors()),
    }
}

/// Public entry: load config, prepare storage and run the HTTP server
pub async fn run(kind: ServiceKind) -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_for_service(kind.name(), kind.default_port())?;
    let db = prepare_database(kind, &cfg).await?;
    let state = AppState::new(db, &cfg.pagination);
    let app = build_app(kind, state);

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, service = kind.name(), "starting server");
    axum::serve(listener, app).await?;
    Ok(())
}
