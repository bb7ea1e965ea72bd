#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use serde_json::Value;
use tower::ServiceExt;

use server::startup::{build_app, prepare_database};
use server::state::AppState;
use server::ServiceKind;

/// Router over a private in-memory database with the example rows seeded.
pub async fn seeded_app(kind: ServiceKind) -> anyhow::Result<Router> {
    app_with(kind, true).await
}

/// Router over a private, empty in-memory database.
pub async fn empty_app(kind: ServiceKind) -> anyhow::Result<Router> {
    app_with(kind, false).await
}

async fn app_with(kind: ServiceKind, seed: bool) -> anyhow::Result<Router> {
    let mut cfg = AppConfig::defaults_for(kind.name(), kind.default_port());
    cfg.database = DatabaseConfig::in_memory();
    cfg.seed.enabled = seed;
    let db = prepare_database(kind, &cfg).await?;
    Ok(build_app(kind, AppState::new(db, &cfg.pagination)))
}

/// Send one request; the body comes back as JSON (`Null` when empty).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}
