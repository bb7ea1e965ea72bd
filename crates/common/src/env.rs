//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Make sure the directory holding a SQLite database file exists.
///
/// Accepts the full connection URL (`sqlite://data/cars.db?mode=rwc`).
/// In-memory URLs need nothing and are skipped.
pub async fn ensure_sqlite_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        debug!(%database_url, "in-memory database; no directory to prepare");
        return Ok(());
    };
    let Some(dir) = Path::new(file).parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(dir).await.is_err() {
        warn!(dir = %dir.display(), "database directory missing; creating it");
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}

/// Extract the file path part of a `sqlite:` URL, `None` for in-memory databases.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path)
}
