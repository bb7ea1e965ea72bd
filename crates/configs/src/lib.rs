use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self { Self::with_pool_defaults() }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_per_page")]
    pub default_per_page: u64,
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_per_page: default_per_page(), max_per_page: default_max_per_page() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self { Self { enabled: true } }
}

fn default_max_connections() -> u32 { 5 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_per_page() -> u64 { 10 }
fn default_max_per_page() -> u64 { 100 }
fn default_true() -> bool { true }

/// Path of the config file for a service: `CONFIG_PATH` or `config/<service>.toml`.
pub fn config_path_for(service: &str) -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| format!("config/{service}.toml"))
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Built-in settings for a service when no config file is present.
    pub fn defaults_for(service: &str, port: u16) -> Self {
        let mut cfg = Self::default();
        cfg.server.port = port;
        cfg.database = DatabaseConfig::sqlite_file(&format!("data/{service}.db"));
        cfg
    }

    /// Read the service's config file (falling back to defaults), apply env
    /// overrides and validate.
    pub fn load_for_service(service: &str, default_port: u16) -> Result<Self> {
        let path = config_path_for(service);
        let mut cfg = match load_from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => Self::defaults_for(service, default_port),
            Err(e) => return Err(anyhow!("cannot load {path}: {e}")),
        };
        if cfg.database.url.trim().is_empty() {
            cfg.database.url = Self::defaults_for(service, default_port).database.url;
        }
        cfg.apply_env();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// `DATABASE_URL`, `SERVER_HOST` and `SERVER_PORT` take precedence over file values.
    pub fn apply_env(&mut self) {
        self.database.normalize_from_env();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        self.pagination.validate()?;
        Ok(())
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// File-backed SQLite database, created on first connect.
    pub fn sqlite_file(path: &str) -> Self {
        Self {
            url: format!("sqlite://{path}?mode=rwc"),
            ..Self::with_pool_defaults()
        }
    }

    /// Private in-memory database; pinned to a single connection so every
    /// query sees the same schema.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Self::with_pool_defaults()
        }
    }

    fn with_pool_defaults() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    pub fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in the config file or DATABASE_URL"));
        }
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must start with sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_per_page == 0 {
            return Err(anyhow!("pagination.max_per_page must be >= 1"));
        }
        if self.default_per_page == 0 || self.default_per_page > self.max_per_page {
            return Err(anyhow!("pagination.default_per_page must be in 1..=max_per_page"));
        }
        Ok(())
    }
}
