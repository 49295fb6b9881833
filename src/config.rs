use std::net::SocketAddr;

/// Application configuration, read from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host (HOST)
    pub host: String,

    /// Bind port (PORT)
    pub port: u16,

    /// PostgreSQL URL (DATABASE_URL); the in-memory store is used when unset
    pub database_url: Option<String>,

    /// Maximum pooled connections (DB_POOL_MAX_SIZE)
    pub pool_max_size: u32,

    /// Apply embedded migrations on startup (RUN_MIGRATIONS)
    pub run_migrations: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: None,
            pool_max_size: 20,
            run_migrations: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup; unparseable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            pool_max_size: lookup("DB_POOL_MAX_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.pool_max_size),
            run_migrations: lookup("RUN_MIGRATIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.run_migrations),
        }
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
