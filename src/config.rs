//! Runtime configuration for the project service.
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file. [`ServiceConfig::from_lookup`] takes any key lookup so the
//! parsing rules can be exercised without touching the real environment.

use crate::project::adapters::postgres::ProjectPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use thiserror::Error;

/// Environment variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable holding the connection pool size.
pub const POOL_SIZE_VAR: &str = "DATABASE_POOL_SIZE";
/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_VAR: &str = "PROJECT_SERVICE_LOG";

const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set to an unusable value.
    #[error("invalid value '{value}' for {name}: {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Raw value found.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The database pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Settings needed to wire the project service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl ServiceConfig {
    /// Loads configuration from the environment, reading `.env` first when
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is normal outside local development.
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let pool_size = match lookup(POOL_SIZE_VAR) {
            Some(raw) => parse_pool_size(&raw)?,
            None => DEFAULT_POOL_SIZE,
        };

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            database_url,
            pool_size,
            log_filter,
        })
    }

    /// Builds the connection pool for the `PostgreSQL` project repository.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot be created.
    pub fn connect_pool(&self) -> Result<ProjectPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(&self.database_url);
        let pool = Pool::builder().max_size(self.pool_size).build(manager)?;
        tracing::info!(pool_size = self.pool_size, "database pool created");
        Ok(pool)
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: POOL_SIZE_VAR,
        value: raw.to_owned(),
        reason,
    };
    let size = raw
        .trim()
        .parse::<u32>()
        .map_err(|err| invalid(err.to_string()))?;
    if size == 0 {
        return Err(invalid("pool size must be positive".to_owned()));
    }
    Ok(size)
}
