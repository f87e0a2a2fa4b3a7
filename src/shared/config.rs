use std::{env, fmt::Display, str::FromStr};

use crate::shared::errors::{AppError, AppResult};
use crate::{log_info, log_warn};

/// Where records live for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    InMemory,
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Postgres { .. } => "postgres",
            StorageBackend::InMemory => "in-memory",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub db_pool_max_size: u32,
    pub db_connect_retries: u32,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            storage: StorageBackend::InMemory,
            db_pool_max_size: 10,
            db_connect_retries: 5,
            seed_demo_data: false,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment (after `.env`, if any).
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        let storage = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(database_url) => {
                validate_database_url(&database_url)?;
                StorageBackend::Postgres { database_url }
            }
            None => {
                log_warn!("DATABASE_URL not set, using the in-memory store");
                StorageBackend::InMemory
            }
        };

        let config = Self {
            host: lookup("APP_HOST").unwrap_or(defaults.host),
            port: try_load(&lookup, "APP_PORT", defaults.port)?,
            storage,
            db_pool_max_size: try_load(&lookup, "DB_POOL_MAX_SIZE", defaults.db_pool_max_size)?,
            db_connect_retries: try_load(
                &lookup,
                "DB_CONNECT_RETRIES",
                defaults.db_connect_retries,
            )?,
            seed_demo_data: try_load(&lookup, "SEED_DEMO_DATA", defaults.seed_demo_data)?,
        };

        if config.db_pool_max_size == 0 {
            return Err(AppError::Configuration(
                "DB_POOL_MAX_SIZE must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> AppResult<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Configuration(format!("Invalid {key} value '{raw}': {e}"))),
        None => {
            log_info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn validate_database_url(database_url: &str) -> AppResult<()> {
    if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
        return Err(AppError::Configuration(
            "Invalid database URL format. Must start with postgres:// or postgresql://".to_string(),
        ));
    }
    Ok(())
}
