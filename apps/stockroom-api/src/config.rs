//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable             | Default        |
//! |----------------------|----------------|
//! | `HOST`               | `0.0.0.0`      |
//! | `PORT`               | `5000`         |
//! | `DATABASE_PATH`      | `inventory.db` |
//! | `DB_MAX_CONNECTIONS` | `5`            |

use std::env;
use std::path::PathBuf;

use stockroom_db::DbConfig;

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Upper bound on pooled SQLite connections
    pub db_max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database_path: PathBuf::from("inventory.db"),
            db_max_connections: 5,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset keys take their default; set but unparseable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("HOST").unwrap_or(defaults.host),

            port: match lookup("PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
                None => defaults.port,
            },

            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            db_max_connections: match lookup("DB_MAX_CONNECTIONS") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,
                None => defaults.db_max_connections,
            },
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings for [`stockroom_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone()).max_connections(self.db_max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_PATH", "/var/lib/stockroom/inventory.db"),
            ("DB_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/stockroom/inventory.db")
        );

        let db = config.db_config();
        assert_eq!(db.max_connections, 12);
        assert_eq!(db.database_path, config.database_path);
    }

    #[test]
    fn test_invalid_port() {
        let err = ApiConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT");

        assert!(ApiConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_zero_connections_rejected() {
        let err =
            ApiConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for DB_MAX_CONNECTIONS");
    }
}
