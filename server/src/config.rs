//! Server configuration
//!
//! Loaded once at startup from environment variables (a `.env` file is read
//! first when present).
//!
//! | Variable | Default |
//! |---|---|
//! | `NODEBUCKET_HOST` | `0.0.0.0` |
//! | `NODEBUCKET_PORT` | `3000` |
//! | `NODEBUCKET_DB_PATH` | `nodebucket.db` |
//! | `NODEBUCKET_POOL_SIZE` | `4` |
//! | `NODEBUCKET_LOG_DIR` | `logs` |
//! | `NODEBUCKET_STATIC_DIR` | unset |
//! | `NODEBUCKET_SEED_FILE` | unset |

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub pool_size: usize,
    pub log_dir: PathBuf,
    /// Built front-end to serve for unmatched paths
    pub static_dir: Option<PathBuf>,
    /// JSON array of employees inserted at startup when absent
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            db_path: PathBuf::from("nodebucket.db"),
            pool_size: 4,
            log_dir: PathBuf::from("logs"),
            static_dir: None,
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let pool_size = parsed(&lookup, "NODEBUCKET_POOL_SIZE", defaults.pool_size)?;
        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "NODEBUCKET_POOL_SIZE".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            host: lookup("NODEBUCKET_HOST").unwrap_or(defaults.host),
            port: parsed(&lookup, "NODEBUCKET_PORT", defaults.port)?,
            db_path: lookup("NODEBUCKET_DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path),
            pool_size,
            log_dir: lookup("NODEBUCKET_LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            static_dir: lookup("NODEBUCKET_STATIC_DIR").map(PathBuf::from),
            seed_file: lookup("NODEBUCKET_SEED_FILE").map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
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
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("NODEBUCKET_PORT", "8080"),
            ("NODEBUCKET_POOL_SIZE", "2"),
            ("NODEBUCKET_STATIC_DIR", "dist"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.pool_size, 2);
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = ServerConfig::from_lookup(lookup_from(&[("NODEBUCKET_PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "NODEBUCKET_PORT"));

        assert!(ServerConfig::from_lookup(lookup_from(&[("NODEBUCKET_POOL_SIZE", "0")])).is_err());
    }
}
