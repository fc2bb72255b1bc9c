//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default log filter when neither `RUST_LOG` nor `STOREFRONT_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the listing snapshot)
    pub store_name: String,

    /// JSON catalog to seed from. `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Best Buy"
    /// - Catalog: built-in
    /// - Logging: info, debug for storefront crates
    fn default() -> Self {
        ConfigState {
            store_name: "Best Buy".to_string(),
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CATALOG`: Path to a JSON catalog file
    /// - `STOREFRONT_LOG`: Default log filter (`RUST_LOG` still wins)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            if store_name.trim().is_empty() {
                return Err(ConfigError::InvalidValue("STOREFRONT_STORE_NAME".to_string()));
            }
            config.store_name = store_name;
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG") {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue("STOREFRONT_CATALOG".to_string()));
            }
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup("STOREFRONT_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read catalog {path}: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
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
    fn test_defaults_when_nothing_set() {
        let config = ConfigState::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.store_name, "Best Buy");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("STOREFRONT_STORE_NAME", "Corner Shop"),
            ("STOREFRONT_CATALOG", "/tmp/catalog.json"),
            ("STOREFRONT_LOG", "warn"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_blank_values_rejected() {
        let err = ConfigState::from_lookup(lookup_from(&[("STOREFRONT_STORE_NAME", "  ")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOREFRONT_STORE_NAME");

        assert!(ConfigState::from_lookup(lookup_from(&[("STOREFRONT_CATALOG", "")])).is_err());
    }
}
