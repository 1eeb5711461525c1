// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Locator Configuration
//!
//! Type-safe configuration for the contact locator:
//! - TOML file parsing (`locator_configuration.toml`)
//! - Environment variable overrides
//! - Validation of file names and log level
//!
//! ## Usage
//!
//! ```rust,no_run
//! use locator_config::load_config;
//!
//! let config = load_config(None).expect("Failed to load config");
//! println!("Sessions live under {}", config.reader.data_dir.display());
//! ```
//!
//! The region taxonomy is not configurable; only where session records are
//! read from and how loudly the crates log.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_environment_overrides, find_config_file, load_config, CONFIG_FILE_NAME};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LocatorConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_toml_error_maps_to_parse_error() {
        let err: ConfigError = toml::from_str::<LocatorConfig>("[reader\n")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
