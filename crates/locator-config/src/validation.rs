// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation

use crate::{ConfigError, ConfigResult, LocatorConfig};

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &LocatorConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);
    if errors.is_empty() {
        return Ok(());
    }

    let error_messages = errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::ValidationError(format!(
        "Configuration validation failed:\n{}",
        error_messages
    )))
}

fn collect_errors(config: &LocatorConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("reader.pairs_file", &config.reader.pairs_file),
        ("reader.localization_file", &config.reader.localization_file),
    ] {
        if value.trim().is_empty() {
            errors.push(ConfigValidationError::MissingRequired {
                field: field.to_string(),
            });
        } else if value.contains('/') || value.contains('\\') {
            errors.push(ConfigValidationError::InvalidValue {
                field: field.to_string(),
                reason: format!("'{}' must be a bare file name", value),
            });
        }
    }

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_problem() {
        let mut config = LocatorConfig::default();
        config.reader.pairs_file = "  ".to_string();
        config.reader.localization_file = "sub/loc.json".to_string();
        config.logging.level = "chatty".to_string();

        let errors = collect_errors(&config);
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors[0],
            ConfigValidationError::MissingRequired {
                field: "reader.pairs_file".to_string()
            }
        );
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let mut config = LocatorConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
