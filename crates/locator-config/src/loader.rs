// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Loading happens in three steps:
//! 1. TOML file (base values, missing keys take defaults)
//! 2. Environment variables (runtime overrides)
//! 3. Validation

use crate::{validate_config, ConfigError, ConfigResult, LocatorConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "locator_configuration.toml";

/// Find the locator configuration file
///
/// Search order:
/// 1. `LOCATOR_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Up to five parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("LOCATOR_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by LOCATOR_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        search_paths.extend(
            cwd.ancestors()
                .skip(1)
                .take(5)
                .map(|dir| dir.join(CONFIG_FILE_NAME)),
        );
    }

    if let Some(found) = search_paths.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet LOCATOR_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from a TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, [`find_config_file`] is used.
///
/// # Errors
///
/// Returns error if the file is missing, contains invalid TOML, or fails validation
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<LocatorConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: LocatorConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    validate_config(&config)?;

    tracing::debug!(
        "Loaded locator configuration from {}",
        config_file.display()
    );
    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `LOCATOR_DATA_DIR` -> `reader.data_dir`
/// - `LOCATOR_PAIRS_FILE` -> `reader.pairs_file`
/// - `LOCATOR_LOCALIZATION_FILE` -> `reader.localization_file`
/// - `LOCATOR_LOG_LEVEL` -> `logging.level`
pub fn apply_environment_overrides(config: &mut LocatorConfig) {
    if let Ok(value) = env::var("LOCATOR_DATA_DIR") {
        config.reader.data_dir = PathBuf::from(value);
    }
    if let Ok(value) = env::var("LOCATOR_PAIRS_FILE") {
        config.reader.pairs_file = value;
    }
    if let Ok(value) = env::var("LOCATOR_LOCALIZATION_FILE") {
        config.reader.localization_file = value;
    }
    if let Ok(value) = env::var("LOCATOR_LOG_LEVEL") {
        if value.trim().is_empty() {
            tracing::warn!("Ignoring empty LOCATOR_LOG_LEVEL override");
        } else {
            config.logging.level = value.trim().to_lowercase();
        }
    }
}
