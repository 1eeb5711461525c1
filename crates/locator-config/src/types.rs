// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to a section in `locator_configuration.toml`. Missing
//! sections and keys fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocatorConfig {
    pub reader: ReaderConfig,
    pub logging: LoggingConfig,
}

/// Where per-session record files are found
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Root directory holding one sub-directory per session
    pub data_dir: PathBuf,
    /// File name of the contact-pair table inside a session directory
    pub pairs_file: String,
    /// File name of the localization document inside a session directory
    pub localization_file: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            pairs_file: "pairs.json".to_string(),
            localization_file: "localization.json".to_string(),
        }
    }
}

impl ReaderConfig {
    /// Directory for a named session under `data_dir`
    pub fn session_dir(&self, session: &str) -> PathBuf {
        self.data_dir.join(session)
    }

    pub fn pairs_path(&self, session_dir: &Path) -> PathBuf {
        session_dir.join(&self.pairs_file)
    }

    pub fn localization_path(&self, session_dir: &Path) -> PathBuf {
        session_dir.join(&self.localization_file)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level: trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: LocatorConfig = toml::from_str(
            r#"
            [reader]
            data_dir = "/data/sessions"
            "#,
        )
        .unwrap();

        assert_eq!(config.reader.data_dir, PathBuf::from("/data/sessions"));
        assert_eq!(config.reader.pairs_file, "pairs.json");
        assert_eq!(config.reader.localization_file, "localization.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_session_paths() {
        let reader = ReaderConfig {
            data_dir: PathBuf::from("/data"),
            ..ReaderConfig::default()
        };
        let session = reader.session_dir("R1001P_0");

        assert_eq!(session, PathBuf::from("/data/R1001P_0"));
        assert_eq!(
            reader.pairs_path(&session),
            PathBuf::from("/data/R1001P_0/pairs.json")
        );
        assert_eq!(
            reader.localization_path(&session),
            PathBuf::from("/data/R1001P_0/localization.json")
        );
    }
}
