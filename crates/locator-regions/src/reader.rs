// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Session data source seam.

The resolver only needs two record sets per session: the contact-pair table
and the localization document. Anything that can produce them implements
[`SessionReader`]:
- [`StaticSessionReader`]: records already in memory
- [`JsonSessionReader`]: `pairs.json` / `localization.json` in a session directory
*/

use std::fs;
use std::path::{Path, PathBuf};

use locator_config::ReaderConfig;

use crate::records::{Localization, PairTable};
use crate::types::{ReaderError, ReaderResult};

/// Source of a session's record sets
pub trait SessionReader {
    /// Load the contact-pair table
    ///
    /// # Errors
    ///
    /// Any error here makes resolver construction fail.
    fn load_pairs(&self) -> ReaderResult<PairTable>;

    /// Load the localization document
    ///
    /// Errors only disable whole-brain co-localization.
    fn load_localization(&self) -> ReaderResult<Localization>;
}

/// In-memory records
#[derive(Debug, Clone, Default)]
pub struct StaticSessionReader {
    pairs: PairTable,
    localization: Option<Localization>,
}

impl StaticSessionReader {
    pub fn new(pairs: PairTable) -> Self {
        Self {
            pairs,
            localization: None,
        }
    }

    pub fn with_localization(mut self, localization: Localization) -> Self {
        self.localization = Some(localization);
        self
    }
}

impl SessionReader for StaticSessionReader {
    fn load_pairs(&self) -> ReaderResult<PairTable> {
        Ok(self.pairs.clone())
    }

    fn load_localization(&self) -> ReaderResult<Localization> {
        self.localization
            .clone()
            .ok_or_else(|| ReaderError::NotFound("localization".to_string()))
    }
}

/// JSON files in a session directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSessionReader {
    pairs_path: PathBuf,
    localization_path: PathBuf,
}

impl JsonSessionReader {
    /// Reader for `session_dir` with the default file names
    pub fn new<P: AsRef<Path>>(session_dir: P) -> Self {
        Self::with_config(&ReaderConfig::default(), session_dir.as_ref())
    }

    /// Reader for `data_dir/session` using configured file names
    pub fn from_config(config: &ReaderConfig, session: &str) -> Self {
        Self::with_config(config, &config.session_dir(session))
    }

    fn with_config(config: &ReaderConfig, session_dir: &Path) -> Self {
        Self {
            pairs_path: config.pairs_path(session_dir),
            localization_path: config.localization_path(session_dir),
        }
    }

    pub fn pairs_path(&self) -> &Path {
        &self.pairs_path
    }

    pub fn localization_path(&self) -> &Path {
        &self.localization_path
    }

    fn read(path: &Path) -> ReaderResult<String> {
        fs::read_to_string(path).map_err(|err| match ReaderError::from(err) {
            ReaderError::NotFound(_) => ReaderError::NotFound(path.display().to_string()),
            ReaderError::Io(msg) => ReaderError::Io(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }
}

impl SessionReader for JsonSessionReader {
    fn load_pairs(&self) -> ReaderResult<PairTable> {
        let json = Self::read(&self.pairs_path)?;
        PairTable::from_json_str(&json).map_err(|err| match err {
            ReaderError::Parse(msg) => {
                ReaderError::Parse(format!("{}: {}", self.pairs_path.display(), msg))
            }
            other => other,
        })
    }

    fn load_localization(&self) -> ReaderResult<Localization> {
        Localization::from_json_str(&Self::read(&self.localization_path)?)
    }
}
