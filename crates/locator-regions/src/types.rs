/*!
Core error types for region resolution.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use thiserror::Error;

/// Result type for resolver construction
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Result type for data-source loads
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors that cross the resolver boundary
#[derive(Error, Debug)]
pub enum LocatorError {
    /// The contact-pair table could not be loaded; no resolver can be built
    #[error("Failed to load contact pairs: {0}")]
    PairsUnavailable(#[source] ReaderError),
}

/// Errors raised by a [`SessionReader`](crate::SessionReader)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("Record set not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed record set: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ReaderError {
    fn from(err: serde_json::Error) -> Self {
        ReaderError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ReaderError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ReaderError::NotFound(err.to_string())
        } else {
            ReaderError::Io(err.to_string())
        }
    }
}

/// Why whole-brain co-localization contributed nothing
///
/// Never returned to callers; the resolver logs it and moves on to the next
/// source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColocalizationSkip {
    #[error("localization unavailable: {0}")]
    LocalizationUnavailable(ReaderError),

    #[error("localization has no 'contacts' section")]
    MissingContacts,

    #[error("no '{0}' atlas under contacts")]
    MissingAtlas(&'static str),

    #[error("whole-brain atlas is not a contact-to-region mapping")]
    AtlasNotAMapping,

    #[error("pair table has no '{0}' column")]
    MissingLabelColumn(&'static str),

    #[error("pair {0} has no usable 'A-B' label")]
    MalformedLabel(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "pairs.json");
        assert!(matches!(ReaderError::from(err), ReaderError::NotFound(_)));

        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "pairs.json");
        assert!(matches!(ReaderError::from(err), ReaderError::Io(_)));
    }

    #[test]
    fn test_pairs_unavailable_message() {
        let err = LocatorError::PairsUnavailable(ReaderError::NotFound("pairs.json".into()));
        assert_eq!(
            err.to_string(),
            "Failed to load contact pairs: Record set not found: pairs.json"
        );
    }
}
