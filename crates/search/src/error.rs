//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur around the search engine.
///
/// Scoring itself never fails; these cover catalog input and the
/// key-value persistence behind the search history.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Catalog contents are unusable
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Search configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Key-value store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored value could not be decoded
    #[error("Corrupt stored value for key '{0}'")]
    CorruptValue(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with glowbook-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Catalog contents are unusable
    InvalidCatalog = 11001,
    /// Key-value store failure
    Storage = 11002,
    /// Stored value could not be decoded
    CorruptValue = 11003,
    /// JSON (de)serialization error
    Json = 11004,
    /// Search configuration is unusable
    InvalidConfig = 11005,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidCatalog(_) => SearchErrorCode::InvalidCatalog,
            SearchError::InvalidConfig(_) => SearchErrorCode::InvalidConfig,
            SearchError::Storage(_) => SearchErrorCode::Storage,
            SearchError::CorruptValue(_) => SearchErrorCode::CorruptValue,
            SearchError::Json(_) => SearchErrorCode::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SearchError::Storage("x".into()).code() as u32, 11002);
        assert_eq!(
            SearchError::CorruptValue("k".into()).code(),
            SearchErrorCode::CorruptValue
        );
    }

    #[test]
    fn test_error_display() {
        let err = SearchError::InvalidCatalog("duplicate id '1'".into());
        assert_eq!(err.to_string(), "Invalid catalog: duplicate id '1'");
    }
}
