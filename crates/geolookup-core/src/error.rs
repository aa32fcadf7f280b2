// crates/geolookup-core/src/error.rs

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors produced while loading or caching the city dataset.
///
/// Lookups themselves are total functions and never fail; only the I/O and
/// parsing layer can produce an error.
#[derive(Debug, Error)]
pub enum GeoError {
    /// A dataset or cache file could not be located.
    #[error("{0}")]
    NotFound(String),

    /// Underlying I/O failure while reading a dataset or writing a cache.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON dataset could not be parsed.
    #[cfg(feature = "json")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The binary cache could not be encoded or decoded.
    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),
}
