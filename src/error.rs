//! Error types for rs-product-scraper.
//!
//! Normalizers never fail; errors are reserved for broken configuration,
//! unusable training data, products missing required fields and the I/O
//! performed by the scrape driver.

use std::path::PathBuf;

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration or training data is missing or unusable. Fatal.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A product node lacks a field required to build a product.
    ///
    /// Recoverable: callers skip the node and continue.
    #[error("Missing required field: {label}")]
    MissingField {
        /// Label of the absent field (`title` or `price`).
        label: String,
    },

    /// Reading a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A training file or output could not be (de)serialized.
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A page could not be retrieved.
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
}

impl Error {
    /// Shorthand for [`Error::MissingField`].
    #[must_use]
    pub fn missing_field(label: &str) -> Self {
        Self::MissingField {
            label: label.to_string(),
        }
    }
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
