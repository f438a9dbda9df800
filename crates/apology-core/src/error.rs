//! Error types for the Apology Card

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing the card.
///
/// The card itself cannot fail once it is running; only loading the
/// personalization content from disk can.
#[derive(Error, Debug)]
pub enum CardError {
    /// Content file could not be read
    #[error("Cannot read content file {path}: {source}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid JSON for `CardContent`
    #[error("Invalid content file {path}: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
