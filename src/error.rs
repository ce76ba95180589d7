//! Error types for the editor
//!
//! None of these are fatal. Input failures are recovered with defaults,
//! gesture errors are swallowed, and apply failures are handed back to the
//! caller with the placed stamps left untouched.

use thiserror::Error;

/// Errors that can occur while editing or applying stamps
#[derive(Error, Debug)]
pub enum EditorError {
    /// Catalog or page metadata could not be fetched
    #[error("Input unavailable: {0}")]
    InputUnavailable(String),

    /// Pointer event without an active session or without a valid target
    #[error("Invalid gesture: {0}")]
    InvalidGesture(String),

    /// The external apply operation reported an error
    #[error("{0}")]
    ApplyFailure(String),

    /// Apply requested while another apply is still outstanding
    #[error("An apply request is already in progress")]
    ApplyInFlight,

    /// Apply requested with no stamps placed
    #[error("Add stamps to the document before applying")]
    NothingToApply,

    /// Asset id not present in the catalog
    #[error("Unknown stamp asset: {0}")]
    UnknownAsset(String),

    /// Page navigation target outside the document
    #[error("Page {page} out of range (1..={page_count})")]
    PageOutOfRange { page: u32, page_count: u32 },

    /// IO error while reading settings or scripts
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file watcher error
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

impl From<String> for EditorError {
    fn from(s: String) -> Self {
        EditorError::ApplyFailure(s)
    }
}

impl From<&str> for EditorError {
    fn from(s: &str) -> Self {
        EditorError::ApplyFailure(s.to_string())
    }
}
