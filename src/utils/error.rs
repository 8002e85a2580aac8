//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use super::config::GENERIC_LOOKUP_ERROR;
use thiserror::Error;

/// Errors that can occur while talking to the backing store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid store response: {0}")]
    InvalidResponse(String),

    #[error("Failed to read snapshot: {0}")]
    Snapshot(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced to the user by a hero lookup
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Hero not found")]
    NotFound,

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl LookupError {
    /// Message shown next to the lookup prompt
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_LOOKUP_ERROR.to_string()
        } else {
            message
        }
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(LookupError::NotFound.message(), "Hero not found");
    }

    #[test]
    fn test_store_message_is_verbatim() {
        let err = LookupError::Store(StoreError::InvalidResponse("HTTP 500".to_string()));
        assert_eq!(err.message(), "Invalid store response: HTTP 500");
    }
}
