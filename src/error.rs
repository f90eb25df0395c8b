//! Error types for outfitter operations.
//!
//! This module defines [`OutfitterError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation failures never become errors: the wizard re-prompts instead
//! - Persistence I/O failures are logged and swallowed by the store
//! - `Cancelled` propagates to the top level and maps to a distinct exit code
//! - Use `anyhow::Error` (via `OutfitterError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for outfitter operations.
#[derive(Debug, Error)]
pub enum OutfitterError {
    /// The operator interrupted the wizard during a prompt.
    ///
    /// Saved progress stays on disk for a later resume.
    #[error("Setup cancelled")]
    Cancelled,

    /// A prompt was required but the session has no interactive terminal.
    #[error("Cannot prompt for '{prompt}' in non-interactive mode (no default value)")]
    NonInteractive { prompt: String },

    /// An environment document could not be written.
    #[error("Failed to write {path}: {message}")]
    EnvWriteError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for outfitter operations.
pub type Result<T> = std::result::Result<T, OutfitterError>;

impl OutfitterError {
    /// Whether this error represents operator-initiated cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_displays_message() {
        let err = OutfitterError::Cancelled;
        assert_eq!(err.to_string(), "Setup cancelled");
        assert!(err.is_cancelled());
    }

    #[test]
    fn non_interactive_displays_prompt_key() {
        let err = OutfitterError::NonInteractive {
            prompt: "repo_url".into(),
        };
        assert!(err.to_string().contains("repo_url"));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn env_write_error_displays_path_and_message() {
        let err = OutfitterError::EnvWriteError {
            path: PathBuf::from("/tmp/.env"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/.env"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: OutfitterError = io_err.into();
        assert!(matches!(err, OutfitterError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(OutfitterError::Cancelled)
        }
        assert!(returns_error().is_err());
    }
}
