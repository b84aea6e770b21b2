//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while reading, decoding, encoding or writing manifests.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The input could not be located or read.
    #[error("Cannot read {path}: {reason}")]
    SourceUnreadable { path: PathBuf, reason: String },

    /// The input is not a valid ArgoCDProject document.
    #[error("Cannot decode {path}: {reason}")]
    DecodeFailed { path: PathBuf, reason: String },

    /// A generated resource could not be encoded.
    #[error("Cannot encode {kind}: {reason}")]
    EncodeFailed { kind: String, reason: String },

    /// The output stream rejected a write.
    #[error("Cannot write output: {reason}")]
    WriteFailed { reason: String },

    /// Source lock poisoned.
    #[error("Template source error")]
    SourceLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnreadable { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::DecodeFailed { path, .. } => vec![
                format!("{} is not a valid ArgoCDProject", path.display()),
                "Check the YAML syntax and the field types under spec".into(),
            ],
            Self::WriteFailed { .. } => vec![
                "The output stream was closed or is not writable".into(),
                "Discard any partial output from this run".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnreadable { .. } => ErrorCategory::NotFound,
            Self::DecodeFailed { .. } => ErrorCategory::Validation,
            Self::EncodeFailed { .. } | Self::WriteFailed { .. } => ErrorCategory::Internal,
            Self::SourceLockError => ErrorCategory::Internal,
        }
    }
}
