// ============================================================================
// domain/error.rs - EXPANSION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the service layer by value)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Unknown access level '{0}' (expected read-only or read-sync)")]
    UnknownAccessLevel(String),

    // ========================================================================
    // Encoding Errors
    // ========================================================================
    #[error("{kind} could not be converted to a document: {reason}")]
    ResourceEncoding { kind: &'static str, reason: String },

    #[error("{kind} did not encode to a mapping")]
    NotAMapping { kind: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Set '{}' on the ArgoCDProject", field),
                "Or give spec.appProjectTemplate.metadata.name a value".into(),
            ],
            Self::UnknownAccessLevel(level) => vec![
                format!("'{}' is not an access level", level),
                "Valid levels: read-only, read-sync".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } | Self::UnknownAccessLevel(_) => {
                ErrorCategory::Validation
            }
            Self::ResourceEncoding { .. } | Self::NotAMapping { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
