//! Application layer for Projector.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ExpandService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! expansion rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{DOCUMENT_SEPARATOR, ExpandService, GenerateSummary};

// Re-export port traits (for adapter implementation)
pub use ports::{ManifestCodec, TemplateSource};

pub use error::ApplicationError;
