//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `projector-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{Document, ProjectTemplate};
use crate::error::ProjectorResult;

/// Port for reading the raw input document.
///
/// Implemented by:
/// - `projector_adapters::source::LocalSource` (production)
/// - `projector_adapters::source::MemorySource` (testing)
#[cfg_attr(test, automock)]
pub trait TemplateSource: Send + Sync {
    /// Read the whole document at `path`.
    fn read(&self, path: &Path) -> ProjectorResult<String>;
}

/// Port for the configuration text format.
///
/// Implemented by:
/// - `projector_adapters::codec::YamlCodec`
#[cfg_attr(test, automock)]
pub trait ManifestCodec: Send + Sync {
    /// Decode an ArgoCDProject. Unknown fields are ignored.
    ///
    /// `path` only labels errors.
    fn decode(&self, path: &Path, text: &str) -> ProjectorResult<ProjectTemplate>;

    /// Encode one document. The result ends with a newline.
    fn encode(&self, document: &Document) -> ProjectorResult<String>;
}
