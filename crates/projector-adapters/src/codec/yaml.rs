//! YAML codec backed by `serde_yaml_ng`.
//!
//! JSON input is accepted too, YAML being a superset.

use std::path::Path;

use projector_core::{
    application::{ApplicationError, ports::ManifestCodec},
    domain::{Document, ProjectTemplate},
    error::ProjectorResult,
};
use tracing::instrument;

/// Decodes ArgoCDProject documents and encodes generated manifests as YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl YamlCodec {
    /// Create a new YAML codec.
    pub fn new() -> Self {
        Self
    }
}

impl ManifestCodec for YamlCodec {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn decode(&self, path: &Path, text: &str) -> ProjectorResult<ProjectTemplate> {
        serde_yaml_ng::from_str(text).map_err(|e| {
            ApplicationError::DecodeFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn encode(&self, document: &Document) -> ProjectorResult<String> {
        serde_yaml_ng::to_string(document.fields()).map_err(|e| {
            let kind = document
                .get("kind")
                .and_then(|k| k.as_str())
                .unwrap_or("document");

            ApplicationError::EncodeFailed {
                kind: kind.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
