//! Local filesystem source using std::fs.

use std::io;
use std::path::Path;

use projector_core::{application::ports::TemplateSource, error::ProjectorResult};
use tracing::debug;

/// Production source reading the input file from disk.
#[derive(Debug, Clone, Copy)]
pub struct LocalSource;

impl LocalSource {
    /// Create a new local source adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for LocalSource {
    fn read(&self, path: &Path) -> ProjectorResult<String> {
        debug!(path = %path.display(), "Reading template");
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e))
    }
}

fn map_io_error(path: &Path, e: io::Error) -> projector_core::error::ProjectorError {
    use projector_core::application::ApplicationError;

    ApplicationError::SourceUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
