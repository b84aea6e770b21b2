//! In-memory template source for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use projector_core::{
    application::{ApplicationError, ports::TemplateSource},
    error::ProjectorResult,
};

/// In-memory source keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    inner: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemorySource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding a single document.
    pub fn with_document(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::from([(path.into(), text.into())]))),
        }
    }

    /// Add or replace the document at `path`.
    pub fn insert(&self, path: impl Into<PathBuf>, text: impl Into<String>) -> ProjectorResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SourceLockError)?;

        inner.insert(path.into(), text.into());
        Ok(())
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(inner) => inner.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateSource for MemorySource {
    fn read(&self, path: &Path) -> ProjectorResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::SourceLockError)?;

        inner.get(path).cloned().ok_or_else(|| {
            ApplicationError::SourceUnreadable {
                path: path.to_path_buf(),
                reason: "not found in memory source".into(),
            }
            .into()
        })
    }
}
