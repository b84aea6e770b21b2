//! Expand Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Read and decode the ArgoCDProject
//! 2. Expand it into the AppProject and Applications
//! 3. Encode every resource as a document
//! 4. Write the documents as one multi-document stream
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ManifestCodec, TemplateSource},
    },
    domain::{self, AppProject, Application, Document, Expansion, ProjectTemplate},
    error::{ProjectorError, ProjectorResult},
};

/// Written between consecutive documents; never before the first.
pub const DOCUMENT_SEPARATOR: &str = "---\n";

/// What a `generate` run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub project: String,
    pub applications: usize,
    pub documents: usize,
}

/// Main generation service.
pub struct ExpandService {
    source: Box<dyn TemplateSource>,
    codec: Box<dyn ManifestCodec>,
}

impl ExpandService {
    /// Create a new expand service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use projector_core::application::ExpandService;
    ///
    /// let service = ExpandService::new(
    ///     source, // impl TemplateSource
    ///     codec,  // impl ManifestCodec
    /// );
    /// ```
    pub fn new(source: Box<dyn TemplateSource>, codec: Box<dyn ManifestCodec>) -> Self {
        Self { source, codec }
    }

    /// Run the whole pipeline for the document at `path`, writing to `out`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn generate(
        &self,
        path: impl AsRef<Path>,
        out: &mut dyn Write,
    ) -> ProjectorResult<GenerateSummary> {
        let template = self.load(path.as_ref())?;
        let expansion = self.expand(&template)?;
        let documents = self.render(&expansion)?;
        self.emit(&documents, out)?;

        let summary = GenerateSummary {
            project: expansion.project.name().to_string(),
            applications: expansion.applications.len(),
            documents: documents.len(),
        };

        info!(
            project = %summary.project,
            documents = summary.documents,
            "Manifests generated"
        );
        Ok(summary)
    }

    /// Read and decode the ArgoCDProject at `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> ProjectorResult<ProjectTemplate> {
        let text = self.source.read(path)?;
        debug!(bytes = text.len(), "Template read");

        let template = self.codec.decode(path, &text)?;
        debug!(
            name = %template.name(),
            applications = template.spec.applications.len(),
            "Template decoded"
        );
        Ok(template)
    }

    /// Expand a decoded template.
    pub fn expand(&self, template: &ProjectTemplate) -> ProjectorResult<Expansion> {
        domain::expand(template).map_err(ProjectorError::Domain)
    }

    /// Encode the project, then each application in order.
    ///
    /// Nothing is returned unless every document encodes.
    pub fn render(&self, expansion: &Expansion) -> ProjectorResult<Vec<String>> {
        let mut documents = Vec::with_capacity(expansion.document_count());

        documents.push(self.encode(AppProject::KIND, &expansion.project)?);
        for app in &expansion.applications {
            documents.push(self.encode(Application::KIND, app)?);
        }

        Ok(documents)
    }

    /// Write `documents` to `out` as one stream.
    pub fn emit(&self, documents: &[String], out: &mut dyn Write) -> ProjectorResult<()> {
        for (index, document) in documents.iter().enumerate() {
            if index > 0 {
                write_all(out, DOCUMENT_SEPARATOR)?;
            }
            write_all(out, document)?;
        }

        out.flush().map_err(write_failed)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn encode<T: Serialize>(&self, kind: &'static str, resource: &T) -> ProjectorResult<String> {
        let document = Document::from_resource(kind, resource)?;

        let mut text = self.codec.encode(&document)?;
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(text)
    }
}

fn write_all(out: &mut dyn Write, text: &str) -> ProjectorResult<()> {
    out.write_all(text.as_bytes()).map_err(write_failed)
}

fn write_failed(e: std::io::Error) -> ProjectorError {
    ApplicationError::WriteFailed {
        reason: e.to_string(),
    }
    .into()
}
