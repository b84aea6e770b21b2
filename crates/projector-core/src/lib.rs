//! Projector Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Projector,
//! the generator that expands an `ArgoCDProject` into Argo CD manifests.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          projector-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ExpandService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: TemplateSource, ManifestCodec)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    projector-adapters (Infrastructure)  │
//! │     (LocalSource, YamlCodec, etc)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (AccessLevel, AppProject, Application) │
//! │              No I/O                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use projector_core::application::ExpandService;
//!
//! // Inject adapters for reading and encoding
//! let service = ExpandService::new(source, codec);
//! let summary = service.generate("project.yaml", &mut std::io::stdout())?;
//! eprintln!("{} documents", summary.documents);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExpandService, GenerateSummary,
        ports::{ManifestCodec, TemplateSource},
    };
    pub use crate::domain::{
        AccessLevel, AppProject, Application, Destination, Document, Expansion, ProjectTemplate,
    };
    pub use crate::error::{ProjectorError, ProjectorResult};
}
