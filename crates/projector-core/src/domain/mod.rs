// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Projector.
//!
//! This module contains the expansion logic with no I/O. Reading the input
//! and encoding manifests are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Pipeline
//!
//! - **policy**: access levels and their casbin statements
//! - **roles**: one AppProject role per access level
//! - **destinations**: de-duplicated destinations across applications
//! - **expander**: the AppProject and the re-projected Applications
//!
// Public API - what the world sees
pub mod destinations;
pub mod entities;
pub mod error;
pub mod expander;
pub mod policy;
pub mod roles;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    ARGO_API_VERSION, AccessControl, AppProject, AppProjectSpec, Application, ApplicationSource,
    ApplicationSpec, Destination, Document, Extra, GroupKind, ObjectMeta, ProjectRole,
    ProjectTemplate, STATUS_FIELD, TemplateSpec,
};

pub use destinations::collect_destinations;
pub use error::{DomainError, ErrorCategory};
pub use expander::{Expansion, expand, expand_project, reproject_applications};
pub use policy::AccessLevel;
pub use roles::build_role;
pub use validation::DomainValidator;
