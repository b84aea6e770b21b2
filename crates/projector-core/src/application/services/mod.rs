//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the "expand an ArgoCDProject into manifests" use case.

pub mod expand_service;

pub use expand_service::{DOCUMENT_SEPARATOR, ExpandService, GenerateSummary};
