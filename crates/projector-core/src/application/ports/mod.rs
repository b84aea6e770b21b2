//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `projector-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateSource`: Raw input retrieval
//!   - `ManifestCodec`: Text format decoding and encoding

pub mod output;

pub use output::{ManifestCodec, TemplateSource};

#[cfg(test)]
pub use output::{MockManifestCodec, MockTemplateSource};
