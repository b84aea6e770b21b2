//! Infrastructure adapters for Projector.
//!
//! This crate implements the ports defined in `projector-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod codec;
pub mod source;

// Re-export commonly used adapters
pub use codec::YamlCodec;
pub use source::{LocalSource, MemorySource};
