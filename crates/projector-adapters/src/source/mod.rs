//! Template source adapters.

mod local;
mod memory;

pub use local::LocalSource;
pub use memory::MemorySource;
