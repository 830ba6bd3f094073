//! Service layer - orchestration over the ports.

mod library;

pub use library::Library;
