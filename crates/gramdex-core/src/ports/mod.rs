//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No filesystem or HTTP-client types in any signature
//! - Traits are minimal and CRUD-focused
//! - Read paths degrade silently; write paths fail loudly

pub mod document_store;
pub mod profile_fetcher;
pub mod query_context;

use thiserror::Error;

// Re-export port traits for convenience
pub use document_store::{DOCUMENT_KEY, DocumentStore, StoreError};
pub use profile_fetcher::{FetchError, NoopProfileFetcher, ProfileFetcher, RemoteProfile};
pub use query_context::QueryContext;

use crate::domain::ValidationError;
use crate::media::MediaError;

/// Core error type for semantic domain errors.
///
/// This is the canonical roll-up used at adapter boundaries. Adapters map
/// it to their own surfaces (CLI exit codes, dialogs, serialized errors).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed caller input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Document store write failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Local media read failure.
    #[error(transparent)]
    Media(#[from] MediaError),

    /// Remote profile lookup failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
