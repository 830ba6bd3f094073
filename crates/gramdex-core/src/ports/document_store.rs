//! Document store trait definition.
//!
//! This port defines the interface for the single persistent slot holding
//! the category document. Implementations handle all storage details
//! internally.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Category;

/// Key of the storage slot holding the serialized document.
///
/// Any backend must keep this key and the "JSON array of categories"
/// payload shape so migration/compat tooling can read the slot directly.
pub const DOCUMENT_KEY: &str = "profiles.v2";

/// Write-path failures of a [`DocumentStore`].
///
/// Read-path failures do not exist by contract: malformed persisted state
/// reads back as an empty document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend failure (quota, permissions, disk).
    #[error("storage error: {0}")]
    Storage(String),

    /// Serializing the document failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Port over the persistent slot holding the whole category document.
///
/// # Design Rules
///
/// - Reads never fail: absent, unparsable or wrongly-shaped persisted
///   state yields an empty document, not an error
/// - Writes replace the full document in one operation and surface
///   failures loudly; there is no merge or patch semantics
/// - Concurrent writers race last-write-wins with no conflict detection
///   (documented limitation)
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the full category list from the slot.
    async fn read_document(&self) -> Vec<Category>;

    /// Serialize `categories` and replace the slot contents.
    async fn write_document(&self, categories: &[Category]) -> Result<(), StoreError>;
}
