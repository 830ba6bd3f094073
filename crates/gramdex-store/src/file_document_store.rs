//! File-backed implementation of the `DocumentStore` port.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use gramdex_core::{Category, DOCUMENT_KEY, DocumentStore, StoreError};

/// Stores the whole category document as one JSON array in a single file.
///
/// The file is named after the storage slot key ([`DOCUMENT_KEY`]) and
/// holds exactly the externally-mandated payload shape. Every write
/// replaces the file; concurrent writers race last-write-wins with no
/// conflict detection.
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    /// Create a store rooted at `data_dir`.
    ///
    /// Nothing is touched on disk until the first write.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(DOCUMENT_KEY),
        }
    }

    /// Path of the underlying slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check that `value` is an array of category-shaped objects.
    ///
    /// Category-shaped means: an object with string `id`, string `name`
    /// and an array `profiles`. Nested profile entries are not inspected
    /// here; typed deserialization handles them afterwards.
    fn is_category_array(value: &Value) -> bool {
        let Value::Array(items) = value else {
            return false;
        };
        items.iter().all(|item| {
            item.get("id").is_some_and(Value::is_string)
                && item.get("name").is_some_and(Value::is_string)
                && item.get("profiles").is_some_and(Value::is_array)
        })
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn read_document(&self) -> Vec<Category> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("document slot unreadable, starting empty: {e}");
                return Vec::new();
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("document slot holds invalid JSON, treating as empty: {e}");
                return Vec::new();
            }
        };

        if !Self::is_category_array(&value) {
            tracing::warn!("document slot holds an unexpected shape, treating as empty");
            return Vec::new();
        }

        match serde_json::from_value(value) {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!("document slot failed to deserialize, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    async fn write_document(&self, categories: &[Category]) -> Result<(), StoreError> {
        let json = serde_json::to_string(categories)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Storage(e.to_string()))?;
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gramdex_core::Profile;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileDocumentStore) {
        let dir = TempDir::new().expect("failed to create temporary directory");
        let store = FileDocumentStore::new(dir.path());
        (dir, store)
    }

    fn sample_document() -> Vec<Category> {
        let profile = Profile::new("Jane Doe", "jdoe", Some("data:image/png;base64,AA==")).unwrap();
        vec![
            Category::new("Friends", &[profile]).unwrap(),
            Category::new("Travel", &[]).unwrap(),
        ]
    }

    #[tokio::test]
    async fn test_absent_slot_reads_empty() {
        let (_dir, store) = store();
        assert!(store.read_document().await.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let (_dir, store) = store();
        let document = sample_document();

        store.write_document(&document).await.unwrap();
        assert_eq!(store.read_document().await, document);
    }

    #[tokio::test]
    async fn test_identity_round_trip_is_byte_stable() {
        let (_dir, store) = store();
        store.write_document(&sample_document()).await.unwrap();

        let first = std::fs::read(store.path()).unwrap();
        let reread = store.read_document().await;
        store.write_document(&reread).await.unwrap();
        let second = std::fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_slot_file_uses_document_key_and_mandated_shape() {
        let (dir, store) = store();
        store.write_document(&sample_document()).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("profiles.v2")).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"imageDataUrl\""));
        assert!(raw.contains("\"username\":\"jdoe\""));
    }

    #[tokio::test]
    async fn test_invalid_json_reads_empty() {
        let (_dir, store) = store();
        std::fs::write(store.path(), "not json at all {").unwrap();
        assert!(store.read_document().await.is_empty());
    }

    #[tokio::test]
    async fn test_object_instead_of_array_reads_empty() {
        let (_dir, store) = store();
        std::fs::write(store.path(), r#"{"id":"c1","name":"x","profiles":[]}"#).unwrap();
        assert!(store.read_document().await.is_empty());
    }

    #[tokio::test]
    async fn test_non_category_shaped_entry_reads_empty() {
        let (_dir, store) = store();
        std::fs::write(
            store.path(),
            r#"[{"id":"c1","name":"ok","profiles":[]},{"id":42,"name":"bad","profiles":[]}]"#,
        )
        .unwrap();
        assert!(store.read_document().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_profiles_field_reads_empty() {
        let (_dir, store) = store();
        std::fs::write(store.path(), r#"[{"id":"c1","name":"no profiles"}]"#).unwrap();
        assert!(store.read_document().await.is_empty());
    }

    #[tokio::test]
    async fn test_write_replaces_prior_state_wholesale() {
        let (_dir, store) = store();
        store.write_document(&sample_document()).await.unwrap();

        let replacement = vec![Category::new("Only", &[]).unwrap()];
        store.write_document(&replacement).await.unwrap();

        assert_eq!(store.read_document().await, replacement);
    }
}
