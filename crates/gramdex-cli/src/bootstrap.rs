//! Composition root: wiring the file store into the core library.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use gramdex_core::Library;
use gramdex_store::FileDocumentStore;

/// Install the tracing subscriber (env-filter, `info` by default).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// Resolve the data directory and build the library over the file store.
///
/// Precedence: explicit flag/env value, then the platform data directory.
pub fn build_library(data_dir: Option<PathBuf>) -> Result<Library> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => dirs::data_dir()
            .context("no platform data directory available; pass --data-dir")?
            .join("gramdex"),
    };
    tracing::debug!("using data directory {}", data_dir.display());

    Ok(Library::new(Arc::new(FileDocumentStore::new(data_dir))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_library_over_explicit_dir() {
        let dir = tempfile::tempdir().unwrap();
        let library = build_library(Some(dir.path().to_path_buf())).unwrap();
        assert!(library.categories().await.is_empty());
    }
}
