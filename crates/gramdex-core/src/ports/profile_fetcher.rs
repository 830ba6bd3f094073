//! Remote profile lookup trait definition.
//!
//! The remote lookup is an external collaborator: the core consumes it as
//! a capability and never implements the network call itself.

use async_trait::async_trait;
use thiserror::Error;

/// Profile record returned by the remote lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProfile {
    /// Display name as reported by the remote service.
    pub name: String,
    /// Canonical handle.
    pub username: String,
    /// Remote image location, if any. Convert to a data URL via
    /// [`crate::media::fetch_remote_image_as_data_url`] before storing.
    pub image_url: Option<String>,
}

/// Failures of the remote profile lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No profile exists for the requested username.
    #[error("profile '{username}' not found")]
    NotFound {
        /// The handle that was looked up.
        username: String,
    },

    /// The lookup service failed or was unreachable.
    #[error("profile lookup failed: {0}")]
    Upstream(String),
}

/// Port over the external profile lookup service.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// Look up a profile by username.
    async fn fetch(&self, username: &str) -> Result<RemoteProfile, FetchError>;
}

/// Fetcher for wiring without a lookup backend; always reports not-found.
pub struct NoopProfileFetcher;

#[async_trait]
impl ProfileFetcher for NoopProfileFetcher {
    async fn fetch(&self, username: &str) -> Result<RemoteProfile, FetchError> {
        Err(FetchError::NotFound {
            username: username.to_string(),
        })
    }
}
