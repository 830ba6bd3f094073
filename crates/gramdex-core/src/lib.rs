#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod link;
pub mod media;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Category, Profile, ValidationError};
pub use link::{DeepLink, NormalizedProfile, build_deep_link, normalize_profile_url};
pub use media::{MediaError, fetch_remote_image_as_data_url, file_to_data_url};
pub use ports::{
    CoreError, DOCUMENT_KEY, DocumentStore, FetchError, NoopProfileFetcher, ProfileFetcher,
    QueryContext, RemoteProfile, StoreError,
};
pub use services::Library;

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
