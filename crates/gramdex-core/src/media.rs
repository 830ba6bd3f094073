//! Best-effort image inlining.
//!
//! Converts a local file or a remote image resource into a self-contained
//! `data:` URL so stored profiles never depend on an external fetch. The
//! remote path degrades to `None` on any downstream failure; only caller
//! input and local read errors are loud.

use std::path::Path;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::domain::ValidationError;

/// MIME type assumed for remote images without a usable `Content-Type`.
const FALLBACK_REMOTE_MIME: &str = "image/jpeg";

/// Local media read failures.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Reading the local file failed.
    #[error("failed to read image file: {0}")]
    Read(#[from] std::io::Error),
}

/// Map a file extension to its image MIME type.
fn mime_for_extension(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Inline a local image file as a data URL.
///
/// `None` input yields `Ok(None)`: "no image selected" is a valid state,
/// not an error. Read failures are loud [`MediaError::Read`]s.
pub async fn file_to_data_url(path: Option<&Path>) -> Result<Option<String>, MediaError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let bytes = tokio::fs::read(path).await?;
    Ok(Some(to_data_url(mime_for_extension(path), &bytes)))
}

/// Fetch a remote image and inline it as a data URL.
///
/// A blank `url` is a loud [`ValidationError`]. Everything downstream is
/// best-effort: request construction, transport, non-success statuses and
/// body reads all degrade to `Ok(None)` so profile creation is never
/// blocked on image personalization.
pub async fn fetch_remote_image_as_data_url(url: &str) -> Result<Option<String>, ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::Blank("image url"));
    }

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("image client construction failed: {e}");
            return Ok(None);
        }
    };

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("image fetch failed for {url}: {e}");
            return Ok(None);
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("image fetch for {url} returned status {status}");
        return Ok(None);
    }

    let mime = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map_or_else(
            || FALLBACK_REMOTE_MIME.to_string(),
            |value| value.trim().to_string(),
        );

    match response.bytes().await {
        Ok(bytes) => Ok(Some(to_data_url(&mime, &bytes))),
        Err(e) => {
            tracing::warn!("image body read failed for {url}: {e}");
            Ok(None)
        }
    }
}
