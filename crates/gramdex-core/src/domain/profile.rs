//! Profile domain type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ValidationError, require_non_blank};

/// A reference to one external social profile.
///
/// `username` is the canonical Instagram handle: no leading `@`, no URL
/// wrapper. `image_data_url`, when present, is a self-contained `data:`
/// URL (never a remote URL), so the record has no external fetch
/// dependency once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque unique identifier, assigned at creation and immutable.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Canonical Instagram handle.
    pub username: String,
    /// Inline image representation, omitted from JSON when absent.
    #[serde(
        rename = "imageDataUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_data_url: Option<String>,
}

impl Profile {
    /// Build a new profile with a fresh id.
    ///
    /// `name` and `username` are trimmed and must not be blank. The image
    /// data URL is kept only when non-blank after trimming; an empty
    /// string means "no image".
    pub fn new(
        name: &str,
        username: &str,
        image_data_url: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = require_non_blank(name, "profile name")?;
        let username = require_non_blank(username, "username")?;
        let image_data_url = image_data_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            username,
            image_data_url,
        })
    }
}
