//! Profile URL normalization and deep-link construction.
//!
//! Pure functions: parsing a pasted profile URL into its canonical handle
//! and URL, and turning a handle into the pair of URLs used to open the
//! profile in the native app or a browser.

use url::Url;

use crate::domain::ValidationError;

/// Host of the target social network.
const PROFILE_HOST: &str = "instagram.com";

/// Scheme used by the native app.
const APP_SCHEME: &str = "instagram";

/// Result of normalizing a raw profile URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedProfile {
    /// First non-empty path segment, taken verbatim.
    pub username: String,
    /// `https://instagram.com/<username>` with query, fragment, trailing
    /// segments and scheme/host-case variations discarded.
    pub canonical_url: String,
}

/// Pair of URLs used to open a profile externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    /// Native-app URL (`instagram://user?username=...`).
    pub app_url: String,
    /// Web fallback URL.
    pub web_url: String,
}

/// Parse a raw profile URL into its canonical handle and URL.
///
/// Accepts only parseable URLs whose host equals the profile host
/// case-insensitively, optionally `www.`-prefixed. Blank input, malformed
/// URLs, foreign hosts and URLs without a path segment all return `None`;
/// bad input never panics here.
pub fn normalize_profile_url(raw: &str) -> Option<NormalizedProfile> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();
    if host != PROFILE_HOST && host != format!("www.{PROFILE_HOST}") {
        return None;
    }

    let username = url
        .path_segments()?
        .find(|segment| !segment.is_empty())?
        .to_string();
    let canonical_url = format!("https://{PROFILE_HOST}/{username}");

    Some(NormalizedProfile {
        username,
        canonical_url,
    })
}

/// Build the native-app and web URLs for opening `username`.
///
/// Blank usernames are a [`ValidationError`]. Reserved characters are
/// percent-encoded with standard URL component encoding.
pub fn build_deep_link(username: &str) -> Result<DeepLink, ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::Blank("username"));
    }

    let encoded = urlencoding::encode(username);
    Ok(DeepLink {
        app_url: format!("{APP_SCHEME}://user?username={encoded}"),
        web_url: format!("https://{PROFILE_HOST}/{encoded}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_www_query_and_trailing_slash() {
        let normalized = normalize_profile_url("https://www.instagram.com/jdoe/?x=1").unwrap();
        assert_eq!(normalized.username, "jdoe");
        assert_eq!(normalized.canonical_url, "https://instagram.com/jdoe");
    }

    #[test]
    fn test_normalize_is_case_and_scheme_insensitive_on_host() {
        let normalized = normalize_profile_url("http://INSTAGRAM.com/jdoe").unwrap();
        assert_eq!(normalized.username, "jdoe");
        assert_eq!(normalized.canonical_url, "https://instagram.com/jdoe");
    }

    #[test]
    fn test_normalize_keeps_only_first_path_segment() {
        let normalized =
            normalize_profile_url("https://instagram.com/jdoe/followers#top").unwrap();
        assert_eq!(normalized.username, "jdoe");
        assert_eq!(normalized.canonical_url, "https://instagram.com/jdoe");
    }

    #[test]
    fn test_normalize_rejects_foreign_hosts() {
        assert_eq!(normalize_profile_url("https://notinstagram.com/jdoe"), None);
        assert_eq!(
            normalize_profile_url("https://sub.instagram.com/jdoe"),
            None
        );
    }

    #[test]
    fn test_normalize_rejects_blank_and_malformed_input() {
        assert_eq!(normalize_profile_url(""), None);
        assert_eq!(normalize_profile_url("   "), None);
        assert_eq!(normalize_profile_url("not a url"), None);
    }

    #[test]
    fn test_normalize_rejects_empty_path() {
        assert_eq!(normalize_profile_url("https://instagram.com"), None);
        assert_eq!(normalize_profile_url("https://instagram.com/"), None);
    }

    #[test]
    fn test_deep_link_for_plain_username() {
        let link = build_deep_link("jdoe").unwrap();
        assert_eq!(link.app_url, "instagram://user?username=jdoe");
        assert_eq!(link.web_url, "https://instagram.com/jdoe");
    }

    #[test]
    fn test_deep_link_percent_encodes_reserved_characters() {
        let link = build_deep_link("j doe&co").unwrap();
        assert_eq!(link.app_url, "instagram://user?username=j%20doe%26co");
        assert_eq!(link.web_url, "https://instagram.com/j%20doe%26co");
    }

    #[test]
    fn test_deep_link_rejects_blank_username() {
        assert_eq!(
            build_deep_link("  "),
            Err(ValidationError::Blank("username"))
        );
    }
}
