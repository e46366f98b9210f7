//! Page identity: which platform, which conversation.

use scribe_extract::Platform;
use url::Url;

/// Conversation id delivered when the page path has no segments.
const UNKNOWN_CONVERSATION: &str = "unknown";

/// Identity of the page a snapshot was taken from.
///
/// Derived from the page URL on every tick, so in-page navigation can never
/// leave a stale identity attached to a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub url: Url,
    pub platform: Platform,
    pub conversation_id: String,
}

impl PageInfo {
    /// Identify the page at `url`, or `None` for unsupported hosts.
    ///
    /// The conversation id is the last non-empty path segment, passed to the
    /// sink verbatim; it is opaque to this engine.
    #[must_use]
    pub fn from_url(url: &Url) -> Option<Self> {
        let platform = Platform::from_url(url)?;

        let conversation_id = url
            .path_segments()
            .and_then(|mut segments| segments.rfind(|segment| !segment.is_empty()))
            .unwrap_or(UNKNOWN_CONVERSATION)
            .to_owned();

        Some(Self {
            url: url.clone(),
            platform,
            conversation_id,
        })
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
