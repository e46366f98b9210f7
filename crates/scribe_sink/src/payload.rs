//! Wire payload for the capture endpoint.

use scribe_capture::CaptureEvent;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::error::Result;

/// One capture as the endpoint expects it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    pub platform: String,
    pub conversation_id: String,
    pub user_message: String,
    pub ai_response: String,
    pub metadata: Metadata,
}

/// Capture provenance.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    #[serde(rename = "sourceUrl")]
    pub source_url: String,

    /// Capture time, RFC 3339.
    #[serde(rename = "timestampISO8601")]
    pub timestamp: String,
}

impl CaptureRequest {
    pub fn new(event: &CaptureEvent) -> Result<Self> {
        Ok(Self {
            platform: event.exchange.platform.to_string(),
            conversation_id: event.exchange.conversation_id.clone(),
            user_message: event.exchange.user_content.clone(),
            ai_response: event.exchange.assistant_content.clone(),
            metadata: Metadata {
                source_url: event.source_url.to_string(),
                timestamp: event.captured_at.format(&Rfc3339)?,
            },
        })
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
