//! The delivery seam.

use async_trait::async_trait;
use time::OffsetDateTime;
use url::Url;

use crate::Exchange;

/// Errors crossing the sink seam are opaque to the capture loop; every
/// failure is logged and dropped at the dispatch site.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// One captured exchange as handed to the sink.
#[derive(Debug, Clone)]
pub struct CaptureEvent {
    pub exchange: Exchange,
    /// Address of the page the exchange was captured from.
    pub source_url: Url,
    pub captured_at: OffsetDateTime,
}

/// An asynchronous delivery target for captured exchanges.
///
/// Implementations own transport, persistence, and (optionally) retry; the
/// capture loop only ever fires an event and walks away.
#[async_trait]
pub trait Sink: Send + Sync {
    async fn deliver(&self, event: CaptureEvent) -> Result<(), SinkError>;
}
