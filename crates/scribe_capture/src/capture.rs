//! The per-tick capture pipeline.

use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    sync::{Arc, atomic::Ordering},
};

use scribe_dom::Document;
use scribe_extract::Turn;
use time::OffsetDateTime;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::{CaptureContext, CaptureEvent, Fingerprint, PageInfo, Sink, exchange};

/// What one capture cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page is not a supported chat host; the cycle did nothing.
    UnsupportedPage,
    /// The transcript holds no completed exchange (yet).
    NoExchange,
    /// The newest exchange was already delivered; the gate held it back.
    AlreadyCaptured,
    /// A new exchange was handed to the sink.
    Dispatched,
}

/// Drives extraction, selection, gating, and dispatch for one page.
///
/// [`Capturer::tick`] is synchronous end to end; only the sink dispatch is
/// spawned as a detached task, so an unresponsive sink can never stall the
/// polling cadence.
pub struct Capturer {
    sink: Arc<dyn Sink>,
    context: CaptureContext,
    dispatches: TaskTracker,
}

impl Capturer {
    #[must_use]
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            context: CaptureContext::new(),
            dispatches: TaskTracker::new(),
        }
    }

    /// Run one capture cycle against an `html` snapshot of the page at `url`.
    ///
    /// Never fails: every failure mode inside the cycle degrades to one of
    /// the no-op [`Outcome`]s, so the scheduler tick always completes.
    pub fn tick(&mut self, url: &Url, html: &str) -> Outcome {
        let Some(page) = PageInfo::from_url(url) else {
            debug!(%url, "Not a supported chat page.");
            return Outcome::UnsupportedPage;
        };

        let turns = extract_turns(&page, html);
        let Some(pair) = exchange::select_latest(&turns) else {
            debug!(
                platform = %page.platform,
                turns = turns.len(),
                "No completed exchange in the transcript."
            );
            return Outcome::NoExchange;
        };

        if !self.context.admit(Fingerprint::of(&pair)) {
            return Outcome::AlreadyCaptured;
        }

        let exchange = pair.into_exchange(&page);
        info!(
            platform = %exchange.platform,
            conversation = %exchange.conversation_id,
            "Capturing new exchange."
        );

        self.dispatch(CaptureEvent {
            exchange,
            source_url: page.url,
            captured_at: OffsetDateTime::now_utc(),
        });

        Outcome::Dispatched
    }

    /// Number of confirmed deliveries since startup.
    #[must_use]
    pub fn deliveries(&self) -> u64 {
        self.context.deliveries()
    }

    /// Wait until every in-flight dispatch has resolved.
    ///
    /// The watch loop never calls this; single-shot runs do, so "fire and
    /// forget" still lands before the process exits.
    pub async fn settle(&self) {
        self.dispatches.close();
        self.dispatches.wait().await;
        self.dispatches.reopen();
    }

    /// Hand `event` to the sink without blocking the tick loop.
    ///
    /// The fingerprint is already stamped at this point; a failed delivery is
    /// logged and the exchange is not offered again.
    fn dispatch(&self, event: CaptureEvent) {
        let sink = Arc::clone(&self.sink);
        let deliveries = self.context.delivery_counter();

        self.dispatches.spawn(async move {
            match sink.deliver(event).await {
                Ok(()) => {
                    let delivered = deliveries.fetch_add(1, Ordering::Relaxed) + 1;
                    info!(delivered, "Delivered exchange to sink.");
                }
                Err(error) => error!(%error, "Failed to deliver exchange to sink."),
            }
        });
    }
}

impl std::fmt::Debug for Capturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capturer")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Extract the transcript, treating a panicking strategy as an empty one.
///
/// Strategies are written to absorb malformed elements themselves; this
/// boundary catches whatever slips through, costing one cycle instead of the
/// process.
fn extract_turns(page: &PageInfo, html: &str) -> Vec<Turn> {
    let document = Document::parse(html);

    catch_unwind(AssertUnwindSafe(|| {
        scribe_extract::extract(page.platform, &document)
    }))
    .unwrap_or_else(|_| {
        warn!(platform = %page.platform, "Extraction strategy failed; treating as zero turns.");
        vec![]
    })
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
