//! Reqwest-backed delivery to the capture endpoint.

use std::time::Duration;

use async_trait::async_trait;
use scribe_capture::{CaptureEvent, Sink, SinkError};
use tracing::warn;
use url::Url;

use crate::{
    error::{Error, Result},
    payload::CaptureRequest,
};

/// Pause between delivery attempts when a retry budget is configured.
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Posts captures as JSON to a single endpoint.
///
/// The default budget of zero retries keeps the fire-and-forget contract:
/// one attempt, failure reported to the dispatch site and dropped there.
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: Url,
    max_retries: u32,
}

impl HttpSink {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            max_retries: 0,
        }
    }

    /// Allow up to `max_retries` re-attempts per delivery.
    ///
    /// Re-attempts run inside the already-detached dispatch task; the capture
    /// loop never waits on them.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    async fn post(&self, request: &CaptureRequest) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Rejected(status));
        }

        Ok(())
    }
}

#[async_trait]
impl Sink for HttpSink {
    async fn deliver(&self, event: CaptureEvent) -> std::result::Result<(), SinkError> {
        let request = CaptureRequest::new(&event)?;

        let mut attempt = 0;
        loop {
            match self.post(&request).await {
                Ok(()) => return Ok(()),
                Err(error) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(%error, attempt, "Delivery attempt failed. Retrying.");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
