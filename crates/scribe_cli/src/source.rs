//! Where a cycle's snapshot comes from.

use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

/// A pull-based snapshot supplier, read once per cycle.
#[derive(Debug, Clone)]
pub enum SnapshotSource {
    /// An HTML file, re-read on every cycle. The capture companion keeps it
    /// current with the live page.
    File(PathBuf),

    /// An http(s) address, fetched on every cycle. Only useful for
    /// server-rendered pages.
    Http(Url),
}

impl SnapshotSource {
    /// Interpret `value` as an http(s) URL when it parses as one, otherwise
    /// as a file path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Http(url),
            _ => Self::File(PathBuf::from(value)),
        }
    }

    pub async fn snapshot(&self, client: &reqwest::Client) -> Result<String> {
        match self {
            Self::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| Error::ReadSnapshot {
                        path: path.clone(),
                        source,
                    })
            }
            Self::Http(url) => Ok(client
                .get(url.clone())
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?),
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
