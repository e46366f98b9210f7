//! Subcommands.

mod once;
mod watch;

use scribe_sink::HttpSink;
use url::Url;

use crate::{
    config::{Config, SinkConfig, WatchConfig},
    error::{Error, Result},
    source::SnapshotSource,
};

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Commands {
    /// Watch a page snapshot and capture new exchanges continuously.
    Watch(watch::Watch),

    /// Run a single capture cycle, wait for delivery, and exit.
    Once(once::Once),
}

impl Commands {
    pub(crate) async fn run(self, config: Config) -> Result<()> {
        match self {
            Commands::Watch(args) => args.run(config).await,
            Commands::Once(args) => args.run(config).await,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Commands::Watch(_) => "watch",
            Commands::Once(_) => "once",
        }
    }
}

/// Capture target flags, overriding the `[watch]` configuration section.
#[derive(Debug, clap::Args)]
pub(crate) struct Target {
    /// Address of the live chat page.
    #[arg(long, value_name = "URL")]
    page_url: Option<Url>,

    /// Snapshot to read: an HTML file path or an http(s) URL.
    #[arg(long, value_name = "PATH_OR_URL")]
    snapshot: Option<String>,
}

impl Target {
    fn resolve(self, config: &WatchConfig) -> Result<(Url, SnapshotSource)> {
        let page_url = self
            .page_url
            .or_else(|| config.page_url.clone())
            .ok_or(Error::MissingPageUrl)?;

        let snapshot = self
            .snapshot
            .or_else(|| config.snapshot.clone())
            .ok_or(Error::MissingSnapshot)?;

        Ok((page_url, SnapshotSource::parse(&snapshot)))
    }
}

/// Sink flags, overriding the `[sink]` configuration section.
#[derive(Debug, clap::Args)]
pub(crate) struct SinkArgs {
    /// Capture endpoint receiving the JSON payload.
    #[arg(long, value_name = "URL")]
    endpoint: Option<Url>,
}

impl SinkArgs {
    fn build(self, config: &SinkConfig) -> HttpSink {
        HttpSink::new(self.endpoint.unwrap_or_else(|| config.endpoint.clone()))
            .with_max_retries(config.max_retries)
    }
}
