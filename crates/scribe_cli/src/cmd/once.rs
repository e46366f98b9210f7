use std::sync::Arc;

use scribe_capture::{Capturer, Outcome};
use tracing::info;

use crate::{
    cmd::{SinkArgs, Target},
    config::Config,
    error::Result,
};

#[derive(Debug, clap::Args)]
pub(crate) struct Once {
    #[command(flatten)]
    target: Target,

    #[command(flatten)]
    sink: SinkArgs,
}

impl Once {
    pub(crate) async fn run(self, config: Config) -> Result<()> {
        let (page_url, source) = self.target.resolve(&config.watch)?;
        let sink = self.sink.build(&config.sink);

        let mut capturer = Capturer::new(Arc::new(sink));
        let client = reqwest::Client::new();

        let html = source.snapshot(&client).await?;
        let outcome = capturer.tick(&page_url, &html);

        // Unlike the watch loop, a single-shot run waits for the dispatch to
        // land before the process exits.
        capturer.settle().await;

        match outcome {
            Outcome::Dispatched => info!(
                deliveries = capturer.deliveries(),
                "Captured the latest exchange."
            ),
            Outcome::AlreadyCaptured => info!("Latest exchange was already captured."),
            Outcome::NoExchange => info!("No completed exchange on the page."),
            Outcome::UnsupportedPage => info!("Not a supported chat page."),
        }

        Ok(())
    }
}
