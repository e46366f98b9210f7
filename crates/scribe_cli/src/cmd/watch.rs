use std::{sync::Arc, time::Duration};

use scribe_capture::{Capturer, Outcome};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::{
    cmd::{SinkArgs, Target},
    config::Config,
    error::Result,
};

#[derive(Debug, clap::Args)]
pub(crate) struct Watch {
    #[command(flatten)]
    target: Target,

    #[command(flatten)]
    sink: SinkArgs,

    /// Seconds between capture cycles.
    #[arg(long, value_name = "SECONDS")]
    interval: Option<u64>,
}

impl Watch {
    pub(crate) async fn run(self, config: Config) -> Result<()> {
        let (page_url, source) = self.target.resolve(&config.watch)?;
        let sink = self.sink.build(&config.sink);
        let interval_secs = self.interval.unwrap_or(config.watch.interval_secs).max(1);

        let mut capturer = Capturer::new(Arc::new(sink));
        let client = reqwest::Client::new();

        // The timer is exclusive: an overrunning cycle delays the next tick,
        // it never runs concurrently with it.
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(%page_url, interval_secs, "Watching for new exchanges.");

        loop {
            ticker.tick().await;

            let html = match source.snapshot(&client).await {
                Ok(html) => html,
                Err(error) => {
                    warn!(%error, "Failed to read snapshot. Skipping cycle.");
                    continue;
                }
            };

            match capturer.tick(&page_url, &html) {
                Outcome::Dispatched => {
                    info!(
                        deliveries = capturer.deliveries(),
                        "Captured a new exchange."
                    );
                }
                outcome => debug!(?outcome, "Cycle complete."),
            }
        }
    }
}
