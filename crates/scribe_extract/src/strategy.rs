//! The extraction capability and its link-time registry.

use linkme::distributed_slice;
use scribe_dom::Document;
use tracing::debug;

use crate::{Platform, Turn};

/// A platform-specific transcript extractor.
///
/// Implementations are pure reads of a snapshot: no mutation, no errors.
/// Missing or half-rendered elements yield fewer turns, never a failure —
/// the next polling cycle gets a fresh snapshot anyway.
pub trait Strategy: Sync {
    /// The platform this strategy extracts for.
    fn platform(&self) -> Platform;

    /// Extract zero or more turns from the snapshot, in reading order.
    fn extract(&self, document: &Document) -> Vec<Turn>;
}

/// Registered strategies, one per supported platform.
///
/// Populated at link time; adding a platform never touches a central
/// dispatcher.
#[distributed_slice]
pub static STRATEGIES: [&'static dyn Strategy] = [..];

/// The registered strategy for `platform`.
#[must_use]
pub fn strategy_for(platform: Platform) -> Option<&'static dyn Strategy> {
    STRATEGIES
        .iter()
        .find(|strategy| strategy.platform() == platform)
        .copied()
}

/// Extract turns for `platform` from `document`.
///
/// A platform without a registered strategy produces an empty sequence; the
/// polling cycle treats that the same as a page with no messages.
#[must_use]
pub fn extract(platform: Platform, document: &Document) -> Vec<Turn> {
    match strategy_for(platform) {
        Some(strategy) => strategy.extract(document),
        None => {
            debug!(%platform, "No extraction strategy registered.");
            vec![]
        }
    }
}
