//! Ordering and deduplication for scattered message elements.
//!
//! Some hosts render queries and answers into separate, non-interleaved DOM
//! regions, and re-render copies of a turn during streaming animations. This
//! pass reconstructs reading order from the recorded sort keys and collapses
//! duplicate renders. Strategies whose containers are already in reading
//! order do not come through here.

use std::collections::HashSet;

use crate::Turn;

/// How many leading characters of a body identify a logical turn.
///
/// Shared with the capture fingerprint: both only need "same visible turn",
/// not content addressing.
pub const CONTENT_PREFIX_CHARS: usize = 100;

/// Leading-content fingerprint of a body.
#[must_use]
pub fn content_prefix(content: &str) -> &str {
    match content.char_indices().nth(CONTENT_PREFIX_CHARS) {
        Some((index, _)) => &content[..index],
        None => content,
    }
}

/// Deduplicate, then sort ascending by sort key.
///
/// Dedup runs first, on first-seen order: duplicate renders of a turn carry
/// identical content prefixes but jittered positions, so sorting first could
/// flip which copy survives from cycle to cycle.
#[must_use]
pub fn dedupe_and_sort(turns: Vec<Turn>) -> Vec<Turn> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Turn> = turns
        .into_iter()
        .filter(|turn| seen.insert(content_prefix(&turn.content).to_owned()))
        .collect();

    // Stable: ties keep first-seen order. Turns that somehow arrive without a
    // sort key sink to the end rather than poisoning the comparison.
    unique.sort_by(|a, b| {
        a.sort_key
            .unwrap_or(f64::MAX)
            .total_cmp(&b.sort_key.unwrap_or(f64::MAX))
    });

    unique
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
