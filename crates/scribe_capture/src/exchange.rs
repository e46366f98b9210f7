//! The unit of delivery and the selector that finds it.

use scribe_extract::{Platform, Role, Turn};

use crate::PageInfo;

/// The newest completed back-and-forth in a transcript, content only.
///
/// Page identity is attached separately ([`ExchangePair::into_exchange`]); the
/// selector itself only looks at turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangePair {
    pub user_content: String,
    pub assistant_content: String,
}

impl ExchangePair {
    /// Attach page identity, producing the deliverable exchange.
    #[must_use]
    pub fn into_exchange(self, page: &PageInfo) -> Exchange {
        Exchange {
            platform: page.platform,
            conversation_id: page.conversation_id.clone(),
            user_content: self.user_content,
            assistant_content: self.assistant_content,
        }
    }
}

/// One captured exchange, ready for delivery.
///
/// Nothing here is persisted by this subsystem; the sink owns persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub platform: Platform,
    pub conversation_id: String,
    pub user_content: String,
    pub assistant_content: String,
}

/// Find the most recent completed (user, assistant) pair in `turns`.
///
/// Scans backward: the assistant turn closest to the end is the candidate
/// answer, and the first user turn encountered before it is the question. A
/// trailing user turn whose answer has not rendered yet is passed over, so
/// the previous completed pair stays selected until the new answer lands;
/// the capture gate keeps that pair from being delivered again.
#[must_use]
pub fn select_latest(turns: &[Turn]) -> Option<ExchangePair> {
    let mut answer: Option<&Turn> = None;

    for turn in turns.iter().rev() {
        match turn.role {
            Role::Assistant => answer = answer.or(Some(turn)),
            Role::User => {
                if let Some(answer) = answer {
                    return Some(ExchangePair {
                        user_content: turn.content.clone(),
                        assistant_content: answer.content.clone(),
                    });
                }
            }
        }
    }

    None
}

#[cfg(test)]
#[path = "exchange_tests.rs"]
mod tests;
