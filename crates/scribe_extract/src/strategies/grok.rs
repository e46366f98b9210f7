use linkme::distributed_slice;
use scribe_dom::Document;

use crate::{
    Platform, Role, Turn, normalize, order,
    strategy::{STRATEGIES, Strategy},
};

const CONTAINERS: &str = ".message-bubble";

const MIN_CHARS: usize = 3;

/// grok.com aligns user bubbles right and assistant bubbles left; the only
/// role signal is the `items-end` flex class on the bubble's direct parent.
struct Grok;

#[distributed_slice(STRATEGIES)]
static GROK: &'static dyn Strategy = &Grok;

impl Strategy for Grok {
    fn platform(&self) -> Platform {
        Platform::Grok
    }

    fn extract(&self, document: &Document) -> Vec<Turn> {
        let turns = document
            .select(CONTAINERS)
            .iter()
            .filter_map(|bubble| {
                let content = normalize::clean(&bubble.text());
                let content = normalize::substantial(content, MIN_CHARS)?;

                let role = if bubble
                    .parent()
                    .is_some_and(|parent| parent.class_contains("items-end"))
                {
                    Role::User
                } else {
                    Role::Assistant
                };

                Some(Turn::positioned(role, content, bubble.sort_key()))
            })
            .collect();

        order::dedupe_and_sort(turns)
    }
}
