use linkme::distributed_slice;
use scribe_dom::Document;

use crate::{
    Platform, Role, Turn, normalize,
    strategy::{STRATEGIES, Strategy},
};

/// chatgpt.com tags every message container with its author role directly.
const ROLE_ATTR: &str = "data-message-author-role";

const MIN_CHARS: usize = 1;

struct ChatGpt;

#[distributed_slice(STRATEGIES)]
static CHATGPT: &'static dyn Strategy = &ChatGpt;

impl Strategy for ChatGpt {
    fn platform(&self) -> Platform {
        Platform::ChatGpt
    }

    fn extract(&self, document: &Document) -> Vec<Turn> {
        document
            .select(&format!("[{ROLE_ATTR}]"))
            .iter()
            .filter_map(|container| {
                // A container that lost its attribute mid-render is skipped,
                // not defaulted.
                let role = Role::from_author_token(container.attr(ROLE_ATTR)?);
                let content = normalize::clean(&container.text());

                normalize::substantial(content, MIN_CHARS)
                    .map(|content| Turn::new(role, content))
            })
            .collect()
    }
}
