use linkme::distributed_slice;
use scribe_dom::Document;

use crate::{
    Platform, Role, Turn, normalize, order,
    strategy::{STRATEGIES, Strategy},
};

const CONTAINERS: &str = r#".ds-message, [class*="ds-message"]"#;

/// chat.deepseek.com distinguishes user bubbles only by a build-generated
/// hash class. Versioned and brittle; when it rotates, user turns degrade to
/// assistant until the marker is updated.
const USER_CLASS_HASH: &str = "d29f3d7d";

const MIN_CHARS: usize = 3;

struct DeepSeek;

#[distributed_slice(STRATEGIES)]
static DEEPSEEK: &'static dyn Strategy = &DeepSeek;

impl Strategy for DeepSeek {
    fn platform(&self) -> Platform {
        Platform::DeepSeek
    }

    fn extract(&self, document: &Document) -> Vec<Turn> {
        let turns = document
            .select(CONTAINERS)
            .iter()
            .filter_map(|message| {
                let content = normalize::clean(&message.text());
                let content = normalize::substantial(content, MIN_CHARS)?;

                let role = if message.class_contains(USER_CLASS_HASH) {
                    Role::User
                } else {
                    Role::Assistant
                };

                Some(Turn::positioned(role, content, message.sort_key()))
            })
            .collect();

        order::dedupe_and_sort(turns)
    }
}
