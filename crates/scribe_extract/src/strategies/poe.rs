use linkme::distributed_slice;
use scribe_dom::Document;

use crate::{
    Platform, Role, Turn, normalize, order,
    strategy::{STRATEGIES, Strategy},
};

const CONTAINERS: &str = r#"[class*="Message_row"], [class*="ChatMessage_chatMessage"]"#;

/// Outer wrappers that contain further message rows are layout, not messages.
const NESTED_ROW: &str = r#"[class*="Message_row"]"#;

const MIN_CHARS: usize = 3;

/// poe.com encodes the role into the row class: `rightSide*` rows are the
/// user, `leftSide*` rows (or any other `Message_row`) are the bot. Rows with
/// neither signal are skipped.
struct Poe;

#[distributed_slice(STRATEGIES)]
static POE: &'static dyn Strategy = &Poe;

impl Strategy for Poe {
    fn platform(&self) -> Platform {
        Platform::Poe
    }

    fn extract(&self, document: &Document) -> Vec<Turn> {
        let turns = document
            .select(CONTAINERS)
            .iter()
            .filter_map(|row| {
                if row.has_descendant(NESTED_ROW) {
                    return None;
                }

                let content = normalize::clean(&row.text());
                let content = normalize::substantial(content, MIN_CHARS)?;

                let class = row.class_value();
                let role = if class.contains("rightSide") {
                    Role::User
                } else if class.contains("leftSide") || class.contains("Message_row") {
                    Role::Assistant
                } else {
                    return None;
                };

                Some(Turn::positioned(role, content, row.sort_key()))
            })
            .collect();

        order::dedupe_and_sort(turns)
    }
}
