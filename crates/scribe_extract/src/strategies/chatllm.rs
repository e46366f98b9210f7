use linkme::distributed_slice;
use scribe_dom::{Document, Node};

use crate::{
    Platform, Role, Turn, normalize, order,
    strategy::{STRATEGIES, Strategy},
};

/// apps.abacus.ai renders message bodies as prose/markdown blocks inside
/// deeply nested flex containers.
const CONTAINERS: &str = r#".prose.markdown, [class*="prose"][class*="markdown"]"#;

/// How far up the ancestor chain the alignment signal is searched for.
const ALIGNMENT_DEPTH: usize = 6;

const MIN_CHARS: usize = 5;

struct ChatLlm;

#[distributed_slice(STRATEGIES)]
static CHATLLM: &'static dyn Strategy = &ChatLlm;

impl Strategy for ChatLlm {
    fn platform(&self) -> Platform {
        Platform::ChatLlm
    }

    fn extract(&self, document: &Document) -> Vec<Turn> {
        let turns = document
            .select(CONTAINERS)
            .iter()
            .filter_map(|body| {
                let content = normalize::clean(&body.text());
                let content = normalize::substantial(content, MIN_CHARS)?;

                let role = if is_right_aligned(body) {
                    Role::User
                } else {
                    Role::Assistant
                };

                Some(Turn::positioned(role, content, body.sort_key()))
            })
            .collect();

        order::dedupe_and_sort(turns)
    }
}

/// User messages sit in a right-aligned flex chain (`justify-end` or
/// `items-end`) somewhere in the first few ancestors.
fn is_right_aligned(body: &Node<'_>) -> bool {
    let mut current = body.parent();

    for _ in 0..ALIGNMENT_DEPTH {
        let Some(ancestor) = current else {
            return false;
        };

        if ancestor.class_contains("justify-end") || ancestor.class_contains("items-end") {
            return true;
        }

        current = ancestor.parent();
    }

    false
}
