use linkme::distributed_slice;
use scribe_dom::Document;

use crate::{
    Platform, Role, Turn, normalize, order,
    strategy::{STRATEGIES, Strategy},
};

/// Queries and answers live in separate DOM regions on gemini.google.com;
/// every selector in both lists contributes (union, not first-hit), and the
/// ordering pass reassembles the transcript.
const USER_REGIONS: &[&str] = &[
    r#"[class*="query-content"]"#,
    r#"[class*="user-query"]"#,
    ".query-text",
    "user-query",
];

const ASSISTANT_REGIONS: &[&str] = &[
    r#"[class*="model-response"]"#,
    r#"[class*="markdown"]"#,
    "model-response",
];

const MIN_USER_CHARS: usize = 4;
const MIN_ASSISTANT_CHARS: usize = 21;

struct Gemini;

#[distributed_slice(STRATEGIES)]
static GEMINI: &'static dyn Strategy = &Gemini;

impl Strategy for Gemini {
    fn platform(&self) -> Platform {
        Platform::Gemini
    }

    fn extract(&self, document: &Document) -> Vec<Turn> {
        let mut turns = vec![];

        for selector in USER_REGIONS {
            for node in document.select(selector) {
                let content = normalize::clean(&node.text());
                if let Some(content) = normalize::substantial(content, MIN_USER_CHARS) {
                    turns.push(Turn::positioned(Role::User, content, node.sort_key()));
                }
            }
        }

        for selector in ASSISTANT_REGIONS {
            for node in document.select(selector) {
                let raw = node.text();
                let content = normalize::clean(normalize::strip_reasoning_marker(raw.trim()));
                if let Some(content) = normalize::substantial(content, MIN_ASSISTANT_CHARS) {
                    turns.push(Turn::positioned(Role::Assistant, content, node.sort_key()));
                }
            }
        }

        order::dedupe_and_sort(turns)
    }
}
