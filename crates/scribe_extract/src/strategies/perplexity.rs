use linkme::distributed_slice;
use scribe_dom::Document;

use crate::{
    Platform, Role, Turn, normalize, order,
    strategy::{STRATEGIES, Strategy},
};

/// Queries and answers render into separate regions on www.perplexity.ai.
const QUERY_REGIONS: &[&str] = &[r#"[class*="query"]"#, r#"[class*="Question"]"#, ".ask-input"];
const ANSWER_REGIONS: &[&str] = &[r#"[class*="prose"]"#, r#"[class*="Answer"]"#, ".answer-text"];

/// An answer candidate nested inside a query container is an echo of the
/// question, not an answer.
const QUERY_ANCESTOR: &str = r#"[class*="query"], [class*="Question"]"#;

const MIN_USER_CHARS: usize = 4;

/// Answers embed citations and related-question chrome; a high floor keeps
/// the sidebar fragments out.
const MIN_ASSISTANT_CHARS: usize = 51;

struct Perplexity;

#[distributed_slice(STRATEGIES)]
static PERPLEXITY: &'static dyn Strategy = &Perplexity;

impl Strategy for Perplexity {
    fn platform(&self) -> Platform {
        Platform::Perplexity
    }

    fn extract(&self, document: &Document) -> Vec<Turn> {
        let mut turns = vec![];

        for selector in QUERY_REGIONS {
            for node in document.select(selector) {
                let content = normalize::clean(&node.text());
                if let Some(content) = normalize::substantial(content, MIN_USER_CHARS) {
                    turns.push(Turn::positioned(Role::User, content, node.sort_key()));
                }
            }
        }

        for selector in ANSWER_REGIONS {
            for node in document.select(selector) {
                if node.closest(QUERY_ANCESTOR).is_some() {
                    continue;
                }

                let content = normalize::clean(&node.text());
                if let Some(content) = normalize::substantial(content, MIN_ASSISTANT_CHARS) {
                    turns.push(Turn::positioned(Role::Assistant, content, node.sort_key()));
                }
            }
        }

        order::dedupe_and_sort(turns)
    }
}
