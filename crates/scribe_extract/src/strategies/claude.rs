use linkme::distributed_slice;
use scribe_dom::{Document, Node};

use crate::{
    Platform, Role, Turn, normalize,
    strategy::{STRATEGIES, Strategy},
};

/// Message containers, most specific first. claude.ai reshuffles its class
/// names across releases, so the chain bottoms out at a bare prose match.
const CONTAINERS: &[&str] = &[
    "[data-test-render-count]",
    r#"[class*="Message"]"#,
    r#"[class*="message"]"#,
    r#"div[class*="prose"]"#,
];

/// Content-only sub-elements, tried before falling back to the container's
/// full text.
const CONTENT: &[&str] = &[
    r#"[data-testid="user-message"]"#,
    ".prose",
    ".markdown",
    r#"[class*="message-content"]"#,
    r#"[class*="MessageContent"]"#,
];

/// UI chrome kept out of a content read.
const CHROME: &str = r#"[class*="avatar"], [class*="Avatar"], [class*="icon"], [class*="Icon"], button, [role="button"], [class*="sr-only"], [class*="screenreader"]"#;

const MIN_CHARS: usize = 6;

/// claude.ai marks user turns structurally, via a `user-message` test id on a
/// sub-element or ancestor, or a user/human class fragment.
struct Claude;

#[distributed_slice(STRATEGIES)]
static CLAUDE: &'static dyn Strategy = &Claude;

impl Strategy for Claude {
    fn platform(&self) -> Platform {
        Platform::Claude
    }

    fn extract(&self, document: &Document) -> Vec<Turn> {
        document
            .select_fallback(CONTAINERS)
            .iter()
            .filter_map(turn_of)
            .collect()
    }
}

fn turn_of(container: &Node<'_>) -> Option<Turn> {
    let role = if is_user(container) {
        Role::User
    } else {
        Role::Assistant
    };

    let raw = CONTENT
        .iter()
        .find_map(|selector| container.select(selector).into_iter().next())
        .map_or_else(|| container.text(), |content| content.text_excluding(CHROME));

    let content = normalize::strip_author_initial(&normalize::clean(&raw)).to_owned();

    normalize::substantial(content, MIN_CHARS).map(|content| Turn::new(role, content))
}

fn is_user(container: &Node<'_>) -> bool {
    if container.has_descendant(r#"[data-testid="user-message"]"#)
        || container.closest(r#"[data-testid="user-message"]"#).is_some()
    {
        return true;
    }

    let class = container.class_value().to_ascii_lowercase();
    class.contains("human") || class.contains("user")
}
