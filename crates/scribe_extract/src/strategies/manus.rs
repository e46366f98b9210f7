use linkme::distributed_slice;
use scribe_dom::Document;

use crate::{
    Platform, Role, Turn, normalize,
    strategy::{STRATEGIES, Strategy},
};

const CONTAINERS: &str = r#"[class*="message"], [class*="Message"]"#;

const USER_MARKERS: &[&str] = &["user", "human", "sent"];
const ASSISTANT_MARKERS: &[&str] = &["assistant", "bot", "ai", "received"];

const MIN_CHARS: usize = 3;

/// manus.im spells the role into the container class. A container matching
/// neither marker set is layout scaffolding, not a message, and is skipped
/// rather than defaulted.
struct Manus;

#[distributed_slice(STRATEGIES)]
static MANUS: &'static dyn Strategy = &Manus;

impl Strategy for Manus {
    fn platform(&self) -> Platform {
        Platform::Manus
    }

    fn extract(&self, document: &Document) -> Vec<Turn> {
        document
            .select(CONTAINERS)
            .iter()
            .filter_map(|container| {
                let content = normalize::clean(&container.text());
                let content = normalize::substantial(content, MIN_CHARS)?;

                let class = container.class_value().to_ascii_lowercase();
                let role = if USER_MARKERS.iter().any(|marker| class.contains(marker)) {
                    Role::User
                } else if ASSISTANT_MARKERS.iter().any(|marker| class.contains(marker)) {
                    Role::Assistant
                } else {
                    return None;
                };

                Some(Turn::new(role, content))
            })
            .collect()
    }
}
