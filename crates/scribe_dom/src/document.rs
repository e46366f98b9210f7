//! Read-only queries over one parsed snapshot.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Attribute set by the snapshot companion to record an element's viewport-top
/// offset at serialization time. Elements without it fall back to document
/// order, which preserves reading order for source-ordered snapshots.
const VIEWPORT_TOP_ATTR: &str = "data-viewport-top";

/// One point-in-time parse of a chat page.
///
/// Snapshots of hostile, mid-mutation documents are expected: selectors that
/// match nothing, invalid selector strings, and half-rendered elements all
/// yield empty results rather than errors.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML snapshot. Parsing is lenient and never fails; malformed
    /// markup degrades to whatever tree the parser can recover.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// All elements matching `selector`, in document order.
    #[must_use]
    pub fn select(&self, selector: &str) -> Vec<Node<'_>> {
        let Some(selector) = parse_selector(selector) else {
            return vec![];
        };

        self.html
            .select(&selector)
            .map(|element| Node {
                element,
                document: self,
            })
            .collect()
    }

    /// First selector in `chain` that matches at least one element wins.
    ///
    /// This is the shared fallback mechanism that keeps extraction working
    /// across incremental UI refactors on the host site: chains are ordered
    /// from most specific to most generic.
    #[must_use]
    pub fn select_fallback(&self, chain: &[&str]) -> Vec<Node<'_>> {
        for selector in chain {
            let nodes = self.select(selector);
            if !nodes.is_empty() {
                return nodes;
            }
        }

        vec![]
    }

    /// Zero-based position of `element` in a full document traversal.
    fn position(&self, element: ElementRef<'_>) -> usize {
        self.html
            .root_element()
            .descendants()
            .position(|node| node.id() == element.id())
            .unwrap_or(usize::MAX)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

/// Handle to one element inside a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
    document: &'a Document,
}

impl<'a> Node<'a> {
    /// Concatenated text content, markup stripped.
    #[must_use]
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Text content, skipping any text inside descendants matching
    /// `excluded` (a comma-separated selector list).
    ///
    /// This is how chrome sub-elements (avatars, copy buttons,
    /// screen-reader-only spans) are kept out of a message body without
    /// mutating the tree.
    #[must_use]
    pub fn text_excluding(&self, excluded: &str) -> String {
        let Some(excluded) = parse_selector(excluded) else {
            return self.text();
        };

        let mut out = String::new();
        for node in self.element.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };

            let in_chrome = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != self.element.id())
                .filter_map(ElementRef::wrap)
                .any(|ancestor| excluded.matches(&ancestor));

            if !in_chrome {
                out.push_str(text);
            }
        }

        out
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// The raw `class` attribute value, or `""` when absent.
    #[must_use]
    pub fn class_value(&self) -> &'a str {
        self.attr("class").unwrap_or("")
    }

    /// Whether the `class` attribute contains `needle` as a substring.
    ///
    /// Substring, not token, matching: the host pages hash and concatenate
    /// class names, so token-exact lookups would miss them.
    #[must_use]
    pub fn class_contains(&self, needle: &str) -> bool {
        self.class_value().contains(needle)
    }

    /// All elements under this one matching `selector`, in document order.
    #[must_use]
    pub fn select(&self, selector: &str) -> Vec<Node<'a>> {
        let Some(selector) = parse_selector(selector) else {
            return vec![];
        };

        self.element
            .select(&selector)
            .map(|element| Node {
                element,
                document: self.document,
            })
            .collect()
    }

    /// Whether any descendant matches `selector`.
    #[must_use]
    pub fn has_descendant(&self, selector: &str) -> bool {
        let Some(selector) = parse_selector(selector) else {
            return false;
        };

        self.element.select(&selector).next().is_some()
    }

    /// Nearest element (starting with this one) matching `selector`.
    #[must_use]
    pub fn closest(&self, selector: &str) -> Option<Node<'a>> {
        let selector = parse_selector(selector)?;

        std::iter::once(self.element)
            .chain(self.element.ancestors().filter_map(ElementRef::wrap))
            .find(|element| selector.matches(element))
            .map(|element| Node {
                element,
                document: self.document,
            })
    }

    #[must_use]
    pub fn parent(&self) -> Option<Node<'a>> {
        self.element
            .parent()
            .and_then(ElementRef::wrap)
            .map(|element| Node {
                element,
                document: self.document,
            })
    }

    /// Vertical sort key: the companion's viewport-top annotation when
    /// present, otherwise the element's document-traversal position.
    #[must_use]
    pub fn sort_key(&self) -> f64 {
        self.attr(VIEWPORT_TOP_ATTR)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .unwrap_or_else(|| {
                let position = self.document.position(self.element);
                // usize::MAX marks a detached element; keep it sorting last.
                if position == usize::MAX {
                    f64::MAX
                } else {
                    position as f64
                }
            })
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.element.value().name())
            .field("class", &self.class_value())
            .finish()
    }
}

/// Parse a CSS selector, mapping invalid input to `None`.
///
/// Selector chains are data, not code: a selector that no longer parses after
/// a host-site refactor must degrade to "matches nothing", not abort the
/// polling cycle.
fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(error) => {
            debug!(selector, %error, "Ignoring unparseable selector.");
            None
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
