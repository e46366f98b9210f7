//! Shared text-cleanup contract for extracted message bodies.
//!
//! Every strategy reads raw `textContent`-style text out of a message
//! container and pushes it through [`clean`] before building a turn. The
//! rules are literal prefix/suffix matches against known UI chrome labels —
//! never anything cleverer. Chrome text frequently arrives glued directly to
//! the body (button labels concatenate with no separator), so prefixes are
//! matched without a word boundary, exactly as the labels render.

/// Chrome labels stripped from the head of a body, longest first.
const LEADING_LABELS: &[&str] = &["copy code", "copy", "edit", "share", "like", "dislike"];

/// Chrome labels stripped from the tail of a body.
const TRAILING_LABELS: &[&str] = &["edit"];

/// Marker some hosts prepend to answers from reasoning-capable models.
const REASONING_MARKER: &str = "show thinking";

/// Normalize a raw extracted body: collapse whitespace, strip chrome labels,
/// drop author initials and counter-only bodies.
///
/// Returns an empty string when nothing of substance remains; callers discard
/// such candidates.
#[must_use]
pub fn clean(raw: &str) -> String {
    let mut text = collapse_whitespace(raw);

    loop {
        let Some(stripped) = strip_any_prefix(&text, LEADING_LABELS) else {
            break;
        };
        text = stripped.trim_start().to_owned();
    }

    loop {
        let Some(stripped) = strip_any_suffix(&text, TRAILING_LABELS) else {
            break;
        };
        text = stripped.trim_end().to_owned();
    }

    // Bare counters (vote tallies, token counts) are chrome, not content.
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        return String::new();
    }

    text
}

/// Strip the `Show thinking` marker some hosts prepend to reasoning answers.
#[must_use]
pub fn strip_reasoning_marker(text: &str) -> &str {
    strip_prefix_ci(text, REASONING_MARKER)
        .map(str::trim_start)
        .unwrap_or(text)
}

/// Gate a cleaned body against a per-strategy minimum character count,
/// filtering out icon-only and stray-whitespace matches.
#[must_use]
pub fn substantial(content: String, min_chars: usize) -> Option<String> {
    (content.chars().count() >= min_chars).then_some(content)
}

/// Collapse runs of horizontal whitespace, trim every line, and drop blank
/// lines. Line structure is otherwise preserved.
fn collapse_whitespace(raw: &str) -> String {
    let mut lines = raw
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty());

    let mut out = match lines.next() {
        Some(line) => line,
        None => return String::new(),
    };
    for line in lines {
        out.push('\n');
        out.push_str(&line);
    }

    out
}

/// Strip a leading avatar initial ("N " before the body).
///
/// Lossy on bodies that legitimately start with a one-letter word, so only
/// strategies whose containers actually render initials opt in.
#[must_use]
pub fn strip_author_initial(text: &str) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_ascii_alphabetic() && second.is_whitespace() => {
            chars.as_str().trim_start()
        }
        _ => text,
    }
}

fn strip_any_prefix<'a>(text: &'a str, labels: &[&str]) -> Option<&'a str> {
    labels
        .iter()
        .find_map(|label| strip_prefix_ci(text, label))
}

fn strip_any_suffix<'a>(text: &'a str, labels: &[&str]) -> Option<&'a str> {
    labels
        .iter()
        .find_map(|label| strip_suffix_ci(text, label))
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn strip_suffix_ci<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    let tail = text.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &text[..split])
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
