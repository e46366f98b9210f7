use pretty_assertions::assert_eq;

use super::*;
use crate::Role;

#[test]
fn sorts_ascending_by_sort_key() {
    let turns = vec![
        Turn::positioned(Role::Assistant, "answer", 300.0),
        Turn::positioned(Role::User, "question", 120.0),
    ];

    let ordered = dedupe_and_sort(turns);

    assert_eq!(ordered[0].content, "question");
    assert_eq!(ordered[1].content, "answer");
}

#[test]
fn duplicate_prefixes_keep_the_first_seen_instance() {
    // Same logical turn rendered twice with layout jitter.
    let turns = vec![
        Turn::positioned(Role::Assistant, "streamed answer text", 205.0),
        Turn::positioned(Role::Assistant, "streamed answer text", 203.5),
        Turn::positioned(Role::User, "question", 100.0),
    ];

    let ordered = dedupe_and_sort(turns);

    assert_eq!(ordered.len(), 2);
    assert_eq!(ordered[0].content, "question");
    assert_eq!(ordered[1].sort_key, Some(205.0));
}

#[test]
fn bodies_identical_past_the_prefix_are_one_turn() {
    let long_a = format!("{}{}", "x".repeat(CONTENT_PREFIX_CHARS), "tail one");
    let long_b = format!("{}{}", "x".repeat(CONTENT_PREFIX_CHARS), "tail two");

    let turns = vec![
        Turn::positioned(Role::Assistant, long_a.clone(), 10.0),
        Turn::positioned(Role::Assistant, long_b, 20.0),
    ];

    let ordered = dedupe_and_sort(turns);

    assert_eq!(ordered.len(), 1);
    assert_eq!(ordered[0].content, long_a);
}

#[test]
fn distinct_short_bodies_are_kept() {
    let turns = vec![
        Turn::positioned(Role::User, "first question", 10.0),
        Turn::positioned(Role::User, "second question", 20.0),
    ];

    assert_eq!(dedupe_and_sort(turns).len(), 2);
}

#[test]
fn content_prefix_respects_char_boundaries() {
    let body: String = "é".repeat(CONTENT_PREFIX_CHARS + 5);

    assert_eq!(content_prefix(&body).chars().count(), CONTENT_PREFIX_CHARS);
}
