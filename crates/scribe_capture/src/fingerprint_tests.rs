use pretty_assertions::assert_eq;

use super::*;

fn pair(user: &str, assistant: &str) -> ExchangePair {
    ExchangePair {
        user_content: user.to_owned(),
        assistant_content: assistant.to_owned(),
    }
}

#[test]
fn same_contents_same_fingerprint() {
    assert_eq!(
        Fingerprint::of(&pair("Hi", "Hello!")),
        Fingerprint::of(&pair("Hi", "Hello!"))
    );
}

#[test]
fn different_contents_differ() {
    assert_ne!(
        Fingerprint::of(&pair("Hi", "Hello!")),
        Fingerprint::of(&pair("Hi", "Hello there!"))
    );
}

#[test]
fn bodies_identical_through_the_prefix_collide() {
    // Collision-tolerant by design: the token only guards consecutive
    // redelivery of the same visible exchange.
    let head = "x".repeat(200);
    let a = pair("Hi", &format!("{head} tail one"));
    let b = pair("Hi", &format!("{head} tail two"));

    assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
}
