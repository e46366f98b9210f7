use pretty_assertions::assert_eq;

use super::*;
use crate::ExchangePair;

fn fingerprint(user: &str, assistant: &str) -> Fingerprint {
    Fingerprint::of(&ExchangePair {
        user_content: user.to_owned(),
        assistant_content: assistant.to_owned(),
    })
}

#[test]
fn first_exchange_is_admitted() {
    let mut context = CaptureContext::new();

    assert!(context.admit(fingerprint("Hi", "Hello!")));
}

#[test]
fn repeat_of_the_last_delivery_is_held_back() {
    let mut context = CaptureContext::new();

    assert!(context.admit(fingerprint("Hi", "Hello!")));
    assert!(!context.admit(fingerprint("Hi", "Hello!")));
}

#[test]
fn a_new_exchange_reopens_the_gate() {
    let mut context = CaptureContext::new();

    assert!(context.admit(fingerprint("Hi", "Hello!")));
    assert!(context.admit(fingerprint("How are you?", "Doing great.")));
    // The slot holds only the latest delivery; an old exchange reappearing
    // counts as new again.
    assert!(context.admit(fingerprint("Hi", "Hello!")));
}

#[test]
fn deliveries_start_at_zero() {
    assert_eq!(CaptureContext::new().deliveries(), 0);
}
