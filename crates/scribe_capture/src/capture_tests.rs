use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use indoc::indoc;
use pretty_assertions::assert_eq;
use test_log::test;
use url::Url;

use super::*;
use crate::{CaptureEvent, Sink, SinkError};

/// Records delivered events; optionally refuses every delivery.
#[derive(Debug, Default)]
struct RecordingSink {
    events: Mutex<Vec<CaptureEvent>>,
    unavailable: bool,
}

impl RecordingSink {
    fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn delivered(&self) -> Vec<CaptureEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sink for RecordingSink {
    async fn deliver(&self, event: CaptureEvent) -> Result<(), SinkError> {
        if self.unavailable {
            return Err("sink unavailable".into());
        }

        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

const PAGE: &str = indoc! {r#"
    <div data-message-author-role="user">Hi</div>
    <div data-message-author-role="assistant">Hello!</div>
"#};

fn chatgpt_url() -> Url {
    "https://chatgpt.com/c/abc123".parse().unwrap()
}

#[test(tokio::test)]
async fn captures_and_delivers_a_new_exchange() {
    let sink = Arc::new(RecordingSink::default());
    let mut capturer = Capturer::new(Arc::clone(&sink) as Arc<dyn Sink>);

    assert_eq!(capturer.tick(&chatgpt_url(), PAGE), Outcome::Dispatched);
    capturer.settle().await;

    let events = sink.delivered();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].exchange.platform.as_str(), "chatgpt");
    assert_eq!(events[0].exchange.conversation_id, "abc123");
    assert_eq!(events[0].exchange.user_content, "Hi");
    assert_eq!(events[0].exchange.assistant_content, "Hello!");
    assert_eq!(events[0].source_url, chatgpt_url());
    assert_eq!(capturer.deliveries(), 1);
}

#[test(tokio::test)]
async fn unchanged_page_is_delivered_exactly_once() {
    let sink = Arc::new(RecordingSink::default());
    let mut capturer = Capturer::new(Arc::clone(&sink) as Arc<dyn Sink>);

    assert_eq!(capturer.tick(&chatgpt_url(), PAGE), Outcome::Dispatched);
    assert_eq!(capturer.tick(&chatgpt_url(), PAGE), Outcome::AlreadyCaptured);
    capturer.settle().await;

    assert_eq!(sink.delivered().len(), 1);
    assert_eq!(capturer.deliveries(), 1);
}

#[test(tokio::test)]
async fn composing_assistant_leaves_the_previous_pair_as_latest() {
    let page = indoc! {r#"
        <div data-message-author-role="user">Hi</div>
        <div data-message-author-role="assistant">Hello!</div>
        <div data-message-author-role="user">How are you?</div>
    "#};

    let sink = Arc::new(RecordingSink::default());
    let mut capturer = Capturer::new(Arc::clone(&sink) as Arc<dyn Sink>);

    // The unanswered trailing question selects the previous completed pair;
    // the gate, not the selector, keeps it from going out again while the
    // new answer streams in.
    assert_eq!(capturer.tick(&chatgpt_url(), page), Outcome::Dispatched);
    assert_eq!(capturer.tick(&chatgpt_url(), page), Outcome::AlreadyCaptured);
    capturer.settle().await;

    let events = sink.delivered();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].exchange.user_content, "Hi");
    assert_eq!(events[0].exchange.assistant_content, "Hello!");
}

#[test(tokio::test)]
async fn unsupported_page_is_a_no_op() {
    let url: Url = "https://example.com/chat/1".parse().unwrap();

    let sink = Arc::new(RecordingSink::default());
    let mut capturer = Capturer::new(Arc::clone(&sink) as Arc<dyn Sink>);

    assert_eq!(capturer.tick(&url, PAGE), Outcome::UnsupportedPage);
}

#[test(tokio::test)]
async fn failed_delivery_is_not_offered_again() {
    let sink = Arc::new(RecordingSink::unavailable());
    let mut capturer = Capturer::new(Arc::clone(&sink) as Arc<dyn Sink>);

    // The fingerprint is stamped before dispatch, so the failed exchange is
    // gone for good and the counter never moves.
    assert_eq!(capturer.tick(&chatgpt_url(), PAGE), Outcome::Dispatched);
    capturer.settle().await;
    assert_eq!(capturer.tick(&chatgpt_url(), PAGE), Outcome::AlreadyCaptured);

    assert_eq!(capturer.deliveries(), 0);

    // A later, different exchange still goes out.
    let page = indoc! {r#"
        <div data-message-author-role="user">Second question</div>
        <div data-message-author-role="assistant">Second answer</div>
    "#};
    assert_eq!(capturer.tick(&chatgpt_url(), page), Outcome::Dispatched);
}

#[test(tokio::test)]
async fn gibberish_snapshot_still_completes_the_cycle() {
    let sink = Arc::new(RecordingSink::default());
    let mut capturer = Capturer::new(Arc::clone(&sink) as Arc<dyn Sink>);

    let outcome = capturer.tick(&chatgpt_url(), "<<<%%% not even close to html");

    assert_eq!(outcome, Outcome::NoExchange);
}
