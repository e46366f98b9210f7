use pretty_assertions::assert_eq;
use scribe_capture::{CaptureEvent, Exchange};
use scribe_extract::Platform;
use time::OffsetDateTime;

use super::*;

fn event() -> CaptureEvent {
    CaptureEvent {
        exchange: Exchange {
            platform: Platform::Claude,
            conversation_id: "abc-123".to_owned(),
            user_content: "Hi".to_owned(),
            assistant_content: "Hello!".to_owned(),
        },
        source_url: "https://claude.ai/chat/abc-123".parse().unwrap(),
        captured_at: OffsetDateTime::UNIX_EPOCH,
    }
}

#[test]
fn wire_field_names_follow_the_endpoint_contract() {
    let request = CaptureRequest::new(&event()).unwrap();
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["platform"], "claude");
    assert_eq!(value["conversationId"], "abc-123");
    assert_eq!(value["userMessage"], "Hi");
    assert_eq!(value["aiResponse"], "Hello!");
    assert_eq!(value["metadata"]["sourceUrl"], "https://claude.ai/chat/abc-123");
    assert_eq!(value["metadata"]["timestampISO8601"], "1970-01-01T00:00:00Z");
}
