use std::io::Write as _;

use indoc::indoc;
use pretty_assertions::assert_eq;

use super::*;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn default_values_without_a_config_file() {
    let config = Config::default();

    assert_eq!(config.watch.interval_secs, 3);
    assert_eq!(config.watch.page_url, None);
    assert_eq!(config.watch.snapshot, None);
    assert_eq!(
        config.sink.endpoint.as_str(),
        "http://localhost:8765/api/add"
    );
    assert_eq!(config.sink.max_retries, 0);
}

#[test]
fn parses_a_full_file() {
    let file = write_config(indoc! {r#"
        [watch]
        page_url = "https://claude.ai/chat/abc"
        snapshot = "./page.html"
        interval_secs = 10

        [sink]
        endpoint = "http://localhost:9000/api/add"
        max_retries = 2
    "#});

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(
        config.watch.page_url.unwrap().as_str(),
        "https://claude.ai/chat/abc"
    );
    assert_eq!(config.watch.snapshot.as_deref(), Some("./page.html"));
    assert_eq!(config.watch.interval_secs, 10);
    assert_eq!(config.sink.endpoint.as_str(), "http://localhost:9000/api/add");
    assert_eq!(config.sink.max_retries, 2);
}

#[test]
fn missing_sections_keep_their_defaults() {
    let file = write_config(indoc! {r#"
        [watch]
        interval_secs = 7
    "#});

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.watch.interval_secs, 7);
    assert_eq!(config.sink.max_retries, 0);
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_config(indoc! {r#"
        [watch]
        intervall_secs = 7
    "#});

    assert!(Config::load(Some(file.path())).is_err());
}
