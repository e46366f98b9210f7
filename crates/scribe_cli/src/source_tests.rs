use std::io::Write as _;

use pretty_assertions::assert_eq;
use test_log::test;

use super::*;

#[test]
fn http_addresses_are_fetched_sources() {
    assert!(matches!(
        SnapshotSource::parse("https://chat.deepseek.com/a/b"),
        SnapshotSource::Http(_)
    ));
}

#[test]
fn plain_paths_are_file_sources() {
    assert!(matches!(
        SnapshotSource::parse("./snapshots/page.html"),
        SnapshotSource::File(_)
    ));
    assert!(matches!(
        SnapshotSource::parse("/var/lib/scribe/page.html"),
        SnapshotSource::File(_)
    ));
}

#[test(tokio::test)]
async fn file_sources_reread_on_every_cycle() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<html>one</html>").unwrap();

    let source = SnapshotSource::parse(&file.path().display().to_string());
    let client = reqwest::Client::new();

    assert_eq!(source.snapshot(&client).await.unwrap(), "<html>one</html>");

    write!(file, "<p>two</p>").unwrap();
    assert_eq!(
        source.snapshot(&client).await.unwrap(),
        "<html>one</html><p>two</p>"
    );
}

#[test(tokio::test)]
async fn missing_file_is_an_error() {
    let source = SnapshotSource::parse("/definitely/not/here.html");

    assert!(source.snapshot(&reqwest::Client::new()).await.is_err());
}
