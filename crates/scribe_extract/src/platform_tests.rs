use pretty_assertions::assert_eq;
use url::Url;

use super::*;

fn platform_of(url: &str) -> Option<Platform> {
    Platform::from_url(&Url::parse(url).unwrap())
}

#[test]
fn lookup_covers_all_nine_hosts() {
    let cases = [
        ("https://claude.ai/chat/abc123", Platform::Claude),
        ("https://chatgpt.com/c/xyz", Platform::ChatGpt),
        ("https://gemini.google.com/app/f00", Platform::Gemini),
        ("https://grok.com/chat/1", Platform::Grok),
        ("https://chat.deepseek.com/a/2", Platform::DeepSeek),
        ("https://manus.im/app/3", Platform::Manus),
        ("https://apps.abacus.ai/chatllm/4", Platform::ChatLlm),
        ("https://www.perplexity.ai/search/5", Platform::Perplexity),
        ("https://poe.com/chat/6", Platform::Poe),
    ];

    for (url, expected) in cases {
        assert_eq!(platform_of(url), Some(expected), "url: {url}");
    }
}

#[test]
fn unknown_hosts_map_to_none() {
    assert_eq!(platform_of("https://example.com/chat"), None);
    assert_eq!(platform_of("https://docs.rs/scraper"), None);
}

#[test]
fn identifier_round_trips() {
    for (_, platform) in HOSTS {
        assert_eq!(platform.as_str().parse::<Platform>().unwrap(), *platform);
    }

    assert!("slack".parse::<Platform>().is_err());
}
