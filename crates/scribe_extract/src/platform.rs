//! Supported host platforms and the URL lookup table.

use std::{fmt, str::FromStr};

use url::Url;

use crate::error::{Error, Result};

/// A chat host this engine knows how to extract transcripts from.
///
/// Adding a platform means adding a variant here, a hostname entry to
/// [`HOSTS`], and a [`crate::Strategy`] registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Claude,
    ChatGpt,
    Gemini,
    Grok,
    DeepSeek,
    Manus,
    ChatLlm,
    Perplexity,
    Poe,
}

/// Hostname fragment → platform. Fragments are matched as substrings of the
/// page hostname, mirroring how the hosts serve their chat UIs from regional
/// and staging subdomains.
const HOSTS: &[(&str, Platform)] = &[
    ("claude.ai", Platform::Claude),
    ("chatgpt.com", Platform::ChatGpt),
    ("gemini.google.com", Platform::Gemini),
    ("grok.com", Platform::Grok),
    ("chat.deepseek.com", Platform::DeepSeek),
    ("manus.im", Platform::Manus),
    ("apps.abacus.ai", Platform::ChatLlm),
    ("perplexity.ai", Platform::Perplexity),
    ("poe.com", Platform::Poe),
];

impl Platform {
    /// Identify the platform serving `url`, or `None` for unsupported hosts.
    ///
    /// An unsupported host is not an error: the polling cycle simply does
    /// nothing on pages this engine does not understand.
    #[must_use]
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = url.host_str()?;

        HOSTS
            .iter()
            .find(|(fragment, _)| host.contains(fragment))
            .map(|(_, platform)| *platform)
    }

    /// Stable lowercase identifier, as delivered to the sink.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::ChatGpt => "chatgpt",
            Self::Gemini => "gemini",
            Self::Grok => "grok",
            Self::DeepSeek => "deepseek",
            Self::Manus => "manus",
            Self::ChatLlm => "chatllm",
            Self::Perplexity => "perplexity",
            Self::Poe => "poe",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HOSTS
            .iter()
            .map(|(_, platform)| *platform)
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| Error::UnknownPlatform(s.to_owned()))
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
