//! Bounded-prefix equality token for the capture gate.

use scribe_extract::order::content_prefix;

use crate::ExchangePair;

/// Equality token identifying "the same visible exchange".
///
/// The concatenated 100-character prefixes of the user and assistant bodies.
/// Deliberately not cryptographic and collision-tolerant: it only has to keep
/// the same on-screen exchange from being delivered twice in a row, not
/// address content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[must_use]
    pub fn of(pair: &ExchangePair) -> Self {
        let mut token = content_prefix(&pair.user_content).to_owned();
        token.push_str(content_prefix(&pair.assistant_content));

        Self(token)
    }
}

#[cfg(test)]
#[path = "fingerprint_tests.rs"]
mod tests;
