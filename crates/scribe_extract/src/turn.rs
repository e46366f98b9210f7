//! One normalized utterance in a conversation.

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Normalize an explicit author attribute into a role.
    ///
    /// Anything other than a recognized "user" token is the assistant; the
    /// host pages use a grab-bag of labels (`assistant`, `model`, `tool`) for
    /// the non-user side and we do not distinguish them.
    #[must_use]
    pub fn from_author_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("user") {
            Self::User
        } else {
            Self::Assistant
        }
    }
}

/// One speech turn extracted from a snapshot.
///
/// Turns are built fresh on every extraction pass and never mutated after
/// construction; nothing about a turn survives the pass except, indirectly,
/// the exchange fingerprint derived downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: Role,
    /// Normalized, non-empty body text.
    pub content: String,
    /// Vertical position at extraction time, recorded only by strategies
    /// whose source elements are not in reading order.
    pub sort_key: Option<f64>,
}

impl Turn {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            sort_key: None,
        }
    }

    /// A turn tagged with its vertical position, destined for the ordering
    /// and deduplication pass.
    #[must_use]
    pub fn positioned(role: Role, content: impl Into<String>, sort_key: f64) -> Self {
        Self {
            role,
            content: content.into(),
            sort_key: Some(sort_key),
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
