//! Identifier types for conversations and messages.
//!
//! Conversation ids arrive from the outside (seed data, the view layer) as
//! opaque strings, so [`ConversationId`] is a validated string newtype.
//! Message ids are generated locally on send, so [`MessageId`] wraps a random
//! UUID.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors returned when parsing/validating a [`ConversationId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// Empty (or whitespace-only) identifier.
    #[error("conversation id must not be empty")]
    Empty,
    /// Exceeds the maximum accepted length.
    #[error("conversation id too long: got {got}, max {max}")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length received.
        got: usize,
    },
}

/// Identifier for a conversation thread (private or group).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    /// Hard ceiling to prevent pathological payloads.
    pub const MAX_LEN: usize = 64;

    /// Build a validated `ConversationId`.
    ///
    /// Rules: non-empty after trimming, max length limited.
    ///
    /// # Errors
    /// Returns `IdError` if the input is empty or too long.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, IdError> {
        let s = raw.as_ref().trim();

        if s.is_empty() {
            return Err(IdError::Empty);
        }
        if s.len() > Self::MAX_LEN {
            return Err(IdError::TooLong {
                max: Self::MAX_LEN,
                got: s.len(),
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Borrow as `&str`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into `String`.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ConversationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<ConversationId> for String {
    fn from(value: ConversationId) -> Self {
        value.into_string()
    }
}

impl TryFrom<String> for ConversationId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Identifier for a single message, unique within its conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct MessageId(pub Uuid);

impl Default for MessageId {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl MessageId {
    /// Generate a new random identifier.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[inline]
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Borrow the underlying UUID.
    #[inline]
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = uuid::Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_id_trims_input() {
        let id = ConversationId::new("  cardio-1  ");
        assert_eq!(id.as_ref().map(ConversationId::as_str), Ok("cardio-1"));
    }

    #[test]
    fn test_conversation_id_rejects_empty() {
        assert_eq!(ConversationId::new(""), Err(IdError::Empty));
        assert_eq!(ConversationId::new("   "), Err(IdError::Empty));
    }

    #[test]
    fn test_conversation_id_rejects_too_long() {
        let raw = "x".repeat(ConversationId::MAX_LEN + 1);
        assert!(matches!(
            ConversationId::new(raw),
            Err(IdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_message_ids_are_unique() {
        assert_ne!(MessageId::new(), MessageId::new());
    }
}
