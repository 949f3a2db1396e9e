//! Conversation and message data types.
//!
//! These are the DTOs handed to the rendering layer, so everything derives
//! `Serialize`/`Deserialize`. Timestamps are milliseconds since the Unix
//! epoch, which keeps them cheap to sort and frontend-friendly.

use serde::{Deserialize, Serialize};

use super::ids::{ConversationId, MessageId};

/// Whether a conversation is a 1:1 thread or a group thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    /// A 1:1 thread with a single remote party.
    Private,
    /// A multi-party thread.
    Group,
}

impl ConversationKind {
    /// Whether this is a group thread.
    #[inline]
    #[must_use]
    pub const fn is_group(self) -> bool {
        matches!(self, Self::Group)
    }
}

/// A conversation thread as displayed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier.
    pub id: ConversationId,
    /// Display name (person or group).
    pub name: String,
    /// Private or group thread.
    pub kind: ConversationKind,
    /// Avatar asset reference.
    pub avatar: String,
    /// Preview of the latest message.
    pub preview: String,
    /// Last activity timestamp in milliseconds since Unix epoch.
    pub updated_at: i64,
    /// Number of messages not yet viewed by the local user.
    pub unread_count: u32,
}

impl Conversation {
    /// Create a conversation with empty preview and no unread messages.
    #[must_use]
    pub fn new(id: ConversationId, name: impl Into<String>, kind: ConversationKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            avatar: String::new(),
            preview: String::new(),
            updated_at: 0,
            unread_count: 0,
        }
    }

    /// Set the avatar asset reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Set the latest-message preview and its timestamp.
    #[must_use]
    pub fn with_preview(mut self, preview: impl Into<String>, updated_at: i64) -> Self {
        self.preview = preview.into();
        self.updated_at = updated_at;
        self
    }

    /// Set the unread counter.
    #[must_use]
    pub const fn with_unread(mut self, unread_count: u32) -> Self {
        self.unread_count = unread_count;
        self
    }
}

/// A single message inside a conversation's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier within the conversation.
    pub id: MessageId,
    /// Display label of the author.
    pub sender: String,
    /// Message body text.
    pub body: String,
    /// Send time in milliseconds since Unix epoch.
    pub timestamp: i64,
    /// Whether the local user authored this message.
    pub is_self: bool,
}

impl Message {
    /// Create a message authored by the local user.
    #[must_use]
    pub fn sent(sender: impl Into<String>, body: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: MessageId::new(),
            sender: sender.into(),
            body: body.into(),
            timestamp,
            is_self: true,
        }
    }

    /// Create a message authored by a remote party.
    #[must_use]
    pub fn received(sender: impl Into<String>, body: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: MessageId::new(),
            sender: sender.into(),
            body: body.into(),
            timestamp,
            is_self: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        let private = serde_json::to_string(&ConversationKind::Private).unwrap_or_default();
        let group = serde_json::to_string(&ConversationKind::Group).unwrap_or_default();
        assert_eq!(private, "\"private\"");
        assert_eq!(group, "\"group\"");
    }

    #[test]
    fn test_message_constructors_set_self_flag() {
        let sent = Message::sent("You", "hi", 1);
        let received = Message::received("Dr. Ali Hassan", "hello", 2);
        assert!(sent.is_self);
        assert!(!received.is_self);
        assert_ne!(sent.id, received.id);
    }

    #[test]
    fn test_conversation_builder() {
        let id = ConversationId::new("1").unwrap_or_else(|_| unreachable!());
        let conv = Conversation::new(id, "Cardiology Team", ConversationKind::Group)
            .with_avatar("/avatars/group-cardio.png")
            .with_preview("Meeting at 2 PM today.", 1_000)
            .with_unread(3);
        assert!(conv.kind.is_group());
        assert_eq!(conv.preview, "Meeting at 2 PM today.");
        assert_eq!(conv.updated_at, 1_000);
        assert_eq!(conv.unread_count, 3);
    }
}
