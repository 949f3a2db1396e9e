//! The in-memory conversation store.
//!
//! One owned store instance holds everything the chat screen renders: the
//! conversation list (in seed order), the per-conversation message logs, and
//! the currently selected conversation. All operations are synchronous and
//! run to completion on the calling thread; bad input (unknown ids, empty
//! bodies) resolves as a no-op rather than a surfaced failure.

use std::collections::HashMap;

use tracing::debug;

use super::ids::{ConversationId, MessageId};
use super::types::{Conversation, Message};

/// In-memory store for conversations and their message logs.
///
/// Conversations are seeded once at construction time via
/// [`insert_conversation`](Self::insert_conversation); there is no deletion
/// path. Message logs are append-only and ordered by send time ascending.
#[derive(Debug, Default)]
pub struct ConversationStore {
    /// Conversations in seed order.
    conversations: Vec<Conversation>,
    /// Message log per conversation. Keys are created exclusively by
    /// `insert_conversation`, so every log belongs to a known conversation.
    messages: HashMap<ConversationId, Vec<Message>>,
    /// Currently selected conversation, if any.
    selected: Option<ConversationId>,
}

impl ConversationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a conversation with its seeded message history.
    ///
    /// The history is sorted by timestamp so the ascending-order invariant
    /// holds regardless of how the seed data was written. Re-inserting an
    /// existing id replaces its history but keeps the original list position.
    pub fn insert_conversation(&mut self, conversation: Conversation, mut history: Vec<Message>) {
        history.sort_by_key(|m| m.timestamp);
        self.messages.insert(conversation.id.clone(), history);
        if let Some(existing) = self.conversations.iter_mut().find(|c| c.id == conversation.id) {
            *existing = conversation;
        } else {
            self.conversations.push(conversation);
        }
    }

    /// Number of conversations in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Whether the store holds no conversations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// The currently selected conversation id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ConversationId> {
        self.selected.as_ref()
    }

    /// The currently selected conversation, if any.
    #[must_use]
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.selected
            .as_ref()
            .and_then(|id| self.conversations.iter().find(|c| &c.id == id))
    }

    /// Look up a conversation by id.
    #[must_use]
    pub fn conversation(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| &c.id == id)
    }

    /// Select a conversation and mark it as read.
    ///
    /// Returns `false` (leaving the prior selection and all unread counters
    /// untouched) if `id` does not reference a known conversation.
    pub fn select_conversation(&mut self, id: &ConversationId) -> bool {
        let Some(conversation) = self.conversations.iter_mut().find(|c| &c.id == id) else {
            debug!(id = %id, "select ignored: unknown conversation");
            return false;
        };
        conversation.unread_count = 0;
        self.selected = Some(id.clone());
        debug!(id = %id, "conversation selected");
        true
    }

    /// List conversations whose display name contains `filter`,
    /// case-insensitively. An empty filter returns every conversation. Seed
    /// order is preserved either way.
    #[must_use]
    pub fn list_conversations(&self, filter: &str) -> Vec<&Conversation> {
        if filter.is_empty() {
            return self.conversations.iter().collect();
        }
        let needle = filter.to_lowercase();
        self.conversations
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Append a message authored by the local user to a conversation's log.
    ///
    /// Returns the created message, or `None` (no-op) when the body is
    /// empty/whitespace-only or the conversation is unknown. The caller
    /// supplies the clock as `now_ms`.
    ///
    /// The parent conversation's preview and `updated_at` are left untouched.
    // TODO: refresh preview/updated_at here once the sidebar recency design
    // is settled (tracked as a known gap).
    pub fn send_message(
        &mut self,
        id: &ConversationId,
        sender: &str,
        body: &str,
        now_ms: i64,
    ) -> Option<&Message> {
        if body.trim().is_empty() {
            debug!(id = %id, "send ignored: empty body");
            return None;
        }
        let Some(log) = self.messages.get_mut(id) else {
            debug!(id = %id, "send ignored: unknown conversation");
            return None;
        };

        // Keep the log sorted even if the caller's clock steps backwards.
        let timestamp = log.last().map_or(now_ms, |last| now_ms.max(last.timestamp));
        log.push(Message::sent(sender, body, timestamp));
        debug!(id = %id, "message appended");
        log.last()
    }

    /// The ordered message log for a conversation, oldest first.
    ///
    /// Unknown ids yield an empty slice.
    #[must_use]
    pub fn messages(&self, id: &ConversationId) -> &[Message] {
        self.messages.get(id).map_or(&[], Vec::as_slice)
    }
}
