//! Chat screen view-model.
//!
//! Holds the component-local UI state around the store: the sidebar search
//! term, the message draft, and the selection. The rendering layer calls the
//! handlers here on each event and re-renders from the returned data.
//!
//! Handlers come in two flavors. The draft/search/selection methods mirror
//! the view's own semantics (bad input is simply ignored); the `select` and
//! `send_to` entry points return typed [`ChatError`]s for surfaces that want
//! to report the failure instead.

use chrono::Utc;
use tracing::{debug, info};

use super::config::ChatConfig;
use super::errors::{ChatError, ChatResult};
use super::ids::ConversationId;
use super::store::ConversationStore;
use super::types::{Conversation, Message};

/// View-model for the conversation/messaging screen.
#[derive(Debug)]
pub struct ChatScreen {
    store: ConversationStore,
    config: ChatConfig,
    search_term: String,
    draft: String,
}

impl ChatScreen {
    /// Create a screen over a (typically seeded) store.
    ///
    /// When the config asks for it, the first conversation is selected
    /// immediately, which also marks it as read.
    #[must_use]
    pub fn new(store: ConversationStore, config: ChatConfig) -> Self {
        let mut screen = Self {
            store,
            config,
            search_term: String::new(),
            draft: String::new(),
        };
        if screen.config.auto_select_first {
            let first = screen.store.list_conversations("").first().map(|c| c.id.clone());
            if let Some(id) = first {
                screen.store.select_conversation(&id);
            }
        }
        screen
    }

    /// Borrow the underlying store.
    #[must_use]
    pub const fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// The current sidebar search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Update the sidebar search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Conversations matching the current search term, in seed order.
    #[must_use]
    pub fn visible_conversations(&self) -> Vec<&Conversation> {
        self.store.list_conversations(&self.search_term)
    }

    /// The current message draft.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Update the message draft.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// The currently selected conversation, if any.
    #[must_use]
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.store.selected_conversation()
    }

    /// The message log of the selected conversation, oldest first.
    #[must_use]
    pub fn active_messages(&self) -> &[Message] {
        self.store
            .selected()
            .cloned()
            .map_or(&[], |id| self.store.messages(&id))
    }

    /// Switch to a different conversation.
    ///
    /// # Errors
    /// Returns `ChatError` if the raw id fails validation or does not
    /// reference a known conversation.
    pub fn select(&mut self, raw_id: &str) -> ChatResult<()> {
        let id = ConversationId::new(raw_id)?;
        if !self.store.select_conversation(&id) {
            return Err(ChatError::UnknownConversation(id));
        }
        debug!(id = %raw_id, "switched conversation");
        Ok(())
    }

    /// Submit the current draft to the selected conversation.
    ///
    /// On success the draft is cleared and the created message returned. On
    /// failure the draft is kept so the user can edit it.
    ///
    /// # Errors
    /// Returns `ChatError` if the draft is blank or nothing is selected.
    pub fn submit_draft(&mut self) -> ChatResult<Message> {
        let Some(id) = self.store.selected().cloned() else {
            return Err(ChatError::NothingSelected);
        };
        let draft = self.draft.clone();
        let message = self.send_into(&id, &draft)?;
        self.draft.clear();
        Ok(message)
    }

    /// Send a message into an arbitrary conversation, bypassing the draft.
    ///
    /// # Errors
    /// Returns `ChatError` if the raw id fails validation, the conversation
    /// is unknown, or the body is blank.
    pub fn send_to(&mut self, raw_id: &str, body: &str) -> ChatResult<Message> {
        let id = ConversationId::new(raw_id)?;
        self.send_into(&id, body)
    }

    fn send_into(&mut self, id: &ConversationId, body: &str) -> ChatResult<Message> {
        if body.trim().is_empty() {
            return Err(ChatError::EmptyBody);
        }
        if self.store.conversation(id).is_none() {
            return Err(ChatError::UnknownConversation(id.clone()));
        }
        let now_ms = Utc::now().timestamp_millis();
        let sender = self.config.self_sender.clone();
        let message = self
            .store
            .send_message(id, &sender, body, now_ms)
            .cloned()
            .ok_or(ChatError::EmptyBody)?;
        info!(id = %id, "message sent");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::seed;

    fn seeded_screen() -> ChatScreen {
        ChatScreen::new(seed::demo_store(), ChatConfig::default())
    }

    #[test]
    fn test_opens_on_first_conversation_marked_read() {
        let screen = seeded_screen();
        let selected = screen.selected_conversation();
        assert_eq!(selected.map(|c| c.name.as_str()), Some("Dr. Ali Hassan"));
        assert_eq!(selected.map(|c| c.unread_count), Some(0));
        assert!(!screen.active_messages().is_empty());
    }

    #[test]
    fn test_auto_select_can_be_disabled() {
        let config = ChatConfig::new().with_auto_select_first(false);
        let screen = ChatScreen::new(seed::demo_store(), config);
        assert!(screen.selected_conversation().is_none());
        assert!(screen.active_messages().is_empty());
    }

    #[test]
    fn test_search_narrows_visible_conversations() {
        let mut screen = seeded_screen();
        screen.set_search_term("CARDIO");
        let visible = screen.visible_conversations();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Cardiology Team");

        screen.set_search_term("");
        assert_eq!(screen.visible_conversations().len(), 5);
    }

    #[test]
    fn test_submit_draft_appends_and_clears() {
        let mut screen = seeded_screen();
        let before = screen.active_messages().len();
        screen.set_draft("Following up on the X-Ray images.");

        let sent = screen.submit_draft();

        assert_eq!(
            sent.as_ref().map(|m| m.body.as_str()),
            Ok("Following up on the X-Ray images.")
        );
        assert_eq!(sent.as_ref().map(|m| m.sender.as_str()), Ok("You"));
        assert_eq!(screen.draft(), "");
        assert_eq!(screen.active_messages().len(), before + 1);
    }

    #[test]
    fn test_blank_draft_is_kept() {
        let mut screen = seeded_screen();
        let before = screen.active_messages().len();
        screen.set_draft("   ");

        assert_eq!(screen.submit_draft(), Err(ChatError::EmptyBody));
        assert_eq!(screen.draft(), "   ");
        assert_eq!(screen.active_messages().len(), before);
    }

    #[test]
    fn test_submit_without_selection_fails() {
        let config = ChatConfig::new().with_auto_select_first(false);
        let mut screen = ChatScreen::new(seed::demo_store(), config);
        screen.set_draft("hello");
        assert_eq!(screen.submit_draft(), Err(ChatError::NothingSelected));
    }

    #[test]
    fn test_select_reports_unknown_conversation() {
        let mut screen = seeded_screen();
        let result = screen.select("nonexistent");
        assert!(matches!(result, Err(ChatError::UnknownConversation(_))));
        // Prior selection is untouched.
        assert_eq!(
            screen.selected_conversation().map(|c| c.name.as_str()),
            Some("Dr. Ali Hassan")
        );
    }

    #[test]
    fn test_select_rejects_invalid_id() {
        let mut screen = seeded_screen();
        assert!(matches!(screen.select("  "), Err(ChatError::InvalidId(_))));
    }

    #[test]
    fn test_send_to_unselected_conversation() {
        let mut screen = seeded_screen();
        let sent = screen.send_to("3", "Patient in room 302 is stable now.");
        assert!(sent.is_ok());
        assert_eq!(screen.send_to("3", ""), Err(ChatError::EmptyBody));
        assert!(matches!(
            screen.send_to("99", "hi"),
            Err(ChatError::UnknownConversation(_))
        ));
    }

    #[test]
    fn test_self_sender_label_is_configurable() {
        let config = ChatConfig::new().with_self_sender("Dr. You");
        let mut screen = ChatScreen::new(seed::demo_store(), config);
        screen.set_draft("hi");
        let sent = screen.submit_draft();
        assert_eq!(sent.map(|m| m.sender), Ok("Dr. You".to_owned()));
    }
}
