//! Configuration for the chat screen.

use serde::{Deserialize, Serialize};

/// Configuration for the chat screen view-model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Display label used for messages authored by the local user.
    pub self_sender: String,
    /// Whether to select the first conversation when the screen opens.
    pub auto_select_first: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            self_sender: "You".to_owned(),
            auto_select_first: true,
        }
    }
}

impl ChatConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the local user's sender label.
    #[must_use]
    pub fn with_self_sender(mut self, label: impl Into<String>) -> Self {
        self.self_sender = label.into();
        self
    }

    /// Set whether the first conversation is selected on open.
    #[must_use]
    pub const fn with_auto_select_first(mut self, enabled: bool) -> Self {
        self.auto_select_first = enabled;
        self
    }
}
