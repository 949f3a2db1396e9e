//! Error taxonomy for chat operations.
//!
//! The store itself resolves bad input by doing nothing (unknown ids, empty
//! bodies), so these errors only surface from the screen-level entry points
//! that want a typed failure to report.

use thiserror::Error;

use super::ids::{ConversationId, IdError};

/// Chat subsystem error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The supplied conversation id failed validation.
    #[error("invalid conversation id: {0}")]
    InvalidId(#[from] IdError),
    /// The operation referenced a conversation that does not exist.
    #[error("conversation not found: {0}")]
    UnknownConversation(ConversationId),
    /// The message body was empty or whitespace-only.
    #[error("message body is empty")]
    EmptyBody,
    /// No conversation is currently selected.
    #[error("no conversation selected")]
    NothingSelected,
}

/// Convenience result alias for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;
