//! Client-side state model for the MedZone conversation/messaging view.
//!
//! Everything here is in-memory and synchronous: the store is owned by the
//! single UI thread, operations run to completion on the calling event turn,
//! and nothing suspends or blocks. There is no server, persistence layer, or
//! real-time transport behind this crate.

// Strict lint policy: no unsafe, no undocumented public items, no panicking
// shortcuts in library code.
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(nonstandard_style)]
#![deny(unused_must_use)]
#![forbid(unsafe_op_in_unsafe_fn)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::print_stdout)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![allow(clippy::module_name_repetitions)]

/// Conversation and message state for the chat screen.
pub mod chat;

pub use chat::config::ChatConfig;
pub use chat::errors::{ChatError, ChatResult};
pub use chat::ids::{ConversationId, IdError, MessageId};
pub use chat::screen::ChatScreen;
pub use chat::store::ConversationStore;
pub use chat::types::{Conversation, ConversationKind, Message};
