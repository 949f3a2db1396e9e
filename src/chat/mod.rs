//! Conversation/messaging state: identifiers, data types, the owned store,
//! and the screen-level view-model that the rendering layer drives.

/// Screen and seed configuration.
pub mod config;
/// Error taxonomy for chat operations.
pub mod errors;
/// Strongly-typed conversation and message identifiers.
pub mod ids;
/// Chat screen view-model (search, draft, selection handlers).
pub mod screen;
/// Seed data for the demo deployment.
pub mod seed;
/// The in-memory conversation store.
pub mod store;
/// Conversation and message data types.
pub mod types;
