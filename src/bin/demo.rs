//! Scripted walkthrough of the chat screen state model.
//!
//! Run with: `cargo run --bin medzone-chat-demo`
//!
//! Seeds the store, exercises search/select/send the way the view layer
//! would, and prints the resulting conversation list as the JSON the
//! frontend consumes. Set `RUST_LOG=debug` to watch the store decisions.

use anyhow::Result;

use medzone_chat::{ChatConfig, ChatScreen};
use medzone_chat::chat::seed;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("MedZone chat demo v{}", env!("CARGO_PKG_VERSION"));

    let mut screen = ChatScreen::new(seed::demo_store(), ChatConfig::default());

    screen.set_search_term("cardio");
    tracing::info!(
        matches = screen.visible_conversations().len(),
        "searched sidebar for \"cardio\""
    );
    screen.set_search_term("");

    screen.select("2")?;
    screen.set_draft("Can we move the meeting to 3 PM?");
    let sent = screen.submit_draft()?;
    tracing::info!(id = %sent.id, "sent into Cardiology Team");

    // Unknown ids resolve as a reported no-op, nothing fatal.
    if let Err(err) = screen.select("nonexistent") {
        tracing::warn!("expected rejection: {err}");
    }

    let sidebar = serde_json::to_string_pretty(&screen.visible_conversations())?;
    println!("{sidebar}");

    let log = serde_json::to_string_pretty(&screen.active_messages())?;
    println!("{log}");

    Ok(())
}
