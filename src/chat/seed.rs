//! Seed data for the demo deployment.
//!
//! The conversation list and message histories mirror the MedZone demo
//! content. Timestamps are fixed so the seed is deterministic.

use chrono::{TimeZone, Utc};

use super::ids::ConversationId;
use super::store::ConversationStore;
use super::types::{Conversation, ConversationKind, Message};

/// Timestamp (ms) for a fixed day in May 2024 at `hour:minute` UTC.
fn ts(day: u32, hour: u32, minute: u32) -> i64 {
    Utc.with_ymd_and_hms(2024, 5, day, hour, minute, 0)
        .single()
        .map_or(0, |dt| dt.timestamp_millis())
}

/// Seed ids are static literals and always pass validation.
fn id(raw: &str) -> ConversationId {
    ConversationId::new(raw).unwrap_or_else(|_| unreachable!())
}

/// Build the seeded store the chat screen opens with.
#[must_use]
pub fn demo_store() -> ConversationStore {
    let mut store = ConversationStore::new();

    store.insert_conversation(
        Conversation::new(id("1"), "Dr. Ali Hassan", ConversationKind::Private)
            .with_avatar("/avatars/ali.jpg")
            .with_preview("Yes, I will send the report by EOD.", ts(8, 10, 30))
            .with_unread(2),
        vec![
            Message::received("Dr. Ali Hassan", "Hello! How are you?", ts(8, 10, 0)),
            Message::sent(
                "You",
                "I am good, thank you! Just wanted to follow up on the X-Ray images for patient ID 789.",
                ts(8, 10, 5),
            ),
            Message::received(
                "Dr. Ali Hassan",
                "Ah yes, I have them. They look clear, no major concerns.",
                ts(8, 10, 28),
            ),
            Message::received(
                "Dr. Ali Hassan",
                "Yes, I will send the report by EOD.",
                ts(8, 10, 30),
            ),
        ],
    );

    store.insert_conversation(
        Conversation::new(id("2"), "Cardiology Team", ConversationKind::Group)
            .with_avatar("/avatars/group-cardio.png")
            .with_preview("Dr. Sara: Meeting at 2 PM today.", ts(8, 9, 15)),
        vec![
            Message::received("Dr. Fatima", "Good morning team!", ts(8, 9, 0)),
            Message::sent("You", "Morning Dr. Fatima!", ts(8, 9, 1)),
            Message::received("Dr. Sara", "Meeting at 2 PM today.", ts(8, 9, 15)),
        ],
    );

    store.insert_conversation(
        Conversation::new(id("3"), "Layla Ahmed (Nurse)", ConversationKind::Private)
            .with_avatar("/avatars/layla-n.jpg")
            .with_preview("Patient in room 302 needs attention.", ts(7, 18, 45)),
        vec![Message::received(
            "Layla Ahmed (Nurse)",
            "Patient in room 302 needs attention.",
            ts(7, 18, 45),
        )],
    );

    store.insert_conversation(
        Conversation::new(id("4"), "Pharma Rep John", ConversationKind::Private)
            .with_avatar("/avatars/john-rep.jpg")
            .with_preview("New drug samples available.", ts(6, 14, 2))
            .with_unread(5),
        vec![Message::received(
            "Pharma Rep John",
            "New drug samples available.",
            ts(6, 14, 2),
        )],
    );

    store.insert_conversation(
        Conversation::new(id("5"), "Pediatrics Study Group", ConversationKind::Group)
            .with_avatar("/avatars/group-peds.png")
            .with_preview("Omar: Shared new guidelines.", ts(5, 11, 20))
            .with_unread(1),
        vec![Message::received(
            "Omar",
            "Shared new guidelines.",
            ts(5, 11, 20),
        )],
    );

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_five_conversations() {
        let store = demo_store();
        assert_eq!(store.len(), 5);
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_seed_unread_counts() {
        let store = demo_store();
        let unread: Vec<u32> = store
            .list_conversations("")
            .iter()
            .map(|c| c.unread_count)
            .collect();
        assert_eq!(unread, vec![2, 0, 0, 5, 1]);
    }

    #[test]
    fn test_cardiology_team_is_findable() {
        let store = demo_store();
        let hits = store.list_conversations("cardio");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Cardiology Team");
        assert!(hits[0].kind.is_group());
    }

    #[test]
    fn test_seeded_histories_are_ordered() {
        let store = demo_store();
        for conversation in store.list_conversations("") {
            let log = store.messages(&conversation.id);
            assert!(log.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        }
    }

    #[test]
    fn test_first_history_mixes_both_parties() {
        let store = demo_store();
        let log = store.messages(&ConversationId::new("1").unwrap_or_else(|_| unreachable!()));
        assert_eq!(log.len(), 4);
        assert!(log.iter().any(|m| m.is_self));
        assert!(log.iter().any(|m| !m.is_self));
    }
}
