//! Incremental parsing and classification of streamed museum-guide
//! assistant replies.
//!
//! The backend streams an assistant turn as ordered text fragments. This
//! crate accumulates them, strips Markdown decoration, classifies the turn,
//! parses the text into a heading/sections tree, and derives the booking
//! call-to-action. Transport, rendering, and persistence are external
//! collaborators; nothing here performs I/O.
//!
//! ```
//! use docent_reply::{MessageCategory, TurnSession};
//!
//! let mut turn = TurnSession::with_defaults().preceding_user("How much are tickets?");
//! turn.push("Ticket Prices\n").unwrap();
//! turn.push("Adults: $20\nChildren (5-12): $10").unwrap();
//!
//! let snapshot = turn.finish();
//! assert_eq!(snapshot.category, MessageCategory::Ticket);
//! assert_eq!(snapshot.tree.heading, "Ticket Prices");
//! assert!(snapshot.booking.offer);
//! ```

// Core modules
pub mod ast;
pub mod classify;
pub mod clean;
pub mod error;
pub mod fields;
pub mod parser;
pub mod policy;
pub mod stream;

// Re-export key types for the public API
pub use ast::{Field, Item, ReplyTree, Section};
pub use classify::{classify as classify_turn, MessageCategory};
pub use clean::clean;
pub use error::{ReplyError, Result};
pub use fields::extract_field;
pub use parser::{parse, parse_with_config, Parser, ParserConfig};
pub use policy::{booking_intent, turn_title, BookingIntent, BookingLabel};
pub use stream::{ReplySnapshot, SessionConfig, TurnSession};

/// One-call entry point: runs the whole pipeline over a complete reply.
///
/// Equivalent to pushing the full text into a [`TurnSession`] and taking the
/// final snapshot; useful when the reply arrives in one piece.
pub fn parse_reply(
    text: &str,
    hint: Option<MessageCategory>,
    preceding_user: Option<&str>,
) -> ReplySnapshot {
    let cleaned = clean(text);
    let category = classify::classify(&cleaned, hint, preceding_user);
    let tree = parser::parse(&cleaned);
    let booking = policy::booking_intent(category, &cleaned, preceding_user);
    ReplySnapshot {
        tree,
        category,
        booking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reply_runs_the_full_pipeline() {
        let snapshot = parse_reply(
            "## Upcoming Events\n* The Future of Space Exploration - Join us for the opening.",
            None,
            None,
        );
        assert_eq!(snapshot.category, MessageCategory::Event);
        assert_eq!(snapshot.tree.heading, "Upcoming Events");
        assert_eq!(
            snapshot.tree.sections[0].items[0].title(),
            Some("The Future of Space Exploration")
        );
        assert!(snapshot.booking.offer);
    }

    #[test]
    fn parse_reply_matches_a_session_fed_the_same_text() {
        let text = "Guided Tours\nEnglish: 11 AM, 1 PM, and 3 PM";
        let mut session = TurnSession::with_defaults();
        session.push(text).unwrap();
        assert_eq!(parse_reply(text, None, None), session.finish());
    }

    #[test]
    fn explicit_hint_overrides_inference_end_to_end() {
        let snapshot = parse_reply(
            "Ticket prices start at $20.",
            Some(MessageCategory::Benefits),
            None,
        );
        assert_eq!(snapshot.category, MessageCategory::Benefits);
        // The price probe still drives the booking offer.
        assert!(snapshot.booking.offer);
    }
}
