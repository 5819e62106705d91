//! Render policy: the booking call-to-action and conversation naming.
//!
//! Both are derived on demand from the classification and the surrounding
//! turn text; nothing here is stored or has its own lifecycle.

use crate::classify::MessageCategory;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Question words that open a user message, checked case-insensitively.
/// Shared with the echoed-prompt detection in the parser.
pub(crate) const QUESTION_LEADS: [&str; 12] = [
    "What", "How", "Why", "When", "Where", "Is", "Are", "Can", "Could", "Do", "Does", "Who",
];

/// Keywords in the preceding user turn that justify offering a booking
/// call-to-action even when the reply itself is generic.
const BOOKING_KEYWORDS: [&str; 8] = [
    "ticket",
    "booking",
    "book",
    "event",
    "tour",
    "exhibition",
    "artifacts",
    "exhibit",
];

const PRICE_PROBES: [&str; 2] = ["ticket price", "how much are tickets"];
const TOUR_PROBES: [&str; 2] = ["guided tour", "tour guide"];

/// Wording of the booking call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BookingLabel {
    BookTickets,
    BookTour,
}

impl fmt::Display for BookingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BookingLabel::BookTickets => "Book Tickets",
            BookingLabel::BookTour => "Book Tour",
        })
    }
}

/// Whether to offer a booking call-to-action for a turn, and with which
/// wording. Recomputed per snapshot, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookingIntent {
    pub offer: bool,
    pub label: BookingLabel,
}

/// Decides the booking call-to-action from the turn category, the cleaned
/// reply text, and the preceding user turn.
pub fn booking_intent(
    category: MessageCategory,
    cleaned: &str,
    preceding_user: Option<&str>,
) -> BookingIntent {
    let reply = cleaned.to_lowercase();
    let user = preceding_user.map(str::to_lowercase);

    let offer = matches!(
        category,
        MessageCategory::Ticket
            | MessageCategory::Event
            | MessageCategory::Guide
            | MessageCategory::Exhibition
    ) || PRICE_PROBES.iter().any(|p| reply.contains(p))
        || user
            .as_deref()
            .map_or(false, |u| BOOKING_KEYWORDS.iter().any(|k| u.contains(k)));

    let tour = category == MessageCategory::Guide
        || user
            .as_deref()
            .map_or(false, |u| TOUR_PROBES.iter().any(|p| u.contains(p)));

    BookingIntent {
        offer,
        label: if tour {
            BookingLabel::BookTour
        } else {
            BookingLabel::BookTickets
        },
    }
}

/// Derives a conversation title from the first user message: a leading
/// question of 5 to 30 characters past the question word, with a `?`
/// appended when missing; otherwise a 25-character ellipsized truncation.
pub fn turn_title(user_text: &str) -> String {
    let text = user_text.trim();

    for lead in QUESTION_LEADS {
        let matches_lead = text
            .get(..lead.len())
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case(lead));
        if !matches_lead {
            continue;
        }
        let rest: Vec<char> = text[lead.len()..].chars().collect();
        if rest.len() < 5 {
            continue;
        }
        let mut title: String = text[..lead.len()].to_string();
        title.extend(rest.iter().take(30));
        if !title.ends_with('?') {
            title.push('?');
        }
        return title;
    }

    if text.chars().count() > 25 {
        let truncated: String = text.chars().take(25).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_alone_can_offer_booking() {
        for category in [
            MessageCategory::Ticket,
            MessageCategory::Event,
            MessageCategory::Guide,
            MessageCategory::Exhibition,
        ] {
            assert!(booking_intent(category, "", None).offer, "{category}");
        }
        assert!(!booking_intent(MessageCategory::Info, "", None).offer);
        assert!(!booking_intent(MessageCategory::Benefits, "", None).offer);
    }

    #[test]
    fn price_talk_in_the_reply_offers_booking() {
        let intent = booking_intent(
            MessageCategory::Info,
            "Our ticket prices start at $20.",
            None,
        );
        assert!(intent.offer);
        assert_eq!(intent.label, BookingLabel::BookTickets);
    }

    #[test]
    fn user_keywords_offer_booking_with_tour_wording() {
        let intent = booking_intent(
            MessageCategory::Info,
            "Certainly!",
            Some("How do I book a guided tour?"),
        );
        assert!(intent.offer);
        assert_eq!(intent.label, BookingLabel::BookTour);
        assert_eq!(intent.label.to_string(), "Book Tour");
    }

    #[test]
    fn guide_category_forces_tour_wording() {
        let intent = booking_intent(MessageCategory::Guide, "", None);
        assert_eq!(intent.label, BookingLabel::BookTour);
    }

    #[test]
    fn no_signals_means_no_offer() {
        let intent = booking_intent(
            MessageCategory::Info,
            "The museum opened in 1894.",
            Some("Tell me about the building"),
        );
        assert!(!intent.offer);
        assert_eq!(intent.label, BookingLabel::BookTickets);
    }

    #[test]
    fn question_messages_become_question_titles() {
        // 30 characters past the question word, then a `?`.
        assert_eq!(
            turn_title("What exhibitions are currently showing?"),
            "What exhibitions are currently sho?"
        );
        assert_eq!(turn_title("How much are tickets?"), "How much are tickets?");
        assert_eq!(
            turn_title("can I bring my dog"),
            "can I bring my dog?"
        );
    }

    #[test]
    fn long_statements_are_truncated_with_an_ellipsis() {
        assert_eq!(
            turn_title("I would like to know everything about the museum"),
            "I would like to know ever..."
        );
        assert_eq!(turn_title("Hi there"), "Hi there");
    }
}
