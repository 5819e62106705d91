//! Turn classification.
//!
//! Every assistant turn gets exactly one category, which drives the icon and
//! the booking call-to-action in the rendering layer. The backend may attach
//! an explicit hint; otherwise the category is inferred from the cleaned
//! reply text, falling back to the preceding user turn, falling back to
//! `Info`. Inference is a pure function with no hidden state.

use crate::error::ReplyError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of semantic categories for an assistant turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MessageCategory {
    Booking,
    Info,
    Event,
    Ticket,
    Guide,
    Benefits,
    Exhibition,
}

impl MessageCategory {
    /// Lowercase wire name, matching the hint strings sent by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCategory::Booking => "booking",
            MessageCategory::Info => "info",
            MessageCategory::Event => "event",
            MessageCategory::Ticket => "ticket",
            MessageCategory::Guide => "guide",
            MessageCategory::Benefits => "benefits",
            MessageCategory::Exhibition => "exhibition",
        }
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageCategory {
    type Err = ReplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booking" => Ok(MessageCategory::Booking),
            "info" => Ok(MessageCategory::Info),
            "event" => Ok(MessageCategory::Event),
            "ticket" => Ok(MessageCategory::Ticket),
            "guide" => Ok(MessageCategory::Guide),
            "benefits" => Ok(MessageCategory::Benefits),
            "exhibition" => Ok(MessageCategory::Exhibition),
            other => Err(ReplyError::unknown_category(other)),
        }
    }
}

/// Category-defining substrings, checked case-insensitively in this fixed
/// priority order. First match wins; ties are broken by table order.
const CATEGORY_PROBES: &[(&[&str], MessageCategory)] = &[
    (
        &["ticket price", "how much are tickets"],
        MessageCategory::Ticket,
    ),
    (
        &["upcoming event", "what events", "event details"],
        MessageCategory::Event,
    ),
    (&["guided tour", "tour guide"], MessageCategory::Guide),
];

/// Assigns a category to an assistant turn.
///
/// Pure and total: an explicit hint always wins, then the probe table runs
/// over the cleaned reply text, then over the preceding user turn, and
/// unmatched content is simply `Info` rather than an error.
pub fn classify(
    cleaned: &str,
    hint: Option<MessageCategory>,
    preceding_user: Option<&str>,
) -> MessageCategory {
    if let Some(category) = hint {
        return category;
    }
    if let Some(category) = probe(cleaned) {
        return category;
    }
    if let Some(category) = preceding_user.and_then(probe) {
        return category;
    }
    MessageCategory::Info
}

fn probe(text: &str) -> Option<MessageCategory> {
    let lowered = text.to_lowercase();
    CATEGORY_PROBES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
        .map(|(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_hint_always_wins() {
        let text = "Ticket prices start at $20 for a guided tour";
        assert_eq!(
            classify(text, Some(MessageCategory::Benefits), None),
            MessageCategory::Benefits
        );
    }

    #[test]
    fn probes_reply_text_case_insensitively() {
        assert_eq!(
            classify("Ticket Prices\nAdults: $20", None, None),
            MessageCategory::Ticket
        );
        assert_eq!(
            classify("Here are the UPCOMING EVENTS this month", None, None),
            MessageCategory::Event
        );
        assert_eq!(
            classify("Our tour guides speak four languages", None, None),
            MessageCategory::Guide
        );
    }

    #[test]
    fn table_order_breaks_ties() {
        // Both ticket and event probes hit; the ticket row comes first.
        let text = "Ticket prices for upcoming events";
        assert_eq!(classify(text, None, None), MessageCategory::Ticket);
    }

    #[test]
    fn falls_back_to_preceding_user_turn() {
        let reply = "Certainly, here is what I found.";
        assert_eq!(
            classify(reply, None, Some("What guided tours are available?")),
            MessageCategory::Guide
        );
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(classify("", None, None), MessageCategory::Info);
        assert_eq!(
            classify("The museum opened in 1894.", None, Some("Tell me history")),
            MessageCategory::Info
        );
    }

    #[test]
    fn wire_names_round_trip() {
        for category in [
            MessageCategory::Booking,
            MessageCategory::Info,
            MessageCategory::Event,
            MessageCategory::Ticket,
            MessageCategory::Guide,
            MessageCategory::Benefits,
            MessageCategory::Exhibition,
        ] {
            assert_eq!(category.as_str().parse::<MessageCategory>(), Ok(category));
        }
        assert!("tickets".parse::<MessageCategory>().is_err());
    }
}
