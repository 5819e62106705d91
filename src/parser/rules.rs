//! Line-shape rules for the structural parser.
//!
//! Each predicate is a named, standalone function so the heuristics can be
//! tested and swapped in isolation; the scan loop in `core` only decides
//! rule order. Known limitation: the Title-Case section heuristic can
//! misfire on ordinary capitalized sentences, which the source material does
//! not disambiguate further.

use nom::bytes::complete::{tag, take_until};
use nom::sequence::terminated;
use nom::IResult;
use unicode_segmentation::UnicodeSegmentation;

use crate::policy::QUESTION_LEADS;

/// Title-Case heuristic for section titles: at least one word, every word
/// starting with an uppercase letter, nothing but letters and spaces, and no
/// colon anywhere.
pub fn is_section_title(line: &str) -> bool {
    if line.contains(':') {
        return false;
    }
    if !line.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return false;
    }
    let mut words = line.unicode_words().peekable();
    if words.peek().is_none() {
        return false;
    }
    words.all(|word| {
        let mut chars = word.chars();
        matches!(chars.next(), Some(first) if first.is_uppercase())
            && chars.all(|c| c.is_lowercase())
    })
}

/// Splits a line at the first occurrence of `delim`, returning the text on
/// either side. `None` when the delimiter never occurs.
pub(crate) fn split_item<'a>(line: &'a str, delim: &'static str) -> Option<(&'a str, &'a str)> {
    let result: IResult<&str, &str> = terminated(take_until(delim), tag(delim))(line);
    result.ok().map(|(rest, head)| (head, rest))
}

/// Splits an item description into detail lines at sentence boundaries,
/// dropping empty fragments.
pub(crate) fn split_details(description: &str) -> Vec<String> {
    description
        .split(". ")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// True when the line opens with one of the descriptive lead words that mark
/// an exhibit or artifact line (e.g. "The Art of Ancient Civilizations: …").
pub(crate) fn has_descriptive_lead(line: &str, leads: &[String]) -> bool {
    match line.split_whitespace().next() {
        Some(first) => leads.iter().any(|lead| lead == first),
        None => false,
    }
}

/// Detects an echoed prompt prefix such as
/// "Upcoming Events: What special events are coming up?": a short Title-Case
/// label before the colon and a restated question after it. Deliberately
/// narrow; matches one observed input shape and nothing broader.
pub(crate) fn looks_like_prompt_echo(label: &str, rest: &str) -> bool {
    let label = label.trim();
    let rest = rest.trim();
    if rest.is_empty() {
        return false;
    }
    let word_count = label.unicode_words().count();
    if word_count == 0 || word_count > 4 || !is_section_title(label) {
        return false;
    }
    rest.ends_with('?') || starts_with_question_lead(rest)
}

/// Case-insensitive check for a leading question word.
pub(crate) fn starts_with_question_lead(text: &str) -> bool {
    QUESTION_LEADS.iter().any(|lead| {
        text.get(..lead.len())
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case(lead))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_titles_are_title_case_without_colons() {
        assert!(is_section_title("Guided Tours"));
        assert!(is_section_title("Workshops"));
        assert!(is_section_title("Specific Artifacts"));

        assert!(!is_section_title("English: 11 AM"));
        assert!(!is_section_title("The Future of Space Exploration - Join us"));
        assert!(!is_section_title("Upcoming events"));
        assert!(!is_section_title(""));
        assert!(!is_section_title("Prices from $20"));
    }

    #[test]
    fn split_item_takes_the_first_delimiter() {
        assert_eq!(
            split_item("Lecture Series - Join us - free entry", " - "),
            Some(("Lecture Series", "Join us - free entry"))
        );
        assert_eq!(
            split_item("English: 11 AM, 1 PM, and 3 PM", ": "),
            Some(("English", "11 AM, 1 PM, and 3 PM"))
        );
        assert_eq!(split_item("no delimiter here", " - "), None);
    }

    #[test]
    fn details_split_on_sentence_boundaries() {
        assert_eq!(
            split_details("Join us for the opening. Tickets on sale now."),
            vec!["Join us for the opening", "Tickets on sale now."]
        );
        assert!(split_details("").is_empty());
        assert_eq!(split_details(".  . "), Vec::<String>::new());
    }

    #[test]
    fn descriptive_leads_match_the_first_word_only() {
        let leads: Vec<String> = ["The", "Ancient", "Greek", "Rare", "Interactive"]
            .into_iter()
            .map(String::from)
            .collect();
        assert!(has_descriptive_lead("The Art of Ancient Civilizations: Explore", &leads));
        assert!(has_descriptive_lead("Rare Coins: A collection", &leads));
        assert!(!has_descriptive_lead("Theater Schedule: daily", &leads));
        assert!(!has_descriptive_lead("Adults: $20", &leads));
    }

    #[test]
    fn prompt_echo_needs_a_short_label_and_a_question() {
        assert!(looks_like_prompt_echo(
            "Upcoming Events",
            " What special events are coming up?"
        ));
        assert!(looks_like_prompt_echo("Guided Tours", " What guided tours are available?"));
        // Not a question after the colon.
        assert!(!looks_like_prompt_echo("Ticket Prices", " $20 for adults"));
        // Label is not a short Title-Case run.
        assert!(!looks_like_prompt_echo("Note to visitors arriving late", " What now?"));
        assert!(!looks_like_prompt_echo("English", ""));
    }
}
