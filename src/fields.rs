//! Key/value recognition inside detail lines.
//!
//! A presentation hint only: the rendering layer bolds recognized keys like
//! `Date: March 15th`. Extraction failing just means the line renders as
//! plain text; a detail line is never skipped or dropped.

use nom::bytes::complete::{tag, take_until};
use nom::sequence::terminated;
use nom::IResult;

use crate::ast::Field;

/// Keys worth highlighting, matched case-sensitively against the text before
/// the first delimiter.
const FIELD_KEYS: [&str; 3] = ["Date", "Time", "Location"];

/// Recognizes a `key/value` pair in a detail line, splitting at the first
/// `" - "` or `": "` delimiter (whichever occurs earlier).
pub fn extract_field(detail: &str) -> Option<Field> {
    let dash = split_at(detail, " - ");
    let colon = split_at(detail, ": ");
    let (key, value) = match (dash, colon) {
        (Some(d), Some(c)) => {
            if d.0.len() <= c.0.len() {
                d
            } else {
                c
            }
        }
        (Some(d), None) => d,
        (None, Some(c)) => c,
        (None, None) => return None,
    };

    if !FIELD_KEYS.iter().any(|k| key.contains(k)) {
        return None;
    }
    Some(Field {
        key: key.trim().to_string(),
        value: value.trim().to_string(),
    })
}

fn split_at<'a>(input: &'a str, delim: &'static str) -> Option<(&'a str, &'a str)> {
    let result: IResult<&str, &str> = terminated(take_until(delim), tag(delim))(input);
    result.ok().map(|(rest, head)| (head, rest))
}
