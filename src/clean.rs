//! Markdown-artifact stripping.
//!
//! Backend replies arrive with loose Markdown decoration (`##`, `**`, bullet
//! markers, `===` rules) that the structural parser must never see. The
//! stripper removes exactly that decoration while preserving semantic line
//! breaks and legitimate mid-word `*`/`-` characters.

/// Removes Markdown decoration from `text` and trims the overall result.
///
/// Idempotent: `clean(clean(x)) == clean(x)` for all inputs. Each line is
/// scrubbed to a fixed point, since removing one kind of marker can expose
/// another (`*===*` leaves a `**` pair behind).
pub fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&clean_line(line));
    }
    out.trim().to_string()
}

fn clean_line(line: &str) -> String {
    let mut current = line.to_string();
    loop {
        let next = scrub_pass(&current);
        if next == current {
            return current;
        }
        // Every pass only removes characters, so this terminates.
        current = next;
    }
}

/// One scrub pass over a line: heading markers, bold pairs, separator runs,
/// then leading bullet markers.
fn scrub_pass(line: &str) -> String {
    let without_hashes: String = line.chars().filter(|c| *c != '#').collect();
    let without_bold = without_hashes.replace("**", "");
    let without_rules = strip_separator_runs(&without_bold);
    strip_leading_bullets(&without_rules)
}

/// Removes runs of three or more `=` characters; shorter runs are content.
fn strip_separator_runs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '=' {
            out.push(c);
            continue;
        }
        let mut run = 1;
        while chars.peek() == Some(&'=') {
            chars.next();
            run += 1;
        }
        if run < 3 {
            for _ in 0..run {
                out.push('=');
            }
        }
    }
    out
}

/// Strips bullet markers (`* `, `- `, `• `) at the start of a line,
/// tolerating indentation in front of the marker. Markers elsewhere in the
/// line are content and stay put.
fn strip_leading_bullets(line: &str) -> String {
    const MARKERS: [&str; 3] = ["* ", "- ", "• "];

    let indent_len = line.len() - line.trim_start().len();
    let (indent, mut rest) = line.split_at(indent_len);
    loop {
        match MARKERS.iter().find_map(|m| rest.strip_prefix(m)) {
            Some(stripped) => rest = stripped,
            None => break,
        }
    }
    format!("{indent}{rest}")
}
