//! Scan loop turning cleaned reply text into a [`ReplyTree`].
//!
//! Lines are classified by an ordered set of rules with explicit
//! first-match-wins semantics: section-title, dash-item, colon-item, then
//! plain text. The loop maintains one current section and at most one open
//! item; everything is flushed in source order, so the tree always preserves
//! the order of first-defining lines.

use crate::ast::{Item, ReplyTree, Section};
use crate::parser::config::ParserConfig;
use crate::parser::rules;

/// Structural parser over one turn's cleaned text. Total: any input shape
/// yields a renderable tree, never an error.
pub struct Parser<'input> {
    input: &'input str,
    config: ParserConfig,
}

struct OpenItem {
    title: String,
    details: Vec<String>,
}

impl<'input> Parser<'input> {
    /// Creates a parser over `input` with the given configuration.
    pub fn new(input: &'input str, config: &ParserConfig) -> Self {
        Self {
            input,
            config: config.clone(),
        }
    }

    /// Creates a parser with the default configuration.
    pub fn with_defaults(input: &'input str) -> Self {
        Self {
            input,
            config: ParserConfig::default(),
        }
    }

    /// Parses the input into a heading plus ordered sections.
    pub fn parse(&self) -> ReplyTree {
        let mut lines: Vec<&str> = self
            .input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if self.config.strip_echoed_prompt {
            self.strip_prompt_echo(&mut lines);
        }

        let heading = match lines.first() {
            Some(first) => first.to_string(),
            None => return ReplyTree::empty(&self.config.default_heading),
        };

        let body = &lines[1..];
        let mut sections: Vec<Section> = Vec::new();
        let mut current = Section::untitled();
        let mut open_item: Option<OpenItem> = None;

        for (i, line) in body.iter().copied().enumerate() {
            let is_last = i + 1 == body.len();

            if !is_last && rules::is_section_title(line) {
                close_item(&mut current, &mut open_item);
                if current.has_content() {
                    sections.push(std::mem::replace(&mut current, Section::titled(line)));
                } else {
                    current.title = line.to_string();
                }
            } else if self.is_dash_item(line, &current) {
                close_item(&mut current, &mut open_item);
                // Guarded by is_dash_item, so the split always succeeds.
                let (title, description) = rules::split_item(line, " - ").unwrap_or((line, ""));
                open_item = Some(OpenItem {
                    title: title.trim().to_string(),
                    details: rules::split_details(description),
                });
            } else if self.is_colon_item(line, &current) {
                close_item(&mut current, &mut open_item);
                let in_tours = current.title == self.config.tours_section;
                current.items.push(self.colon_item(line, in_tours));
            } else if let Some(item) = open_item.as_mut() {
                item.details.push(line.to_string());
            } else {
                current.items.push(Item::Text(line.to_string()));
            }
        }

        close_item(&mut current, &mut open_item);
        if current.has_content() {
            sections.push(current);
        }

        ReplyTree { heading, sections }
    }

    /// Dash-item rule: `"Title - description"` lines, outside the tours
    /// section, with no colon delimiter competing.
    fn is_dash_item(&self, line: &str, current: &Section) -> bool {
        line.contains(" - ")
            && !line.contains(": ")
            && current.title != self.config.tours_section
    }

    /// Colon-item rule: `"Title: description"` lines, either inside the
    /// tours section or opening with a descriptive lead word.
    fn is_colon_item(&self, line: &str, current: &Section) -> bool {
        line.contains(": ")
            && (current.title == self.config.tours_section
                || rules::has_descriptive_lead(line, &self.config.descriptive_leads))
    }

    fn colon_item(&self, line: &str, in_tours: bool) -> Item {
        let (title, description) = rules::split_item(line, ": ").unwrap_or((line, ""));
        let details = rules::split_details(description);
        if in_tours {
            Item::Detailed {
                title: title.trim().to_string(),
                details: vec![format!("Times: {}", details.join(", "))],
            }
        } else {
            let details = if details.is_empty() {
                vec![self.config.missing_description.clone()]
            } else {
                details
            };
            Item::Detailed {
                title: title.trim().to_string(),
                details,
            }
        }
    }

    /// Drops an echoed prompt prefix ("Upcoming Events: What special
    /// events…") from the first line. Applies only the literal observed
    /// shape; anything else passes through untouched.
    fn strip_prompt_echo(&self, lines: &mut Vec<&'input str>) {
        let Some(first) = lines.first().copied() else {
            return;
        };
        let Some((label, rest)) = first.split_once(':') else {
            return;
        };
        if rules::looks_like_prompt_echo(label, rest) {
            lines[0] = rest.trim();
        }
    }
}

fn close_item(section: &mut Section, open: &mut Option<OpenItem>) {
    if let Some(item) = open.take() {
        section.items.push(Item::Detailed {
            title: item.title,
            details: item.details,
        });
    }
}
