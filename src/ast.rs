//! Typed content tree for one assistant turn.
//!
//! The tree is rebuilt from scratch on every stream fragment, so all types
//! here are plain owned data with no links back into the source text.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parse result for one assistant turn: a heading plus ordered sections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReplyTree {
    /// First extractable line of the reply, or the configured default.
    pub heading: String,
    /// Sections in source order.
    pub sections: Vec<Section>,
}

impl ReplyTree {
    /// Creates a tree with the given heading and no sections.
    pub fn empty(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            sections: Vec::new(),
        }
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// A titled or untitled grouping of items. An empty title means the default
/// untitled section that opens every parse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    pub title: String,
    pub items: Vec<Item>,
}

impl Section {
    /// Creates the untitled section that opens a parse.
    pub fn untitled() -> Self {
        Self {
            title: String::new(),
            items: Vec::new(),
        }
    }

    /// Creates an empty section with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// A section is worth emitting when it carries a title or any items.
    pub fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.items.is_empty()
    }
}

/// One entry within a section. The two variants are decided at parse time
/// from line shape; an item is never both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Item {
    /// A bare line of free text.
    Text(String),
    /// A titled entry with zero or more detail lines.
    Detailed { title: String, details: Vec<String> },
}

impl Item {
    /// Returns the item title for detailed items.
    pub fn title(&self) -> Option<&str> {
        match self {
            Item::Text(_) => None,
            Item::Detailed { title, .. } => Some(title),
        }
    }

    /// Returns the detail lines, empty for bare text items.
    pub fn details(&self) -> &[String] {
        match self {
            Item::Text(_) => &[],
            Item::Detailed { details, .. } => details,
        }
    }
}

/// A key/value pair recognized inside a detail line, used as a styling hint
/// by the rendering layer. Extraction never drops the underlying line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    pub key: String,
    pub value: String,
}
