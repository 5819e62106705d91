//! Per-turn stream accumulation.
//!
//! One [`TurnSession`] owns everything scoped to a single assistant turn:
//! the growing text buffer, the optional category hint, and the preceding
//! user turn. Every fragment arrival re-runs the whole pipeline over the
//! full accumulated text rather than patching the previous tree; per-turn
//! text is chat-message scale, so recomputation is cheaper than an
//! incremental parser state machine would be to maintain.
//!
//! Fragments must be applied in arrival order; out-of-order application is
//! a caller bug this module does not detect. Abandoning a turn is just
//! dropping the session.

use tracing::{debug, trace};

use crate::ast::ReplyTree;
use crate::classify::{classify, MessageCategory};
use crate::clean::clean;
use crate::error::{ReplyError, Result};
use crate::parser::{self, ParserConfig};
use crate::policy::{booking_intent, BookingIntent};

/// Configuration for a turn session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum accumulated text size; `None` disables the cap.
    pub max_buffer_bytes: Option<usize>,
    /// Parser configuration used for every snapshot.
    pub parser: ParserConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_buffer_bytes: Some(256 * 1024), // chat-message scale
            parser: ParserConfig::default(),
        }
    }
}

/// Everything the rendering layer needs for one turn, rebuilt per fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplySnapshot {
    pub tree: ReplyTree,
    pub category: MessageCategory,
    pub booking: BookingIntent,
}

/// Accumulator and pipeline driver for one assistant turn.
#[derive(Debug)]
pub struct TurnSession {
    buffer: String,
    hint: Option<MessageCategory>,
    preceding_user: Option<String>,
    config: SessionConfig,
    finished: bool,
}

impl TurnSession {
    /// Creates a session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            buffer: String::new(),
            hint: None,
            preceding_user: None,
            config,
            finished: false,
        }
    }

    /// Creates a session with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SessionConfig::default())
    }

    /// Attaches the backend's explicit category hint for this turn.
    pub fn hint(mut self, category: MessageCategory) -> Self {
        self.hint = Some(category);
        self
    }

    /// Attaches the text of the immediately preceding user turn.
    pub fn preceding_user(mut self, text: impl Into<String>) -> Self {
        self.preceding_user = Some(text.into());
        self
    }

    /// Appends one stream fragment and returns the full accumulated text.
    ///
    /// Empty fragments are a no-op. Fails only when the turn is already
    /// finished or the buffer cap would be exceeded; a failed push leaves
    /// the buffer untouched.
    pub fn push(&mut self, chunk: &str) -> Result<&str> {
        if self.finished {
            return Err(ReplyError::TurnFinished);
        }
        if chunk.is_empty() {
            return Ok(&self.buffer);
        }
        if let Some(limit) = self.config.max_buffer_bytes {
            let size = self.buffer.len() + chunk.len();
            if size > limit {
                return Err(ReplyError::buffer_limit(size, limit));
            }
        }
        self.buffer.push_str(chunk);
        trace!(
            fragment_bytes = chunk.len(),
            total_bytes = self.buffer.len(),
            "fragment appended"
        );
        Ok(&self.buffer)
    }

    /// The full accumulated text so far.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Total bytes accumulated so far.
    pub fn bytes_accumulated(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the turn has been finalized.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Re-runs the whole pipeline over the accumulated text.
    pub fn snapshot(&self) -> ReplySnapshot {
        let cleaned = clean(&self.buffer);
        let category = classify(&cleaned, self.hint, self.preceding_user.as_deref());
        let tree = parser::parse_with_config(&cleaned, &self.config.parser);
        let booking = booking_intent(category, &cleaned, self.preceding_user.as_deref());
        debug!(
            %category,
            sections = tree.sections.len(),
            offer_booking = booking.offer,
            "snapshot rebuilt"
        );
        ReplySnapshot {
            tree,
            category,
            booking,
        }
    }

    /// Finalizes the turn and returns the last snapshot. Further pushes
    /// fail with [`ReplyError::TurnFinished`].
    pub fn finish(&mut self) -> ReplySnapshot {
        self.finished = true;
        self.snapshot()
    }
}
