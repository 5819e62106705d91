// Parser module with submodules, Rust 2018 module layout.
mod config;
mod core;
mod rules;

pub use config::ParserConfig;
pub use core::Parser;
pub use rules::is_section_title;

use crate::ast::ReplyTree;

/// Parses cleaned reply text using the default configuration.
pub fn parse(cleaned: &str) -> ReplyTree {
    Parser::with_defaults(cleaned).parse()
}

/// Parses cleaned reply text with a custom configuration.
pub fn parse_with_config(cleaned: &str, config: &ParserConfig) -> ReplyTree {
    Parser::new(cleaned, config).parse()
}
