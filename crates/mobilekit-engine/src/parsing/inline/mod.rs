//! # Inline Parsing
//!
//! Cursor-based recognition of `[label](target)` links in a single line or
//! paragraph of text.
//!
//! ## Modules
//!
//! - **`types`**: `LinkToken` and `ParsedText` (display text + link spans)
//! - **`kinds`**: `MarkdownLink` with its owned delimiters
//! - **`cursor`**: `Cursor` for character-by-character parsing with position tracking
//! - **`parser`**: `parse_links()` main entry point
//!
//! ## Output
//!
//! The result is two separate values: plain display text, and label spans
//! into that text with their targets. Callers re-attach the spans to
//! whatever rich-text type their platform renders.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_links;
pub use types::{LinkToken, ParsedText};
