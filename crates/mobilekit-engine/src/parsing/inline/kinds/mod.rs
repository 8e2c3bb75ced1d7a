//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`MarkdownLink`**: `[` `]` around the label, `(` `)` around the target,
//!   whitespace allowed in between
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `[` or `(`.

pub mod markdown_link;

pub use markdown_link::MarkdownLink;
