pub mod inline;
pub mod span;

#[cfg(test)]
mod tests;

pub use inline::{LinkToken, ParsedText, parse_links};
pub use span::Span;
