/// Delimiters of an inline `[label](target)` link.
pub struct MarkdownLink;

impl MarkdownLink {
    pub const LABEL_OPEN: char = '[';
    pub const LABEL_CLOSE: char = ']';
    pub const TARGET_OPEN: char = '(';
    pub const TARGET_CLOSE: char = ')';

    /// Characters allowed between `]` and `(`.
    pub fn is_gap(c: char) -> bool {
        c.is_whitespace()
    }
}
