use crate::parsing::span::Span;

/// One recognised `[label](target)` link.
///
/// `source` indexes the text that was parsed, `label_span` indexes
/// [`ParsedText::display_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkToken {
    /// Label text as shown to the user.
    pub label: String,
    /// Link target, trimmed of surrounding whitespace. May be empty.
    pub target: String,
    /// Full construct in the source, from `[` through `)`.
    pub source: Span,
    /// Where the label sits in the display text.
    pub label_span: Span,
}

/// Display text with links reduced to their labels, plus the links
/// themselves in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedText {
    pub display_text: String,
    pub links: Vec<LinkToken>,
}

impl ParsedText {
    /// True when no link was recognised.
    pub fn is_plain(&self) -> bool {
        self.links.is_empty()
    }

    /// `(label span, target)` pairs, ready to attach to a rich-text value.
    pub fn mappings(&self) -> impl Iterator<Item = (Span, &str)> {
        self.links
            .iter()
            .map(|link| (link.label_span, link.target.as_str()))
    }

    /// The link whose label covers byte `offset` of the display text.
    pub fn link_at(&self, offset: usize) -> Option<&LinkToken> {
        self.links
            .iter()
            .find(|link| link.label_span.start <= offset && offset < link.label_span.end)
    }
}
