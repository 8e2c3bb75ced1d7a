use std::collections::HashMap;

use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::MarkdownLink,
    types::{LinkToken, ParsedText},
};

/// Parses `[label](target)` links out of `s`.
///
/// Every recognised link is replaced by its label in
/// [`ParsedText::display_text`] and reported in [`ParsedText::links`].
/// Anything that does not form a complete link is kept as literal text, so
/// this never fails.
///
/// # Grammar
/// - The label runs from `[` to the `]` that balances it, so it may contain
///   balanced `[`/`]` pairs. It must not be empty.
/// - Only whitespace may separate `]` from `(`.
/// - The target runs to the first `)` and may be empty. A `(` or `]` inside
///   it rejects the candidate.
///
/// A rejected candidate leaves its `[` as text and scanning resumes right
/// after that `[`, so links nested in the rejected text are still found.
pub fn parse_links(s: &str) -> ParsedText {
    let closes = match_brackets(s);
    let mut cur = Cursor::new(s);
    let mut matches = vec![];

    while !cur.eof() {
        if let Some(m) = try_parse_link(&mut cur, &closes) {
            matches.push(m);
            continue;
        }
        cur.bump();
    }

    let mut display_text = String::with_capacity(s.len());
    let mut links = Vec::with_capacity(matches.len());
    let mut copied = 0;

    for m in matches {
        display_text.push_str(&s[copied..m.label_open]);

        let label = &s[m.label_open + 1..m.label_close];
        let start = display_text.len();
        display_text.push_str(label);

        links.push(LinkToken {
            label: label.to_string(),
            target: s[m.target_open + 1..m.target_close].trim().to_string(),
            source: Span::new(m.label_open, m.target_close + 1),
            label_span: Span::new(start, display_text.len()),
        });
        copied = m.target_close + 1;
    }
    display_text.push_str(&s[copied..]);

    ParsedText {
        display_text,
        links,
    }
}

/// Byte positions of the four delimiters of one complete link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Match {
    label_open: usize,
    label_close: usize,
    target_open: usize,
    target_close: usize,
}

/// Maps each `[` to the `]` that balances it. Unmatched brackets are absent.
fn match_brackets(s: &str) -> HashMap<usize, usize> {
    let mut opens = vec![];
    let mut closes = HashMap::new();

    let mut cur = Cursor::new(s);
    while let Some((at, c)) = cur.bump() {
        match c {
            MarkdownLink::LABEL_OPEN => opens.push(at),
            MarkdownLink::LABEL_CLOSE => {
                if let Some(open) = opens.pop() {
                    closes.insert(open, at);
                }
            }
            _ => {}
        }
    }
    closes
}

/// Attempts to parse a link starting at the current position.
///
/// Returns `None` if not at `[` or if the candidate doesn't complete.
/// On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>, closes: &HashMap<usize, usize>) -> Option<Match> {
    if cur.peek() != Some(MarkdownLink::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let label_open = cur.pos();
    let label_close = *closes.get(&label_open)?;
    if label_close == label_open + 1 {
        // `[]` has nothing to show
        return None;
    }
    cur.jump_to(label_close);
    cur.bump(); // ]

    while cur.peek().is_some_and(MarkdownLink::is_gap) {
        cur.bump();
    }
    if cur.peek() != Some(MarkdownLink::TARGET_OPEN) {
        log::trace!("link candidate at {label_open} has no target");
        *cur = saved;
        return None;
    }
    let target_open = cur.pos();
    cur.bump(); // (

    while let Some(c) = cur.peek() {
        if matches!(
            c,
            MarkdownLink::TARGET_CLOSE | MarkdownLink::TARGET_OPEN | MarkdownLink::LABEL_CLOSE
        ) {
            break;
        }
        cur.bump();
    }
    if cur.peek() != Some(MarkdownLink::TARGET_CLOSE) {
        log::trace!("link candidate at {label_open} has an unterminated target");
        *cur = saved;
        return None;
    }
    let target_close = cur.pos();
    cur.bump(); // )

    Some(Match {
        label_open,
        label_close,
        target_open,
        target_close,
    })
}
