/// A cursor for character-by-character inline parsing with position tracking.
///
/// Operates over a string slice and advances one `char` at a time, so every
/// position it reports is a valid `char` boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// Advances by one character, returning its start position and value.
    pub fn bump(&mut self) -> Option<(usize, char)> {
        let c = self.peek()?;
        let at = self.i;
        self.i += c.len_utf8();
        Some((at, c))
    }

    /// Moves to byte position `pos`, which must be a `char` boundary of `s`.
    pub fn jump_to(&mut self, pos: usize) {
        debug_assert!(self.s.is_char_boundary(pos));
        self.i = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some('h'));
        assert_eq!(cur.bump(), Some((0, 'h')));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn multibyte_characters_advance_by_width() {
        let mut cur = Cursor::new("é[🎉]");
        assert_eq!(cur.bump(), Some((0, 'é')));
        assert_eq!(cur.bump(), Some((2, '[')));
        assert_eq!(cur.bump(), Some((3, '🎉')));
        assert_eq!(cur.pos(), 7);
        assert_eq!(cur.bump(), Some((7, ']')));
        assert!(cur.eof());
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some((0, 'x')));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None); // idempotent
    }

    #[test]
    fn jump_to_moves_forward_and_back() {
        let mut cur = Cursor::new("ab]ç");
        cur.jump_to(2);
        assert_eq!(cur.bump(), Some((2, ']')));
        assert_eq!(cur.peek(), Some('ç'));

        let saved = cur.clone();
        cur.jump_to(0);
        assert_eq!(cur.peek(), Some('a'));
        cur = saved;
        assert_eq!(cur.pos(), 3);
    }
}
