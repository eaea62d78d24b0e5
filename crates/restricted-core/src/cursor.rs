//! Character cursor shared by the text and UTF-8 parse paths.

use crate::errors::{FormatError, FormatErrorKind};

/// Forward-only cursor over validated UTF-8 text.
///
/// Positions are character offsets.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
    position: usize,
}

/// Lexical failure at a character position, before the type name is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// Character offset of the failure.
    pub position: usize,
    /// What went wrong.
    pub kind: FormatErrorKind,
}

impl DecodeError {
    /// Creates a decode error.
    pub fn new(position: usize, kind: FormatErrorKind) -> Self {
        Self { position, kind }
    }

    /// Attaches the type name and input excerpt.
    pub fn into_format_error(self, type_name: &'static str, input: &str) -> FormatError {
        FormatError::new(type_name, self.position, self.kind, input)
    }
}

impl<'a> Cursor<'a> {
    /// Starts a cursor at the beginning of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            position: 0,
        }
    }

    /// Full input.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current character offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Returns `true` when all input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        self.position += 1;
        Some(c)
    }

    /// Consumes `expected` if it is next.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes the longest prefix whose characters satisfy `pred`.
    pub fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
        &self.input[start..self.offset]
    }

    /// Error of `kind` at the current position.
    pub fn error(&self, kind: FormatErrorKind) -> DecodeError {
        DecodeError::new(self.position, kind)
    }

    /// Fails with the first unconsumed character, if any.
    pub fn expect_end(&self) -> Result<(), DecodeError> {
        match self.peek() {
            None => Ok(()),
            Some(c) => Err(self.error(FormatErrorKind::UnexpectedChar(c))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_count_characters_not_bytes() {
        let mut cursor = Cursor::new("héllo");
        assert_eq!(cursor.take_while(|c| c != 'l'), "hé");
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.rest(), "llo");
    }

    #[test]
    fn expect_end_reports_trailing_character() {
        let mut cursor = Cursor::new("12x");
        cursor.take_while(|c| c.is_ascii_digit());
        let err = cursor.expect_end().unwrap_err();
        assert_eq!(err.position, 2);
        assert_eq!(err.kind, FormatErrorKind::UnexpectedChar('x'));
    }

    #[test]
    fn eat_only_consumes_matching_character() {
        let mut cursor = Cursor::new("-5");
        assert!(!cursor.eat('+'));
        assert!(cursor.eat('-'));
        assert_eq!(cursor.bump(), Some('5'));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.bump(), None);
    }
}
