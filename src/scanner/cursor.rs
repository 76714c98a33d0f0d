//! Cursor capability shared between the parsing engine and the scanner.

use crate::scanner::span::{ByteOffset, Span};

/// Borrowed lexer cursor handed to one scan call.
///
/// The engine owns the cursor; the scanner borrows it for the duration of a
/// single call. Advancing is irrevocable, the trait offers no rewind, so a
/// scanner must only advance past code points it is committed to having
/// consumed.
pub trait Lexer {
    /// Returns the code point at the cursor, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consumes the current code point.
    ///
    /// `skip = true` marks it insignificant trivia excluded from any token
    /// span; `skip = false` grows the pending token's significant text.
    /// At end of input this is a no-op.
    fn advance(&mut self, skip: bool);
}

/// In-memory cursor over borrowed input.
///
/// Reproduces the engine's cursor semantics for tests and direct
/// embeddings: forward-only movement and trivia accounting through the
/// skip flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCursor<'a> {
    input: &'a str,
    offset: usize,
    token_start: usize,
}

impl<'a> SourceCursor<'a> {
    /// Creates a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            token_start: 0,
        }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> ByteOffset {
        ByteOffset::from_usize(self.offset)
    }

    /// Returns `true` once all input is consumed.
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Returns the span of significant text consumed since the last trivia.
    pub fn token_span(&self) -> Span {
        Span::new(
            ByteOffset::from_usize(self.token_start),
            ByteOffset::from_usize(self.offset),
        )
    }

    /// Returns the significant text of the pending token.
    pub fn token_text(&self) -> &'a str {
        &self.input[self.token_start..self.offset]
    }
}

impl Lexer for SourceCursor<'_> {
    fn lookahead(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn advance(&mut self, skip: bool) {
        let Some(next) = self.lookahead() else {
            return;
        };
        self.offset += next.len_utf8();
        if skip {
            self.token_start = self.offset;
        }
    }
}
