//! Line-continuation recognition.

use crate::scanner::cursor::Lexer;

/// Consumes a line continuation at the cursor position.
///
/// Leading whitespace short of a newline is consumed as trivia whether or
/// not the match succeeds. Returns `true` once the significant sequence of
/// backslash, optional carriage return, and newline has been consumed; on
/// `false` any code points already advanced past stay consumed and the
/// engine re-tokenizes from the resulting position.
pub(crate) fn scan<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    while let Some(next) = lexer.lookahead() {
        // A newline here decides the match, it is never trivia.
        if next == '\n' || !next.is_whitespace() {
            break;
        }
        lexer.advance(true);
    }

    if lexer.lookahead() != Some('\\') {
        return false;
    }
    lexer.advance(false);

    if lexer.lookahead() == Some('\r') {
        lexer.advance(false);
    }

    if lexer.lookahead() == Some('\n') {
        lexer.advance(false);
        return true;
    }

    false
}
