use tree_sitter_morpheus::scanner::{Lexer, SourceCursor};

#[test]
fn lookahead_does_not_move_the_cursor() {
    let cursor = SourceCursor::new("ab");

    assert_eq!(cursor.lookahead(), Some('a'));
    assert_eq!(cursor.lookahead(), Some('a'));
    assert_eq!(cursor.offset().as_usize(), 0);
}

#[test]
fn skip_advance_excludes_the_code_point_from_the_token_span() {
    let mut cursor = SourceCursor::new(" x");

    cursor.advance(true);

    assert_eq!(cursor.offset().as_usize(), 1);
    assert!(cursor.token_span().is_empty());
    assert_eq!(cursor.token_text(), "");
}

#[test]
fn significant_advance_grows_the_token_span() {
    let mut cursor = SourceCursor::new(" xy");

    cursor.advance(true);
    cursor.advance(false);
    cursor.advance(false);

    let span = cursor.token_span();
    assert_eq!(span.start.as_usize(), 1);
    assert_eq!(span.end.as_usize(), 3);
    assert_eq!(cursor.token_text(), "xy");
}

#[test]
fn trivia_after_significant_text_resets_the_pending_token() {
    let mut cursor = SourceCursor::new("x y");

    cursor.advance(false);
    cursor.advance(true);

    assert!(cursor.token_span().is_empty());
    assert_eq!(cursor.token_text(), "");
}

#[test]
fn advance_at_end_of_input_is_a_no_op() {
    let mut cursor = SourceCursor::new("a");

    cursor.advance(false);
    assert!(cursor.is_eof());
    assert_eq!(cursor.lookahead(), None);

    cursor.advance(false);
    cursor.advance(true);
    assert_eq!(cursor.offset().as_usize(), 1);
}

#[test]
fn multibyte_code_points_advance_by_their_utf8_width() {
    let mut cursor = SourceCursor::new("é\\");

    cursor.advance(true);

    assert_eq!(cursor.offset().as_usize(), 2);
    assert_eq!(cursor.lookahead(), Some('\\'));
}
