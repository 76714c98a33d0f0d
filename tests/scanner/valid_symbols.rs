use tree_sitter_morpheus::scanner::{Scanner, SourceCursor, TokenKind, ValidSymbols};

#[test]
fn inadmissible_category_fails_without_any_cursor_movement() {
    let mut cursor = SourceCursor::new("   \\\n");

    let outcome = Scanner::new().scan(&mut cursor, ValidSymbols::none());

    assert_eq!(outcome, None);
    assert_eq!(cursor.offset().as_usize(), 0);
}

#[test]
fn admissible_entry_is_read_by_category_index() {
    let table = [true];
    assert!(ValidSymbols::new(&table).contains(TokenKind::LineContinuation));

    let table = [false];
    assert!(!ValidSymbols::new(&table).contains(TokenKind::LineContinuation));
}

#[test]
fn short_table_reads_as_not_admissible() {
    let table: [bool; 0] = [];
    assert!(!ValidSymbols::new(&table).contains(TokenKind::LineContinuation));
}

#[test]
fn token_kind_table_round_trips_indices() {
    for index in 0..TokenKind::COUNT {
        let kind = TokenKind::from_index(index).expect("index within table");
        assert_eq!(kind.index(), index);
    }
    assert_eq!(TokenKind::from_index(TokenKind::COUNT), None);
}

#[test]
fn grammar_facing_name_matches_the_externals_entry() {
    assert_eq!(TokenKind::LineContinuation.name(), "line_continuation");
}
