//! C ABI expected by the generated Morpheus parser.
//!
//! The generated parser reaches the external scanner through five exported
//! symbols and a shared lexer struct. The entry points here adapt that
//! surface onto [`Scanner`] without allocating.

use std::ffi::{c_char, c_uint, c_void};

use crate::scanner::{Lexer, Scanner, TokenKind, ValidSymbols};

/// Size of the engine-owned state buffer handed to
/// [`tree_sitter_morpheus_external_scanner_serialize`].
///
/// The zero-byte scanner state always fits.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// `#[repr(C)]` mirror of the engine lexer handed to
/// [`tree_sitter_morpheus_external_scanner_scan`].
///
/// Field order and types must match the engine's own definition. Only
/// `lookahead`, `result_symbol`, `advance`, and `eof` are touched here;
/// the remaining callbacks keep the layout faithful.
#[repr(C)]
pub struct RawLexer {
    /// Code point at the cursor, `0` at end of input.
    pub lookahead: i32,
    /// Category index of a recognized token, written on success.
    pub result_symbol: u16,
    /// Consumes one code point; `skip` marks it insignificant.
    pub advance: Option<unsafe extern "C" fn(lexer: *mut RawLexer, skip: bool)>,
    /// Pins the end of the pending token.
    pub mark_end: Option<unsafe extern "C" fn(lexer: *mut RawLexer)>,
    /// Returns the column of the cursor position.
    pub get_column: Option<unsafe extern "C" fn(lexer: *mut RawLexer) -> u32>,
    /// Returns whether the cursor sits at an included-range boundary.
    pub is_at_included_range_start: Option<unsafe extern "C" fn(lexer: *const RawLexer) -> bool>,
    /// Returns whether the cursor reached end of input.
    pub eof: Option<unsafe extern "C" fn(lexer: *const RawLexer) -> bool>,
    /// Engine-owned logging hook; unused by this scanner.
    pub log: Option<unsafe extern "C" fn(lexer: *const RawLexer, fmt: *const c_char, ...)>,
}

/// Adapter giving a raw engine lexer the cursor capability.
struct RawCursor {
    raw: *mut RawLexer,
}

impl Lexer for RawCursor {
    fn lookahead(&self) -> Option<char> {
        unsafe {
            let raw = &*self.raw;
            if let Some(eof) = raw.eof {
                if eof(self.raw) {
                    return None;
                }
            }
            u32::try_from(raw.lookahead).ok().and_then(char::from_u32)
        }
    }

    fn advance(&mut self, skip: bool) {
        unsafe {
            if let Some(advance) = (*self.raw).advance {
                advance(self.raw, skip);
            }
        }
    }
}

/// Engine hook: allocates per-session scanner state.
///
/// The scanner is stateless, so the payload is null.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_morpheus_external_scanner_create() -> *mut c_void {
    std::ptr::null_mut()
}

/// Engine hook: releases per-session scanner state.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_morpheus_external_scanner_destroy(_payload: *mut c_void) {}

/// Engine hook: saves scanner state into `buffer`, returning the byte
/// count written.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_morpheus_external_scanner_serialize(
    _payload: *mut c_void,
    _buffer: *mut c_char,
) -> c_uint {
    0
}

/// Engine hook: restores scanner state from `buffer`.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_morpheus_external_scanner_deserialize(
    _payload: *mut c_void,
    _buffer: *const c_char,
    _length: c_uint,
) {
}

/// Engine hook: attempts to recognize an external token at the cursor.
///
/// On success the token's category index is stored in the lexer's
/// `result_symbol` field.
///
/// # Safety
///
/// `lexer` must point to a live engine lexer and `valid_symbols` to a
/// table of at least [`TokenKind::COUNT`] entries, both exclusive to this
/// call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tree_sitter_morpheus_external_scanner_scan(
    _payload: *mut c_void,
    lexer: *mut RawLexer,
    valid_symbols: *const bool,
) -> bool {
    let table = unsafe { std::slice::from_raw_parts(valid_symbols, TokenKind::COUNT) };
    let mut cursor = RawCursor { raw: lexer };

    match Scanner::new().scan(&mut cursor, ValidSymbols::new(table)) {
        Some(kind) => {
            unsafe { (*lexer).result_symbol = kind.index() as u16 };
            true
        }
        None => false,
    }
}
