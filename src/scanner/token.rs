//! External token contracts shared with the generated parser.

/// External token categories the grammar delegates to this scanner.
///
/// Discriminants match the order of the grammar's externals array; the
/// engine's admissibility and result tables are indexed by them. The set is
/// closed: a new external token is a new variant, never a dynamic
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TokenKind {
    /// Backslash-newline sequence joining two physical lines.
    LineContinuation = 0,
}

impl TokenKind {
    /// Number of external token categories.
    pub const COUNT: usize = 1;

    /// Returns the table index for this category.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the grammar-facing symbol name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LineContinuation => "line_continuation",
        }
    }

    /// Returns the category for a table index, if in range.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TokenKind::LineContinuation),
            _ => None,
        }
    }
}

/// Read-only view of the engine's per-call admissibility table.
///
/// The engine marks which token categories the parser could accept at the
/// current position. The scanner consults the view before consuming
/// anything and never produces a category not marked admissible.
#[derive(Debug, Clone, Copy)]
pub struct ValidSymbols<'a> {
    table: &'a [bool],
}

impl<'a> ValidSymbols<'a> {
    /// Wraps an engine-supplied admissibility table.
    pub const fn new(table: &'a [bool]) -> Self {
        Self { table }
    }

    /// Returns `true` when `kind` is admissible at the current position.
    ///
    /// Indices beyond the table read as not admissible.
    pub fn contains(self, kind: TokenKind) -> bool {
        self.table.get(kind.index()).copied().unwrap_or(false)
    }
}

impl ValidSymbols<'static> {
    /// Returns a view admitting every category.
    pub const fn all() -> Self {
        const ALL: [bool; TokenKind::COUNT] = [true; TokenKind::COUNT];
        Self { table: &ALL }
    }

    /// Returns a view admitting no category.
    pub const fn none() -> Self {
        Self { table: &[] }
    }
}
