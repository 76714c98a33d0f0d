//! Native binding between the compiled grammar and a host runtime.
//!
//! A host reaches the compiled Morpheus grammar either dynamically, through
//! [`Grammar::load`], or statically, through the optional
//! `tree-sitter-language` interop export. In both cases the host owns the
//! parse-session lifecycle; this module only hands over the pointer.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Name the grammar registers under with host runtimes.
pub const LANGUAGE_NAME: &str = "morpheus";

/// Constructor symbol a compiled grammar library exports.
pub const GRAMMAR_SYMBOL: &str = "tree_sitter_morpheus";

/// Errors raised while resolving a compiled grammar.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar library not found: {0}")]
    NotFound(String),

    #[error("failed to load grammar library: {0}")]
    Load(String),

    #[error("grammar library missing constructor symbol: {0}")]
    MissingSymbol(String),
}

/// Opaque handle to a compiled grammar.
///
/// Keeps the shared library it was resolved from alive, so the raw pointer
/// stays valid for the handle's lifetime. The host runtime builds and
/// manages parser sessions on top of the pointer itself.
pub struct Grammar {
    raw: *const (),
    _library: libloading::Library,
}

impl Grammar {
    /// Loads the compiled grammar from the shared library at `path`.
    pub fn load(path: &Path) -> Result<Self, GrammarError> {
        if !path.exists() {
            return Err(GrammarError::NotFound(path.display().to_string()));
        }

        let library = unsafe { libloading::Library::new(path) }
            .map_err(|err| GrammarError::Load(err.to_string()))?;
        let constructor = unsafe {
            library.get::<unsafe extern "C" fn() -> *const ()>(GRAMMAR_SYMBOL.as_bytes())
        }
        .map_err(|_| GrammarError::MissingSymbol(GRAMMAR_SYMBOL.to_string()))?;
        let raw = unsafe { constructor() };

        Ok(Self {
            raw,
            _library: library,
        })
    }

    /// Returns the raw language pointer for host-side parser construction.
    pub fn raw(&self) -> *const () {
        self.raw
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "tree-sitter-language")]
mod static_binding {
    use tree_sitter_language::LanguageFn;

    unsafe extern "C" {
        fn tree_sitter_morpheus() -> *const ();
    }

    /// Compiled grammar entry for hosts that link the generated parser
    /// into the same binary.
    pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_morpheus) };
}

#[cfg(feature = "tree-sitter-language")]
pub use static_binding::LANGUAGE;
