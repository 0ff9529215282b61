//! Swappable symbol tables for pretty-printing, selected process-wide.

use std::sync::atomic::{AtomicU8, Ordering};

/// Which glyph set `Display` uses for connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolStyle {
    /// `~`, `&`, `|`, `->`, `<->`
    Ascii,
    /// `¬`, `∧`, `∨`, `⇒`, `⇔`
    Math,
}

impl SymbolStyle {
    pub(crate) fn not(self) -> &'static str {
        match self {
            SymbolStyle::Ascii => "~",
            SymbolStyle::Math => "\u{ac}",
        }
    }
    pub(crate) fn and(self) -> &'static str {
        match self {
            SymbolStyle::Ascii => "&",
            SymbolStyle::Math => "\u{2227}",
        }
    }
    pub(crate) fn or(self) -> &'static str {
        match self {
            SymbolStyle::Ascii => "|",
            SymbolStyle::Math => "\u{2228}",
        }
    }
    pub(crate) fn implies(self) -> &'static str {
        match self {
            SymbolStyle::Ascii => "->",
            SymbolStyle::Math => "\u{21d2}",
        }
    }
    pub(crate) fn equivalent(self) -> &'static str {
        match self {
            SymbolStyle::Ascii => "<->",
            SymbolStyle::Math => "\u{21d4}",
        }
    }
}

// Stored as a single byte behind an atomic so `Display` impls (which take `&self`,
// not a formatter argument) can still honor a process-wide style choice without a
// global mutex. 0 = Ascii, 1 = Math.
static STYLE: AtomicU8 = AtomicU8::new(0);

/// Set the symbol style used by every `Expr`'s `Display` impl from this point on.
pub fn set_symbol_style(style: SymbolStyle) {
    let code = match style {
        SymbolStyle::Ascii => 0,
        SymbolStyle::Math => 1,
    };
    STYLE.store(code, Ordering::Relaxed);
}

/// The symbol style currently in effect.
pub fn symbol_style() -> SymbolStyle {
    match STYLE.load(Ordering::Relaxed) {
        1 => SymbolStyle::Math,
        _ => SymbolStyle::Ascii,
    }
}
