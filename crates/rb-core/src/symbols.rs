//! The fixed symbol set

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six reel symbols.
///
/// The declaration order is canonical: `Symbol::ALL` drives both uniform
/// sampling and the strip layout the renderer aligns against, so a symbol's
/// `index()` is stable for the life of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    Cherry = 0,
    Diamond = 1,
    Bell = 2,
    Lemon = 3,
    Orange = 4,
    Seven = 5,
}

impl Symbol {
    /// Number of distinct symbols
    pub const COUNT: usize = 6;

    /// All symbols in canonical strip order
    pub const ALL: [Symbol; Self::COUNT] = [
        Symbol::Cherry,
        Symbol::Diamond,
        Symbol::Bell,
        Symbol::Lemon,
        Symbol::Orange,
        Symbol::Seven,
    ];

    /// Position of this symbol in the canonical strip
    pub fn index(self) -> usize {
        self as usize
    }

    /// Symbol at a strip position, if in range
    pub fn from_index(index: usize) -> Option<Symbol> {
        Self::ALL.get(index).copied()
    }

    /// Display glyph
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Cherry => "🍒",
            Symbol::Diamond => "💎",
            Symbol::Bell => "🔔",
            Symbol::Lemon => "🍋",
            Symbol::Orange => "🍊",
            Symbol::Seven => "7️⃣",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
