//! Grid state: live grid, stopped mask, predetermined final symbols

use serde::{Deserialize, Serialize};

use crate::symbols::Symbol;

/// Rows and columns of the machine
pub const GRID_SIZE: usize = 3;

/// The live 3×3 grid as the player sees it.
///
/// `None` marks a cell that is still rolling. Fully reset to unset at each
/// spin start and filled cell-by-cell as reels stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<Symbol>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// All cells unset
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, symbol: Symbol) {
        self.cells[row][col] = Some(symbol);
    }

    /// Reset every cell to unset
    pub fn reset(&mut self) {
        self.cells = [[None; GRID_SIZE]; GRID_SIZE];
    }

    /// True when every cell holds a symbol
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }
}

/// Which cells have finalized this spin.
///
/// All-false at spin start; entries monotonically flip to true as stop
/// events fire and never reset mid-spin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoppedMask {
    stopped: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl StoppedMask {
    pub fn is_stopped(&self, row: usize, col: usize) -> bool {
        self.stopped[row][col]
    }

    pub fn mark(&mut self, row: usize, col: usize) {
        self.stopped[row][col] = true;
    }

    pub fn reset(&mut self) {
        self.stopped = [[false; GRID_SIZE]; GRID_SIZE];
    }

    pub fn all_stopped(&self) -> bool {
        self.stopped.iter().all(|row| row.iter().all(|&s| s))
    }

    /// Number of finalized cells
    pub fn count(&self) -> usize {
        self.stopped
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&s| s)
            .count()
    }
}

/// The outcome of a spin, sampled once before any stop event fires.
///
/// Immutable for the duration of the spin; the live [`Grid`] converges to
/// it cell-by-cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSymbols {
    symbols: [[Symbol; GRID_SIZE]; GRID_SIZE],
}

impl FinalSymbols {
    pub fn new(symbols: [[Symbol; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { symbols }
    }

    /// Build from a per-cell generator, visited in row-major order
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Symbol) -> Self {
        let mut symbols = [[Symbol::Cherry; GRID_SIZE]; GRID_SIZE];
        for (r, row) in symbols.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = f(r, c);
            }
        }
        Self { symbols }
    }

    /// Every cell the same symbol (guaranteed jackpot on all 8 lines)
    pub fn filled(symbol: Symbol) -> Self {
        Self {
            symbols: [[symbol; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Symbol {
        self.symbols[row][col]
    }
}

impl Default for FinalSymbols {
    fn default() -> Self {
        Self::filled(Symbol::ALL[0])
    }
}
