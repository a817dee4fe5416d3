//! Jackpot line detection and cell highlighting

use serde::{Deserialize, Serialize};

use crate::grid::{FinalSymbols, GRID_SIZE};

/// Kind of winning line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Col,
    Diag,
}

/// A matched line descriptor.
///
/// For `Diag`, index 0 is the main diagonal (row == col) and index 1 the
/// anti-diagonal (row + col == 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JackpotLine {
    pub kind: LineKind,
    pub index: usize,
}

impl JackpotLine {
    pub fn row(index: usize) -> Self {
        Self {
            kind: LineKind::Row,
            index,
        }
    }

    pub fn col(index: usize) -> Self {
        Self {
            kind: LineKind::Col,
            index,
        }
    }

    pub fn diag(index: usize) -> Self {
        Self {
            kind: LineKind::Diag,
            index,
        }
    }

    /// Does this line pass through the given cell?
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.kind {
            LineKind::Row => self.index == row,
            LineKind::Col => self.index == col,
            LineKind::Diag if self.index == 0 => row == col,
            LineKind::Diag => row + col == GRID_SIZE - 1,
        }
    }
}

/// Scan a finalized grid for winning lines.
///
/// Checks the 3 rows, 3 columns, and both diagonals; a line wins when its
/// three cells hold identical symbols. Pure and idempotent.
pub fn detect_lines(symbols: &FinalSymbols) -> Vec<JackpotLine> {
    let mut lines = Vec::new();

    for r in 0..GRID_SIZE {
        if symbols.get(r, 0) == symbols.get(r, 1) && symbols.get(r, 1) == symbols.get(r, 2) {
            lines.push(JackpotLine::row(r));
        }
    }

    for c in 0..GRID_SIZE {
        if symbols.get(0, c) == symbols.get(1, c) && symbols.get(1, c) == symbols.get(2, c) {
            lines.push(JackpotLine::col(c));
        }
    }

    if symbols.get(0, 0) == symbols.get(1, 1) && symbols.get(1, 1) == symbols.get(2, 2) {
        lines.push(JackpotLine::diag(0));
    }
    if symbols.get(0, 2) == symbols.get(1, 1) && symbols.get(1, 1) == symbols.get(2, 0) {
        lines.push(JackpotLine::diag(1));
    }

    lines
}

/// True when the cell lies on any matched line. Recomputed per render; no
/// per-cell state is stored.
pub fn is_winning_cell(lines: &[JackpotLine], row: usize, col: usize) -> bool {
    lines.iter().any(|line| line.contains(row, col))
}
