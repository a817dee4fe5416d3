//! # rb-core — ReelBox domain model
//!
//! Core types for the 3×3 slot machine: the fixed symbol set, grid state
//! (live grid, stopped mask, predetermined final symbols), jackpot line
//! detection, and spin timing profiles.
//!
//! ## Architecture
//!
//! ```text
//! SpinTiming ──▶ stop deadlines (base + i·step)
//! FinalSymbols ──▶ Grid (copied cell-by-cell as reels stop)
//!       │
//!       v
//! detect_lines ──▶ Vec<JackpotLine> ──▶ is_winning_cell
//! ```

pub mod error;
pub mod grid;
pub mod lines;
pub mod symbols;
pub mod timing;

pub use error::*;
pub use grid::*;
pub use lines::*;
pub use symbols::*;
pub use timing::*;
