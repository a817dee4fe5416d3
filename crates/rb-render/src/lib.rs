//! # rb-render — ReelBox reel renderer model
//!
//! The visual layer of one reel cell, reduced to its deterministic core: a
//! strip of the six symbols, duplicated once so the loop has no visible
//! seam, whose vertical offset is either free-running (while rolling) or
//! pinned to the target symbol (once stopped). No internal randomness; the
//! frame is a pure function of the stop flag, the target symbol, and
//! elapsed time.

pub mod strip;

pub use strip::*;
