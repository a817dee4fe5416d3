//! # rb-engine — ReelBox spin controller
//!
//! Orchestrates one spin cycle from trigger to win evaluation:
//!
//! ```text
//! start_spin()
//!     │  reset state, sample FinalSymbols, prime cue
//!     v
//! StopSchedule (fixed stop order, base + i·step deadlines)
//!     │  one cancelable timer task
//!     v
//! 9 × stop event: mark cell stopped, copy final symbol into grid
//!     │  9th stop
//!     v
//! detect_lines → JackpotLines → cue.play() on a win
//! ```
//!
//! At most one spin is active at a time (`rolling` guard); the timer task
//! is owned by the controller and aborted on drop.

pub mod controller;
pub mod cue;
pub mod event;
pub mod schedule;

pub use controller::*;
pub use cue::*;
pub use event::*;
pub use schedule::*;
