//! Fixed stop order and per-spin stop schedule

use serde::{Deserialize, Serialize};

use rb_core::{SpinTiming, STOP_COUNT};

/// The order in which cells finalize: row-major, each of the 9 coordinates
/// exactly once.
pub const STOP_ORDER: [(usize, usize); STOP_COUNT] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

/// One scheduled stop event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopStep {
    /// Position in the stop order (0..=8)
    pub step: usize,
    pub row: usize,
    pub col: usize,
    /// Deadline relative to spin start (ms)
    pub deadline_ms: u64,
}

/// The full stop schedule for one spin: [`STOP_ORDER`] paired with
/// strictly increasing deadlines from a [`SpinTiming`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopSchedule {
    steps: Vec<StopStep>,
}

impl StopSchedule {
    pub fn new(timing: &SpinTiming) -> Self {
        let steps = STOP_ORDER
            .iter()
            .enumerate()
            .map(|(step, &(row, col))| StopStep {
                step,
                row,
                col,
                deadline_ms: timing.stop_delay_ms(step),
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[StopStep] {
        &self.steps
    }

    /// Index of the final step
    pub fn last_step(&self) -> usize {
        self.steps.len() - 1
    }
}
