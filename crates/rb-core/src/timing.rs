//! Spin timing profiles

use serde::{Deserialize, Serialize};

use crate::grid::GRID_SIZE;

/// Number of stop events per spin
pub const STOP_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Stop-event timing for one spin.
///
/// The i-th stop fires at `base_delay_ms + i * step_delay_ms`, so every
/// deadline is strictly later than the previous one and the whole spin
/// lasts `total_duration_ms()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinTiming {
    /// Delay before the first reel stops (ms)
    pub base_delay_ms: u64,
    /// Gap between consecutive reel stops (ms)
    pub step_delay_ms: u64,
}

impl SpinTiming {
    /// Normal gameplay timing: 2000 ms spin-up, 400 ms between stops
    pub fn normal() -> Self {
        Self {
            base_delay_ms: 2000,
            step_delay_ms: 400,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            base_delay_ms: 500,
            step_delay_ms: 100,
        }
    }

    /// Studio mode (near-instant, for demos and tooling)
    pub fn studio() -> Self {
        Self {
            base_delay_ms: 20,
            step_delay_ms: 5,
        }
    }

    /// Scale both delays by a factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            base_delay_ms: (self.base_delay_ms as f64 * factor).round() as u64,
            step_delay_ms: (self.step_delay_ms as f64 * factor).round() as u64,
        }
    }

    /// Deadline of the i-th stop event, relative to spin start
    pub fn stop_delay_ms(&self, step: usize) -> u64 {
        self.base_delay_ms + step as u64 * self.step_delay_ms
    }

    /// Time from spin start until the last reel has stopped
    pub fn total_duration_ms(&self) -> u64 {
        self.stop_delay_ms(STOP_COUNT - 1)
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_profile_deadlines() {
        let timing = SpinTiming::normal();
        assert_eq!(timing.stop_delay_ms(0), 2000);
        assert_eq!(timing.stop_delay_ms(1), 2400);
        assert_eq!(timing.stop_delay_ms(8), 5200);
        assert_eq!(timing.total_duration_ms(), 5200);
    }

    #[test]
    fn test_deadlines_strictly_increase() {
        for timing in [SpinTiming::normal(), SpinTiming::turbo(), SpinTiming::studio()] {
            for i in 1..STOP_COUNT {
                assert!(timing.stop_delay_ms(i) > timing.stop_delay_ms(i - 1));
            }
        }
    }

    #[test]
    fn test_scaled() {
        let half = SpinTiming::normal().scaled(0.5);
        assert_eq!(half.base_delay_ms, 1000);
        assert_eq!(half.step_delay_ms, 200);
    }
}
