//! Spin lifecycle events

use serde::{Deserialize, Serialize};

use rb_core::{JackpotLine, Symbol};

/// Event emitted by the controller as a spin progresses.
///
/// Broadcast to subscribers in deadline order: one `SpinStarted`, nine
/// `ReelStopped`, one `SpinCompleted` per spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpinEvent {
    /// A new spin was triggered and state was reset
    SpinStarted,
    /// One cell finalized on its predetermined symbol
    ReelStopped {
        row: usize,
        col: usize,
        symbol: Symbol,
        /// Position in the stop order (0..=8)
        step: usize,
    },
    /// The last reel stopped and wins were evaluated
    SpinCompleted { lines: Vec<JackpotLine> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_roundtrip() {
        let event = SpinEvent::ReelStopped {
            row: 1,
            col: 2,
            symbol: Symbol::Bell,
            step: 5,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SpinEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
