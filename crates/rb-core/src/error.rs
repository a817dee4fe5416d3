//! Error types for ReelBox

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum RbError {
    /// Audio cue playback was rejected (e.g. no user-gesture permission).
    /// Callers swallow this by design; it is never surfaced to the player.
    #[error("Cue playback rejected: {0}")]
    Cue(String),
}

/// Result type alias
pub type RbResult<T> = Result<T, RbError>;
