//! Audio cue seam
//!
//! The controller never talks to an audio backend directly; it posts cues
//! through a [`CueSink`] and swallows rejections (platform autoplay
//! restrictions are expected, not errors).

use rb_core::RbResult;

/// Backend seam for the jackpot cue sound.
///
/// `prime` is called inside the spin trigger (a user-gesture context) as a
/// play-then-stop attempt so later playback is permitted; `play` restarts
/// the cue from the beginning on a jackpot. Implementations may fail with
/// [`rb_core::RbError::Cue`]; the controller ignores those failures.
pub trait CueSink: Send + Sync {
    fn prime(&self) -> RbResult<()>;
    fn play(&self) -> RbResult<()>;
}

/// Discards all cues
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCueSink;

impl CueSink for NullCueSink {
    fn prime(&self) -> RbResult<()> {
        Ok(())
    }

    fn play(&self) -> RbResult<()> {
        Ok(())
    }
}

/// Logs cues instead of playing them; stands in for a platform audio
/// backend in headless front-ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCueSink;

impl CueSink for LogCueSink {
    fn prime(&self) -> RbResult<()> {
        log::debug!("cue primed");
        Ok(())
    }

    fn play(&self) -> RbResult<()> {
        log::info!("🔊 jackpot cue");
        Ok(())
    }
}
