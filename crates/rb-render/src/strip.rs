//! Reel strip geometry and offset computation

use serde::{Deserialize, Serialize};

use rb_core::Symbol;

/// Animation phase of one reel cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReelPhase {
    /// Free-running cyclic scroll
    Rolling,
    /// Pinned to the target symbol
    Stopped,
}

/// One rendered frame of a reel cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReelFrame {
    pub phase: ReelPhase,
    /// Vertical strip offset in pixels; the cell window shows the strip
    /// slice at `-offset`
    pub offset: f32,
    /// Symbol currently aligned with the window (for text front-ends)
    pub symbol: Symbol,
}

/// Deterministic animation model for one reel cell.
///
/// The strip holds the canonical symbol list twice; while rolling, the
/// offset wraps modulo one strip length, so the second copy slides into
/// view exactly as the first scrolls out and the loop has no seam. When
/// stopped, the offset is pinned to `-(target index × cell height)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReelAnimation {
    /// Height of one symbol cell (px)
    pub cell_height: f32,
    /// Time to scroll through one full strip copy (ms)
    pub cycle_ms: u64,
}

impl ReelAnimation {
    pub fn new(cell_height: f32, cycle_ms: u64) -> Self {
        Self {
            cell_height,
            cycle_ms: cycle_ms.max(1),
        }
    }

    /// The rendered strip: the symbol list duplicated once
    pub fn strip() -> [Symbol; Symbol::COUNT * 2] {
        let mut strip = [Symbol::ALL[0]; Symbol::COUNT * 2];
        for (i, slot) in strip.iter_mut().enumerate() {
            *slot = Symbol::ALL[i % Symbol::COUNT];
        }
        strip
    }

    /// Scroll distance of one strip copy (px)
    pub fn strip_height(&self) -> f32 {
        self.cell_height * Symbol::COUNT as f32
    }

    /// Offset that pins `target` into the window. Deterministic: the same
    /// symbol always yields the same offset.
    pub fn pinned_offset(&self, target: Symbol) -> f32 {
        -(target.index() as f32) * self.cell_height
    }

    /// Free-running offset at `elapsed_ms` since the spin started; wraps
    /// seamlessly every `cycle_ms`
    pub fn rolling_offset(&self, elapsed_ms: u64) -> f32 {
        let phase = (elapsed_ms % self.cycle_ms) as f32 / self.cycle_ms as f32;
        -phase * self.strip_height()
    }

    /// The frame for one cell: pinned when stopped, cycling otherwise
    pub fn frame(&self, stop: bool, target: Symbol, elapsed_ms: u64) -> ReelFrame {
        if stop {
            ReelFrame {
                phase: ReelPhase::Stopped,
                offset: self.pinned_offset(target),
                symbol: target,
            }
        } else {
            ReelFrame {
                phase: ReelPhase::Rolling,
                offset: self.rolling_offset(elapsed_ms),
                symbol: self.window_symbol(elapsed_ms),
            }
        }
    }

    /// Symbol aligned with the window while rolling (text front-ends draw
    /// this instead of a pixel offset)
    pub fn window_symbol(&self, elapsed_ms: u64) -> Symbol {
        let step_ms = (self.cycle_ms / Symbol::COUNT as u64).max(1);
        let index = (elapsed_ms / step_ms) as usize % Symbol::COUNT;
        Symbol::ALL[index]
    }
}

impl Default for ReelAnimation {
    fn default() -> Self {
        // 60 px cells, one full strip pass per 600 ms
        Self::new(60.0, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_offset_deterministic_per_symbol() {
        let anim = ReelAnimation::default();
        for sym in Symbol::ALL {
            assert_eq!(anim.pinned_offset(sym), anim.pinned_offset(sym));
            assert_eq!(anim.pinned_offset(sym), -(sym.index() as f32) * 60.0);
        }
        // Distinct symbols land on distinct offsets
        assert_ne!(
            anim.pinned_offset(Symbol::Cherry),
            anim.pinned_offset(Symbol::Seven)
        );
    }

    #[test]
    fn test_rolling_resumes_from_zero() {
        let anim = ReelAnimation::default();
        assert_eq!(anim.rolling_offset(0), 0.0);
    }

    #[test]
    fn test_rolling_wraps_seamlessly() {
        let anim = ReelAnimation::default();
        // One full cycle later the offset is identical
        assert_eq!(anim.rolling_offset(150), anim.rolling_offset(150 + 600));
        assert_eq!(anim.rolling_offset(600), anim.rolling_offset(0));
        // Offset never exceeds one strip copy
        for t in (0..3000).step_by(37) {
            let offset = anim.rolling_offset(t);
            assert!(offset <= 0.0 && offset > -anim.strip_height());
        }
    }

    #[test]
    fn test_strip_is_duplicated_symbol_list() {
        let strip = ReelAnimation::strip();
        assert_eq!(strip.len(), Symbol::COUNT * 2);
        for (i, sym) in strip.iter().enumerate() {
            assert_eq!(*sym, Symbol::ALL[i % Symbol::COUNT]);
        }
    }

    #[test]
    fn test_frame_phases() {
        let anim = ReelAnimation::default();

        let rolling = anim.frame(false, Symbol::Bell, 250);
        assert_eq!(rolling.phase, ReelPhase::Rolling);

        let stopped = anim.frame(true, Symbol::Bell, 250);
        assert_eq!(stopped.phase, ReelPhase::Stopped);
        assert_eq!(stopped.symbol, Symbol::Bell);
        assert_eq!(stopped.offset, anim.pinned_offset(Symbol::Bell));

        // Elapsed time is irrelevant once stopped
        assert_eq!(stopped, anim.frame(true, Symbol::Bell, 99_999));
    }

    #[test]
    fn test_window_symbol_cycles_through_all() {
        let anim = ReelAnimation::default();
        let step = anim.cycle_ms / Symbol::COUNT as u64;
        for (i, sym) in Symbol::ALL.iter().enumerate() {
            assert_eq!(anim.window_symbol(i as u64 * step), *sym);
        }
        // Wraps back to the first symbol
        assert_eq!(anim.window_symbol(anim.cycle_ms), Symbol::ALL[0]);
    }
}
