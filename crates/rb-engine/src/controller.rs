//! Spin controller

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::prelude::*;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use rb_core::{
    FinalSymbols, Grid, JackpotLine, SpinTiming, StoppedMask, Symbol, detect_lines,
    is_winning_cell,
};

use crate::cue::CueSink;
use crate::event::SpinEvent;
use crate::schedule::StopSchedule;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shared spin state. Written only by `start_spin` and the controller's own
/// spin task; read through snapshot accessors.
#[derive(Debug)]
struct SpinState {
    grid: Grid,
    stopped: StoppedMask,
    final_symbols: FinalSymbols,
    lines: Vec<JackpotLine>,
    rolling: bool,
}

impl SpinState {
    fn idle() -> Self {
        Self {
            grid: Grid::unset(),
            stopped: StoppedMask::default(),
            final_symbols: FinalSymbols::default(),
            lines: Vec::new(),
            rolling: false,
        }
    }
}

/// Orchestrates one spin cycle from trigger to win evaluation.
///
/// At most one spin is active at a time: while `rolling` is set, further
/// triggers are no-ops. The staggered stop events run on a single tokio
/// task owned by the controller and aborted on drop, so a torn-down
/// controller never suffers a stale timer callback.
pub struct SpinController {
    state: Arc<Mutex<SpinState>>,
    timing: SpinTiming,
    rng: StdRng,
    cue: Arc<dyn CueSink>,
    events: broadcast::Sender<SpinEvent>,
    spin_task: Option<JoinHandle<()>>,
    forced: Option<FinalSymbols>,
}

impl SpinController {
    /// Create a controller with an OS-seeded RNG
    pub fn new(timing: SpinTiming, cue: Arc<dyn CueSink>) -> Self {
        Self::with_rng(timing, cue, StdRng::from_os_rng())
    }

    /// Create with a fixed seed for reproducible outcomes
    pub fn with_seed(timing: SpinTiming, cue: Arc<dyn CueSink>, seed: u64) -> Self {
        Self::with_rng(timing, cue, StdRng::seed_from_u64(seed))
    }

    fn with_rng(timing: SpinTiming, cue: Arc<dyn CueSink>, rng: StdRng) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(SpinState::idle())),
            timing,
            rng,
            cue,
            events,
            spin_task: None,
            forced: None,
        }
    }

    /// Reseed the RNG for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Stage a forced outcome for the next spin (demos and tests)
    pub fn force_next(&mut self, symbols: FinalSymbols) {
        self.forced = Some(symbols);
    }

    /// Subscribe to spin lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<SpinEvent> {
        self.events.subscribe()
    }

    /// Trigger a spin. Returns `false` without any state change if a spin
    /// is already in progress.
    ///
    /// Resets all per-spin state, samples the full outcome up front (nine
    /// independent uniform draws from the six-symbol set), then schedules
    /// the staggered stop events. Must be called from within a tokio
    /// runtime.
    pub fn start_spin(&mut self) -> bool {
        {
            let mut state = self.state.lock();
            if state.rolling {
                log::debug!("spin trigger ignored: already rolling");
                return false;
            }

            state.lines.clear();
            state.stopped.reset();
            state.grid.reset();
            state.final_symbols = self.forced.take().unwrap_or_else(|| {
                let rng = &mut self.rng;
                FinalSymbols::from_fn(|_, _| {
                    Symbol::ALL[rng.random_range(0..Symbol::COUNT)]
                })
            });
            state.rolling = true;
        }

        // Prime inside the trigger (user-gesture context); rejection is
        // expected under autoplay restrictions and not surfaced.
        if let Err(err) = self.cue.prime() {
            log::debug!("cue prime rejected: {err}");
        }

        let _ = self.events.send(SpinEvent::SpinStarted);

        let schedule = StopSchedule::new(&self.timing);
        let started = Instant::now();
        let state = Arc::clone(&self.state);
        let cue = Arc::clone(&self.cue);
        let events = self.events.clone();

        self.spin_task = Some(tokio::spawn(async move {
            run_stop_sequence(schedule, started, state, cue, events).await;
        }));

        log::debug!(
            "spin started, completes in {} ms",
            self.timing.total_duration_ms()
        );
        true
    }

    /// Is a spin in progress? Drives the lever's enabled/disabled state.
    pub fn is_rolling(&self) -> bool {
        self.state.lock().rolling
    }

    /// Snapshot of the live grid
    pub fn grid(&self) -> Grid {
        self.state.lock().grid
    }

    /// Snapshot of the stopped mask
    pub fn stopped(&self) -> StoppedMask {
        self.state.lock().stopped
    }

    /// The predetermined outcome of the current/last spin
    pub fn final_symbols(&self) -> FinalSymbols {
        self.state.lock().final_symbols
    }

    /// Lines matched by the last completed spin; empty mid-spin
    pub fn jackpot_lines(&self) -> Vec<JackpotLine> {
        self.state.lock().lines.clone()
    }

    /// Should this cell be highlighted?
    pub fn is_winning_cell(&self, row: usize, col: usize) -> bool {
        is_winning_cell(&self.state.lock().lines, row, col)
    }

    pub fn timing(&self) -> &SpinTiming {
        &self.timing
    }
}

impl Drop for SpinController {
    fn drop(&mut self) {
        // Pending stop events must not outlive the controller
        if let Some(task) = self.spin_task.take() {
            task.abort();
        }
    }
}

/// Applies the scheduled stop events in order. The final stop also clears
/// the rolling flag, evaluates wins, and fires the jackpot cue.
async fn run_stop_sequence(
    schedule: StopSchedule,
    started: Instant,
    state: Arc<Mutex<SpinState>>,
    cue: Arc<dyn CueSink>,
    events: broadcast::Sender<SpinEvent>,
) {
    let last_step = schedule.last_step();

    for stop in schedule.steps() {
        sleep_until(started + Duration::from_millis(stop.deadline_ms)).await;

        let symbol;
        let mut completed: Option<Vec<JackpotLine>> = None;
        {
            let mut state = state.lock();
            symbol = state.final_symbols.get(stop.row, stop.col);
            state.stopped.mark(stop.row, stop.col);
            state.grid.set(stop.row, stop.col, symbol);

            if stop.step == last_step {
                state.rolling = false;
                state.lines = detect_lines(&state.final_symbols);
                completed = Some(state.lines.clone());
            }
        }

        let _ = events.send(SpinEvent::ReelStopped {
            row: stop.row,
            col: stop.col,
            symbol,
            step: stop.step,
        });

        if let Some(lines) = completed {
            if !lines.is_empty() {
                log::info!("jackpot: {} line(s)", lines.len());
                if let Err(err) = cue.play() {
                    log::debug!("jackpot cue rejected: {err}");
                }
            }
            let _ = events.send(SpinEvent::SpinCompleted { lines });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::NullCueSink;
    use rb_core::{GRID_SIZE, RbError, RbResult, STOP_COUNT};

    /// Records prime/play calls
    #[derive(Default)]
    struct RecordingCueSink {
        calls: Mutex<Vec<&'static str>>,
    }

    impl CueSink for RecordingCueSink {
        fn prime(&self) -> RbResult<()> {
            self.calls.lock().push("prime");
            Ok(())
        }

        fn play(&self) -> RbResult<()> {
            self.calls.lock().push("play");
            Ok(())
        }
    }

    /// Rejects every playback attempt
    struct RejectingCueSink;

    impl CueSink for RejectingCueSink {
        fn prime(&self) -> RbResult<()> {
            Err(RbError::Cue("no user gesture".into()))
        }

        fn play(&self) -> RbResult<()> {
            Err(RbError::Cue("no user gesture".into()))
        }
    }

    fn controller_with(cue: Arc<dyn CueSink>) -> SpinController {
        SpinController::with_seed(SpinTiming::normal(), cue, 42)
    }

    async fn run_to_completion(controller: &SpinController) {
        let total = controller.timing().total_duration_ms();
        tokio::time::sleep(Duration::from_millis(total + 10)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_spin_completes_with_grid_equal_to_final_symbols() {
        let mut controller = controller_with(Arc::new(NullCueSink));
        assert!(controller.start_spin());
        assert!(controller.is_rolling());

        let final_symbols = controller.final_symbols();
        run_to_completion(&controller).await;

        assert!(!controller.is_rolling());
        assert!(controller.stopped().all_stopped());
        let grid = controller.grid();
        assert!(grid.is_full());
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                assert_eq!(grid.get(r, c), Some(final_symbols.get(r, c)));
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cells_stop_in_schedule_order() {
        let mut controller = controller_with(Arc::new(NullCueSink));
        let mut rx = controller.subscribe();
        controller.start_spin();
        run_to_completion(&controller).await;

        assert_eq!(rx.recv().await.unwrap(), SpinEvent::SpinStarted);
        for expected_step in 0..STOP_COUNT {
            match rx.recv().await.unwrap() {
                SpinEvent::ReelStopped { step, row, col, .. } => {
                    assert_eq!(step, expected_step);
                    assert_eq!((row, col), crate::schedule::STOP_ORDER[expected_step]);
                }
                other => panic!("expected ReelStopped, got {other:?}"),
            }
        }
        assert!(matches!(
            rx.recv().await.unwrap(),
            SpinEvent::SpinCompleted { .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrigger_while_rolling_is_a_no_op() {
        let mut controller = controller_with(Arc::new(NullCueSink));
        assert!(controller.start_spin());
        let outcome = controller.final_symbols();

        // Mid-spin: some reels stopped, some still rolling
        tokio::time::sleep(Duration::from_millis(3000)).await;
        let stopped_before = controller.stopped();
        assert!(controller.is_rolling());

        assert!(!controller.start_spin());
        assert_eq!(controller.final_symbols(), outcome);
        assert_eq!(controller.stopped(), stopped_before);

        run_to_completion(&controller).await;
        assert_eq!(controller.final_symbols(), outcome);
        assert!(controller.stopped().all_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_spins_reproduce_outcomes() {
        let mut a = SpinController::with_seed(SpinTiming::turbo(), Arc::new(NullCueSink), 7);
        let mut b = SpinController::with_seed(SpinTiming::turbo(), Arc::new(NullCueSink), 7);
        a.start_spin();
        b.start_spin();
        assert_eq!(a.final_symbols(), b.final_symbols());
    }

    #[tokio::test(start_paused = true)]
    async fn test_forced_jackpot_fires_prime_then_play() {
        let cue = Arc::new(RecordingCueSink::default());
        let mut controller = controller_with(cue.clone());
        controller.force_next(FinalSymbols::filled(Symbol::Seven));
        controller.start_spin();
        run_to_completion(&controller).await;

        assert_eq!(controller.jackpot_lines().len(), 8);
        assert!(controller.is_winning_cell(1, 1));
        assert_eq!(*cue.calls.lock(), vec!["prime", "play"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_losing_spin_does_not_play_cue() {
        let cue = Arc::new(RecordingCueSink::default());
        let mut controller = controller_with(cue.clone());
        controller.force_next(FinalSymbols::from_fn(|r, c| {
            // Latin-square layout: no line holds three identical symbols
            Symbol::ALL[(r + c * 2) % Symbol::COUNT]
        }));
        controller.start_spin();
        run_to_completion(&controller).await;

        assert!(controller.jackpot_lines().is_empty());
        assert_eq!(*cue.calls.lock(), vec!["prime"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cue_rejection_is_swallowed() {
        let mut controller = controller_with(Arc::new(RejectingCueSink));
        controller.force_next(FinalSymbols::filled(Symbol::Cherry));
        assert!(controller.start_spin());
        run_to_completion(&controller).await;

        // Spin still completes and reports its lines
        assert!(!controller.is_rolling());
        assert_eq!(controller.jackpot_lines().len(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_jackpot_lines_cleared_on_new_spin() {
        let mut controller = controller_with(Arc::new(NullCueSink));
        controller.force_next(FinalSymbols::filled(Symbol::Bell));
        controller.start_spin();
        run_to_completion(&controller).await;
        assert!(!controller.jackpot_lines().is_empty());

        controller.start_spin();
        assert!(controller.jackpot_lines().is_empty());
        assert_eq!(controller.stopped().count(), 0);
        run_to_completion(&controller).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_stops() {
        let mut controller = controller_with(Arc::new(NullCueSink));
        let mut rx = controller.subscribe();
        controller.start_spin();
        drop(controller);

        // Well past the would-be completion time
        tokio::time::sleep(Duration::from_millis(10_000)).await;

        assert_eq!(rx.recv().await.unwrap(), SpinEvent::SpinStarted);
        // Sender side is gone with the controller; no stop event ever fired
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Closed)
        ));
    }
}
