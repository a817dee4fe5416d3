//! ReelBox terminal demo
//!
//! Spins the 3×3 machine and redraws the grid as each reel stops. Cells
//! still rolling are animated through the strip's window symbol; winning
//! cells are bracketed once the spin completes.

use std::sync::Arc;

use clap::Parser;
use tokio::time::Instant;

use rb_core::{GRID_SIZE, JackpotLine, LineKind, SpinTiming, is_winning_cell};
use rb_engine::{CueSink, LogCueSink, SpinController, SpinEvent};
use rb_render::ReelAnimation;

#[derive(Parser, Debug)]
#[command(name = "reelbox", about = "Animated 3×3 slot machine in your terminal")]
struct Args {
    /// Seed the RNG for reproducible spins
    #[arg(long)]
    seed: Option<u64>,

    /// Number of spins to run
    #[arg(long, default_value_t = 1)]
    spins: u32,

    /// Turbo timing (500 ms spin-up, 100 ms between stops)
    #[arg(long)]
    turbo: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let timing = if args.turbo {
        SpinTiming::turbo()
    } else {
        SpinTiming::normal()
    };
    let cue: Arc<dyn CueSink> = Arc::new(LogCueSink);
    let mut controller = match args.seed {
        Some(seed) => SpinController::with_seed(timing, cue, seed),
        None => SpinController::new(timing, cue),
    };
    let anim = ReelAnimation::default();

    for spin in 1..=args.spins {
        println!("🎰 spin {spin}");
        let mut events = controller.subscribe();
        let started = Instant::now();
        controller.start_spin();

        loop {
            match events.recv().await {
                Ok(SpinEvent::SpinStarted) => {}
                Ok(SpinEvent::ReelStopped { .. }) => {
                    let elapsed = started.elapsed().as_millis() as u64;
                    print_grid(&controller, &anim, elapsed, &[]);
                }
                Ok(SpinEvent::SpinCompleted { lines }) => {
                    let elapsed = started.elapsed().as_millis() as u64;
                    print_grid(&controller, &anim, elapsed, &lines);
                    if lines.is_empty() {
                        println!("no win");
                    } else {
                        for line in &lines {
                            println!("JACKPOT: {}", describe(line));
                        }
                    }
                    break;
                }
                Err(err) => {
                    log::warn!("event stream ended: {err}");
                    break;
                }
            }
        }
    }
}

fn print_grid(
    controller: &SpinController,
    anim: &ReelAnimation,
    elapsed_ms: u64,
    lines: &[JackpotLine],
) {
    let grid = controller.grid();
    for row in 0..GRID_SIZE {
        let mut out = String::new();
        for col in 0..GRID_SIZE {
            let cell = match grid.get(row, col) {
                Some(symbol) => symbol.glyph().to_string(),
                // Still rolling: show the strip symbol passing the window
                None => format!("~{}", anim.window_symbol(elapsed_ms)),
            };
            if is_winning_cell(lines, row, col) {
                out.push_str(&format!("[{cell}] "));
            } else {
                out.push_str(&format!(" {cell}  "));
            }
        }
        println!("{out}");
    }
    println!();
}

fn describe(line: &JackpotLine) -> String {
    match line.kind {
        LineKind::Row => format!("row {}", line.index + 1),
        LineKind::Col => format!("column {}", line.index + 1),
        LineKind::Diag if line.index == 0 => "main diagonal".to_string(),
        LineKind::Diag => "anti-diagonal".to_string(),
    }
}
