//! Gomoku GUI
//!
//! Play five-in-a-row against the computer or another player.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use gomoku::ui::{GameMode, GomokuApp, SessionConfig};
use gomoku::Stone;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Human against the computer
    Pve,
    /// Two humans on one board
    Pvp,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorArg {
    Black,
    White,
}

#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row on a 15x15 board")]
struct Args {
    #[arg(long, value_enum, default_value = "pve")]
    mode: ModeArg,

    /// Color the human plays against the computer
    #[arg(long, value_enum, default_value = "black")]
    human: ColorArg,

    /// Pause before the computer moves
    #[arg(long, default_value = "500")]
    ai_delay_ms: u64,

    /// Seed for the computer's tie-breaks (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        let human_color = match self.human {
            ColorArg::Black => Stone::Black,
            ColorArg::White => Stone::White,
        };
        let mode = match self.mode {
            ModeArg::Pve => GameMode::PvE { human_color },
            ModeArg::Pvp => GameMode::PvP,
        };
        SessionConfig {
            mode,
            ai_delay: Duration::from_millis(self.ai_delay_ms),
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.session_config();
    tracing::info!(mode = ?config.mode, delay_ms = args.ai_delay_ms, "starting gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
