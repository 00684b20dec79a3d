//! Dodge Bomb headless runner
//!
//! Drives the simulation with the flee bot and reports how the run ended.
//! Pacing at the configured tick rate is left to a real frontend.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dodge_bomb::SimConfig;
use dodge_bomb::autopilot::flee_input;
use dodge_bomb::presentation::GameContext;
use dodge_bomb::sim::{SimulationState, StepStatus, tick};

#[derive(Parser, Debug)]
#[command(name = "dodge-bomb", about = "Run the dodge-bomb simulation headless")]
struct Args {
    /// Seed for the bomb spawn point (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many frames even if the run has not ended
    #[arg(long, default_value_t = 100_000)]
    frames: u64,

    /// Disable the clear threshold
    #[arg(long)]
    endless: bool,

    /// Print one JSON snapshot per frame
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SimConfig::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::reference(),
    };
    if args.endless {
        config.clear_frames = None;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let context = GameContext::new(&config);
    let mut state = SimulationState::new(config, args.seed).context("starting simulation")?;
    log::info!("{} starting (seed {})", context.caption, state.seed);

    let mut status = StepStatus::Continuing;
    while state.frames < args.frames {
        let input = flee_input(&state);
        status = tick(&mut state, &input);
        if args.json {
            println!("{}", serde_json::to_string(&state.snapshot())?);
        }
        if status.is_terminal() {
            break;
        }
    }

    let secs = state.config.frames_to_secs(state.frames);
    match context.end_screen(status) {
        Some(screen) => {
            for line in &screen.lines {
                println!("{}", line.text);
            }
        }
        None => println!("Stopped at frame limit"),
    }
    println!(
        "{} ({} frames, {secs:.1}s at {} ticks/s)",
        context.hud_text(state.score).text,
        state.frames,
        context.tick_rate
    );
    Ok(())
}
