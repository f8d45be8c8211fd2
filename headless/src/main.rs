//! Headless host loop for the Pong core.
//!
//! Reads input, samples the frame clock, advances the match and hands the
//! snapshot to a text render adapter, once per frame.

mod render;
mod script;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Config, FrameClock, Match, MonotonicTime};

use render::TextRenderer;
use script::ScriptedInput;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// JSON file overriding any subset of the default config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames to run before stopping
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Target frame rate
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::new(),
    };
    config.validate().context("invalid config")?;
    Ok(config)
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    log::info!(
        "running {} frames at {} fps, first to {}",
        args.frames,
        args.fps,
        config.win_score
    );

    let mut game = Match::new(config);
    let mut clock = FrameClock::new(MonotonicTime::new());
    let mut input = ScriptedInput::new();
    let mut renderer = TextRenderer::new(std::io::stdout().lock());
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(args.fps));

    for frame in 0..args.frames {
        let keys = input.poll(frame);
        let time = clock.tick();
        let events = game.advance(&keys, time.dt);
        renderer.draw(&game.snapshot(), &events)?;

        if let Some(winner) = game.winner() {
            log::info!("{winner:?} wins after {:.2}s", time.now);
            break;
        }
        std::thread::sleep(frame_time);
    }

    renderer.finish()?;
    Ok(())
}
