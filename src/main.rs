//! Wave Shooter headless driver
//!
//! Runs one autopilot match to completion and prints the final snapshot as
//! JSON. Usage: `wave-shooter [settings.json] [--seed N] [--max-ticks N]`

use std::error::Error;

use wave_shooter::MatchSettings;
use wave_shooter::consts::TICK_RATE;
use wave_shooter::sim::{MatchContext, autopilot_input, tick};

/// Ten minutes of simulated play
const DEFAULT_MAX_TICKS: u64 = 10 * 60 * TICK_RATE as u64;

struct Args {
    settings_path: Option<String>,
    seed: u64,
    max_ticks: u64,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        settings_path: None,
        seed: 0x5eed,
        max_ticks: DEFAULT_MAX_TICKS,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse()?;
            }
            "--max-ticks" => {
                let value = iter.next().ok_or("--max-ticks needs a value")?;
                args.max_ticks = value.parse()?;
            }
            _ => args.settings_path = Some(arg),
        }
    }

    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let settings = match &args.settings_path {
        Some(path) => MatchSettings::load(path)?,
        None => MatchSettings::default(),
    };

    let mut ctx = MatchContext::new(settings, args.seed)?;
    log::info!(
        "Match started: seed {}, {} waves, arena {}x{}",
        args.seed,
        ctx.waves.wave_count(),
        ctx.arena.width,
        ctx.arena.height
    );

    while !ctx.state.is_terminal() && ctx.tick < args.max_ticks {
        let input = autopilot_input(&ctx);
        tick(&mut ctx, &input);

        if ctx.tick % TICK_RATE as u64 == 0 {
            log::debug!(
                "t={}s health={} wave={} enemies={} projectiles={}",
                ctx.tick / TICK_RATE as u64,
                ctx.player.health,
                ctx.waves.wave_index() + 1,
                ctx.enemies.len(),
                ctx.projectiles.len()
            );
        }
    }

    if !ctx.state.is_terminal() {
        log::warn!("Stopped after {} ticks without a result", ctx.tick);
    }

    println!("{}", serde_json::to_string_pretty(&ctx.snapshot())?);
    Ok(())
}
