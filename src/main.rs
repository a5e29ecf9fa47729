//! Disc Soccer headless demo
//!
//! Plays a computer-vs-computer match and prints the final scoreboard as
//! JSON.
//!
//! Usage: `disc-soccer [arcade|pitch|config.json] [seed] [max_ticks]`

use std::path::Path;

use serde::Serialize;

use disc_soccer::consts::SIM_DT;
use disc_soccer::sim::{AutoPlayer, GameEvent, MatchState, tick};
use disc_soccer::{MatchConfig, Scoreboard, config::Preset};

/// First side to this many goals wins
const GOALS_TO_WIN: u32 = 3;
const DEFAULT_SEED: u64 = 12345;
/// Ten minutes of play at the fixed tick rate
const DEFAULT_MAX_TICKS: u64 = 36_000;

#[derive(Serialize)]
struct MatchSummary<'a> {
    seed: u64,
    ticks: u64,
    seconds: f32,
    shots: u32,
    scoreboard: &'a Scoreboard,
}

fn load_config(arg: Option<&str>) -> MatchConfig {
    let Some(arg) = arg else {
        return MatchConfig::default();
    };
    if let Some(preset) = Preset::from_str(arg) {
        log::info!("Using {} preset", preset.as_str());
        return MatchConfig::from_preset(preset);
    }
    match MatchConfig::load(Path::new(arg)) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}; falling back to arcade preset", err);
            MatchConfig::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Disc Soccer (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str));
    let seed = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let max_ticks = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_TICKS);

    let mut state = MatchState::new(config);
    let mut player = AutoPlayer::new(seed);
    let mut shots = 0u32;

    while state.time_ticks < max_ticks {
        let input = player.next_input(&state);
        tick(&mut state, &input);

        for event in state.drain_events() {
            if let GameEvent::ShotTaken { .. } = event {
                shots += 1;
            }
        }

        let board = &state.scoreboard;
        if board.home >= GOALS_TO_WIN || board.away >= GOALS_TO_WIN {
            break;
        }
    }

    match state.scoreboard.leader() {
        Some(side) => log::info!("{} wins {}", side.as_str(), state.scoreboard.summary()),
        None => log::info!("Draw {}", state.scoreboard.summary()),
    }

    let summary = MatchSummary {
        seed,
        ticks: state.time_ticks,
        seconds: state.time_ticks as f32 * SIM_DT,
        shots,
        scoreboard: &state.scoreboard,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to serialize summary: {}", err),
    }
}
