//! Moth Hunt entry point
//!
//! Input devices and a real window live outside this crate, so the binary
//! runs a headless demo session: a small autopilot feeds the per-tick action
//! snapshot, the sim advances at the fixed tick rate on a manual clock, and
//! the final scoreboard goes out as one JSON summary line.

use serde::Serialize;

use moth_hunt::consts::*;
use moth_hunt::platform::{Clock, ManualClock};
use moth_hunt::render::build_frame;
use moth_hunt::sim::{GameState, MothKind, TickInput, tick};
use moth_hunt::settings::Settings;

/// Demo length in simulated seconds
const DEMO_SECONDS: u64 = 60;

#[derive(Serialize)]
struct SessionSummary {
    seed: u64,
    ticks: u64,
    total_kills: u32,
    kills: Vec<(String, u32)>,
    probs: Vec<(String, f32)>,
}

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Moth Hunt demo session, seed {seed}");

    let clock = ManualClock::new();
    let mut state = GameState::new(seed, clock.now_ms());
    let settings = Settings::default();

    let total_ticks = DEMO_SECONDS * TICK_HZ as u64;
    for _ in 0..total_ticks {
        clock.advance(TICK_MS);
        let now = clock.now_ms();
        let input = autopilot(&state);
        tick(&mut state, &input, now);

        // Exercise the frame description the way a backend would
        let frame = build_frame(&state, &settings);
        log::trace!("tick {}: {} draw commands", state.time_ticks, frame.len());
    }

    let summary = SessionSummary {
        seed,
        ticks: state.time_ticks,
        total_kills: state.scoreboard.total_kills(),
        kills: MothKind::ALL
            .iter()
            .map(|k| (k.as_str().to_string(), state.scoreboard.kills(*k)))
            .collect(),
        probs: MothKind::ALL
            .iter()
            .map(|k| (k.as_str().to_string(), state.scoreboard.prob(*k)))
            .collect(),
    };
    match serde_json::to_string(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("summary serialization failed: {err}"),
    }
}

/// Keep the echo key held and chase the nearest showing moth
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput {
        echo: true,
        ..TickInput::default()
    };

    let probe = state.bat.probe();
    let target = state
        .moths
        .iter()
        .filter(|m| m.showing && !m.dead)
        .min_by(|a, b| {
            a.center()
                .distance(probe)
                .total_cmp(&b.center().distance(probe))
        });

    if let Some(moth) = target {
        let to_moth = moth.center() - probe;
        if to_moth.x.abs() > BAT_STEP {
            if to_moth.x < 0.0 {
                input.left = true;
            } else {
                input.right = true;
            }
        }
        if to_moth.y.abs() > BAT_STEP {
            if to_moth.y < 0.0 {
                input.up = true;
            } else {
                input.down = true;
            }
        }
    }

    input
}
