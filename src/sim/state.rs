//! Game session state
//!
//! One `GameState` owns every live entity, the scoreboard, the screen-effect
//! timers, and the session RNG. All mutation happens synchronously inside
//! `tick`; there are no ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::bat::Bat;
use crate::sim::echo::Echo;
use crate::sim::moth::Moth;
use crate::sim::scoreboard::Scoreboard;

/// The two session-wide powers a moth can fire off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffect {
    /// Jam power: the screen washes out white
    Blackout,
    /// Startle power: the screen floods red
    Redout,
}

/// Timed screen-effect flags
///
/// The two timers are independent and may run concurrently; re-triggering an
/// active effect does not extend it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenEffects {
    blackout_since_ms: Option<u64>,
    redout_since_ms: Option<u64>,
}

impl ScreenEffects {
    pub fn blackout_active(&self) -> bool {
        self.blackout_since_ms.is_some()
    }

    pub fn redout_active(&self) -> bool {
        self.redout_since_ms.is_some()
    }

    /// Either effect suppresses bat/moth collisions and normal rendering
    pub fn any_active(&self) -> bool {
        self.blackout_active() || self.redout_active()
    }

    pub fn trigger(&mut self, effect: ScreenEffect, now_ms: u64) {
        let slot = match effect {
            ScreenEffect::Blackout => &mut self.blackout_since_ms,
            ScreenEffect::Redout => &mut self.redout_since_ms,
        };
        if slot.is_none() {
            log::info!("screen effect {effect:?} triggered");
            *slot = Some(now_ms);
        }
    }

    /// Clear any effect whose window has run out
    pub fn expire(&mut self, now_ms: u64) {
        for slot in [&mut self.blackout_since_ms, &mut self.redout_since_ms] {
            if slot.is_some_and(|t| now_ms.saturating_sub(t) >= EFFECT_MS) {
                *slot = None;
            }
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for reproducibility
    pub seed: u64,
    /// Session RNG; every random decision flows through here
    pub rng: Pcg32,
    pub bat: Bat,
    /// Live moths; order carries no meaning
    pub moths: Vec<Moth>,
    /// Live echoes; order carries no meaning
    pub echoes: Vec<Echo>,
    pub scoreboard: Scoreboard,
    pub effects: ScreenEffects,
    /// Tick counter, for logging and demos
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh session; the bat starts bottom-center
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let bat_pos = Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT - 100.0);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bat: Bat::new(bat_pos, now_ms),
            moths: Vec::with_capacity(MAX_MOTHS),
            echoes: Vec::new(),
            scoreboard: Scoreboard::new(),
            effects: ScreenEffects::default(),
            time_ticks: 0,
        }
    }
}
