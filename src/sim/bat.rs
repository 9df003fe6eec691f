//! The player bat - movement, echo cadence, animation
//!
//! The bat never dies; it steers around the play area and periodically emits
//! a rippling triple echo. Collision resolution against moths lives in the
//! tick so it can reach the scoreboard and screen effects.

use glam::Vec2;

use crate::consts::*;
use crate::sim::echo::Echo;

/// Movement directions the input feed can press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The player-controlled bat
#[derive(Debug, Clone)]
pub struct Bat {
    /// Top-left corner
    pub pos: Vec2,
    /// Animation frame index
    pub frame: usize,
    last_frame_ms: u64,
    last_echo_ms: u64,
}

impl Bat {
    pub fn new(pos: Vec2, now_ms: u64) -> Self {
        Self {
            pos,
            frame: 0,
            last_frame_ms: now_ms,
            last_echo_ms: now_ms,
        }
    }

    /// Center point, where echoes originate
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BAT_SIZE / 2.0)
    }

    /// The collision probe: the bat's far corner
    ///
    /// The original game tested moths against pos + size rather than the
    /// center, so the effective hitbox is offset down-right by one bat.
    /// Preserved as-is.
    pub fn probe(&self) -> Vec2 {
        self.pos + Vec2::splat(BAT_SIZE)
    }

    /// Step in a direction, or nudge 1 unit back inward at the boundary
    ///
    /// A full step happens only when it stays inside the play area; anything
    /// else is a 1-unit inward nudge. Deliberately not a hard clamp - the bat
    /// visibly bounces along an edge it is pushed into.
    pub fn step(&mut self, dir: Direction) {
        match dir {
            Direction::Up => {
                if self.pos.y - BAT_STEP > 0.0 {
                    self.pos.y -= BAT_STEP;
                } else {
                    self.pos.y += 1.0;
                }
            }
            Direction::Down => {
                if self.pos.y + BAT_STEP < PLAY_HEIGHT - BAT_SIZE {
                    self.pos.y += BAT_STEP;
                } else {
                    self.pos.y -= 1.0;
                }
            }
            Direction::Left => {
                if self.pos.x - BAT_STEP > 0.0 {
                    self.pos.x -= BAT_STEP;
                } else {
                    self.pos.x += 1.0;
                }
            }
            Direction::Right => {
                if self.pos.x + BAT_STEP < PLAY_WIDTH - BAT_SIZE {
                    self.pos.x += BAT_STEP;
                } else {
                    self.pos.x -= 1.0;
                }
            }
        }
    }

    /// Emit the rippling triple pulse if the cooldown has elapsed
    ///
    /// Returns the new echoes, staggered by {0, gap, 1.5 * gap}, or None
    /// while the cooldown is still running.
    pub fn try_emit(&mut self, now_ms: u64) -> Option<[Echo; 3]> {
        if now_ms.saturating_sub(self.last_echo_ms) <= ECHO_COOLDOWN_MS {
            return None;
        }
        self.last_echo_ms = now_ms;

        let origin = self.center();
        Some([
            Echo::new(origin, now_ms, 0),
            Echo::new(origin, now_ms, ECHO_GAP_MS),
            Echo::new(origin, now_ms, ECHO_GAP_MS * 3 / 2),
        ])
    }

    /// Advance the wing-flap animation
    pub fn animate(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_frame_ms) > FRAME_MS {
            self.last_frame_ms = now_ms;
            self.frame = (self.frame + 1) % FRAME_COUNT;
        }
    }
}
