//! Moths - the bat's prey, with per-kind evasive powers
//!
//! A single `Moth` record covers all four kinds; behavior differences live in
//! `MothKind` (movement speed, sprite set, and the `roll_power` table) rather
//! than a type hierarchy. A moth is in exactly one of alive-hidden,
//! alive-showing, dying, or removed; `showing` toggles with recent echo
//! contact and dying lasts a fixed 500 ms before removal.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::rect_contains;
use crate::sim::state::ScreenEffect;

/// The four moth kinds, in the fixed spawn-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MothKind {
    Plain,
    Fast,
    Startle,
    Jam,
}

impl MothKind {
    /// Stable ordering used by the scoreboard and the spawn table
    pub const ALL: [MothKind; 4] = [
        MothKind::Plain,
        MothKind::Fast,
        MothKind::Startle,
        MothKind::Jam,
    ];

    /// Index into the scoreboard arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            MothKind::Plain => 0,
            MothKind::Fast => 1,
            MothKind::Startle => 2,
            MothKind::Jam => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MothKind::Plain => "plain",
            MothKind::Fast => "fast",
            MothKind::Startle => "startle",
            MothKind::Jam => "jam",
        }
    }

    /// Movement step per tick
    pub fn speed(self) -> f32 {
        match self {
            MothKind::Fast => FAST_MOTH_SPEED,
            _ => MOTH_SPEED,
        }
    }

    /// Roll this kind's power against a death trigger
    ///
    /// Plain and Fast moths have no power. Startle and Jam succeed one time
    /// in three; on success the moth survives and the returned screen effect
    /// hits the whole session.
    pub fn roll_power(self, rng: &mut Pcg32) -> Option<ScreenEffect> {
        let effect = match self {
            MothKind::Plain | MothKind::Fast => return None,
            MothKind::Startle => ScreenEffect::Redout,
            MothKind::Jam => ScreenEffect::Blackout,
        };
        if rng.random_range(0..3) == 0 {
            Some(effect)
        } else {
            None
        }
    }
}

/// What came of a death trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathOutcome {
    /// Moth was already dead; nothing happened
    AlreadyDead,
    /// Moth is now dying; record the kill
    Died,
    /// Power fired; moth survives and the effect goes session-wide
    Survived(ScreenEffect),
}

/// One live (or dying) moth
#[derive(Debug, Clone)]
pub struct Moth {
    pub kind: MothKind,
    /// Top-left corner
    pub pos: Vec2,
    /// One of the 4 diagonal unit directions
    pub dir: Vec2,
    /// Visible to the bat (refreshed by echo contact)
    pub showing: bool,
    /// Timestamp of the last echo contact, None before first contact
    pub last_shown_ms: Option<u64>,
    /// Set once a death trigger lands
    pub dead: bool,
    /// When the moth started dying
    pub dead_since_ms: Option<u64>,
    /// Animation frame index
    pub frame: usize,
    last_frame_ms: u64,
}

impl Moth {
    pub fn new(kind: MothKind, pos: Vec2, dir: Vec2, now_ms: u64) -> Self {
        debug_assert!(dir.x.abs() == 1.0 && dir.y.abs() == 1.0);
        Self {
            kind,
            pos,
            dir,
            showing: false,
            last_shown_ms: None,
            dead: false,
            dead_since_ms: None,
            frame: 0,
            last_frame_ms: now_ms,
        }
    }

    /// Advance animation and movement; dead moths hold still
    pub fn advance(&mut self, now_ms: u64) {
        if self.dead {
            return;
        }

        if now_ms.saturating_sub(self.last_frame_ms) > FRAME_MS {
            self.last_frame_ms = now_ms;
            self.frame = (self.frame + 1) % FRAME_COUNT;
        }

        self.pos += self.dir * self.kind.speed();

        // Bounce off the play-area edges with a 2-unit inward nudge so a
        // moth can't stick to a wall
        if self.pos.x >= PLAY_WIDTH || self.pos.x <= 0.0 {
            self.dir.x = -self.dir.x;
            if self.pos.x <= 0.0 {
                self.pos.x += 2.0;
            } else {
                self.pos.x -= 2.0;
            }
        }
        if self.pos.y >= PLAY_HEIGHT || self.pos.y <= 0.0 {
            self.dir.y = -self.dir.y;
            if self.pos.y <= 0.0 {
                self.pos.y += 2.0;
            } else {
                self.pos.y -= 2.0;
            }
        }
    }

    /// Refresh the visibility window from the given echo-contact result
    pub fn refresh_visibility(&mut self, touched: bool, now_ms: u64) {
        if touched {
            self.last_shown_ms = Some(now_ms);
        }
        self.showing = self
            .last_shown_ms
            .is_some_and(|t| now_ms.saturating_sub(t) < SHOW_WINDOW_MS);
    }

    /// Hit test against a point; hidden moths can't be hit
    pub fn touching(&self, point: Vec2) -> bool {
        self.showing && rect_contains(self.pos, Vec2::splat(MOTH_SIZE), point)
    }

    /// Trigger death, giving the kind's power a chance to negate it
    pub fn die(&mut self, rng: &mut Pcg32, now_ms: u64) -> DeathOutcome {
        if self.dead {
            return DeathOutcome::AlreadyDead;
        }
        if let Some(effect) = self.kind.roll_power(rng) {
            return DeathOutcome::Survived(effect);
        }
        self.dead = true;
        self.dead_since_ms = Some(now_ms);
        DeathOutcome::Died
    }

    /// True once the death marker has run its course and the moth can go
    pub fn expired(&self, now_ms: u64) -> bool {
        self.dead_since_ms
            .is_some_and(|t| now_ms.saturating_sub(t) >= DEATH_MARKER_MS)
    }

    /// Center point (death marker anchor)
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(MOTH_SIZE / 2.0)
    }
}
