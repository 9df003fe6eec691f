//! Echo pulses - expanding annular sectors emitted by the bat
//!
//! An echo is a ring that grows from the bat's center until it has swept the
//! whole play area. Only the leading band of the ring reveals moths, and only
//! within a fixed forward-facing cone: the bat hunts upward, so the sector
//! spans [pi/8, 7pi/8] on the up-screen bearing.

use glam::Vec2;

use crate::bearing;
use crate::consts::*;

/// A single expanding echolocation pulse
#[derive(Debug, Clone)]
pub struct Echo {
    /// Emission point, fixed at creation
    pub origin: Vec2,
    /// Current ring radius; starts at 0 and only grows
    pub radius: f32,
    /// Radius at which the pulse has left the play area and expires
    pub max_radius: f32,
    /// Emission timestamp (ms)
    spawn_ms: u64,
    /// Growth holds off until this long after emission (ms)
    delay_ms: u64,
    /// Last time `update` ran, for time-scaled growth
    last_update_ms: u64,
}

impl Echo {
    /// Create a pulse at `origin`, pending for `delay_ms` before it expands
    pub fn new(origin: Vec2, now_ms: u64, delay_ms: u64) -> Self {
        // Expire once the ring has passed the farthest corner
        let corners = [
            Vec2::ZERO,
            Vec2::new(PLAY_WIDTH, 0.0),
            Vec2::new(0.0, PLAY_HEIGHT),
            Vec2::new(PLAY_WIDTH, PLAY_HEIGHT),
        ];
        let max_radius = corners
            .iter()
            .map(|c| origin.distance(*c))
            .fold(0.0_f32, f32::max);

        Self {
            origin,
            radius: 0.0,
            max_radius,
            spawn_ms: now_ms,
            delay_ms,
            last_update_ms: now_ms,
        }
    }

    /// Whether the pulse is still in its pre-expansion delay
    pub fn pending(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.spawn_ms) < self.delay_ms
    }

    /// Grow the ring; returns true once the pulse has expired
    ///
    /// The update clock is refreshed even while pending so that expansion
    /// starts from zero when the delay elapses instead of jumping ahead.
    pub fn update(&mut self, now_ms: u64) -> bool {
        let elapsed = now_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = now_ms;

        if self.pending(now_ms) {
            return false;
        }

        self.radius += elapsed as f32 * ECHO_GROWTH_PER_MS;
        self.radius >= self.max_radius
    }

    /// True iff `point` sits in the ring band and inside the cone
    pub fn touching(&self, point: Vec2) -> bool {
        let dist = self.origin.distance(point);
        if dist < self.radius || dist >= self.radius + ECHO_RING_WIDTH {
            return false;
        }
        let angle = bearing(self.origin, point);
        ECHO_MIN_ANGLE <= angle && angle <= ECHO_MAX_ANGLE
    }
}
