//! Moth Hunt - an echolocation arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (echoes, bat, moths, scoring, tick loop)
//! - `render`: Frame description (abstract draw commands, no pixels)
//! - `platform`: Monotonic clock abstraction
//! - `settings`: Presentation/accessibility preferences

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use platform::{Clock, ManualClock, SystemClock};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const PLAY_WIDTH: f32 = 1200.0;
    pub const PLAY_HEIGHT: f32 = 800.0;

    /// Target tick rate and the matching tick interval
    pub const TICK_HZ: u32 = 60;
    pub const TICK_MS: u64 = 1000 / TICK_HZ as u64;

    /// Bat defaults
    pub const BAT_SIZE: f32 = 70.0;
    pub const BAT_STEP: f32 = 5.0;
    /// Minimum gap between echo emissions (ms)
    pub const ECHO_COOLDOWN_MS: u64 = 500;
    /// Stagger between the three pulses of one emission (ms)
    pub const ECHO_GAP_MS: u64 = 300;

    /// Echo ring geometry
    pub const ECHO_RING_WIDTH: f32 = 8.0;
    /// Radius growth per millisecond
    pub const ECHO_GROWTH_PER_MS: f32 = 0.01;
    /// Angular aperture of the forward-facing cone (radians)
    pub const ECHO_MIN_ANGLE: f32 = std::f32::consts::PI / 8.0;
    pub const ECHO_MAX_ANGLE: f32 = 7.0 * std::f32::consts::PI / 8.0;

    /// Moth defaults
    pub const MOTH_SIZE: f32 = 70.0;
    pub const MOTH_SPEED: f32 = 5.0;
    pub const FAST_MOTH_SPEED: f32 = 10.0;
    /// How long a moth stays visible after its last echo contact (ms)
    pub const SHOW_WINDOW_MS: u64 = 1500;
    /// How long the death marker lingers before removal (ms)
    pub const DEATH_MARKER_MS: u64 = 500;
    /// Live moth population the spawner tops up to
    pub const MAX_MOTHS: usize = 4;

    /// Animation cadence shared by bat and moths
    pub const FRAME_MS: u64 = 50;
    /// Frames per sprite set
    pub const FRAME_COUNT: usize = 9;

    /// Blackout/redout duration (ms)
    pub const EFFECT_MS: u64 = 3000;

    /// Spawn probability adjustment per kill
    pub const PROB_PENALTY: f32 = 0.03;
    pub const PROB_BONUS: f32 = 0.01;
}

/// Axis-aligned point-in-rectangle test with strict edges
///
/// Points exactly on an edge count as outside, matching the collision rules
/// everywhere in the sim.
#[inline]
pub fn rect_contains(top_left: Vec2, size: Vec2, point: Vec2) -> bool {
    top_left.x < point.x
        && point.x < top_left.x + size.x
        && top_left.y < point.y
        && point.y < top_left.y + size.y
}

/// Angle of `point` as seen from `origin`, in standard math orientation
///
/// Screen coordinates grow downward, so the y flip is folded in here: a point
/// straight above the origin comes out at pi/2.
#[inline]
pub fn bearing(origin: Vec2, point: Vec2) -> f32 {
    (origin.y - point.y).atan2(origin.x - point.x)
}
