//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied monotonic millisecond clock
//! - Seeded RNG only, owned by the game state
//! - Retain-based pruning (no removal while iterating)
//! - No rendering or platform dependencies

pub mod bat;
pub mod echo;
pub mod moth;
pub mod scoreboard;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bat::Bat;
pub use echo::Echo;
pub use moth::{DeathOutcome, Moth, MothKind};
pub use scoreboard::Scoreboard;
pub use spawn::{pick_kind, spawn_moth};
pub use state::{GameState, ScreenEffect, ScreenEffects};
pub use tick::{TickInput, tick};
