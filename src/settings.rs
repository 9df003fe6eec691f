//! Presentation and accessibility preferences
//!
//! These only shape the frame description; the sim itself never reads them.

use serde::{Deserialize, Serialize};

/// Player-facing presentation toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Draw the kill-count / spawn-weight panel
    pub show_scoreboard: bool,
    /// Full-screen blackout/redout floods; turn off for reduced motion.
    /// The underlying effect timers still gate gameplay either way.
    pub flash_effects: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_scoreboard: true,
            flash_effects: true,
        }
    }
}
