//! Kill tallies and the adaptive spawn-probability table
//!
//! Every kill nudges the spawn table away from the kind the player just ate
//! (-0.03) and toward everything else (+0.01 each). The table is deliberately
//! NOT renormalized or clamped: entries can drift negative or past 1.0, and
//! the spawner treats a draw beyond the cumulative total as a legitimate
//! "no spawn this round". Behavior fidelity over probabilistic hygiene.

use serde::Serialize;

use crate::consts::{PROB_BONUS, PROB_PENALTY};
use crate::sim::moth::MothKind;

/// Starting weight for each of the four kinds
pub const INITIAL_PROB: f32 = 0.25;

/// Per-kind kill counts and spawn weights
#[derive(Debug, Clone, Serialize)]
pub struct Scoreboard {
    kills: [u32; 4],
    probs: [f32; 4],
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            kills: [0; 4],
            probs: [INITIAL_PROB; 4],
        }
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one kill and shift the spawn table
    pub fn record_kill(&mut self, kind: MothKind) {
        self.kills[kind.index()] += 1;
        for k in MothKind::ALL {
            if k == kind {
                self.probs[k.index()] -= PROB_PENALTY;
            } else {
                self.probs[k.index()] += PROB_BONUS;
            }
        }
        log::debug!(
            "kill recorded: {} (total {}), probs now {:?}",
            kind.as_str(),
            self.kills[kind.index()],
            self.probs
        );
    }

    pub fn kills(&self, kind: MothKind) -> u32 {
        self.kills[kind.index()]
    }

    pub fn prob(&self, kind: MothKind) -> f32 {
        self.probs[kind.index()]
    }

    /// Spawn weights in the fixed kind order
    pub fn probs(&self) -> [f32; 4] {
        self.probs
    }

    /// Total moths eaten across all kinds
    pub fn total_kills(&self) -> u32 {
        self.kills.iter().sum()
    }

    /// Overwrite the weight table (tests exercising degenerate tables)
    #[cfg(test)]
    pub(crate) fn force_probs(&mut self, probs: [f32; 4]) {
        self.probs = probs;
    }
}
