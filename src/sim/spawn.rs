//! Moth spawning - weighted kind selection plus placement
//!
//! Selection walks the scoreboard's weights in the fixed kind order as a
//! cumulative-threshold list against one uniform [0,1) draw. Because the
//! weights are not a true distribution (see `scoreboard`), the draw can land
//! beyond every threshold; the caller must tolerate that as "no spawn this
//! round" and try again on a later tick.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::moth::{Moth, MothKind};
use crate::sim::state::GameState;

/// Pick a kind from the weight table, or None when the draw exceeds the
/// cumulative total
pub fn pick_kind(probs: &[f32; 4], draw: f32) -> Option<MothKind> {
    debug_assert!((0.0..1.0).contains(&draw));
    let mut cumulative = 0.0;
    for kind in MothKind::ALL {
        cumulative += probs[kind.index()];
        if draw < cumulative {
            return Some(kind);
        }
    }
    None
}

/// The four diagonal travel directions
const DIAGONALS: [Vec2; 4] = [
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(-1.0, -1.0),
];

/// Try to spawn one moth into the session; false on a no-spawn round
pub fn spawn_moth(state: &mut GameState, now_ms: u64) -> bool {
    let draw = state.rng.random::<f32>();
    let Some(kind) = pick_kind(&state.scoreboard.probs(), draw) else {
        log::trace!("spawn draw {draw:.3} fell past the weight table, no moth this round");
        return false;
    };

    // New moths appear anywhere horizontally, upper half vertically
    let x = state.rng.random_range(0.0..=PLAY_WIDTH - MOTH_SIZE);
    let y = state.rng.random_range(0.0..=PLAY_HEIGHT / 2.0);
    let dir = DIAGONALS[state.rng.random_range(0..DIAGONALS.len())];

    log::debug!("spawning {} moth at ({x:.0}, {y:.0})", kind.as_str());
    state
        .moths
        .push(Moth::new(kind, Vec2::new(x, y), dir, now_ms));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    const UNIFORM: [f32; 4] = [0.25, 0.25, 0.25, 0.25];

    #[test]
    fn test_pick_kind_uniform_table() {
        assert_eq!(pick_kind(&UNIFORM, 0.1), Some(MothKind::Plain));
        assert_eq!(pick_kind(&UNIFORM, 0.3), Some(MothKind::Fast));
        assert_eq!(pick_kind(&UNIFORM, 0.6), Some(MothKind::Startle));
        assert_eq!(pick_kind(&UNIFORM, 0.9), Some(MothKind::Jam));
    }

    #[test]
    fn test_pick_kind_no_spawn_when_sum_short() {
        // Heavy skew: the table sums to 0.6, a high draw selects nothing
        let skewed = [0.15, 0.15, 0.15, 0.15];
        assert_eq!(pick_kind(&skewed, 0.99), None);
        assert_eq!(pick_kind(&skewed, 0.59), Some(MothKind::Jam));
    }

    #[test]
    fn test_pick_kind_negative_entry_skipped() {
        // A negative weight shrinks its slice to nothing and bleeds into the
        // neighbors' thresholds, matching the cumulative-sum rule literally
        let table = [-0.05, 0.35, 0.25, 0.25];
        assert_eq!(pick_kind(&table, 0.0), Some(MothKind::Fast));
        assert_eq!(pick_kind(&table, 0.29), Some(MothKind::Fast));
        assert_eq!(pick_kind(&table, 0.31), Some(MothKind::Startle));
    }

    #[test]
    fn test_spawn_moth_places_in_upper_half() {
        let mut state = GameState::new(99, 0);
        for _ in 0..50 {
            assert!(spawn_moth(&mut state, 0));
        }
        for moth in &state.moths {
            assert!(moth.pos.x >= 0.0 && moth.pos.x <= PLAY_WIDTH - MOTH_SIZE);
            assert!(moth.pos.y >= 0.0 && moth.pos.y <= PLAY_HEIGHT / 2.0);
            assert_eq!(moth.dir.x.abs(), 1.0);
            assert_eq!(moth.dir.y.abs(), 1.0);
            assert!(!moth.showing);
            assert!(!moth.dead);
        }
    }

    #[test]
    fn test_spawn_respects_weight_table() {
        let mut state = GameState::new(7, 0);
        // Push everything onto plain
        let rigged = [1.0, 0.0, 0.0, 0.0];
        for _ in 0..20 {
            let draw = state.rng.random::<f32>();
            assert_eq!(pick_kind(&rigged, draw), Some(MothKind::Plain));
        }
    }

    proptest! {
        #[test]
        fn prop_pick_kind_respects_thresholds(draw in 0.0f32..1.0) {
            // With the uniform table the selected kind is fully determined
            // by which quarter the draw lands in
            let expected = match draw {
                d if d < 0.25 => MothKind::Plain,
                d if d < 0.5 => MothKind::Fast,
                d if d < 0.75 => MothKind::Startle,
                _ => MothKind::Jam,
            };
            // Cumulative float sums can differ from the literal quarter
            // boundaries by an ulp; skip draws sitting exactly on one
            let near_boundary = [0.25f32, 0.5, 0.75]
                .iter()
                .any(|b| (draw - b).abs() < 1e-6);
            if !near_boundary {
                prop_assert_eq!(pick_kind(&UNIFORM, draw), Some(expected));
            }
        }
    }
}
