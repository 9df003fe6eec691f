//! The per-tick update, in fixed phase order
//!
//! Each tick: top up the moth population, apply input to the bat, advance
//! and prune echoes, resolve bat/moth collisions, advance moths and their
//! visibility, then expire screen effects. Pruning is retain-based
//! throughout so removal can never skip a neighbor.

use crate::consts::MAX_MOTHS;
use crate::sim::bat::Direction;
use crate::sim::moth::DeathOutcome;
use crate::sim::spawn::spawn_moth;
use crate::sim::state::GameState;

/// Per-tick snapshot of the held input actions (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub echo: bool,
}

/// Advance the session by one tick at the given monotonic time
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    state.time_ticks += 1;

    // 1. Top up the population. A no-spawn draw ends the attempt for this
    //    tick; the next tick tries again.
    while state.moths.len() < MAX_MOTHS {
        if !spawn_moth(state, now_ms) {
            break;
        }
    }

    // 2. Player input
    if input.up {
        state.bat.step(Direction::Up);
    }
    if input.down {
        state.bat.step(Direction::Down);
    }
    if input.left {
        state.bat.step(Direction::Left);
    }
    if input.right {
        state.bat.step(Direction::Right);
    }
    if input.echo {
        if let Some(pulses) = state.bat.try_emit(now_ms) {
            log::debug!("echo emitted at {:?}", state.bat.center());
            state.echoes.extend(pulses);
        }
    }

    // 3. Echo propagation
    state.echoes.retain_mut(|echo| !echo.update(now_ms));

    // 4. Bat animation and collision kills. Both screen effects shield the
    //    moths while active. The shield is rechecked per moth: a power that
    //    fires mid-loop protects every moth after it in the same tick.
    state.bat.animate(now_ms);
    {
        let probe = state.bat.probe();
        // Split borrows: the RNG and scoreboard live beside the moth list
        let GameState {
            moths,
            rng,
            scoreboard,
            effects,
            ..
        } = state;
        for moth in moths.iter_mut() {
            if effects.any_active() || !moth.touching(probe) {
                continue;
            }
            match moth.die(rng, now_ms) {
                DeathOutcome::Died => scoreboard.record_kill(moth.kind),
                DeathOutcome::Survived(effect) => effects.trigger(effect, now_ms),
                DeathOutcome::AlreadyDead => {}
            }
        }
    }

    // 5. Moth movement, visibility, and death-marker expiry
    let GameState { moths, echoes, .. } = state;
    for moth in moths.iter_mut() {
        moth.advance(now_ms);
        let touched = echoes.iter().any(|echo| echo.touching(moth.pos));
        moth.refresh_visibility(touched, now_ms);
    }
    moths.retain(|moth| !moth.expired(now_ms));

    // 6. Screen-effect timers
    state.effects.expire(now_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::echo::Echo;
    use crate::sim::moth::{Moth, MothKind};
    use crate::sim::state::ScreenEffect;
    use glam::Vec2;

    const IDLE: TickInput = TickInput {
        up: false,
        down: false,
        left: false,
        right: false,
        echo: false,
    };

    fn run_ticks(state: &mut GameState, input: &TickInput, start_ms: u64, n: u64) -> u64 {
        let mut now = start_ms;
        for _ in 0..n {
            now += TICK_MS;
            tick(state, input, now);
        }
        now
    }

    #[test]
    fn test_population_tops_up_to_four() {
        let mut state = GameState::new(5, 0);
        for start in 0..=MAX_MOTHS {
            state.moths.truncate(start);
            run_ticks(&mut state, &IDLE, 0, 20);
            assert_eq!(state.moths.len(), MAX_MOTHS);
        }
    }

    #[test]
    fn test_population_recovers_from_no_spawn_rounds() {
        let mut state = GameState::new(11, 0);
        // A lossy weight table: most draws land past every threshold
        state.scoreboard.force_probs([0.1, 0.1, 0.1, 0.1]);
        state.moths.clear();
        // Across enough ticks the transient no-spawn rounds still converge
        run_ticks(&mut state, &IDLE, 0, 400);
        assert_eq!(state.moths.len(), MAX_MOTHS);
    }

    #[test]
    fn test_echo_emission_and_pruning() {
        let mut state = GameState::new(3, 0);
        let press = TickInput { echo: true, ..IDLE };

        // Cooldown runs from session start
        tick(&mut state, &press, 100);
        assert!(state.echoes.is_empty());

        tick(&mut state, &press, 600);
        assert_eq!(state.echoes.len(), 3);

        // Held key: cooldown blocks another triple
        tick(&mut state, &press, 700);
        assert_eq!(state.echoes.len(), 3);

        // Long after every pulse has swept the play area, all are pruned
        let far = 600 + 1_500_000;
        tick(&mut state, &IDLE, far);
        assert!(state.echoes.is_empty());
    }

    #[test]
    fn test_showing_follows_echo_contact() {
        let mut state = GameState::new(3, 0);
        state.moths.clear();
        // Park a moth above the bat's echo origin; it drifts down-right, so
        // after its first advance it sits 207 above the origin
        let origin = state.bat.center();
        let moth_pos = Vec2::new(origin.x, origin.y - 212.0);
        state
            .moths
            .push(Moth::new(MothKind::Plain, moth_pos, Vec2::new(1.0, 1.0), 0));

        // Synthesize an echo whose band is about to cross the moth
        let mut echo = Echo::new(origin, 0, 0);
        echo.update(20_000); // radius 200, band [200, 208)
        state.echoes.push(echo);

        // One tick later the band (radius 201) covers the moth's position
        tick(&mut state, &IDLE, 20_100);
        let moth = state.moths.first().expect("moth alive");
        assert!(moth.showing, "echo contact should reveal the moth");

        // Visibility outlasts the pulse by the show window
        let shown_at = moth.last_shown_ms.expect("contact recorded");
        let mut now = 20_100;
        while now < shown_at + SHOW_WINDOW_MS + 200 {
            now += TICK_MS;
            tick(&mut state, &IDLE, now);
        }
        let moth = state.moths.first().expect("moth alive");
        assert!(!moth.showing, "window elapsed with no renewed contact");
    }

    #[test]
    fn test_collision_kill_reaches_scoreboard() {
        let mut state = GameState::new(8, 0);
        state.moths.clear();
        let probe = state.bat.probe();
        // A showing plain moth wrapped around the probe point dies this tick
        let mut moth = Moth::new(
            MothKind::Plain,
            probe - Vec2::splat(MOTH_SIZE / 2.0),
            Vec2::new(1.0, 1.0),
            0,
        );
        moth.refresh_visibility(true, 0);
        state.moths.push(moth);

        tick(&mut state, &IDLE, 16);
        assert_eq!(state.scoreboard.kills(MothKind::Plain), 1);
        let dead = state.moths.iter().find(|m| m.dead).expect("dying moth");
        assert_eq!(dead.dead_since_ms, Some(16));

        // The marker lingers, then the moth is removed
        let had = state.moths.len();
        run_ticks(&mut state, &IDLE, 16, 2);
        assert_eq!(state.moths.len(), had);
        run_ticks(&mut state, &IDLE, 48, (DEATH_MARKER_MS / TICK_MS) + 2);
        assert!(state.moths.iter().all(|m| !m.dead));
    }

    #[test]
    fn test_hidden_moth_survives_contact() {
        let mut state = GameState::new(8, 0);
        state.moths.clear();
        let probe = state.bat.probe();
        // Same overlap, but the moth was never revealed
        state.moths.push(Moth::new(
            MothKind::Plain,
            probe - Vec2::splat(MOTH_SIZE / 2.0),
            Vec2::new(1.0, 1.0),
            0,
        ));
        tick(&mut state, &IDLE, 16);
        assert_eq!(state.scoreboard.total_kills(), 0);
        assert!(state.moths.iter().all(|m| !m.dead));
    }

    #[test]
    fn test_effects_shield_moths() {
        let mut state = GameState::new(8, 0);
        state.moths.clear();
        state.effects.trigger(ScreenEffect::Blackout, 0);
        let probe = state.bat.probe();
        let mut moth = Moth::new(
            MothKind::Plain,
            probe - Vec2::splat(MOTH_SIZE / 2.0),
            Vec2::new(1.0, 1.0),
            0,
        );
        moth.refresh_visibility(true, 0);
        state.moths.push(moth);

        tick(&mut state, &IDLE, 16);
        assert_eq!(state.scoreboard.total_kills(), 0);

        // Effect expires, the next contact kills
        let now = run_ticks(&mut state, &IDLE, 16, EFFECT_MS / TICK_MS + 2);
        assert!(!state.effects.any_active());
        if let Some(moth) = state.moths.iter_mut().find(|m| !m.dead) {
            moth.pos = probe - Vec2::splat(MOTH_SIZE / 2.0);
            moth.refresh_visibility(true, now);
        }
        tick(&mut state, &IDLE, now + TICK_MS);
        assert!(state.scoreboard.total_kills() >= 1);
    }

    #[test]
    fn test_power_firing_shields_later_moths_same_tick() {
        // A Startle moth and a Plain moth both wrap the probe point. When
        // the Startle power fires, the effect it raises must already shield
        // the Plain moth later in the same collision pass.
        for seed in 0..64u64 {
            let mut state = GameState::new(seed, 0);
            state.moths.clear();
            let probe = state.bat.probe();
            let pos = probe - Vec2::splat(MOTH_SIZE / 2.0);
            for kind in [MothKind::Startle, MothKind::Plain] {
                let mut moth = Moth::new(kind, pos, Vec2::new(1.0, 1.0), 0);
                moth.refresh_visibility(true, 0);
                state.moths.push(moth);
            }

            tick(&mut state, &IDLE, 16);

            if state.effects.any_active() {
                // Power fired on the first moth; the second one lives
                assert_eq!(state.scoreboard.kills(MothKind::Startle), 0, "seed {seed}");
                assert_eq!(state.scoreboard.kills(MothKind::Plain), 0, "seed {seed}");
            } else {
                assert_eq!(state.scoreboard.kills(MothKind::Startle), 1, "seed {seed}");
                assert_eq!(state.scoreboard.kills(MothKind::Plain), 1, "seed {seed}");
            }
        }
    }

    #[test]
    fn test_dying_moths_count_toward_population_cap() {
        let mut state = GameState::new(8, 0);
        run_ticks(&mut state, &IDLE, 0, 20);
        assert_eq!(state.moths.len(), MAX_MOTHS);

        // Kill one by hand; while its marker lingers the spawner must not
        // top up past the cap
        let now = 20 * TICK_MS;
        state.moths[0].dead = true;
        state.moths[0].dead_since_ms = Some(now);
        tick(&mut state, &IDLE, now + TICK_MS);
        assert!(state.moths.iter().any(|m| m.dead));
        assert_eq!(state.moths.len(), MAX_MOTHS);
    }

    #[test]
    fn test_movement_input_applied() {
        let mut state = GameState::new(8, 0);
        let start = state.bat.pos;
        let input = TickInput { left: true, up: true, ..IDLE };
        tick(&mut state, &input, 16);
        assert_eq!(state.bat.pos, start + Vec2::new(-BAT_STEP, -BAT_STEP));
    }
}
