//! Per-frame simulation tick
//!
//! Fixed update order within a tick:
//! vehicle → road scroll → curve → traffic → score → scenario → difficulty ramp.
//! Later steps always see this tick's values from earlier ones. The tick
//! that detects a collision still finishes; every later one is a no-op.

use super::curve;
use super::state::{GameEvent, SimulationState};
use super::traffic;
use super::vehicle;

/// Directional controls sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveInput {
    pub steer_left: bool,
    pub steer_right: bool,
    pub accelerate: bool,
}

/// Advance the simulation by one tick and report what happened
pub fn tick(state: &mut SimulationState, input: &DriveInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_game_over {
        return events;
    }

    state.time_ticks += 1;

    vehicle::update(
        &mut state.player,
        input,
        state.curve.current,
        state.speed_multiplier,
        state.scenario.driving_hook(),
        state.time_ticks,
        &state.tuning,
    );

    // Road segment follows the car; re-entering the phase on wrap is harmless
    state.road_offset += state.player.speed * state.speed_multiplier;
    if state.road_offset > crate::consts::ROAD_WRAP_OFFSET {
        state.road_offset -= crate::consts::ROAD_SEGMENT_LENGTH;
        events.push(GameEvent::RoadWrapped {
            phase: state.scenario.phase,
        });
    }

    if let Some(angle) = curve::update(&mut state.curve, state.score.score, &mut state.rng, &state.tuning) {
        events.push(GameEvent::CurveSpawned { angle });
    }

    let traffic = traffic::update(
        &mut state.traffic,
        &state.player,
        state.curve.current,
        state.speed_multiplier,
        state.score.score,
        &mut state.rng,
        &state.tuning,
    );
    if traffic.spawned > 0 {
        events.push(GameEvent::OpponentsSpawned {
            count: traffic.spawned,
        });
    }
    if let Some(opponent) = traffic.collision {
        state.is_game_over = true;
        log::info!(
            "Game over! Collision at ({:.2}, {:.2}), score {}",
            state.player.pos.x,
            state.player.pos.y,
            state.score.displayed()
        );
        events.push(GameEvent::Collision {
            player: state.player.pos,
            opponent,
        });
    }

    if let Some(high_score) = state
        .score
        .record_tick(state.player.speed, state.speed_multiplier, &state.tuning)
    {
        events.push(GameEvent::NewHighScore(high_score));
    }

    if let Some(change) = state.scenario.update(state.score.score, &state.tuning) {
        events.push(GameEvent::PhaseEntered {
            phase: change.phase,
            cycle: change.cycle,
        });
    }

    // Gradually increase difficulty
    state.speed_multiplier += state.tuning.difficulty_ramp;

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Opponent, ScenarioPhase};
    use crate::tuning::Tuning;
    use glam::DVec2;
    use proptest::prelude::*;

    fn fresh(seed: u64) -> SimulationState {
        SimulationState::new(seed, Tuning::default())
    }

    #[test]
    fn test_min_speed_tick_scores_base_rate() {
        let mut state = fresh(1);
        tick(&mut state, &DriveInput::default());
        assert_eq!(state.player.speed, state.tuning.min_speed);
        assert!((state.score.score - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_multiplier_ramps_once_per_tick() {
        let mut state = fresh(2);
        for _ in 0..10 {
            tick(&mut state, &DriveInput::default());
        }
        assert!((state.speed_multiplier - 1.001).abs() < 1e-12);
    }

    #[test]
    fn test_collision_ends_game_and_freezes_state() {
        let mut state = fresh(3);
        state.traffic.opponents.push(Opponent {
            pos: state.player.pos + DVec2::new(0.2, -1.0),
        });

        let events = tick(&mut state, &DriveInput::default());
        assert!(state.is_game_over);
        let collisions = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Collision { .. }))
            .count();
        assert_eq!(collisions, 1);

        // The crash tick still scores and ramps
        assert!((state.score.score - 0.1).abs() < 1e-12);
        assert!((state.speed_multiplier - 1.0001).abs() < 1e-12);

        let frozen = state.clone();
        let gas = DriveInput {
            steer_left: true,
            accelerate: true,
            ..Default::default()
        };
        for _ in 0..20 {
            assert!(tick(&mut state, &gas).is_empty());
        }
        assert_eq!(state.score.score, frozen.score.score);
        assert_eq!(state.player.pos, frozen.player.pos);
        assert_eq!(state.speed_multiplier, frozen.speed_multiplier);
        assert_eq!(state.time_ticks, frozen.time_ticks);
        assert_eq!(state.traffic.opponents, frozen.traffic.opponents);
    }

    #[test]
    fn test_crash_tick_still_enters_phase() {
        let mut state = fresh(8);
        state.score.score = 99.95;
        state.traffic.opponents.push(Opponent {
            pos: state.player.pos + DVec2::new(0.0, -1.0),
        });
        let events = tick(&mut state, &DriveInput::default());
        assert!(state.is_game_over);
        assert!(events.contains(&GameEvent::PhaseEntered {
            phase: ScenarioPhase::Snow,
            cycle: 0
        }));
    }

    #[test]
    fn test_phase_entered_at_threshold() {
        let mut state = fresh(4);
        state.score.score = 99.95;
        let events = tick(&mut state, &DriveInput::default());
        assert!(events.contains(&GameEvent::PhaseEntered {
            phase: ScenarioPhase::Snow,
            cycle: 0
        }));
        assert_eq!(state.scenario.phase, ScenarioPhase::Snow);
    }

    #[test]
    fn test_new_high_score_event() {
        let mut state = fresh(5).with_high_score(3);
        state.score.score = 3.95;
        let events = tick(&mut state, &DriveInput::default());
        assert!(events.contains(&GameEvent::NewHighScore(4)));
        assert_eq!(state.score.high_score, 4);
    }

    #[test]
    fn test_road_wraps() {
        let mut state = fresh(6);
        state.road_offset = crate::consts::ROAD_WRAP_OFFSET - 0.1;
        let events = tick(&mut state, &DriveInput::default());
        assert!(events.contains(&GameEvent::RoadWrapped {
            phase: ScenarioPhase::Start
        }));
        assert!(state.road_offset < 0.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = fresh(99999);
        let mut state2 = fresh(99999);
        let inputs = [
            DriveInput {
                accelerate: true,
                ..Default::default()
            },
            DriveInput {
                steer_left: true,
                ..Default::default()
            },
            DriveInput::default(),
        ];

        for i in 0..600 {
            let input = inputs[i % inputs.len()];
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.traffic.opponents, state2.traffic.opponents);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.curve.current, state2.curve.current);
    }

    fn input_strategy() -> impl Strategy<Value = DriveInput> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(l, r, a)| DriveInput {
            steer_left: l,
            steer_right: r,
            accelerate: a,
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_invariants_hold(
            seed in any::<u64>(),
            start_score in 0.0f64..20_000.0,
            inputs in prop::collection::vec(input_strategy(), 1..400),
        ) {
            let mut state = fresh(seed);
            state.score.score = start_score;
            let tuning = state.tuning.clone();
            let half = tuning.half_road();
            let mut collisions = 0;

            for input in &inputs {
                let before = state.clone();
                let events = tick(&mut state, input);

                prop_assert!(state.player.speed >= tuning.min_speed);
                prop_assert!(state.player.speed <= tuning.max_speed);
                prop_assert!(state.player.pos.x.abs() <= half);
                prop_assert!(state.curve.current.abs() <= tuning.max_curve_angle * 2.0);
                prop_assert!(state.score.score >= before.score.score);
                prop_assert!(state.score.high_score >= before.score.high_score);
                prop_assert!(state.score.high_score >= state.score.displayed());

                if before.is_game_over {
                    prop_assert!(events.is_empty());
                    prop_assert_eq!(state.speed_multiplier, before.speed_multiplier);
                } else {
                    prop_assert!(
                        (state.speed_multiplier - before.speed_multiplier - tuning.difficulty_ramp).abs() < 1e-12
                    );
                }

                for event in &events {
                    match event {
                        GameEvent::Collision { .. } => collisions += 1,
                        GameEvent::OpponentsSpawned { count } => {
                            // Newest arrivals were placed past the spawn line, then moved one step
                            let step = state.player.speed * before.speed_multiplier * tuning.opponent_speed_factor;
                            let spawn_line = state.player.pos.y - tuning.spawn_min_gap;
                            for o in state.traffic.opponents.iter().rev().take(*count as usize) {
                                prop_assert!(o.pos.y - step < state.player.pos.y);
                                prop_assert!(o.pos.y - step <= spawn_line + 1e-9);
                            }
                        }
                        _ => {}
                    }
                }
            }
            prop_assert!(collisions <= 1);
        }

        #[test]
        fn prop_curve_always_flattens(seed in any::<u64>()) {
            let mut state = fresh(seed);
            state.curve.current = 0.6;
            state.curve.countdown = i32::MAX;
            let mut previous = state.curve.current.abs();
            for _ in 0..1000 {
                super::curve::update(&mut state.curve, 0.0, &mut state.rng, &state.tuning);
                prop_assert!(state.curve.current.abs() <= previous);
                previous = state.curve.current.abs();
            }
            prop_assert_eq!(state.curve.current, 0.0);
        }
    }
}
