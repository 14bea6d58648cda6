//! Oncoming traffic: spawning, motion, despawn and collision with the player

use glam::DVec2;
use rand::Rng;

use super::collision::{car_box, first_overlap};
use super::state::{Opponent, PlayerCar, Traffic};
use crate::tuning::Tuning;

/// What happened to traffic this tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrafficUpdate {
    /// Opponents spawned this tick
    pub spawned: u32,
    /// Position of the first opponent (spawn order) overlapping the player
    pub collision: Option<DVec2>,
}

/// Ticks until the next spawn wave at the given difficulty
pub fn spawn_interval(speed_multiplier: f64, tuning: &Tuning) -> f64 {
    (tuning.spawn_interval_base / (speed_multiplier * tuning.spawn_speed_scale))
        .max(tuning.spawn_interval_floor)
}

/// Opponents per spawn wave: 1 plus one per density step, capped
pub fn spawn_count(score: f64, tuning: &Tuning) -> u32 {
    let extra = (score / tuning.spawn_density_score).floor().max(0.0) as u32;
    1 + extra.min(tuning.max_extra_opponents)
}

/// Place a new opponent somewhere across the road, well ahead of the player
pub fn spawn_opponent(player: &PlayerCar, rng: &mut impl Rng, tuning: &Tuning) -> Opponent {
    let half = tuning.half_road();
    let x = rng.random_range(-half..=half);
    let y = player.pos.y - tuning.spawn_min_gap - rng.random::<f64>() * tuning.spawn_depth_jitter;
    Opponent {
        pos: DVec2::new(x, y),
    }
}

/// Advance traffic by one tick. Reads the player, never moves it.
pub fn update(
    traffic: &mut Traffic,
    player: &PlayerCar,
    curve: f64,
    speed_multiplier: f64,
    score: f64,
    rng: &mut impl Rng,
    tuning: &Tuning,
) -> TrafficUpdate {
    let mut result = TrafficUpdate::default();

    // Curves bring denser traffic
    traffic.spawn_timer -= 1.0;
    if curve.abs() > tuning.dense_curve_threshold {
        traffic.spawn_timer -= tuning.dense_curve_extra_countdown;
    }

    if traffic.spawn_timer <= 0.0 {
        let count = spawn_count(score, tuning);
        for _ in 0..count {
            let opponent = spawn_opponent(player, rng, tuning);
            traffic.opponents.push(opponent);
        }
        traffic.spawn_timer = spawn_interval(speed_multiplier, tuning);
        log::debug!(
            "Spawned {} opponent(s), next wave in {:.0} ticks",
            count,
            traffic.spawn_timer
        );
        result.spawned = count;
    }

    let advance = player.speed * speed_multiplier * tuning.opponent_speed_factor;
    let drift = curve * player.speed * tuning.opponent_curve_drift;
    for opponent in &mut traffic.opponents {
        opponent.pos.y += advance;
        opponent.pos.x += drift;
    }

    let player_box = car_box(player.pos, tuning);
    result.collision = first_overlap(
        &player_box,
        traffic.opponents.iter().map(|o| car_box(o.pos, tuning)),
    )
    .map(|i| traffic.opponents[i].pos);

    // Behind the camera
    let horizon = player.pos.y + tuning.despawn_distance;
    traffic.opponents.retain(|o| o.pos.y <= horizon);

    result
}
