//! Procedural road curvature
//!
//! Two independent clocks: a countdown gating when the next curve may
//! start, and an exponential decay flattening the current one. A new curve
//! only spawns once the old one has fully tapered out.

use rand::Rng;

use super::state::CurveState;
use crate::tuning::Tuning;

/// Advance the curve by one tick. Returns the angle of a newly spawned curve.
pub fn update(curve: &mut CurveState, score: f64, rng: &mut impl Rng, tuning: &Tuning) -> Option<f64> {
    let flat = tuning.curve_flat_epsilon;
    let mut spawned = None;

    if curve.current.abs() < flat && curve.countdown <= 0 {
        let difficulty = tuning.difficulty_factor(score);
        let limit = tuning.max_curve_angle * difficulty;
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        // Draws above 1.0 × limit saturate at the limit, so |curve| ≤ 2 × max angle
        let magnitude = ((0.5 + rng.random::<f64>()) * limit).min(limit);
        curve.current = sign * magnitude;

        let countdown = tuning.curve_countdown_base / difficulty
            + rng.random::<f64>() * tuning.curve_countdown_jitter;
        curve.countdown = (countdown as i32).max(tuning.curve_countdown_min);

        log::debug!(
            "Curve spawned: angle={:.3}, next in {} ticks",
            curve.current,
            curve.countdown
        );
        spawned = Some(curve.current);
    } else {
        curve.countdown = curve.countdown.saturating_sub(1);
    }

    if curve.current.abs() > flat {
        curve.current *= tuning.curve_decay;
    } else {
        curve.current = 0.0;
    }

    spawned
}
