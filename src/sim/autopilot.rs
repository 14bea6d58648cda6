//! Demo driver
//!
//! Plays the game without a human: dodges the nearest car in its lane,
//! leans against the curve otherwise, and only accelerates on a clear road.

use super::state::SimulationState;
use super::tick::DriveInput;

/// How far ahead (world units) the autopilot looks for traffic
const LOOKAHEAD: f64 = 40.0;
/// Extra lateral margin kept around a threatening car
const CLEARANCE: f64 = 0.4;
/// Curve magnitude worth counter-steering
const CURVE_TOLERANCE: f64 = 0.05;

pub fn drive(state: &SimulationState) -> DriveInput {
    let tuning = &state.tuning;
    let me = state.player.pos;
    let lane = tuning.car_half_width * 2.0 + CLEARANCE;

    // Nearest opponent ahead (or alongside) that shares our lane
    let threat = state
        .traffic
        .opponents
        .iter()
        .filter(|o| {
            let ahead = me.y - o.pos.y;
            ahead > -tuning.car_half_length * 2.0 && ahead < LOOKAHEAD && (o.pos.x - me.x).abs() < lane
        })
        .min_by(|a, b| (me.y - a.pos.y).total_cmp(&(me.y - b.pos.y)));

    let Some(threat) = threat else {
        let curve = state.curve.current;
        return DriveInput {
            steer_left: curve > CURVE_TOLERANCE,
            steer_right: curve < -CURVE_TOLERANCE,
            accelerate: true,
        };
    };

    let half = tuning.half_road();
    let dx = me.x - threat.pos.x;
    // Dodge away from the threat, toward open road when dead ahead
    let mut go_left = if dx.abs() < f64::EPSILON { me.x > 0.0 } else { dx < 0.0 };
    if go_left && me.x - lane < -half {
        go_left = false;
    } else if !go_left && me.x + lane > half {
        go_left = true;
    }

    DriveInput {
        steer_left: go_left,
        steer_right: !go_left,
        accelerate: false,
    }
}
