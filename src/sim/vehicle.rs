//! Vehicle kinematics: speed, forward travel, steering and lane clamping

use super::state::{DrivingHook, PlayerCar};
use super::tick::DriveInput;
use crate::tuning::Tuning;

/// Advance the player car by one tick.
///
/// `curve` is the road bend the driver is reacting to. Steering into the
/// bend is free; steering against it is damped by how fast the car is
/// going. The bend also drags the car sideways every tick.
pub fn update(
    car: &mut PlayerCar,
    input: &DriveInput,
    curve: f64,
    speed_multiplier: f64,
    hook: DrivingHook,
    time_ticks: u64,
    tuning: &Tuning,
) {
    let speed_step = if input.accelerate {
        tuning.car_acceleration
    } else {
        -tuning.car_deceleration
    };
    car.speed = (car.speed + speed_step).clamp(tuning.min_speed, tuning.max_speed);

    // World scrolls toward the camera
    car.pos.y -= car.speed * speed_multiplier;

    let resistance = (car.speed * tuning.curve_resistance_gain).min(1.0);
    let mut x = car.pos.x;
    if input.steer_left {
        x -= tuning.car_speed_x * steering_damping(resistance, curve);
    }
    if input.steer_right {
        x += tuning.car_speed_x * steering_damping(resistance, -curve);
    }

    x += curve * car.speed * tuning.player_curve_drift;

    if hook == DrivingHook::SnowDrift {
        x += tuning.snow_drift_amplitude * (time_ticks as f64 * tuning.snow_drift_rate).sin();
    }

    let half = tuning.half_road();
    car.pos.x = x.clamp(-half, half);
}

/// Steering scale when the bend pulls the opposite way by `opposing`
#[inline]
fn steering_damping(resistance: f64, opposing: f64) -> f64 {
    (1.0 - resistance * opposing.max(0.0)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn car(speed: f64) -> PlayerCar {
        PlayerCar {
            pos: DVec2::new(0.0, -5.0),
            speed,
        }
    }

    fn left() -> DriveInput {
        DriveInput {
            steer_left: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_speed_stays_in_bounds() {
        let tuning = Tuning::default();
        let mut c = car(tuning.max_speed);
        let gas = DriveInput {
            accelerate: true,
            ..Default::default()
        };
        update(&mut c, &gas, 0.0, 1.0, DrivingHook::Normal, 1, &tuning);
        assert_eq!(c.speed, tuning.max_speed);

        let mut c = car(tuning.min_speed);
        update(&mut c, &DriveInput::default(), 0.0, 1.0, DrivingHook::Normal, 1, &tuning);
        assert_eq!(c.speed, tuning.min_speed);
    }

    #[test]
    fn test_accelerate_adds_one_step() {
        let tuning = Tuning::default();
        let mut c = car(0.5);
        let gas = DriveInput {
            accelerate: true,
            ..Default::default()
        };
        update(&mut c, &gas, 0.0, 1.0, DrivingHook::Normal, 1, &tuning);
        assert!((c.speed - (0.5 + tuning.car_acceleration)).abs() < 1e-12);
    }

    #[test]
    fn test_forward_motion_scales_with_multiplier() {
        let tuning = Tuning::default();
        let mut c = car(0.5);
        update(&mut c, &DriveInput::default(), 0.0, 2.0, DrivingHook::Normal, 1, &tuning);
        let speed = 0.5 - tuning.car_deceleration;
        assert!((c.pos.y - (-5.0 - speed * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_steering_on_straight_road() {
        let tuning = Tuning::default();
        let mut c = car(0.5);
        update(&mut c, &left(), 0.0, 1.0, DrivingHook::Normal, 1, &tuning);
        assert!((c.pos.x + tuning.car_speed_x).abs() < 1e-12);
    }

    #[test]
    fn test_steering_against_curve_is_damped() {
        let tuning = Tuning::default();
        let curve = 0.4;

        // Left against a rightward bend
        let mut against = car(0.5);
        update(&mut against, &left(), curve, 1.0, DrivingHook::Normal, 1, &tuning);

        let mut coasting = car(0.5);
        update(&mut coasting, &DriveInput::default(), curve, 1.0, DrivingHook::Normal, 1, &tuning);

        let steer = coasting.pos.x - against.pos.x;
        let expected = tuning.car_speed_x * (1.0 - 1.0 * curve);
        assert!((steer - expected).abs() < 1e-12);
    }

    #[test]
    fn test_steering_with_curve_is_undamped() {
        let tuning = Tuning::default();
        let mut with = car(0.5);
        let right = DriveInput {
            steer_right: true,
            ..Default::default()
        };
        update(&mut with, &right, 0.4, 1.0, DrivingHook::Normal, 1, &tuning);

        let mut coasting = car(0.5);
        update(&mut coasting, &DriveInput::default(), 0.4, 1.0, DrivingHook::Normal, 1, &tuning);
        assert!((with.pos.x - coasting.pos.x - tuning.car_speed_x).abs() < 1e-12);
    }

    #[test]
    fn test_passive_drift_follows_curve() {
        let tuning = Tuning::default();
        let mut c = car(0.5);
        update(&mut c, &DriveInput::default(), -0.2, 1.0, DrivingHook::Normal, 1, &tuning);
        let speed = 0.5 - tuning.car_deceleration;
        assert!((c.pos.x - (-0.2 * speed * tuning.player_curve_drift)).abs() < 1e-12);
    }

    #[test]
    fn test_left_and_right_apply_independently() {
        let tuning = Tuning::default();
        let mut c = car(0.5);
        let both = DriveInput {
            steer_left: true,
            steer_right: true,
            accelerate: false,
        };
        update(&mut c, &both, 0.0, 1.0, DrivingHook::Normal, 1, &tuning);
        assert!(c.pos.x.abs() < 1e-12);
    }

    #[test]
    fn test_lateral_clamped_to_road() {
        let tuning = Tuning::default();
        let mut c = car(1.0);
        c.pos.x = -tuning.half_road() + 0.05;
        update(&mut c, &left(), 0.0, 1.0, DrivingHook::Normal, 1, &tuning);
        assert_eq!(c.pos.x, -tuning.half_road());
    }

    #[test]
    fn test_snow_drift_wanders() {
        let tuning = Tuning::default();
        let ticks = 20;
        let mut normal = car(0.5);
        let mut snowy = car(0.5);
        update(&mut normal, &DriveInput::default(), 0.0, 1.0, DrivingHook::Normal, ticks, &tuning);
        update(&mut snowy, &DriveInput::default(), 0.0, 1.0, DrivingHook::SnowDrift, ticks, &tuning);
        let expected = tuning.snow_drift_amplitude * (ticks as f64 * tuning.snow_drift_rate).sin();
        assert!((snowy.pos.x - normal.pos.x - expected).abs() < 1e-12);
    }
}
