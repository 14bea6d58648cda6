//! Data-driven game balance
//!
//! Every number the simulation formulas use lives here so a run can be
//! rebalanced from a JSON file without a rebuild. Missing fields fall back
//! to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::StoreError;

/// Score thresholds for each scenario phase within the first cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseThresholds {
    pub start: f64,
    pub snow: f64,
    pub mist: f64,
    pub night: f64,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            start: 0.0,
            snow: 100.0,
            mist: 200.0,
            night: 300.0,
        }
    }
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Vehicle ===
    pub road_width: f64,
    pub car_speed_x: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub car_acceleration: f64,
    pub car_deceleration: f64,
    /// Speed → steering resistance gain (resistance = min(1, speed * gain))
    pub curve_resistance_gain: f64,
    /// Passive lateral pull on the player per unit of curve and speed
    pub player_curve_drift: f64,
    /// Snow drift wander amplitude and angular rate (radians per tick)
    pub snow_drift_amplitude: f64,
    pub snow_drift_rate: f64,

    // === Curves ===
    pub max_curve_angle: f64,
    /// Below this magnitude the road counts as flat
    pub curve_flat_epsilon: f64,
    pub curve_decay: f64,
    pub curve_countdown_base: f64,
    pub curve_countdown_jitter: f64,
    pub curve_countdown_min: i32,
    /// Score at which the difficulty factor has grown by 1
    pub curve_difficulty_score: f64,
    pub max_difficulty_factor: f64,

    // === Traffic ===
    pub spawn_initial_delay: f64,
    pub spawn_interval_base: f64,
    pub spawn_interval_floor: f64,
    pub spawn_speed_scale: f64,
    /// Curve magnitude above which the spawn countdown runs faster
    pub dense_curve_threshold: f64,
    pub dense_curve_extra_countdown: f64,
    /// Score per additional opponent in a spawn wave
    pub spawn_density_score: f64,
    pub max_extra_opponents: u32,
    pub spawn_min_gap: f64,
    pub spawn_depth_jitter: f64,
    pub opponent_speed_factor: f64,
    pub opponent_curve_drift: f64,
    pub despawn_distance: f64,
    pub car_half_width: f64,
    pub car_half_length: f64,

    // === Score / difficulty ===
    pub base_score_per_tick: f64,
    pub score_speed_factor: f64,
    pub difficulty_ramp: f64,

    // === Scenarios ===
    pub phase_thresholds: PhaseThresholds,
    pub scenario_cycle_length: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            road_width: ROAD_WIDTH,
            car_speed_x: CAR_SPEED_X,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            car_acceleration: CAR_ACCELERATION,
            car_deceleration: CAR_DECELERATION,
            curve_resistance_gain: 2.5,
            player_curve_drift: 0.1,
            snow_drift_amplitude: 0.01,
            snow_drift_rate: 0.05,

            max_curve_angle: MAX_CURVE_ANGLE,
            curve_flat_epsilon: 0.01,
            curve_decay: 0.99,
            curve_countdown_base: 300.0,
            curve_countdown_jitter: 100.0,
            curve_countdown_min: 50,
            curve_difficulty_score: 5000.0,
            max_difficulty_factor: 2.0,

            spawn_initial_delay: OPPONENT_SPAWN_DELAY,
            spawn_interval_base: OPPONENT_SPAWN_INTERVAL_BASE,
            spawn_interval_floor: 20.0,
            spawn_speed_scale: 1.5,
            dense_curve_threshold: 0.1,
            dense_curve_extra_countdown: 2.0,
            spawn_density_score: 2000.0,
            max_extra_opponents: 2,
            spawn_min_gap: 100.0,
            spawn_depth_jitter: 100.0,
            opponent_speed_factor: OPPONENT_SPEED_FACTOR,
            opponent_curve_drift: 0.05,
            despawn_distance: DESPAWN_DISTANCE,
            car_half_width: CAR_HALF_WIDTH,
            car_half_length: CAR_HALF_LENGTH,

            base_score_per_tick: 0.1,
            score_speed_factor: 0.25,
            difficulty_ramp: 0.0001,

            phase_thresholds: PhaseThresholds::default(),
            scenario_cycle_length: SCENARIO_CYCLE_LENGTH,
        }
    }
}

impl Tuning {
    /// Half the playable road width (lateral clamp bound)
    #[inline]
    pub fn half_road(&self) -> f64 {
        self.road_width / 2.0
    }

    /// Score-derived multiplier widening curves: min(max, 1 + score / k)
    pub fn difficulty_factor(&self, score: f64) -> f64 {
        (1.0 + score / self.curve_difficulty_score).min(self.max_difficulty_factor)
    }

    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), StoreError> {
        let t = &self.phase_thresholds;
        let values = [
            ("road_width", self.road_width),
            ("car_speed_x", self.car_speed_x),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("car_acceleration", self.car_acceleration),
            ("car_deceleration", self.car_deceleration),
            ("curve_resistance_gain", self.curve_resistance_gain),
            ("player_curve_drift", self.player_curve_drift),
            ("snow_drift_amplitude", self.snow_drift_amplitude),
            ("snow_drift_rate", self.snow_drift_rate),
            ("max_curve_angle", self.max_curve_angle),
            ("curve_flat_epsilon", self.curve_flat_epsilon),
            ("curve_decay", self.curve_decay),
            ("curve_countdown_base", self.curve_countdown_base),
            ("curve_countdown_jitter", self.curve_countdown_jitter),
            ("curve_difficulty_score", self.curve_difficulty_score),
            ("max_difficulty_factor", self.max_difficulty_factor),
            ("spawn_initial_delay", self.spawn_initial_delay),
            ("spawn_interval_base", self.spawn_interval_base),
            ("spawn_interval_floor", self.spawn_interval_floor),
            ("spawn_speed_scale", self.spawn_speed_scale),
            ("dense_curve_threshold", self.dense_curve_threshold),
            ("dense_curve_extra_countdown", self.dense_curve_extra_countdown),
            ("spawn_density_score", self.spawn_density_score),
            ("spawn_min_gap", self.spawn_min_gap),
            ("spawn_depth_jitter", self.spawn_depth_jitter),
            ("opponent_speed_factor", self.opponent_speed_factor),
            ("opponent_curve_drift", self.opponent_curve_drift),
            ("despawn_distance", self.despawn_distance),
            ("car_half_width", self.car_half_width),
            ("car_half_length", self.car_half_length),
            ("base_score_per_tick", self.base_score_per_tick),
            ("score_speed_factor", self.score_speed_factor),
            ("difficulty_ramp", self.difficulty_ramp),
            ("phase_thresholds.start", t.start),
            ("phase_thresholds.snow", t.snow),
            ("phase_thresholds.mist", t.mist),
            ("phase_thresholds.night", t.night),
            ("scenario_cycle_length", self.scenario_cycle_length),
        ];
        if let Some((name, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(StoreError::InvalidTuning(format!("{} is not finite", name)));
        }

        let positive = [
            ("road_width", self.road_width),
            ("car_half_width", self.car_half_width),
            ("car_half_length", self.car_half_length),
            ("spawn_speed_scale", self.spawn_speed_scale),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(StoreError::InvalidTuning(format!("{} must be positive, got {}", name, value)));
        }

        if self.min_speed > self.max_speed {
            return Err(StoreError::InvalidTuning(format!(
                "min_speed {} exceeds max_speed {}",
                self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
