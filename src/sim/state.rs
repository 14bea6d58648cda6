//! Simulation state and core types
//!
//! One owned `SimulationState` per session. Components receive the pieces
//! they need by reference for the duration of a single call.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Player car position sits this far down the road at session start
pub const PLAYER_START_Z: f64 = -5.0;

/// Environmental mode, cycling Start → Snow → Mist → Night → Start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioPhase {
    Start,
    Snow,
    Mist,
    Night,
}

impl ScenarioPhase {
    /// All phases in cycle order
    pub const ALL: [ScenarioPhase; 4] = [
        ScenarioPhase::Start,
        ScenarioPhase::Snow,
        ScenarioPhase::Mist,
        ScenarioPhase::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioPhase::Start => "start",
            ScenarioPhase::Snow => "snow",
            ScenarioPhase::Mist => "mist",
            ScenarioPhase::Night => "night",
        }
    }
}

/// Per-phase modifier applied by vehicle kinematics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrivingHook {
    #[default]
    Normal,
    /// Low grip: the car wanders sideways on its own
    SnowDrift,
}

/// The player's car
#[derive(Debug, Clone)]
pub struct PlayerCar {
    /// x = lateral, y = longitudinal (forward is -y)
    pub pos: DVec2,
    /// Forward speed in world units per tick
    pub speed: f64,
}

/// Road bend state
#[derive(Debug, Clone, Default)]
pub struct CurveState {
    /// Signed bend (positive pulls toward +x)
    pub current: f64,
    /// Ticks until the next curve may spawn
    pub countdown: i32,
}

/// An oncoming car
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opponent {
    pub pos: DVec2,
}

/// Opponent set and spawn timer
#[derive(Debug, Clone, Default)]
pub struct Traffic {
    /// Spawn order is preserved
    pub opponents: Vec<Opponent>,
    pub spawn_timer: f64,
}

/// Scenario state machine position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub phase: ScenarioPhase,
    /// Completed phase cycles
    pub cycle: i32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            phase: ScenarioPhase::Start,
            cycle: 0,
        }
    }
}

/// Running score and best score
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    pub score: f64,
    pub high_score: i64,
}

/// Discrete things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// The player hit an opponent; emitted once, on the tick the game ends
    Collision { player: DVec2, opponent: DVec2 },
    /// Phase enter actions must run
    PhaseEntered { phase: ScenarioPhase, cycle: i32 },
    /// Road segment wrapped; the current phase is re-entered
    RoadWrapped { phase: ScenarioPhase },
    NewHighScore(i64),
    CurveSpawned { angle: f64 },
    OpponentsSpawned { count: u32 },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Simulation tick counter (frozen on game over)
    pub time_ticks: u64,
    pub player: PlayerCar,
    /// Difficulty ramp, never decreases
    pub speed_multiplier: f64,
    pub is_game_over: bool,
    pub curve: CurveState,
    pub traffic: Traffic,
    pub score: ScoreBoard,
    pub scenario: Scenario,
    /// Road segment offset, wraps within one segment length
    pub road_offset: f64,
}

impl SimulationState {
    /// Create a new simulation with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            player: PlayerCar {
                pos: DVec2::new(0.0, PLAYER_START_Z),
                speed: tuning.min_speed,
            },
            speed_multiplier: 1.0,
            is_game_over: false,
            curve: CurveState {
                current: 0.0,
                countdown: tuning.curve_countdown_base as i32,
            },
            traffic: Traffic {
                opponents: Vec::new(),
                spawn_timer: tuning.spawn_initial_delay,
            },
            score: ScoreBoard::default(),
            scenario: Scenario::default(),
            road_offset: 0.0,
            tuning,
        }
    }

    /// Seed the persisted best score
    pub fn with_high_score(mut self, high_score: i64) -> Self {
        self.score.high_score = high_score.max(0);
        self
    }
}
