//! Endless Road - simulation core for an endless-driving arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, curves, traffic, scenarios, score)
//! - `game`: Session orchestration over the simulation and its collaborators
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Key-value stores for the high score
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Session;
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Effective playable width (road width 10 minus car width 1)
    pub const ROAD_WIDTH: f64 = 9.0;
    /// Lateral steering step per tick
    pub const CAR_SPEED_X: f64 = 0.15;

    /// Forward speed bounds (world units per tick)
    pub const MIN_SPEED: f64 = 0.3;
    pub const MAX_SPEED: f64 = 1.0;
    pub const CAR_ACCELERATION: f64 = 0.01;
    pub const CAR_DECELERATION: f64 = 0.005;

    /// Peak curve magnitude before the difficulty factor is applied
    pub const MAX_CURVE_ANGLE: f64 = 0.3;

    /// Frames before the first opponent spawns
    pub const OPPONENT_SPAWN_DELAY: f64 = 100.0;
    /// Base frames between spawns (adjusts with speed)
    pub const OPPONENT_SPAWN_INTERVAL_BASE: f64 = 120.0;
    /// Opponents close in slightly slower than the player's own speed
    pub const OPPONENT_SPEED_FACTOR: f64 = 0.8;

    /// Camera sits this far behind the player; opponents past it are removed
    pub const DESPAWN_DISTANCE: f64 = 5.0;

    /// Car footprint (1 wide, 2 long), shared by player and opponents
    pub const CAR_HALF_WIDTH: f64 = 0.5;
    pub const CAR_HALF_LENGTH: f64 = 1.0;

    /// Road segment length and the offset at which it wraps back
    pub const ROAD_SEGMENT_LENGTH: f64 = 1000.0;
    pub const ROAD_WRAP_OFFSET: f64 = 500.0;

    /// Score needed to move through one full scenario cycle
    pub const SCENARIO_CYCLE_LENGTH: f64 = 400.0;
}
