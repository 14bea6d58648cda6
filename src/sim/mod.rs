//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per displayed frame
//! - Seeded RNG only
//! - Stable iteration order (opponents in spawn order)
//! - No rendering, persistence or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod curve;
pub mod flash;
pub mod scenario;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod traffic;
pub mod vehicle;

pub use collision::{Aabb, car_box, first_overlap};
pub use flash::{CrashTint, crash_tint};
pub use scenario::{Fog, Headlights, Particles, PhaseChange, PhaseLook};
pub use snapshot::FrameSnapshot;
pub use state::{
    CurveState, DrivingHook, GameEvent, Opponent, PlayerCar, Scenario, ScenarioPhase, ScoreBoard,
    SimulationState, Traffic,
};
pub use tick::{DriveInput, tick};
pub use traffic::TrafficUpdate;
