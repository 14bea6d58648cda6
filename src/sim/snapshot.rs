//! Read-only view of the world handed to the renderer once per tick

use glam::DVec2;
use serde::Serialize;

use super::flash::CrashTint;
use super::state::{ScenarioPhase, SimulationState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub player: DVec2,
    pub speed: f64,
    /// Spawn order
    pub opponents: Vec<DVec2>,
    pub curve: f64,
    pub road_offset: f64,
    pub phase: ScenarioPhase,
    pub cycle: i32,
    pub score: i64,
    pub high_score: i64,
    pub is_game_over: bool,
    /// Present once the game is over
    pub crash_tint: Option<CrashTint>,
}

impl FrameSnapshot {
    pub fn capture(state: &SimulationState, crash_tint: Option<CrashTint>) -> Self {
        Self {
            tick: state.time_ticks,
            player: state.player.pos,
            speed: state.player.speed,
            opponents: state.traffic.opponents.iter().map(|o| o.pos).collect(),
            curve: state.curve.current,
            road_offset: state.road_offset,
            phase: state.scenario.phase,
            cycle: state.scenario.cycle,
            score: state.score.displayed(),
            high_score: state.score.high_score,
            is_game_over: state.is_game_over,
            crash_tint,
        }
    }
}
