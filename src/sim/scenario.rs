//! Scenario state machine
//!
//! Score drives a never-ending cycle of environmental phases:
//! Start → Snow → Mist → Night → Start (next cycle) → ...
//!
//! Phase boundaries come from an ordered table keyed by `(cycle, phase)`:
//! the first-cycle threshold of the phase plus `cycle * cycle_length`.
//! The core only decides which phase is active and when its enter actions
//! run; the `PhaseLook` table describes what those actions should show.

use serde::{Deserialize, Serialize};

use super::state::{DrivingHook, Scenario, ScenarioPhase};
use crate::tuning::Tuning;

/// A phase whose enter actions must run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub phase: ScenarioPhase,
    pub cycle: i32,
}

/// Score at which `phase` begins during `cycle`
pub fn threshold(tuning: &Tuning, cycle: i32, phase: ScenarioPhase) -> f64 {
    let t = &tuning.phase_thresholds;
    let base = match phase {
        ScenarioPhase::Start => t.start,
        ScenarioPhase::Snow => t.snow,
        ScenarioPhase::Mist => t.mist,
        ScenarioPhase::Night => t.night,
    };
    base + f64::from(cycle) * tuning.scenario_cycle_length
}

impl Scenario {
    /// Re-evaluate the phase for the displayed (floored) score.
    ///
    /// At most one cycle rollover happens per call, and a rollover always
    /// lands on Start so no phase is skipped between cycles.
    pub fn update(&mut self, score: f64, tuning: &Tuning) -> Option<PhaseChange> {
        let score = score.floor();
        let rollover = threshold(tuning, self.cycle + 1, ScenarioPhase::Start);

        let (next, rolled) = if score >= rollover {
            self.cycle += 1;
            (ScenarioPhase::Start, true)
        } else {
            let phase = ScenarioPhase::ALL
                .iter()
                .rev()
                .copied()
                .find(|&p| score >= threshold(tuning, self.cycle, p))
                .unwrap_or(ScenarioPhase::Start);
            (phase, false)
        };

        if next == self.phase && !rolled {
            return None;
        }

        self.phase = next;
        log::info!(
            "Switching to scenario: {} (cycle {})",
            next.as_str(),
            self.cycle
        );
        Some(PhaseChange {
            phase: next,
            cycle: self.cycle,
        })
    }

    /// Kinematics modifier for the active phase
    pub fn driving_hook(&self) -> DrivingHook {
        match self.phase {
            ScenarioPhase::Snow => DrivingHook::SnowDrift,
            _ => DrivingHook::Normal,
        }
    }
}

/// Distance fog
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fog {
    pub color: u32,
    pub near: f64,
    pub far: f64,
}

/// Atmospheric particle systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Particles {
    Snow,
}

/// Player car headlights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Headlights {
    pub intensity: f64,
    pub color: u32,
    pub range: f64,
}

/// Scene parameters the effect collaborator applies when a phase is entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseLook {
    /// `None` keeps the renderer's default sky
    pub background: Option<u32>,
    pub fog: Option<Fog>,
    pub ambient_intensity: f64,
    pub directional_intensity: f64,
    pub directional_color: u32,
    pub road_color: u32,
    pub road_markings: bool,
    pub particles: Option<Particles>,
    pub headlights: Option<Headlights>,
}

impl PhaseLook {
    /// Scene with every transient effect cleared
    pub const BASELINE: PhaseLook = PhaseLook {
        background: None,
        fog: None,
        ambient_intensity: 0.5,
        directional_intensity: 0.8,
        directional_color: 0xffffff,
        road_color: 0x333333,
        road_markings: true,
        particles: None,
        headlights: None,
    };

    pub fn for_phase(phase: ScenarioPhase) -> Self {
        match phase {
            ScenarioPhase::Start => Self::BASELINE,
            ScenarioPhase::Snow => Self {
                background: Some(0xcccccc),
                road_color: 0xffffff,
                road_markings: false,
                particles: Some(Particles::Snow),
                ..Self::BASELINE
            },
            ScenarioPhase::Mist => Self {
                background: Some(0xaaaaaa),
                fog: Some(Fog {
                    color: 0xaaaaaa,
                    near: 10.0,
                    far: 50.0,
                }),
                ..Self::BASELINE
            },
            ScenarioPhase::Night => Self {
                background: Some(0x111122),
                ambient_intensity: 0.1,
                directional_intensity: 0.3,
                directional_color: 0xaaaaff,
                headlights: Some(Headlights {
                    intensity: 1.5,
                    color: 0xffffcc,
                    range: 40.0,
                }),
                ..Self::BASELINE
            },
        }
    }
}
