//! Game session: the simulation plus its outside collaborators
//!
//! `sim::tick` decides what happens; the session carries out the parts that
//! touch the outside world in the same call:
//! - high score written through to the store as soon as it improves
//! - phase enter actions (reset, then apply the phase look) on the effect sink
//! - crash flicker frames counted while the frozen frame keeps being drawn

use crate::highscores::{load_high_score, save_high_score};
use crate::persistence::KeyValueStore;
use crate::settings::Settings;
use crate::sim::{
    CrashTint, DriveInput, FrameSnapshot, GameEvent, PhaseLook, ScenarioPhase, SimulationState,
    crash_tint, tick,
};
use crate::tuning::Tuning;

/// Receives phase enter actions. Must tolerate the same phase repeatedly.
pub trait ScenarioEffects {
    /// Clear every transient scene effect
    fn reset(&mut self);
    /// Apply the look of `phase`
    fn apply(&mut self, phase: ScenarioPhase, look: &PhaseLook);
}

/// Effect sink that ignores everything (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl ScenarioEffects for NoEffects {
    fn reset(&mut self) {}
    fn apply(&mut self, _phase: ScenarioPhase, _look: &PhaseLook) {}
}

impl<E: ScenarioEffects + ?Sized> ScenarioEffects for &mut E {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn apply(&mut self, phase: ScenarioPhase, look: &PhaseLook) {
        (**self).apply(phase, look)
    }
}

impl<E: ScenarioEffects + ?Sized> ScenarioEffects for Box<E> {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn apply(&mut self, phase: ScenarioPhase, look: &PhaseLook) {
        (**self).apply(phase, look)
    }
}

/// One play session
pub struct Session<S: KeyValueStore, E: ScenarioEffects> {
    state: SimulationState,
    store: S,
    effects: E,
    settings: Settings,
    /// Frames drawn since the collision, `None` while driving
    frames_since_crash: Option<u32>,
}

impl<S: KeyValueStore, E: ScenarioEffects> Session<S, E> {
    /// Start a session, reading the persisted high score from `store`
    pub fn new(seed: u64, tuning: Tuning, settings: Settings, store: S, effects: E) -> Self {
        let high_score = load_high_score(&store);
        let mut session = Self {
            state: SimulationState::new(seed, tuning).with_high_score(high_score),
            store,
            effects,
            settings,
            frames_since_crash: None,
        };
        log::info!("New session (seed {}, high score {})", seed, high_score);
        session.enter(session.state.scenario.phase);
        session
    }

    /// Throw away the current run and start a new one; the high score stays
    pub fn restart(&mut self, seed: u64) {
        let high_score = self.state.score.high_score;
        let tuning = self.state.tuning.clone();
        self.state = SimulationState::new(seed, tuning).with_high_score(high_score);
        self.frames_since_crash = None;
        log::info!("Restarted session (seed {})", seed);
        self.enter(self.state.scenario.phase);
    }

    /// Advance one frame. After game over only the crash flicker advances.
    pub fn tick(&mut self, input: &DriveInput) -> Vec<GameEvent> {
        if let Some(frames) = self.frames_since_crash.as_mut() {
            *frames = frames.saturating_add(1);
            return Vec::new();
        }

        let events = tick(&mut self.state, input);
        for event in &events {
            match *event {
                GameEvent::NewHighScore(score) => save_high_score(&mut self.store, score),
                GameEvent::PhaseEntered { phase, .. } | GameEvent::RoadWrapped { phase } => {
                    self.enter(phase)
                }
                GameEvent::Collision { .. } => self.frames_since_crash = Some(0),
                GameEvent::CurveSpawned { .. } | GameEvent::OpponentsSpawned { .. } => {}
            }
        }
        events
    }

    /// Read-only world view for the renderer
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state, self.crash_tint())
    }

    pub fn crash_tint(&self) -> Option<CrashTint> {
        self.frames_since_crash
            .map(|frames| crash_tint(frames, self.settings.effective_crash_flash()))
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    fn enter(&mut self, phase: ScenarioPhase) {
        self.effects.reset();
        self.effects.apply(phase, &PhaseLook::for_phase(phase));
    }
}
