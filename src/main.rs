//! Endless Road entry point
//!
//! Natively this runs a headless session driven by the autopilot and prints
//! the final frame snapshot as JSON.
//! Usage: `endless-road [seed] [max_ticks] [low|medium|high]`.
//! A quality argument is saved to the settings file for later runs.
//! Set `ENDLESS_ROAD_TUNING` to a JSON file to override balance values.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use endless_road::game::ScenarioEffects;
    use endless_road::sim::{GameEvent, PhaseLook, ScenarioPhase, autopilot};
    use endless_road::{QualityPreset, Session, Settings, Tuning, platform};

    const DEFAULT_SEED: u64 = 0x5eed;
    const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 5;

    /// Logs what a renderer would change on phase entry
    struct LogEffects {
        particle_budget: usize,
    }

    impl ScenarioEffects for LogEffects {
        fn reset(&mut self) {
            log::debug!("Scene effects reset");
        }

        fn apply(&mut self, phase: ScenarioPhase, look: &PhaseLook) {
            let particles = match look.particles {
                Some(_) => self.particle_budget,
                None => 0,
            };
            log::info!(
                "Scene: {} (background {:?}, fog {}, headlights {}, particles {})",
                phase.as_str(),
                look.background.map(|c| format!("#{:06x}", c)),
                look.fog.is_some(),
                look.headlights.is_some(),
                particles
            );
        }
    }

    fn load_tuning() -> Tuning {
        match std::env::var_os("ENDLESS_ROAD_TUNING") {
            Some(path) => Tuning::load(Path::new(&path)).unwrap_or_else(|e| {
                log::warn!("Ignoring tuning file ({}), using defaults", e);
                Tuning::default()
            }),
            None => Tuning::default(),
        }
    }

    pub fn run() {
        platform::init_logging();
        log::info!("Endless Road (headless) starting...");

        let mut args = std::env::args().skip(1);
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        let max_ticks = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_TICKS);

        let mut settings = Settings::load();
        if let Some(arg) = args.next() {
            match QualityPreset::parse(&arg) {
                Some(quality) if quality != settings.quality => {
                    settings.quality = quality;
                    settings.save();
                }
                Some(_) => {}
                None => log::warn!("Unknown quality preset '{}', keeping {}", arg, settings.quality.as_str()),
            }
        }
        let effects = LogEffects {
            particle_budget: settings.max_particles(),
        };
        let mut session = Session::new(seed, load_tuning(), settings, platform::default_store(), effects);

        let mut new_best = None;
        for _ in 0..max_ticks {
            let input = autopilot::drive(session.state());
            for event in session.tick(&input) {
                if let GameEvent::NewHighScore(score) = event {
                    new_best = Some(score);
                }
            }
            if session.is_game_over() {
                break;
            }
        }

        if let Some(score) = new_best {
            log::info!("New high score: {}", score);
        }

        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build embeds the library; there is no standalone entry point
}
