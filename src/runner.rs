//! Fixed-timestep driver shared by the native and web entry points
//!
//! Owns the session state plus the persisted collaborators (settings, score
//! history) and reacts to the events the simulation raises.

use glam::Vec2;

use crate::achievements::AchievementLog;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::persistence::Store;
use crate::renderer::{DrawList, build_frame, history_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::{Button, HISTORY_BUTTONS, Layout};

pub struct GameRunner {
    pub state: GameState,
    pub settings: Settings,
    pub achievements: AchievementLog,
    /// Held keys and this frame's one-shot actions
    pub input: TickInput,
    store: Store,
    accumulator: f64,
    /// Simulation clock, advanced by `SIM_DT` per tick
    sim_time: f64,
    /// Score history overlay is up and swallowing input
    history_open: bool,
}

impl GameRunner {
    pub fn new(seed: u64, tuning: Tuning, store: Store) -> Self {
        let settings = Settings::load(&store);
        let achievements = AchievementLog::load(store.clone());
        let mut state = GameState::new(seed, tuning, 0.0);
        state.skip_intro = settings.skip_intro;
        Self {
            state,
            settings,
            achievements,
            input: TickInput::default(),
            store,
            accumulator: 0.0,
            sim_time: 0.0,
            history_open: false,
        }
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    /// Advance by wall-clock `dt` seconds, running whole ticks only
    pub fn update(&mut self, dt: f64) -> Vec<GameEvent> {
        self.accumulator += dt.clamp(0.0, 0.1);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        events
    }

    /// Run exactly one tick
    pub fn step(&mut self) -> Vec<GameEvent> {
        if self.history_open {
            self.handle_history_input();
            self.clear_one_shots();
            return Vec::new();
        }

        self.sim_time += SIM_DT;
        let input = self.input.clone();
        tick(&mut self.state, &input, self.sim_time);
        self.clear_one_shots();

        let events = self.state.drain_events();
        for event in &events {
            self.handle(event);
        }
        events
    }

    pub fn frame(&self) -> DrawList {
        if self.history_open {
            history_frame(&self.achievements, self.state.tuning.screen)
        } else {
            build_frame(&self.state, &self.settings)
        }
    }

    fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::SessionComplete { score } => {
                if let Err(e) = self.achievements.save_achievement(*score) {
                    log::error!("Failed to save score {}: {}", score, e);
                }
            }
            GameEvent::SkipIntroChanged(on) => {
                self.settings.skip_intro = *on;
                self.settings.save(&self.store);
            }
            GameEvent::ShowAchievements => self.history_open = true,
            GameEvent::PlayCutscene(scene) => log::info!("Cut-scene: {}", scene.asset_name()),
            GameEvent::DayStarted(day) => log::debug!("Now on {}", day.background()),
            _ => {}
        }
    }

    fn handle_history_input(&mut self) {
        let layout = Layout::new(self.state.tuning.screen);
        let clicked = self.input.click.and_then(|p| layout.hit(&HISTORY_BUTTONS, p));
        match clicked {
            Some(Button::Back) => self.history_open = false,
            Some(Button::ClearHistory) => {
                if let Err(e) = self.achievements.clear() {
                    log::error!("Failed to clear achievements: {}", e);
                }
            }
            _ => {
                if self.input.dismiss {
                    self.history_open = false;
                }
            }
        }
    }

    fn clear_one_shots(&mut self) {
        self.input.click = None;
        self.input.start = false;
        self.input.open_codex = false;
        self.input.dismiss = false;
        self.input.codex_select = None;
        self.input.restart = false;
    }

    /// Queue a click for the next tick
    pub fn click(&mut self, point: Vec2) {
        self.input.click = Some(point);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::persistence::test_support::temp_store;
    use crate::sim::Phase;

    fn runner(tag: &str) -> GameRunner {
        GameRunner::new(3, Tuning::default(), temp_store(tag))
    }

    #[test]
    fn test_update_runs_whole_ticks_only() {
        let mut runner = runner("runner-ticks");
        runner.update(SIM_DT * 2.5);
        assert_eq!(runner.state.time_ticks, 2);
        runner.update(SIM_DT * 0.75);
        assert_eq!(runner.state.time_ticks, 3);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut runner = runner("runner-cap");
        runner.update(5.0);
        assert!(runner.state.time_ticks >= 5);
        assert!(runner.state.time_ticks <= u64::from(MAX_SUBSTEPS));
    }

    #[test]
    fn test_one_shot_input_cleared() {
        let mut runner = runner("runner-oneshot");
        runner.input.start = true;
        runner.input.right = true;
        runner.step();
        assert!(!runner.input.start);
        assert!(runner.input.right);
        assert!(matches!(runner.state.phase, Phase::Playing(_)));
    }

    #[test]
    fn test_skip_intro_persists() {
        let store = temp_store("runner-skip");
        let mut runner = GameRunner::new(3, Tuning::default(), store.clone());
        runner.click(Vec2::new(400.0, 450.0));
        runner.step();
        assert!(runner.settings.skip_intro);

        let reopened = GameRunner::new(4, Tuning::default(), store);
        assert!(reopened.state.skip_intro);
    }

    #[test]
    fn test_history_overlay_is_modal() {
        let mut runner = runner("runner-history");
        runner.click(Vec2::new(400.0, 350.0));
        runner.step();
        assert!(runner.history_open());
        assert!(runner.frame().texts().any(|t| t == "Back"));

        // Start is ignored while the overlay is up
        runner.input.start = true;
        runner.step();
        assert_eq!(runner.state.phase, Phase::Start);

        runner.click(Vec2::new(400.0, 525.0));
        runner.step();
        assert!(!runner.history_open());
    }

    #[test]
    fn test_finished_session_is_recorded() {
        let mut runner = runner("runner-record");
        runner.input.start = true;
        runner.step();
        let now = runner.sim_time();
        runner.state.ledger.award(4, now);
        runner.state.finish_session();
        runner.step();
        assert_eq!(runner.achievements.len(), 1);
        assert_eq!(runner.achievements.best(), Some(4));
    }
}
