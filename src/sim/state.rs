//! Session state
//!
//! `GameState` owns everything the tick mutates: the viewport, the actor, the
//! collectible field, the round clock, the score ledger and the collection
//! registry. Nothing lives in globals; the driver passes it by reference.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorSprite};
use super::catalog::{CollectionRegistry, TrashKind};
use super::clock::RoundClock;
use super::field::{CollectibleField, FieldLimits, Pickup};
use super::ledger::ScoreLedger;
use super::viewport::WorldViewport;
use crate::tuning::Tuning;

/// A playing day, each with its own background and sprite set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Day {
    One,
    Two,
}

impl Day {
    pub fn number(&self) -> u8 {
        match self {
            Day::One => 1,
            Day::Two => 2,
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Day::One => "beach",
            Day::Two => "ocean",
        }
    }

    pub fn sprite(&self) -> ActorSprite {
        match self {
            Day::One => ActorSprite::Beach,
            Day::Two => ActorSprite::Ocean,
        }
    }
}

/// Blocking cut-scenes played by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cutscene {
    Intro,
    AfterCredits,
}

impl Cutscene {
    pub fn asset_name(&self) -> &'static str {
        match self {
            Cutscene::Intro => "intro",
            Cutscene::AfterCredits => "aftercredit",
        }
    }
}

/// Top-level session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen
    Start,
    /// Active gameplay
    Playing(Day),
    /// Collection overlay, remembers the day it interrupted
    Codex { resume: Day },
    /// Results screen
    End,
}

/// Things the driver reacts to (sounds, cut-scenes, persistence)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Play a blocking cut-scene before continuing
    PlayCutscene(Cutscene),
    DayStarted(Day),
    Collected(Pickup),
    PopupDismissed,
    CodexOpened,
    CodexClosed,
    /// Show the score history overlay
    ShowAchievements,
    /// Help message is up until the given time
    ShowHelp { until: f64 },
    SkipIntroChanged(bool),
    /// Emitted exactly once per finished session
    SessionComplete { score: u64 },
    ReturnedToStart,
}

/// Codex overlay state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodexView {
    /// Collected type whose detail is open
    pub detail: Option<TrashKind>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: Phase,
    pub viewport: WorldViewport,
    pub actor: Actor,
    pub field: CollectibleField,
    pub clock: RoundClock,
    pub ledger: ScoreLedger,
    /// Outlives sessions: "play again" keeps what was discovered
    pub registry: CollectionRegistry,
    pub codex: CodexView,
    pub skip_intro: bool,
    /// Help message deadline while it is showing
    pub help_until: Option<f64>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) last_spawn_at: f64,
    pub(crate) rng: Pcg32,
    score_submitted: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning, now: f64) -> Self {
        let tuning = tuning.sanitized();
        let viewport = WorldViewport::new(tuning.world_for(Day::One), tuning.screen);
        let actor = new_actor(&tuning, Day::One);
        let field = new_field(&tuning);
        let clock = RoundClock::new(tuning.round_secs, now);
        Self {
            seed,
            phase: Phase::Start,
            viewport,
            actor,
            field,
            clock,
            ledger: ScoreLedger::new(),
            registry: CollectionRegistry::new(),
            codex: CodexView::default(),
            skip_intro: false,
            help_until: None,
            time_ticks: 0,
            last_spawn_at: now,
            rng: Pcg32::seed_from_u64(seed),
            score_submitted: false,
            events: Vec::new(),
            tuning,
        }
    }

    /// The day being played or interrupted by the codex
    pub fn current_day(&self) -> Option<Day> {
        match self.phase {
            Phase::Playing(day) | Phase::Codex { resume: day } => Some(day),
            Phase::Start | Phase::End => None,
        }
    }

    /// Movement and the round clock stop while the detail popup is up
    pub fn interaction_paused(&self) -> bool {
        self.field.popup().is_some()
    }

    pub fn score(&self) -> u64 {
        self.ledger.total()
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// START -> DAY1
    pub fn start_session(&mut self, now: f64) {
        if self.phase != Phase::Start {
            return;
        }
        if !self.skip_intro {
            self.emit(GameEvent::PlayCutscene(Cutscene::Intro));
        }
        self.ledger.reset();
        self.score_submitted = false;
        self.begin_day(Day::One, now);
        log::info!("Session started (seed {})", self.seed);
    }

    /// Fresh actor, fresh clock, viewport back at the origin. The field is
    /// carried over between days.
    pub fn begin_day(&mut self, day: Day, now: f64) {
        self.actor = new_actor(&self.tuning, day);
        self.viewport.set_world(self.tuning.world_for(day));
        self.clock.reset(now);
        self.field.dismiss_popup();
        self.last_spawn_at = now;
        self.phase = Phase::Playing(day);
        self.emit(GameEvent::DayStarted(day));
        log::info!("Day {} started", day.number());
    }

    /// DAY2 -> END, submits the score once. Ignored outside a running day.
    pub fn finish_session(&mut self) {
        if !matches!(self.phase, Phase::Playing(_)) {
            return;
        }
        if !self.skip_intro {
            self.emit(GameEvent::PlayCutscene(Cutscene::AfterCredits));
        }
        self.phase = Phase::End;
        if !self.score_submitted {
            self.score_submitted = true;
            let score = self.ledger.total();
            self.emit(GameEvent::SessionComplete { score });
            log::info!("Session complete, score {}", score);
        }
    }

    /// END -> START with a fresh actor and field
    pub fn restart(&mut self) {
        self.actor = new_actor(&self.tuning, Day::One);
        self.field = new_field(&self.tuning);
        self.viewport.set_world(self.tuning.world_for(Day::One));
        self.codex = CodexView::default();
        self.phase = Phase::Start;
        self.emit(GameEvent::ReturnedToStart);
    }

    /// PLAYING -> CODEX
    pub fn open_codex(&mut self, now: f64) {
        if let Phase::Playing(day) = self.phase {
            self.clock.update(now, true);
            self.codex = CodexView::default();
            self.phase = Phase::Codex { resume: day };
            self.emit(GameEvent::CodexOpened);
        }
    }

    /// CODEX -> the interrupted day
    pub fn close_codex(&mut self) {
        if let Phase::Codex { resume } = self.phase {
            self.codex = CodexView::default();
            self.phase = Phase::Playing(resume);
            self.emit(GameEvent::CodexClosed);
        }
    }

    pub fn toggle_skip_intro(&mut self) {
        self.skip_intro = !self.skip_intro;
        self.emit(GameEvent::SkipIntroChanged(self.skip_intro));
    }
}

fn new_actor(tuning: &Tuning, day: Day) -> Actor {
    Actor::new(
        tuning.actor_spawn,
        tuning.actor_sprite_size,
        day.sprite(),
        tuning.hitbox_size,
    )
}

/// Items spawn across the beach extent on both days
fn new_field(tuning: &Tuning) -> CollectibleField {
    CollectibleField::new(tuning.world_for(Day::One), FieldLimits::from_tuning(tuning))
}
