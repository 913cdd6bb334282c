//! Fixed timestep simulation tick
//!
//! One call advances the session by one tick. All time comes from the
//! caller-supplied `now` (seconds), so a run is reproducible from its seed
//! and input sequence.

use glam::{IVec2, Vec2};

use super::actor::{MoveParams, resolve_movement};
use super::catalog::TrashKind;
use super::field::Collectible;
use super::state::{Day, GameEvent, GameState, Phase};
use crate::ui::{Button, FINISH_BUTTONS, HUD_BUTTONS, Layout, START_BUTTONS};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held arrow keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Mouse click this tick (screen coordinates)
    pub click: Option<Vec2>,
    /// Start key on the title screen
    pub start: bool,
    /// Codex key (B)
    pub open_codex: bool,
    /// Space: dismiss popup, close codex detail, close codex
    pub dismiss: bool,
    /// Number key 1-10 in the codex
    pub codex_select: Option<u8>,
    /// Play-again key on the results screen
    pub restart: bool,
    /// Demo mode - steer toward the nearest collectible
    pub autopilot: bool,
}

impl TickInput {
    /// Held keys as a direction; opposite keys cancel out
    pub fn direction(&self) -> IVec2 {
        IVec2::new(
            self.right as i32 - self.left as i32,
            self.down as i32 - self.up as i32,
        )
    }

    /// Set held keys from a direction
    pub fn hold(&mut self, dir: IVec2) {
        self.left = dir.x < 0;
        self.right = dir.x > 0;
        self.up = dir.y < 0;
        self.down = dir.y > 0;
    }
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    state.time_ticks += 1;
    let layout = Layout::new(state.tuning.screen);

    match state.phase {
        Phase::Start => tick_start(state, input, &layout, now),
        Phase::Playing(day) => {
            let codex_clicked = input
                .click
                .and_then(|p| layout.hit(&HUD_BUTTONS, p))
                .is_some();
            if input.open_codex || codex_clicked {
                state.open_codex(now);
                return;
            }
            tick_playing(state, input, day, now);
        }
        Phase::Codex { .. } => tick_codex(state, input, now),
        Phase::End => {
            let clicked = input
                .click
                .and_then(|p| layout.hit(&FINISH_BUTTONS, p))
                .is_some();
            if input.restart || clicked {
                state.restart();
            }
        }
    }
}

fn tick_start(state: &mut GameState, input: &TickInput, layout: &Layout, now: f64) {
    // Help message is modal until it times out
    if let Some(until) = state.help_until {
        if now < until {
            return;
        }
        state.help_until = None;
    }

    let clicked = input.click.and_then(|p| layout.hit(&START_BUTTONS, p));
    if input.start || clicked == Some(Button::Start) {
        state.start_session(now);
        return;
    }
    match clicked {
        Some(Button::Achievements) => state.emit(GameEvent::ShowAchievements),
        Some(Button::Help) => {
            let until = now + state.tuning.help_secs;
            state.help_until = Some(until);
            state.emit(GameEvent::ShowHelp { until });
        }
        Some(Button::SkipIntro) => state.toggle_skip_intro(),
        _ => {}
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput, day: Day, now: f64) {
    let popup_was_open = state.interaction_paused();
    if popup_was_open && (input.dismiss || input.autopilot) {
        state.field.dismiss_popup();
        state.emit(GameEvent::PopupDismissed);
    }

    // Movement is frozen while the popup is up
    let dir = if input.autopilot {
        autopilot_direction(state)
    } else {
        input.direction()
    };
    let params = MoveParams {
        speed: if state.interaction_paused() {
            0.0
        } else {
            state.tuning.base_speed
        },
        tolerance: state.tuning.axis_tolerance,
        margin: state.tuning.actor_margin,
    };
    if params.speed > 0.0 {
        resolve_movement(&mut state.actor, &mut state.viewport, dir, &params);
    }

    // Spawn on a fixed cadence
    if now - state.last_spawn_at >= state.tuning.spawn_interval_secs {
        state.field.spawn(&mut state.rng, now);
        state.last_spawn_at = now;
    }
    let culled = state.field.cull_expired(now);
    if culled > 0 {
        log::debug!("Culled {} expired collectibles", culled);
    }

    let pickups = state.field.collect(
        state.actor.hitbox(),
        state.viewport.offset(),
        &mut state.ledger,
        &mut state.registry,
        now,
    );
    for pickup in &pickups {
        log::debug!(
            "Collected trash #{} (+{}, total {})",
            pickup.kind.id(),
            pickup.points,
            state.ledger.total()
        );
        state.emit(GameEvent::Collected(*pickup));
    }
    if state.tuning.popup_auto_dismiss
        && popup_was_open
        && pickups.is_empty()
        && state.interaction_paused()
    {
        state.field.dismiss_popup();
        state.emit(GameEvent::PopupDismissed);
    }
    state.ledger.expire_recent(now, state.tuning.recent_gain_secs);

    let paused = state.interaction_paused();
    state.clock.update(now, paused);

    if state.clock.time_up() {
        match day {
            Day::One => state.begin_day(Day::Two, now),
            Day::Two => state.finish_session(),
        }
    }
}

fn tick_codex(state: &mut GameState, input: &TickInput, now: f64) {
    state.clock.update(now, true);

    if let Some(kind) = input.codex_select.and_then(TrashKind::from_id) {
        if state.registry.is_collected(kind) {
            state.codex.detail = Some(kind);
        }
    }
    if input.dismiss {
        if state.codex.detail.is_some() {
            state.codex.detail = None;
        } else {
            state.close_codex();
        }
    }
}

/// Steer toward the nearest on-screen collectible. With nothing on screen,
/// head for the nearest one in the world so the view scrolls toward it.
fn autopilot_direction(state: &GameState) -> IVec2 {
    let offset = state.viewport.offset();
    let actor_center = state.actor.center();
    let actor_world = actor_center + offset;

    let target = nearest_to(state.field.visible(offset, state.viewport.view()), actor_world)
        .or_else(|| nearest_to(state.field.items().iter(), actor_world));
    let Some(target) = target else {
        return IVec2::ZERO;
    };

    let delta = target.screen_rect(offset).center() - actor_center;
    let deadzone = state.tuning.base_speed;
    let axis = |d: f32| {
        if d > deadzone {
            1
        } else if d < -deadzone {
            -1
        } else {
            0
        }
    };
    IVec2::new(axis(delta.x), axis(delta.y))
}

fn nearest_to<'a>(
    items: impl Iterator<Item = &'a Collectible>,
    world_pos: Vec2,
) -> Option<&'a Collectible> {
    items.min_by(|a, b| {
        let da = a.world_rect().center().distance_squared(world_pos);
        let db = b.world_rect().center().distance_squared(world_pos);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })
}
