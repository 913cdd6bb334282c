//! Frame composition
//!
//! Turns the current `GameState` into a `DrawList` in painter's order. The
//! list is pure data, so what each screen shows can be checked in tests
//! without a GPU.

use glam::Vec2;

use super::commands::DrawList;
use super::vertex::colors;
use crate::achievements::AchievementLog;
use crate::settings::Settings;
use crate::sim::catalog::{TrashKind, WORLD_SPRITE};
use crate::sim::clock::ProgressBand;
use crate::sim::geometry::Rect;
use crate::sim::state::{Day, GameState, Phase};
use crate::ui::{
    Button, CODEX_IMAGE_SIZE, CODEX_TILE_SIZE, FINISH_BUTTONS, HISTORY_BUTTONS, HUD_BUTTONS,
    Layout, POPUP_POS, POPUP_SIZE, START_BUTTONS,
};

/// The world sprite is drawn larger than the pickup square, centered on it
pub const TRASH_SPRITE_SCALE: Vec2 = Vec2::new(2.85, 1.5);

/// Horizontal bands in the title and results gradient
const SKY_BANDS: usize = 24;

pub fn build_frame(state: &GameState, settings: &Settings) -> DrawList {
    let layout = Layout::new(state.tuning.screen);
    let mut list = DrawList::new();

    match state.phase {
        Phase::Start => draw_start(state, &layout, &mut list),
        Phase::Playing(day) => {
            draw_world(state, day, settings, &mut list);
            draw_hud(state, day, settings, &layout, &mut list);
            if let Some(kind) = state.field.popup() {
                draw_detail(kind, &mut list);
            }
        }
        Phase::Codex { .. } => draw_codex(state, &layout, &mut list),
        Phase::End => draw_finish(state, &layout, &mut list),
    }
    list
}

/// Score history overlay, shown modally over the title screen
pub fn history_frame(log: &AchievementLog, screen: Vec2) -> DrawList {
    let layout = Layout::new(screen);
    let mut list = DrawList::new();
    list.fill(Rect::from_pos_size(Vec2::ZERO, screen), colors::HISTORY);
    list.text("Achievements", Vec2::new(screen.x / 2.0, 30.0), 36.0, colors::BLACK);

    if log.is_empty() {
        list.text(
            "No achievements yet",
            screen / 2.0,
            36.0,
            colors::BLACK,
        );
    } else {
        for (i, (timestamp, score)) in log.entries().enumerate() {
            let y = 150.0 + i as f32 * 40.0;
            list.text(
                format!("#{}: {} - {} points", i + 1, timestamp, score),
                Vec2::new(screen.x / 2.0, y),
                36.0,
                colors::BLACK,
            );
        }
    }

    for button in HISTORY_BUTTONS {
        let fill = if button == Button::ClearHistory {
            colors::DANGER_BUTTON
        } else {
            colors::BUTTON
        };
        draw_button(&layout, button, fill, 40.0, &mut list);
    }
    list
}

fn draw_world(state: &GameState, day: Day, settings: &Settings, list: &mut DrawList) {
    let offset = state.viewport.offset();
    list.blit(
        day.background(),
        -offset,
        Some(state.viewport.world()),
        false,
    );

    let view = state.viewport.view();
    for item in state.field.visible(offset, view) {
        let rect = item.screen_rect(offset);
        let sprite = rect.size * TRASH_SPRITE_SCALE;
        let pos = rect.pos - (sprite - rect.size) / 2.0;
        list.blit(WORLD_SPRITE, pos, Some(sprite), false);
    }

    let actor = &state.actor;
    list.blit(
        actor.sprite.asset_name(),
        actor.pos,
        Some(actor.size),
        actor.mirrored(),
    );
    if settings.show_hitboxes {
        list.outline(actor.hitbox(), 1.0, colors::HITBOX);
    }
}

fn draw_hud(
    state: &GameState,
    day: Day,
    settings: &Settings,
    layout: &Layout,
    list: &mut DrawList,
) {
    list.text(
        format!("Day {}", day.number()),
        Vec2::new(50.0, 25.0),
        30.0,
        colors::DAY_LABEL,
    );
    list.text(
        format!("Score: {}", state.score()),
        Vec2::new(60.0, 60.0),
        24.0,
        colors::SCORE_LABEL,
    );

    // Timer bar: track, remaining fill, border
    let bar = layout.timer_bar();
    let clock = &state.clock;
    let fill = match clock.band() {
        ProgressBand::Safe => colors::TIMER_SAFE,
        ProgressBand::Warning => colors::TIMER_WARNING,
        ProgressBand::Critical => colors::TIMER_CRITICAL,
    };
    list.fill(bar, colors::TIMER_TRACK);
    let width = (bar.size.x * clock.fraction() as f32).floor();
    if width > 0.0 {
        list.fill(Rect::new(bar.pos.x, bar.pos.y, width, bar.size.y), fill);
    }
    list.outline(bar, 2.0, colors::BLACK);

    for button in HUD_BUTTONS {
        draw_button(layout, button, colors::BUTTON, 30.0, list);
    }

    if !settings.reduced_motion {
        for (i, gain) in state.ledger.recent().iter().enumerate() {
            list.text(
                format!("+{}", gain.points),
                Vec2::new(25.0, 90.0 + i as f32 * 25.0),
                24.0,
                colors::GAIN,
            );
        }
    }
}

/// Full-size info card for one trash type
fn draw_detail(kind: TrashKind, list: &mut DrawList) {
    list.blit(kind.image(), POPUP_POS, Some(POPUP_SIZE), false);
    list.text(
        "Press space to continue",
        POPUP_POS + Vec2::new(POPUP_SIZE.x / 2.0, 480.0),
        36.0,
        colors::WHITE,
    );
}

fn draw_codex(state: &GameState, layout: &Layout, list: &mut DrawList) {
    let screen = layout.screen;
    list.fill(Rect::from_pos_size(Vec2::ZERO, screen), colors::WHITE);
    list.text("Press space to exit", Vec2::new(screen.x / 2.0, 18.0), 14.0, colors::BLACK);

    for kind in TrashKind::all() {
        let cell = layout.codex_cell(kind.index());
        if state.registry.is_collected(kind) {
            list.blit(kind.image(), cell, Some(CODEX_IMAGE_SIZE), false);
        } else {
            list.fill(Rect::from_pos_size(cell, CODEX_TILE_SIZE), colors::NOT_COLLECTED);
            list.text(
                "not collected",
                cell + CODEX_TILE_SIZE / 2.0,
                14.0,
                colors::BLACK,
            );
        }
        list.text(
            kind.id().to_string(),
            cell + Vec2::new(50.0, 168.0),
            14.0,
            colors::BLACK,
        );
    }

    list.text(
        "Press number keys for details, space to exit",
        Vec2::new(screen.x / 2.0, screen.y - 20.0),
        18.0,
        colors::HINT,
    );

    if let Some(kind) = state.codex.detail {
        draw_detail(kind, list);
    }
}

fn draw_start(state: &GameState, layout: &Layout, list: &mut DrawList) {
    let screen = layout.screen;
    draw_sky(screen, list);
    draw_title("Save the ocean", Vec2::new(screen.x / 2.0, 80.0), 60.0, list);

    for button in START_BUTTONS {
        draw_button(layout, button, colors::BUTTON, 30.0, list);
    }
    if state.skip_intro {
        let rect = layout.button_rect(Button::SkipIntro);
        list.text(
            "\u{2714}",
            Vec2::new(rect.right() - 30.0, rect.center().y),
            40.0,
            colors::WHITE,
        );
    }
    if state.help_until.is_some() {
        list.text("Clean the ocean", screen / 2.0, 24.0, colors::BLACK);
    }
}

fn draw_finish(state: &GameState, layout: &Layout, list: &mut DrawList) {
    let screen = layout.screen;
    draw_sky(screen, list);
    draw_title("Game Over!", Vec2::new(screen.x / 2.0, screen.y / 3.0), 72.0, list);
    list.text(
        format!("Total Score: {}", state.score()),
        screen / 2.0,
        48.0,
        colors::FINAL_SCORE,
    );
    for button in FINISH_BUTTONS {
        draw_button(layout, button, colors::BUTTON, 40.0, list);
    }
}

/// Vertical fade from sky blue at the top to black at the bottom
fn draw_sky(screen: Vec2, list: &mut DrawList) {
    let band_height = screen.y / SKY_BANDS as f32;
    for i in 0..SKY_BANDS {
        let shade = 1.0 - i as f32 / SKY_BANDS as f32;
        let [r, g, b, a] = colors::SKY;
        list.fill(
            Rect::new(0.0, i as f32 * band_height, screen.x, band_height),
            [r * shade, g * shade, b * shade, a],
        );
    }
}

/// White title with a dark drop shadow
fn draw_title(text: &str, center: Vec2, size: f32, list: &mut DrawList) {
    list.text(text, center + Vec2::splat(2.0), size, colors::BLACK);
    list.text(text, center, size, colors::WHITE);
}

fn draw_button(
    layout: &Layout,
    button: Button,
    fill: [f32; 4],
    text_size: f32,
    list: &mut DrawList,
) {
    let rect = layout.button_rect(button);
    list.fill(rect, fill);
    list.outline(rect, 3.0, colors::BUTTON_BORDER);
    list.text(button.label(), rect.center(), text_size, colors::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::commands::DrawCommand;
    use crate::tuning::Tuning;

    fn playing() -> GameState {
        let mut state = GameState::new(7, Tuning::default(), 0.0);
        state.skip_intro = true;
        state.start_session(0.0);
        state
    }

    fn kind(id: u8) -> TrashKind {
        TrashKind::from_id(id).unwrap()
    }

    #[test]
    fn test_start_screen() {
        let mut state = GameState::new(7, Tuning::default(), 0.0);
        let list = build_frame(&state, &Settings::default());
        let texts: Vec<_> = list.texts().collect();
        assert!(texts.contains(&"Save the ocean"));
        assert!(texts.contains(&"Start"));
        assert!(texts.contains(&"Achievements"));
        assert!(!texts.contains(&"\u{2714}"));

        state.skip_intro = true;
        let list = build_frame(&state, &Settings::default());
        assert!(list.texts().any(|t| t == "\u{2714}"));
    }

    #[test]
    fn test_world_draws_background_at_negative_offset() {
        let mut state = playing();
        state.viewport.scroll(Vec2::new(100.0, 50.0));
        let list = build_frame(&state, &Settings::default());
        match &list.commands[0] {
            DrawCommand::Blit { asset, pos, .. } => {
                assert_eq!(*asset, "beach");
                assert_eq!(*pos, Vec2::new(-100.0, -50.0));
            }
            other => panic!("expected background blit, got {:?}", other),
        }
    }

    #[test]
    fn test_offscreen_trash_is_culled() {
        let mut state = playing();
        state.field.push(kind(1), Vec2::new(300.0, 300.0), 0.0);
        state.field.push(kind(2), Vec2::new(2000.0, 1500.0), 0.0);
        let list = build_frame(&state, &Settings::default());
        let bags = list.assets().filter(|a| *a == WORLD_SPRITE).count();
        assert_eq!(bags, 1);
    }

    #[test]
    fn test_trash_sprite_centered_on_pickup_square() {
        let mut state = playing();
        state.field.push(kind(1), Vec2::new(300.0, 300.0), 0.0);
        let list = build_frame(&state, &Settings::default());
        let bag = list
            .iter()
            .find_map(|c| match c {
                DrawCommand::Blit {
                    asset, pos, size, ..
                } if *asset == WORLD_SPRITE => Some((*pos, *size)),
                _ => None,
            })
            .unwrap();
        let (pos, size) = (bag.0, bag.1.unwrap());
        assert!((size.x - 285.0).abs() < 1e-3);
        assert!((pos.x + size.x / 2.0 - 350.0).abs() < 1e-3);
        assert!((pos.y + size.y / 2.0 - 350.0).abs() < 1e-3);
    }

    #[test]
    fn test_actor_mirrored_when_facing_left() {
        let mut state = playing();
        state.actor.facing = crate::sim::actor::Facing::Left;
        let list = build_frame(&state, &Settings::default());
        let flipped = list.iter().any(|c| {
            matches!(c, DrawCommand::Blit { asset: "character1", flip_x: true, .. })
        });
        assert!(flipped);
    }

    #[test]
    fn test_hitbox_only_when_enabled() {
        let state = playing();
        let hitbox = state.actor.hitbox();
        let has_hitbox = |list: &DrawList| {
            list.iter().any(|c| {
                matches!(c, DrawCommand::OutlineRect { rect, .. } if *rect == hitbox)
            })
        };
        assert!(!has_hitbox(&build_frame(&state, &Settings::default())));
        let debug = Settings {
            show_hitboxes: true,
            ..Default::default()
        };
        assert!(has_hitbox(&build_frame(&state, &debug)));
    }

    #[test]
    fn test_timer_band_color() {
        let mut state = playing();
        state.clock.update(150.0, false);
        let list = build_frame(&state, &Settings::default());
        let critical = list.iter().any(|c| {
            matches!(c, DrawCommand::FillRect { color, .. } if *color == colors::TIMER_CRITICAL)
        });
        assert!(critical);
    }

    #[test]
    fn test_hud_text_and_gains() {
        let mut state = playing();
        state.ledger.award(1, 0.0);
        let list = build_frame(&state, &Settings::default());
        let texts: Vec<_> = list.texts().collect();
        assert!(texts.contains(&"Day 1"));
        assert!(texts.contains(&"Score: 1"));
        assert!(texts.contains(&"+1"));

        let calm = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!build_frame(&state, &calm).texts().any(|t| t == "+1"));
    }

    #[test]
    fn test_popup_over_world() {
        let mut state = playing();
        let center = state.actor.center();
        state.field.push(kind(4), center - Vec2::splat(50.0), 0.0);
        let mut ledger = crate::sim::ScoreLedger::new();
        let mut registry = crate::sim::CollectionRegistry::new();
        state.field.collect(
            state.actor.hitbox(),
            state.viewport.offset(),
            &mut ledger,
            &mut registry,
            0.0,
        );
        let list = build_frame(&state, &Settings::default());
        assert!(list.assets().any(|a| a == "trash4"));
        assert!(list.texts().any(|t| t == "Press space to continue"));
    }

    #[test]
    fn test_codex_grid_shows_collected_only() {
        let mut state = playing();
        state.registry.record(kind(3));
        state.open_codex(1.0);
        let list = build_frame(&state, &Settings::default());
        assert!(list.assets().any(|a| a == "trash3"));
        assert_eq!(list.texts().filter(|t| *t == "not collected").count(), 9);
    }

    #[test]
    fn test_finish_screen() {
        let mut state = playing();
        state.ledger.award(5, 1.0);
        state.finish_session();
        let list = build_frame(&state, &Settings::default());
        let texts: Vec<_> = list.texts().collect();
        assert!(texts.contains(&"Game Over!"));
        assert!(texts.contains(&"Total Score: 5"));
        assert!(texts.contains(&"Play Again"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_history_overlay() {
        let store = crate::persistence::test_support::temp_store("frame-history");
        let mut log = AchievementLog::load(store);
        let screen = Vec2::new(800.0, 600.0);
        assert!(history_frame(&log, screen).texts().any(|t| t == "No achievements yet"));

        log.append_at("2024-05-01 12:00:00", 9).unwrap();
        let list = history_frame(&log, screen);
        assert!(list.texts().any(|t| t == "#1: 2024-05-01 12:00:00 - 9 points"));
        assert!(list.texts().any(|t| t == "Clear"));
    }
}
