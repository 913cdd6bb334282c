//! Fixed screen layout
//!
//! Button rectangles and HUD placement, shared by click testing in the
//! simulation and by draw-list generation.

use glam::Vec2;

use crate::sim::geometry::Rect;

/// Clickable buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Start,
    Achievements,
    Help,
    SkipIntro,
    Codex,
    PlayAgain,
    /// Score history overlay
    Back,
    ClearHistory,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Button::Start => "Start",
            Button::Achievements => "Achievements",
            Button::Help => "?",
            Button::SkipIntro => "Skip Intro",
            Button::Codex => "B",
            Button::PlayAgain => "Play Again",
            Button::Back => "Back",
            Button::ClearHistory => "Clear",
        }
    }
}

pub const START_BUTTONS: [Button; 4] = [
    Button::Start,
    Button::Achievements,
    Button::Help,
    Button::SkipIntro,
];
pub const HUD_BUTTONS: [Button; 1] = [Button::Codex];
pub const FINISH_BUTTONS: [Button; 1] = [Button::PlayAgain];
pub const HISTORY_BUTTONS: [Button; 2] = [Button::Back, Button::ClearHistory];

/// Timer bar geometry
pub const TIMER_MARGIN: f32 = 19.0;
pub const TIMER_INSET: f32 = 120.0;
pub const TIMER_WIDTH: f32 = 630.0;
pub const TIMER_HEIGHT: f32 = 25.0;

/// Detail popup image
pub const POPUP_POS: Vec2 = Vec2::new(245.0, 75.0);
pub const POPUP_SIZE: Vec2 = Vec2::new(360.0, 450.0);

/// Codex grid
pub const CODEX_COLUMNS: usize = 5;
pub const CODEX_ORIGIN: Vec2 = Vec2::new(50.0, 100.0);
pub const CODEX_SPACING: Vec2 = Vec2::new(150.0, 250.0);
pub const CODEX_IMAGE_SIZE: Vec2 = Vec2::new(113.0, 150.0);
pub const CODEX_TILE_SIZE: Vec2 = Vec2::new(100.0, 100.0);

/// Layout for a given screen size
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub screen: Vec2,
}

impl Layout {
    pub fn new(screen: Vec2) -> Self {
        Self { screen }
    }

    pub fn button_rect(&self, button: Button) -> Rect {
        let (w, h) = (self.screen.x, self.screen.y);
        match button {
            Button::Start => Rect::new(w / 2.0 - 150.0, h / 2.0 - 60.0, 300.0, 70.0),
            Button::Achievements => Rect::new(w / 2.0 - 150.0, h / 2.0 + 30.0, 300.0, 70.0),
            Button::Help => Rect::new(w - 60.0, 10.0, 50.0, 50.0),
            Button::SkipIntro => Rect::new(w / 2.0 - 150.0, h / 2.0 + 120.0, 300.0, 70.0),
            Button::Codex => Rect::new(10.0, h - 60.0, 50.0, 50.0),
            Button::PlayAgain => Rect::new(w / 2.0 - 100.0, h * 2.0 / 3.0, 200.0, 50.0),
            Button::Back => Rect::new(w / 2.0 - 100.0, h - 100.0, 200.0, 50.0),
            Button::ClearHistory => Rect::new(w / 2.0 - 100.0, h - 200.0, 200.0, 50.0),
        }
    }

    /// First button in `buttons` under `point`
    pub fn hit(&self, buttons: &[Button], point: Vec2) -> Option<Button> {
        buttons
            .iter()
            .copied()
            .find(|b| self.button_rect(*b).contains(point))
    }

    pub fn timer_bar(&self) -> Rect {
        Rect::new(
            TIMER_MARGIN + TIMER_INSET,
            TIMER_MARGIN,
            TIMER_WIDTH,
            TIMER_HEIGHT,
        )
    }

    /// Top-left of codex cell `index` (0-based)
    pub fn codex_cell(&self, index: usize) -> Vec2 {
        let col = (index % CODEX_COLUMNS) as f32;
        let row = (index / CODEX_COLUMNS) as f32;
        CODEX_ORIGIN + CODEX_SPACING * Vec2::new(col, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_start_screen_hits() {
        let layout = layout();
        assert_eq!(layout.hit(&START_BUTTONS, Vec2::new(400.0, 260.0)), Some(Button::Start));
        assert_eq!(
            layout.hit(&START_BUTTONS, Vec2::new(400.0, 350.0)),
            Some(Button::Achievements)
        );
        assert_eq!(layout.hit(&START_BUTTONS, Vec2::new(760.0, 30.0)), Some(Button::Help));
        assert_eq!(
            layout.hit(&START_BUTTONS, Vec2::new(400.0, 440.0)),
            Some(Button::SkipIntro)
        );
        assert_eq!(layout.hit(&START_BUTTONS, Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_buttons_outside_their_screen_do_not_hit() {
        let layout = layout();
        let codex = layout.button_rect(Button::Codex).center();
        assert_eq!(layout.hit(&HUD_BUTTONS, codex), Some(Button::Codex));
        assert_eq!(layout.hit(&START_BUTTONS, codex), None);
    }

    #[test]
    fn test_play_again() {
        let layout = layout();
        assert_eq!(layout.hit(&FINISH_BUTTONS, Vec2::new(400.0, 420.0)), Some(Button::PlayAgain));
    }

    #[test]
    fn test_history_buttons() {
        let layout = layout();
        assert_eq!(layout.hit(&HISTORY_BUTTONS, Vec2::new(400.0, 525.0)), Some(Button::Back));
        assert_eq!(
            layout.hit(&HISTORY_BUTTONS, Vec2::new(400.0, 425.0)),
            Some(Button::ClearHistory)
        );
    }

    #[test]
    fn test_codex_grid() {
        let layout = layout();
        assert_eq!(layout.codex_cell(0), Vec2::new(50.0, 100.0));
        assert_eq!(layout.codex_cell(4), Vec2::new(650.0, 100.0));
        assert_eq!(layout.codex_cell(5), Vec2::new(50.0, 350.0));
    }

    #[test]
    fn test_timer_bar() {
        assert_eq!(layout().timer_bar(), Rect::new(139.0, 19.0, 630.0, 25.0));
    }
}
