//! Data-driven game balance
//!
//! Every number that shapes the feel of a round lives here. `Default` is the
//! shipped balance; a JSON document may override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Day;

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen & world ===
    /// Visible window size
    pub screen: Vec2,
    /// Beach background size (day 1)
    pub beach_world: Vec2,
    /// Ocean background size (day 2)
    pub ocean_world: Vec2,

    // === Actor ===
    /// Movement per tick, also the scroll speed
    pub base_speed: f32,
    /// "On axis" threshold for scroll arbitration
    pub axis_tolerance: f32,
    /// Clamp margins (negative lets the sprite overrun the screen)
    pub actor_margin: Vec2,
    /// Screen position a new actor starts at
    pub actor_spawn: Vec2,
    /// Scaled sprite bounds
    pub actor_sprite_size: Vec2,
    /// Collection hitbox side length
    pub hitbox_size: f32,

    // === Collectibles ===
    pub collectible_size: f32,
    pub floor_count: usize,
    pub ceiling_count: usize,
    pub spawn_burst_extra: usize,
    /// Seconds between spawn passes
    pub spawn_interval_secs: f64,
    /// Age after which uncollected items are culled (None = never)
    pub despawn_secs: Option<f64>,

    // === Round ===
    pub round_secs: f64,
    /// How long a "+N" label stays on the HUD
    pub recent_gain_secs: f64,
    /// How long the help message stays up
    pub help_secs: f64,
    /// Close the detail popup on the first overlap-free tick after it opened
    pub popup_auto_dismiss: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        let screen = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            screen,
            beach_world: screen * WORLD_SCALE,
            ocean_world: screen * WORLD_SCALE,

            base_speed: BASE_SPEED,
            axis_tolerance: AXIS_TOLERANCE,
            actor_margin: Vec2::new(ACTOR_MARGIN_X, ACTOR_MARGIN_Y),
            actor_spawn: Vec2::new(100.0, 100.0),
            actor_sprite_size: Vec2::new(80.0, 120.0),
            hitbox_size: HITBOX_SIZE,

            collectible_size: COLLECTIBLE_SIZE,
            floor_count: FLOOR_COUNT,
            ceiling_count: CEILING_COUNT,
            spawn_burst_extra: SPAWN_BURST_EXTRA,
            spawn_interval_secs: 1.0,
            despawn_secs: None,

            round_secs: ROUND_SECS,
            recent_gain_secs: 1.0,
            help_secs: 3.0,
            popup_auto_dismiss: false,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON (missing fields keep their defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// World extent for the given day's background
    pub fn world_for(&self, day: Day) -> Vec2 {
        match day {
            Day::One => self.beach_world,
            Day::Two => self.ocean_world,
        }
    }

    /// Clamp inconsistent values instead of rejecting them
    pub fn sanitized(mut self) -> Self {
        self.screen = self.screen.max(Vec2::ONE);
        self.beach_world = self.beach_world.max(self.screen);
        self.ocean_world = self.ocean_world.max(self.screen);
        self.base_speed = self.base_speed.max(0.0);
        self.axis_tolerance = self.axis_tolerance.max(0.0);
        self.hitbox_size = self.hitbox_size.max(1.0);
        self.collectible_size = self.collectible_size.max(1.0);
        self.floor_count = self.floor_count.min(MAX_COLLECTIBLES);
        self.ceiling_count = self.ceiling_count.clamp(self.floor_count, MAX_COLLECTIBLES);
        self.spawn_burst_extra = self.spawn_burst_extra.min(MAX_COLLECTIBLES);
        if self.spawn_interval_secs <= 0.0 {
            self.spawn_interval_secs = 1.0;
        }
        if self.round_secs <= 0.0 {
            self.round_secs = ROUND_SECS;
        }
        self.despawn_secs = self.despawn_secs.filter(|secs| *secs > 0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_balance() {
        let tuning = Tuning::default();
        assert_eq!(tuning.screen, Vec2::new(800.0, 600.0));
        assert_eq!(tuning.beach_world, Vec2::new(2400.0, 1800.0));
        assert_eq!(tuning.base_speed, 5.0);
        assert_eq!(tuning.axis_tolerance, 2.0);
        assert_eq!(tuning.floor_count, 15);
        assert_eq!(tuning.ceiling_count, 30);
        assert_eq!(tuning.round_secs, 180.0);
        assert!(tuning.despawn_secs.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "floor_count": 5, "round_secs": 60.0 }"#).unwrap();
        assert_eq!(tuning.floor_count, 5);
        assert_eq!(tuning.round_secs, 60.0);
        assert_eq!(tuning.ceiling_count, 30);
    }

    #[test]
    fn test_sanitize_fixes_inverted_counts() {
        let tuning = Tuning::from_json(r#"{ "floor_count": 40, "ceiling_count": 10 }"#).unwrap();
        assert_eq!(tuning.ceiling_count, 40);
    }

    #[test]
    fn test_sanitize_caps_huge_counts() {
        let tuning = Tuning::from_json(
            r#"{ "floor_count": 18446744073709551615, "ceiling_count": 1000000000000000000 }"#,
        )
        .unwrap();
        assert_eq!(tuning.floor_count, MAX_COLLECTIBLES);
        assert_eq!(tuning.ceiling_count, MAX_COLLECTIBLES);

        // Building a session from it must not try to reserve the raw count
        let state = crate::sim::GameState::new(1, tuning, 0.0);
        assert_eq!(state.field.limits().ceiling, MAX_COLLECTIBLES);
    }

    #[test]
    fn test_sanitize_world_never_smaller_than_screen() {
        let tuning = Tuning {
            beach_world: Vec2::new(100.0, 100.0),
            despawn_secs: Some(-1.0),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.beach_world, tuning.screen);
        assert!(tuning.despawn_secs.is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }
}
