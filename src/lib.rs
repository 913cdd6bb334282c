//! Ocean Cleanup - a top-down trash collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (viewport scrolling, actor, spawning, clock, session)
//! - `renderer`: Draw command generation and vertex batching
//! - `runner`: Fixed-timestep driver wiring the simulation to its collaborators
//! - `ui`: Fixed screen layout and click testing
//! - `persistence`: JSON document storage (file on native, LocalStorage on web)
//! - `achievements`: Append-only score history
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod achievements;
pub mod persistence;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use achievements::AchievementLog;
pub use runner::GameRunner;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f64 = 1.0 / TICK_RATE as f64;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Visible window
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Backgrounds are scaled up 3x from their source images
    pub const WORLD_SCALE: f32 = 3.0;

    /// Actor movement, px per tick
    pub const BASE_SPEED: f32 = 5.0;
    /// Distance from the screen center axes that counts as "on axis"
    pub const AXIS_TOLERANCE: f32 = 2.0;
    /// Clamp margins; negative so the sprite can overrun the screen edge
    pub const ACTOR_MARGIN_X: f32 = -70.0;
    pub const ACTOR_MARGIN_Y: f32 = -20.0;
    /// Collection hitbox side length
    pub const HITBOX_SIZE: f32 = 40.0;

    /// Collectible footprint (collision square)
    pub const COLLECTIBLE_SIZE: f32 = 100.0;
    /// Live collectible bounds
    pub const FLOOR_COUNT: usize = 15;
    pub const CEILING_COUNT: usize = 30;
    /// Extra items a spawn burst may add above the shortfall
    pub const SPAWN_BURST_EXTRA: usize = 3;
    /// Upper bound for any configured live-collectible count
    pub const MAX_COLLECTIBLES: usize = 4096;

    /// Round length per day (3 minutes)
    pub const ROUND_SECS: f64 = 180.0;
}
