//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied time only
//! - Seeded RNG only
//! - Stable iteration order (by spawn ID)
//! - No rendering or platform dependencies

pub mod actor;
pub mod catalog;
pub mod clock;
pub mod field;
pub mod geometry;
pub mod ledger;
pub mod state;
pub mod tick;
pub mod viewport;

pub use actor::{Actor, ActorSprite, Facing, MoveOutcome, MoveParams, resolve_movement};
pub use catalog::{CollectionRegistry, TRASH_KIND_COUNT, TrashInfo, TrashKind};
pub use clock::{ProgressBand, RoundClock};
pub use field::{Collectible, CollectibleField, FieldLimits, Pickup};
pub use geometry::Rect;
pub use ledger::{RecentGain, ScoreLedger};
pub use state::{CodexView, Cutscene, Day, GameEvent, GameState, Phase};
pub use tick::{TickInput, tick};
pub use viewport::{Edges, WorldViewport};
