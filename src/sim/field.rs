//! Live collectibles: spawning, pickup detection, optional age culling
//!
//! Collectibles are fixed in world space. Pickup testing maps each one to the
//! screen through the viewport offset and checks it against the actor's
//! hitbox, never the sprite rect.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::{CollectionRegistry, TrashKind};
use super::geometry::Rect;
use super::ledger::ScoreLedger;
use crate::tuning::Tuning;

/// A piece of trash lying in the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub kind: TrashKind,
    /// Top-left in world coordinates, immutable after spawn
    pub world_pos: Vec2,
    pub size: f32,
    pub spawned_at: f64,
}

impl Collectible {
    pub fn points(&self) -> u32 {
        self.kind.points()
    }

    pub fn world_rect(&self) -> Rect {
        Rect::from_pos_size(self.world_pos, Vec2::splat(self.size))
    }

    pub fn screen_rect(&self, view_offset: Vec2) -> Rect {
        self.world_rect().offset_by(view_offset)
    }
}

/// Result of one pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickup {
    pub kind: TrashKind,
    pub points: u32,
    /// First time this type was ever collected
    pub first_sighting: bool,
}

/// Spawn/cull limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldLimits {
    pub floor: usize,
    pub ceiling: usize,
    pub burst_extra: usize,
    pub item_size: f32,
    pub despawn_secs: Option<f64>,
}

impl FieldLimits {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            floor: tuning.floor_count,
            ceiling: tuning.ceiling_count.max(tuning.floor_count),
            burst_extra: tuning.spawn_burst_extra,
            item_size: tuning.collectible_size,
            despawn_secs: tuning.despawn_secs,
        }
    }
}

/// Owns every live collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleField {
    /// Spawn area (world size)
    area: Vec2,
    limits: FieldLimits,
    items: Vec<Collectible>,
    /// Type whose detail popup is showing
    popup: Option<TrashKind>,
    next_id: u32,
}

impl CollectibleField {
    pub fn new(area: Vec2, limits: FieldLimits) -> Self {
        Self {
            area,
            limits,
            items: Vec::new(),
            popup: None,
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[Collectible] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn limits(&self) -> &FieldLimits {
        &self.limits
    }

    /// Type whose detail popup is up, if any
    pub fn popup(&self) -> Option<TrashKind> {
        self.popup
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }

    /// Top up toward the floor. Draws a burst size in
    /// `[shortfall, shortfall + burst_extra]` and appends while below the
    /// ceiling. Returns how many were added.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, now: f64) -> usize {
        let needed = self.limits.floor.saturating_sub(self.items.len());
        let burst = rng.random_range(needed..=needed.saturating_add(self.limits.burst_extra));

        let max_x = (self.area.x - self.limits.item_size).max(0.0) as i32;
        let max_y = (self.area.y - self.limits.item_size).max(0.0) as i32;

        let mut added = 0;
        for _ in 0..burst {
            if self.items.len() >= self.limits.ceiling {
                break;
            }
            let world_pos = Vec2::new(
                rng.random_range(0..=max_x) as f32,
                rng.random_range(0..=max_y) as f32,
            );
            self.push(TrashKind::random(rng), world_pos, now);
            added += 1;
        }
        if added > 0 {
            log::debug!("Spawned {} collectibles ({} live)", added, self.items.len());
        }
        added
    }

    /// Place a specific collectible, bypassing the ceiling
    pub fn push(&mut self, kind: TrashKind, world_pos: Vec2, now: f64) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Collectible {
            id,
            kind,
            world_pos,
            size: self.limits.item_size,
            spawned_at: now,
        });
        id
    }

    /// Pick up everything overlapping `hitbox` (screen space). Each pickup
    /// awards points, records the type in the registry, removes the item and
    /// raises the detail popup for it.
    pub fn collect(
        &mut self,
        hitbox: Rect,
        view_offset: Vec2,
        ledger: &mut ScoreLedger,
        registry: &mut CollectionRegistry,
        now: f64,
    ) -> Vec<Pickup> {
        let mut pickups = Vec::new();
        self.items.retain(|item| {
            if !hitbox.intersects(&item.screen_rect(view_offset)) {
                return true;
            }
            let points = item.points();
            ledger.award(points, now);
            let first_sighting = registry.record(item.kind);
            pickups.push(Pickup {
                kind: item.kind,
                points,
                first_sighting,
            });
            false
        });

        if let Some(last) = pickups.last() {
            self.popup = Some(last.kind);
        }
        pickups
    }

    /// Remove items older than the despawn age. No-op when disabled.
    pub fn cull_expired(&mut self, now: f64) -> usize {
        let Some(ttl) = self.limits.despawn_secs else {
            return 0;
        };
        let before = self.items.len();
        self.items.retain(|item| now - item.spawned_at < ttl);
        before - self.items.len()
    }

    /// Collectibles whose screen rect intersects the visible window
    pub fn visible(&self, view_offset: Vec2, view: Vec2) -> impl Iterator<Item = &Collectible> {
        let screen = Rect::from_pos_size(Vec2::ZERO, view);
        self.items
            .iter()
            .filter(move |item| screen.intersects(&item.screen_rect(view_offset)))
    }
}
