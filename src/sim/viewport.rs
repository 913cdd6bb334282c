//! Scrollable window into a world larger than the screen

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which world edges the view currently touches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Edges {
    /// True when scrolling in direction `(dx, dy)` is blocked on the x axis
    pub fn blocks_x(&self, dx: i32) -> bool {
        (dx < 0 && self.left) || (dx > 0 && self.right)
    }

    /// True when scrolling in direction `(dx, dy)` is blocked on the y axis
    pub fn blocks_y(&self, dy: i32) -> bool {
        (dy < 0 && self.top) || (dy > 0 && self.bottom)
    }
}

/// Visible window within the world. `offset` is the top-left of the view in
/// world coordinates and always stays within `[0, world - view]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldViewport {
    world: Vec2,
    view: Vec2,
    offset: Vec2,
}

impl WorldViewport {
    /// A world smaller than the view is grown to the view size.
    pub fn new(world: Vec2, view: Vec2) -> Self {
        Self {
            world: world.max(view),
            view,
            offset: Vec2::ZERO,
        }
    }

    pub fn world(&self) -> Vec2 {
        self.world
    }

    pub fn view(&self) -> Vec2 {
        self.view
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Largest legal offset
    pub fn max_offset(&self) -> Vec2 {
        self.world - self.view
    }

    /// Center of the screen in view coordinates
    pub fn screen_center(&self) -> Vec2 {
        self.view / 2.0
    }

    /// Edge flags for the current offset
    pub fn edges(&self) -> Edges {
        self.edges_at(self.offset)
    }

    /// Edge flags for an arbitrary offset
    pub fn edges_at(&self, offset: Vec2) -> Edges {
        let max = self.max_offset();
        Edges {
            left: offset.x <= 0.0,
            right: offset.x >= max.x,
            top: offset.y <= 0.0,
            bottom: offset.y >= max.y,
        }
    }

    /// Add `delta` and clamp each axis independently. Returns the new offset.
    pub fn scroll(&mut self, delta: Vec2) -> Vec2 {
        self.offset = (self.offset + delta).clamp(Vec2::ZERO, self.max_offset());
        self.offset
    }

    /// Back to the world origin (day change, restart)
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Swap to a different background, resetting the offset
    pub fn set_world(&mut self, world: Vec2) {
        self.world = world.max(self.view);
        self.offset = Vec2::ZERO;
    }

    /// World position to screen position
    pub fn to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos - self.offset
    }
}
