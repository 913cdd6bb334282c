//! The player character and scroll-vs-move arbitration
//!
//! The actor lives in screen coordinates. While the world can still scroll in
//! the requested direction the actor walks toward the screen's center axes and
//! the background takes over once it is on axis. At a world edge the actor
//! walks directly, which is how the map's extremities are reached.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::viewport::WorldViewport;

/// Horizontal facing, drives sprite mirroring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Sprite set, one per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorSprite {
    Beach,
    Ocean,
}

impl ActorSprite {
    pub fn asset_name(&self) -> &'static str {
        match self {
            ActorSprite::Beach => "character1",
            ActorSprite::Ocean => "character2",
        }
    }
}

/// The player-controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left of the sprite, screen coordinates
    pub pos: Vec2,
    /// Sprite bounds
    pub size: Vec2,
    pub facing: Facing,
    pub sprite: ActorSprite,
    /// Number of times the sprite has been mirrored
    pub flips: u32,
    hitbox_size: f32,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2, sprite: ActorSprite, hitbox_size: f32) -> Self {
        Self {
            pos,
            size,
            facing: Facing::Right,
            sprite,
            flips: 0,
            hitbox_size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn sprite_rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Fixed-size square centered on the sprite; the only rect used for pickups
    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.center(), self.hitbox_size)
    }

    /// `(on_vertical_axis, on_horizontal_axis)` relative to `screen_center`
    pub fn axis_alignment(&self, screen_center: Vec2, tolerance: f32) -> (bool, bool) {
        let dist = (self.center() - screen_center).abs();
        (dist.x <= tolerance, dist.y <= tolerance)
    }

    /// Sprite mirrored horizontally when drawn
    pub fn mirrored(&self) -> bool {
        self.facing == Facing::Left
    }

    /// Legal top-left positions for a screen of size `view`
    pub fn bounds(&self, view: Vec2, margin: Vec2) -> (Vec2, Vec2) {
        let min = margin;
        let max = (view - self.size - margin).max(min);
        (min, max)
    }

    /// Move by `delta` and clamp into the margin-adjusted screen
    fn step(&mut self, delta: Vec2, view: Vec2, margin: Vec2) {
        let (min, max) = self.bounds(view, margin);
        self.pos = (self.pos + delta).clamp(min, max);
    }

    /// Flip only when the horizontal direction reverses
    fn face(&mut self, dx: i32) {
        let wanted = match dx.signum() {
            1 => Facing::Right,
            -1 => Facing::Left,
            _ => return,
        };
        if wanted != self.facing {
            self.facing = wanted;
            self.flips += 1;
        }
    }
}

/// Movement constants for one tick
#[derive(Debug, Clone, Copy)]
pub struct MoveParams {
    /// px per tick; zero while interaction is paused
    pub speed: f32,
    pub tolerance: f32,
    pub margin: Vec2,
}

/// What one tick of input actually did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveOutcome {
    /// Change in viewport offset
    pub scrolled: Vec2,
    /// Change in actor screen position
    pub moved: Vec2,
}

/// Resolve directional input `dir` (components in -1..=1) into a viewport
/// scroll and/or an actor step.
pub fn resolve_movement(
    actor: &mut Actor,
    viewport: &mut WorldViewport,
    dir: IVec2,
    params: &MoveParams,
) -> MoveOutcome {
    let dir = dir.signum();
    if dir == IVec2::ZERO {
        return MoveOutcome::default();
    }

    let speed = params.speed;
    let wanted = dir.as_vec2() * speed;
    let before_offset = viewport.offset();
    let before_pos = actor.pos;

    let edges = viewport.edges();
    let can_scroll_x = dir.x != 0 && !edges.blocks_x(dir.x);
    let can_scroll_y = dir.y != 0 && !edges.blocks_y(dir.y);
    let scrolling = can_scroll_x || can_scroll_y;

    let step = if scrolling {
        let (on_vertical, on_horizontal) =
            actor.axis_alignment(viewport.screen_center(), params.tolerance);

        // The world only scrolls along an axis once the actor is centered on it
        let scroll = Vec2::new(
            if can_scroll_x && on_vertical { wanted.x } else { 0.0 },
            if can_scroll_y && on_horizontal { wanted.y } else { 0.0 },
        );
        viewport.scroll(scroll);

        // Off axis: walk toward the center. At an edge: walk regardless.
        let edges = viewport.edges();
        let mut step = Vec2::new(
            if dir.x != 0 && !on_vertical { wanted.x } else { 0.0 },
            if dir.y != 0 && !on_horizontal { wanted.y } else { 0.0 },
        );
        if edges.blocks_x(dir.x) {
            step.x = wanted.x;
        }
        if edges.blocks_y(dir.y) {
            step.y = wanted.y;
        }
        step
    } else {
        wanted
    };

    actor.step(step, viewport.view(), params.margin);
    actor.face(dir.x);

    MoveOutcome {
        scrolled: viewport.offset() - before_offset,
        moved: actor.pos - before_pos,
    }
}
