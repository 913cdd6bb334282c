//! Backend-neutral draw commands
//!
//! A frame is a flat list of commands in painter's order. Images and text are
//! referenced by name and drawn by whatever backend owns the assets; solid
//! rectangles can be tessellated directly (see `shapes`).

use glam::Vec2;

use crate::sim::geometry::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a named image. `size` of `None` means the image's native size.
    Blit {
        asset: &'static str,
        pos: Vec2,
        size: Option<Vec2>,
        flip_x: bool,
    },
    FillRect { rect: Rect, color: [f32; 4] },
    OutlineRect {
        rect: Rect,
        thickness: f32,
        color: [f32; 4],
    },
    /// Text anchored at its center
    Text {
        text: String,
        center: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn blit(&mut self, asset: &'static str, pos: Vec2, size: Option<Vec2>, flip_x: bool) {
        self.commands.push(DrawCommand::Blit {
            asset,
            pos,
            size,
            flip_x,
        });
    }

    pub fn fill(&mut self, rect: Rect, color: [f32; 4]) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn outline(&mut self, rect: Rect, thickness: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::OutlineRect {
            rect,
            thickness,
            color,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, center: Vec2, size: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            center,
            size,
            color,
        });
    }

    /// All text strings, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// All blitted asset names, in draw order
    pub fn assets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Blit { asset, .. } => Some(*asset),
            _ => None,
        })
    }
}
