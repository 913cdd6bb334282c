//! Shape generation for 2D primitives
//!
//! Vertices come out in screen pixels (origin top-left, y down) unless noted.

use glam::Vec2;

use super::commands::{DrawCommand, DrawList};
use super::vertex::Vertex;
use crate::sim::geometry::Rect;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Generate vertices for a rectangle border drawn inside `outer`
pub fn outline(outer: Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(outer.size.x / 2.0).min(outer.size.y / 2.0).max(0.0);
    if t == 0.0 {
        return Vec::new();
    }
    let (x, y, w, h) = (outer.pos.x, outer.pos.y, outer.size.x, outer.size.y);

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full width, sides fill between them
    vertices.extend(rect(Rect::new(x, y, w, t), color));
    vertices.extend(rect(Rect::new(x, y + h - t, w, t), color));
    vertices.extend(rect(Rect::new(x, y + t, t, h - 2.0 * t), color));
    vertices.extend(rect(Rect::new(x + w - t, y + t, t, h - 2.0 * t), color));
    vertices
}

/// Convert a screen pixel position to normalized device coordinates
pub fn screen_to_ndc(point: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(
        point.x / screen.x * 2.0 - 1.0,
        1.0 - point.y / screen.y * 2.0,
    )
}

/// Tessellate the solid-color commands of a frame into NDC vertices.
/// Blits and text belong to the asset backend and are skipped.
pub fn tessellate(list: &DrawList, screen: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in list.iter() {
        match command {
            DrawCommand::FillRect { rect: r, color } => vertices.extend(rect(*r, *color)),
            DrawCommand::OutlineRect {
                rect: r,
                thickness,
                color,
            } => vertices.extend(outline(*r, *thickness, *color)),
            DrawCommand::Blit { .. } | DrawCommand::Text { .. } => {}
        }
    }

    for v in &mut vertices {
        let ndc = screen_to_ndc(Vec2::from(v.position), screen);
        v.position = ndc.to_array();
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_rect_covers_corners() {
        let vertices = rect(Rect::new(10.0, 20.0, 30.0, 40.0), colors::WHITE);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_outline_is_four_bars() {
        assert_eq!(outline(Rect::new(0.0, 0.0, 50.0, 50.0), 2.0, colors::BLACK).len(), 24);
        assert!(outline(Rect::new(0.0, 0.0, 50.0, 50.0), 0.0, colors::BLACK).is_empty());
    }

    #[test]
    fn test_ndc_corners() {
        assert_eq!(screen_to_ndc(Vec2::ZERO, SCREEN), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(SCREEN, SCREEN), Vec2::new(1.0, -1.0));
        assert_eq!(screen_to_ndc(SCREEN / 2.0, SCREEN), Vec2::ZERO);
    }

    #[test]
    fn test_tessellate_skips_assets() {
        let mut list = DrawList::new();
        list.blit("beach", Vec2::ZERO, None, false);
        list.fill(Rect::new(0.0, 0.0, 800.0, 600.0), colors::HISTORY);
        list.text("hi", Vec2::ZERO, 20.0, colors::WHITE);
        let vertices = tessellate(&list, SCREEN);
        assert_eq!(vertices.len(), 6);
        assert!(vertices.iter().all(|v| v.position[0].abs() <= 1.0));
        // Vertex buffers upload as raw bytes
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 6 * std::mem::size_of::<Vertex>());
    }
}
