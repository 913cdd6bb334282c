//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Title screen sky, fades to black toward the bottom
    pub const SKY: [f32; 4] = [0.53, 0.81, 0.98, 1.0];
    pub const BUTTON: [f32; 4] = [0.0, 0.39, 0.0, 1.0];
    pub const BUTTON_BORDER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const DANGER_BUTTON: [f32; 4] = [0.78, 0.0, 0.0, 1.0];
    pub const DAY_LABEL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const SCORE_LABEL: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const FINAL_SCORE: [f32; 4] = [0.0, 0.39, 0.0, 1.0];
    /// Timer bar bands
    pub const TIMER_SAFE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const TIMER_WARNING: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const TIMER_CRITICAL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const TIMER_TRACK: [f32; 4] = [0.39, 0.39, 0.39, 1.0];
    /// Floating "+N" after a pickup
    pub const GAIN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const HITBOX: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Codex tile for an undiscovered type
    pub const NOT_COLLECTED: [f32; 4] = [0.78, 0.78, 0.78, 1.0];
    pub const HINT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Score history backdrop
    pub const HISTORY: [f32; 4] = [0.68, 0.85, 0.9, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_flattens_to_six_floats() {
        let vertices = [Vertex::new(-1.0, 0.5, colors::HITBOX)];
        let flat: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(flat, &[-1.0, 0.5, 1.0, 0.0, 0.0, 1.0]);
    }
}
