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

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for scan visualization
pub mod colors {
    pub const LIDAR_RAY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const PIPE: [f32; 4] = [0.33, 0.75, 0.18, 1.0];
    pub const GROUND: [f32; 4] = [0.87, 0.85, 0.58, 1.0];
    /// Default `FILL_BACKGROUND_COLOR` (200, 200, 200)
    pub const BACKGROUND: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let vertices = [Vertex::new(1.0, 2.0, colors::LIDAR_RAY); 3];
        assert_eq!(Vertex::as_bytes(&vertices).len(), 72);
    }

    #[test]
    fn test_background_matches_default_fill() {
        let [r, g, b] = crate::GameConstants::default().fill_background_color;
        let expected = [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0];
        assert_eq!(colors::BACKGROUND, expected);
    }
}
