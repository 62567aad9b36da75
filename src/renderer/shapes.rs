//! Line-list generation for the LIDAR scan and obstacles

use glam::Vec2;

use super::vertex::Vertex;
use crate::constants::GameConstants;
use crate::sim::{Ground, Pipe, Rect};

/// One line segment (two vertices) from `origin` to every hit point
pub fn lidar_rays(origin: Vec2, hits: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(hits.len() * 2);

    for hit in hits {
        vertices.push(Vertex::new(origin.x, origin.y, color));
        vertices.push(Vertex::new(hit.x, hit.y, color));
    }

    vertices
}

/// Four line segments tracing a rectangle's border
pub fn rect_outline(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let corners = [
        Vec2::new(rect.left(), rect.top()),
        Vec2::new(rect.right(), rect.top()),
        Vec2::new(rect.right(), rect.bottom()),
        Vec2::new(rect.left(), rect.bottom()),
    ];

    let mut vertices = Vec::with_capacity(8);
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Outlines of every pipe and the ground
pub fn obstacles(
    upper_pipes: &[Pipe],
    lower_pipes: &[Pipe],
    ground: &Ground,
    constants: &GameConstants,
    pipe_color: [f32; 4],
    ground_color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((upper_pipes.len() + lower_pipes.len() + 1) * 8);

    for pipe in upper_pipes.iter().chain(lower_pipes) {
        vertices.extend(rect_outline(&pipe.rect(constants), pipe_color));
    }
    vertices.extend(rect_outline(&ground.rect(constants), ground_color));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;
    use crate::sim::Lidar;

    #[test]
    fn test_lidar_rays_follow_scan_buffer() {
        let constants = GameConstants::default();
        let mut lidar = Lidar::new(&constants);
        lidar.scan(&constants, 66.0, 88.0, 0.0, &[], &[], &Ground::new(400.0));

        let origin = Lidar::origin(&constants, 66.0, 88.0);
        let vertices = lidar_rays(origin, lidar.hits(), colors::LIDAR_RAY);
        assert_eq!(vertices.len(), 360);
        assert_eq!(vertices[180].position, [100.0, 100.0]);
        assert_eq!(vertices[181].position, [296.0, 100.0]);
    }

    #[test]
    fn test_rect_outline_is_closed() {
        let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
        let vertices = rect_outline(&rect, colors::PIPE);
        assert_eq!(vertices.len(), 8);
        assert_eq!(vertices[0].position, vertices[7].position);
    }

    #[test]
    fn test_obstacle_outlines() {
        let constants = GameConstants::default();
        let vertices = obstacles(
            &[Pipe::new(100.0, -200.0)],
            &[Pipe::new(100.0, 220.0)],
            &Ground::new(404.0),
            &constants,
            colors::PIPE,
            colors::GROUND,
        );
        assert_eq!(vertices.len(), 24);
        assert_eq!(vertices[16].color, colors::GROUND);
    }
}
