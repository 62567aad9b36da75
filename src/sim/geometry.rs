//! Axis-aligned rectangles and segment clipping
//!
//! Rectangles are in screen space: `pos` is the top-left corner and y grows
//! downward. Edges are inclusive, so a segment grazing an edge still clips.
//! Clipping is exact in `f32` rather than snapped to whole pixels, so hit
//! points can differ by up to a pixel from an integer rasterizer's clip.

use glam::Vec2;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Clip the segment `start -> end` to this rectangle (Liang-Barsky)
    ///
    /// Returns the portion of the segment inside the rectangle as
    /// `(entry, exit)` ordered along the segment, or `None` on a miss.
    /// If `start` lies inside the rectangle the entry point is `start`.
    pub fn clip_segment(&self, start: Vec2, end: Vec2) -> Option<(Vec2, Vec2)> {
        let d = end - start;
        let mut t_enter = 0.0_f32;
        let mut t_exit = 1.0_f32;

        let edges = [
            (-d.x, start.x - self.left()),
            (d.x, self.right() - start.x),
            (-d.y, start.y - self.top()),
            (d.y, self.bottom() - start.y),
        ];

        for (p, q) in edges {
            if p == 0.0 {
                // Parallel to this edge: reject if outside it
                if q < 0.0 {
                    return None;
                }
                continue;
            }

            let r = q / p;
            if p < 0.0 {
                if r > t_exit {
                    return None;
                }
                t_enter = t_enter.max(r);
            } else {
                if r < t_enter {
                    return None;
                }
                t_exit = t_exit.min(r);
            }
        }

        Some((start + d * t_enter, start + d * t_exit))
    }

    /// First point along `start -> end` that lies in the rectangle
    #[inline]
    pub fn first_hit(&self, start: Vec2, end: Vec2) -> Option<Vec2> {
        self.clip_segment(start, end).map(|(entry, _)| entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_horizontal_segment() {
        let rect = Rect::new(10.0, 0.0, 10.0, 10.0);
        let (entry, exit) = rect
            .clip_segment(Vec2::new(0.0, 5.0), Vec2::new(30.0, 5.0))
            .unwrap();
        assert_eq!(entry, Vec2::new(10.0, 5.0));
        assert_eq!(exit, Vec2::new(20.0, 5.0));
    }

    #[test]
    fn test_clip_reversed_segment_enters_far_side() {
        let rect = Rect::new(10.0, 0.0, 10.0, 10.0);
        let entry = rect.first_hit(Vec2::new(30.0, 5.0), Vec2::new(0.0, 5.0)).unwrap();
        assert_eq!(entry, Vec2::new(20.0, 5.0));
    }

    #[test]
    fn test_clip_miss() {
        let rect = Rect::new(10.0, 0.0, 10.0, 10.0);
        // Passes above
        assert!(rect.clip_segment(Vec2::new(0.0, -5.0), Vec2::new(30.0, -5.0)).is_none());
        // Stops short
        assert!(rect.clip_segment(Vec2::new(0.0, 5.0), Vec2::new(8.0, 5.0)).is_none());
        // Diagonal missing the corner
        assert!(rect.clip_segment(Vec2::new(0.0, 12.0), Vec2::new(12.0, 24.0)).is_none());
    }

    #[test]
    fn test_clip_diagonal() {
        let rect = Rect::new(0.0, 10.0, 100.0, 10.0);
        let entry = rect.first_hit(Vec2::new(0.0, 0.0), Vec2::new(40.0, 40.0)).unwrap();
        assert!((entry - Vec2::new(10.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_start_inside_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let start = Vec2::new(5.0, 5.0);
        let (entry, exit) = rect.clip_segment(start, Vec2::new(50.0, 5.0)).unwrap();
        assert_eq!(entry, start);
        assert_eq!(exit, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_fractional_edge_is_not_snapped() {
        let rect = Rect::new(0.0, 404.48, 336.0, 112.0);
        let entry = rect.first_hit(Vec2::new(100.0, 300.0), Vec2::new(100.0, 500.0)).unwrap();
        assert!((entry.y - 404.48).abs() < 1e-3);
    }

    #[test]
    fn test_grazing_edge_counts_as_hit() {
        let rect = Rect::new(10.0, 0.0, 10.0, 10.0);
        let entry = rect.first_hit(Vec2::new(0.0, 10.0), Vec2::new(30.0, 10.0)).unwrap();
        assert_eq!(entry, Vec2::new(10.0, 10.0));
    }
}
