//! Obstacles the player can collide with

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::constants::GameConstants;

/// A single pipe (upper or lower), positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub x: f32,
    pub y: f32,
}

impl Pipe {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Collision rectangle (every pipe shares the configured size)
    pub fn rect(&self, constants: &GameConstants) -> Rect {
        Rect::new(self.x, self.y, constants.pipe_width, constants.pipe_height)
    }
}

/// The ground (base) strip; spans the full base width from x = 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    pub y: f32,
}

impl Ground {
    pub fn new(y: f32) -> Self {
        Self { y }
    }

    pub fn rect(&self, constants: &GameConstants) -> Rect {
        Rect::new(0.0, self.y, constants.base_width, constants.base_height)
    }
}

/// Sort pipes nearest-first (ascending x); stable for equal x
pub fn sort_nearest_first(pipes: &mut [Pipe]) {
    pipes.sort_by(|a, b| a.x.total_cmp(&b.x));
}
