//! Flappy LIDAR - perception core for a Flappy Bird style environment
//!
//! Core modules:
//! - `constants`: Named game constants with get/set/reset access
//! - `sim`: Obstacle geometry, the 180-ray LIDAR sensor and a scrolling pipe course
//! - `renderer`: Vertex generation for visualizing a scan

pub mod constants;
pub mod renderer;
pub mod sim;

pub use constants::{ConstantKey, GameConstants};
pub use sim::{Course, Ground, Lidar, Pipe};

use glam::Vec2;

/// Fixed sensor and course parameters
pub mod consts {
    /// Number of rays in one LIDAR sweep (one per degree)
    pub const LIDAR_RAYS: usize = 180;
    /// Angular offset of ray 0 from the player's forward axis (degrees)
    pub const LIDAR_BASE_ANGLE: f32 = -90.0;

    /// Vertical gap between an upper and a lower pipe
    pub const PIPE_GAP: f32 = 100.0;
    /// Candidate offsets for the top of a pipe gap
    pub const PIPE_GAP_OFFSETS: [f32; 8] = [20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];
    /// Ground line as a fraction of the background height
    pub const GROUND_Y_RATIO: f32 = 0.79;
}

/// Unit direction for an angle given in degrees
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
