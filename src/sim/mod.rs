//! Simulation module
//!
//! Obstacle geometry and the LIDAR sensor. Everything here is pure and
//! deterministic:
//! - No rendering or platform dependencies
//! - Seeded RNG only
//! - Obstacles are supplied by the caller each scan

pub mod course;
pub mod geometry;
pub mod lidar;
pub mod obstacle;

pub use course::Course;
pub use geometry::Rect;
pub use lidar::{Lidar, Scan};
pub use obstacle::{Ground, Pipe, sort_nearest_first};
