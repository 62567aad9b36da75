//! 180-ray LIDAR sensor
//!
//! The sensor sits on the player's leading edge at mid-height and sweeps a
//! half-circle fan one degree per ray. Ray `i` points at
//! `i - 90 - visible_rotation` degrees, so ray 90 looks straight ahead and
//! rays 0 and 179 are the extremes of the fan. Each ray reports the distance
//! to the ground, to a pipe, or its full reach when nothing is hit.
//!
//! Pipe resolution is order based rather than nearest based: the upper and
//! lower pipe lists are sorted by x independently, paired by index, and the
//! first pair (upper before lower) that intersects a ray wins, even when a
//! later pipe or the ground is geometrically closer. Agents trained against
//! this sensor see exactly this behavior, so it is kept as is.
//!
//! Only the ray reach is fixed at construction. Dimensions and the rotation
//! threshold are read from the `GameConstants` passed to every scan, so a
//! `set` on the environment's constants applies from the next scan on.

use glam::Vec2;

use super::obstacle::{Ground, Pipe, sort_nearest_first};
use crate::consts::{LIDAR_BASE_ANGLE, LIDAR_RAYS};
use crate::constants::GameConstants;
use crate::direction_from_degrees;

/// Distances of one sweep, index-aligned with ray number
pub type Scan = [f32; LIDAR_RAYS];

/// LIDAR sensor with a reusable hit-point buffer
#[derive(Debug, Clone)]
pub struct Lidar {
    max_distance: f32,
    /// Hit point of every ray from the latest scan
    hits: [Vec2; LIDAR_RAYS],
    sorted_upper: Vec<Pipe>,
    sorted_lower: Vec<Pipe>,
}

impl Lidar {
    /// Create a sensor whose rays reach `LIDAR_MAX_DISTANCE`
    pub fn new(constants: &GameConstants) -> Self {
        Self {
            max_distance: constants.lidar_max_distance,
            hits: [Vec2::ZERO; LIDAR_RAYS],
            sorted_upper: Vec::new(),
            sorted_lower: Vec::new(),
        }
    }

    /// Reach of every ray
    #[inline]
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Hit points from the latest scan (all zero before the first scan)
    #[inline]
    pub fn hits(&self) -> &[Vec2; LIDAR_RAYS] {
        &self.hits
    }

    /// Ray origin for a player whose bounding box starts at `(player_x, player_y)`
    pub fn origin(constants: &GameConstants, player_x: f32, player_y: f32) -> Vec2 {
        Vec2::new(
            player_x + constants.player_width,
            player_y + constants.player_height / 2.0,
        )
    }

    /// Rotation used for ray geometry: capped at the rotation threshold,
    /// anything at or below it (including negative values) passes through
    pub fn visible_rotation(constants: &GameConstants, player_rot: f32) -> f32 {
        if player_rot <= constants.player_rot_thr {
            player_rot
        } else {
            constants.player_rot_thr
        }
    }

    /// Angle of ray `index` in degrees for a given visible rotation
    #[inline]
    pub fn ray_angle(index: usize, visible_rot: f32) -> f32 {
        index as f32 + LIDAR_BASE_ANGLE - visible_rot
    }

    /// Sweep all rays and return the distance of each
    ///
    /// Overwrites the hit-point buffer. Never fails: empty or mismatched
    /// pipe lists only reduce the number of pipe pairs tested.
    pub fn scan(
        &mut self,
        constants: &GameConstants,
        player_x: f32,
        player_y: f32,
        player_rot: f32,
        upper_pipes: &[Pipe],
        lower_pipes: &[Pipe],
        ground: &Ground,
    ) -> Scan {
        let origin = Self::origin(constants, player_x, player_y);
        let visible_rot = Self::visible_rotation(constants, player_rot);

        self.sorted_upper.clear();
        self.sorted_upper.extend_from_slice(upper_pipes);
        sort_nearest_first(&mut self.sorted_upper);
        self.sorted_lower.clear();
        self.sorted_lower.extend_from_slice(lower_pipes);
        sort_nearest_first(&mut self.sorted_lower);

        let ground_rect = ground.rect(constants);
        let mut distances = [0.0; LIDAR_RAYS];

        for (i, distance) in distances.iter_mut().enumerate() {
            let dir = direction_from_degrees(Self::ray_angle(i, visible_rot));
            let end = origin + dir * self.max_distance;

            let mut hit = ground_rect.first_hit(origin, end).unwrap_or(end);

            for (up, low) in self.sorted_upper.iter().zip(&self.sorted_lower) {
                let pipe_hit = up
                    .rect(constants)
                    .first_hit(origin, end)
                    .or_else(|| low.rect(constants).first_hit(origin, end));
                if let Some(p) = pipe_hit {
                    hit = p;
                    break;
                }
            }

            // Nothing is visible below the ground line
            if hit.y > ground.y {
                hit.y = ground.y;
            }

            self.hits[i] = hit;
            *distance = origin.distance(hit);
        }

        log::trace!(
            "LIDAR scan from ({:.1}, {:.1}) rot {:.1}: {} pipe pairs",
            origin.x,
            origin.y,
            visible_rot,
            self.sorted_upper.len().min(self.sorted_lower.len())
        );

        distances
    }
}
