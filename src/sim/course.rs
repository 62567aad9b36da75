//! Scrolling pipe course
//!
//! Minimal deterministic obstacle source for driving the sensor headlessly:
//! pipe pairs spawn off the right edge of the screen with a random gap
//! height, scroll left every tick, and are dropped once fully off screen.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::{Ground, Pipe};
use crate::consts::{PIPE_GAP, PIPE_GAP_OFFSETS};
use crate::constants::GameConstants;

/// Upper/lower pipe lists plus the ground they scroll above
#[derive(Debug, Clone)]
pub struct Course {
    pub upper_pipes: Vec<Pipe>,
    pub lower_pipes: Vec<Pipe>,
    pub ground: Ground,
    rng: Pcg32,
}

impl Course {
    /// Start a course with two pipe pairs half a screen apart
    pub fn new(seed: u64, constants: &GameConstants) -> Self {
        let mut course = Self {
            upper_pipes: Vec::new(),
            lower_pipes: Vec::new(),
            ground: Ground::new(constants.ground_y()),
            rng: Pcg32::seed_from_u64(seed),
        };

        let width = constants.background_width;
        course.spawn_pair(width, constants);
        course.spawn_pair(width + width / 2.0, constants);
        course
    }

    fn spawn_pair(&mut self, x: f32, constants: &GameConstants) {
        let offset = PIPE_GAP_OFFSETS[self.rng.random_range(0..PIPE_GAP_OFFSETS.len())];
        let gap_top = offset + (self.ground.y * 0.2).floor();

        log::debug!("Spawning pipe pair at x={x} with gap at y={gap_top}");
        self.upper_pipes.push(Pipe::new(x, gap_top - constants.pipe_height));
        self.lower_pipes.push(Pipe::new(x, gap_top + PIPE_GAP));
    }

    /// Scroll one tick: move pipes, spawn a new pair when the leading pipe
    /// is about to cross the left edge, and drop pipes that left the screen
    pub fn advance(&mut self, constants: &GameConstants) {
        for pipe in self.upper_pipes.iter_mut().chain(self.lower_pipes.iter_mut()) {
            pipe.x += constants.pipe_vel_x;
        }

        if self.upper_pipes.first().is_some_and(|p| p.x > 0.0 && p.x < 5.0) {
            self.spawn_pair(constants.background_width + 10.0, constants);
        }

        if self.upper_pipes.first().is_some_and(|p| p.x < -constants.pipe_width) {
            self.upper_pipes.remove(0);
            self.lower_pipes.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let constants = GameConstants::default();
        let course = Course::new(7, &constants);

        assert_eq!(course.upper_pipes.len(), 2);
        assert_eq!(course.lower_pipes.len(), 2);
        assert_eq!(course.upper_pipes[0].x, 288.0);
        assert_eq!(course.upper_pipes[1].x, 432.0);

        for (up, low) in course.upper_pipes.iter().zip(&course.lower_pipes) {
            assert_eq!(up.x, low.x);
            let gap_top = up.y + constants.pipe_height;
            assert_eq!(low.y - gap_top, PIPE_GAP);
            assert!((100.0..=170.0).contains(&gap_top), "gap top {gap_top}");
        }
    }

    #[test]
    fn test_advance_scrolls_by_pipe_velocity() {
        let constants = GameConstants::default();
        let mut course = Course::new(7, &constants);
        course.advance(&constants);

        assert_eq!(course.upper_pipes[0].x, 284.0);
        assert_eq!(course.lower_pipes[1].x, 428.0);
    }

    #[test]
    fn test_pairs_spawn_and_despawn() {
        let constants = GameConstants::default();
        let mut course = Course::new(3, &constants);

        // Leading pipe starts at 288 and reaches x=4 after 71 ticks
        for _ in 0..71 {
            course.advance(&constants);
        }
        assert_eq!(course.upper_pipes.len(), 3);
        assert_eq!(course.upper_pipes[2].x, 298.0);

        // ...and leaves the screen once x < -52
        for _ in 0..15 {
            course.advance(&constants);
        }
        assert_eq!(course.upper_pipes.len(), 2);
        assert_eq!(course.upper_pipes.len(), course.lower_pipes.len());
    }

    #[test]
    fn test_same_seed_same_course() {
        let constants = GameConstants::default();
        let mut a = Course::new(42, &constants);
        let mut b = Course::new(42, &constants);
        for _ in 0..200 {
            a.advance(&constants);
            b.advance(&constants);
        }
        assert_eq!(a.upper_pipes, b.upper_pipes);
        assert_eq!(a.lower_pipes, b.lower_pipes);
    }
}
