//! Vertical swipe tracking for touch navigation

use super::Direction;

/// Tracks one touch sequence from start to end.
///
/// A swipe whose finger travels upward (negative delta) advances; anything
/// else, including a tap with no movement, retreats.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_y: f64,
    delta_y: f64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// First touch point went down
    pub fn begin(&mut self, client_y: f64) {
        self.start_y = client_y;
        self.delta_y = 0.0;
    }

    /// First touch point moved
    pub fn update(&mut self, client_y: f64) {
        self.delta_y = client_y - self.start_y;
    }

    /// Net vertical travel since `begin`
    pub fn delta(&self) -> f64 {
        self.delta_y
    }

    /// Sequence ended; resolve its direction and discard the sample
    pub fn finish(&mut self) -> Direction {
        let direction = if self.delta_y < 0.0 {
            Direction::Advance
        } else {
            Direction::Retreat
        };
        *self = Self::default();
        direction
    }
}
