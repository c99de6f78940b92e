//! Current-page state machine

use crate::error::{EffectError, Result};

/// Logical direction of a page transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Next page
    Advance,
    /// Previous page
    Retreat,
}

impl Direction {
    /// Map a wheel delta: positive scrolls forward, negative back, zero is no input
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Direction::Advance)
        } else if delta_y < 0.0 {
            Some(Direction::Retreat)
        } else {
            None
        }
    }
}

/// Owns the current page index over a fixed page count.
///
/// The index only moves through [`Pager::step`], which wraps at both ends, so
/// it always addresses a real page.
#[derive(Debug, Clone)]
pub struct Pager {
    index: usize,
    page_count: usize,
}

impl Pager {
    /// Create a pager positioned on the first page
    pub fn new(page_count: usize) -> Result<Self> {
        if page_count == 0 {
            return Err(EffectError::NoPages);
        }
        Ok(Self {
            index: 0,
            page_count,
        })
    }

    /// Current 0-based index
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Current 1-based page number for display
    pub fn page_number(&self) -> usize {
        self.index + 1
    }

    /// Apply one transition and return the new index
    pub fn step(&mut self, direction: Direction) -> usize {
        let last = self.page_count - 1;
        self.index = match direction {
            Direction::Advance if self.index < last => self.index + 1,
            Direction::Advance => 0,
            Direction::Retreat if self.index > 0 => self.index - 1,
            Direction::Retreat => last,
        };
        self.index
    }
}
