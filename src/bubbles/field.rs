//! Live bubble population

use rustc_hash::FxHashMap;

use super::RandomSource;
use crate::config::{EffectConfig, Range};

/// Identifier assigned at spawn time, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BubbleId(pub u64);

/// Lifecycle of a bubble; strictly Spawned -> Animating -> Removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleState {
    Spawned,
    Animating,
    Removed,
}

/// Sampling ranges for new bubbles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleRanges {
    pub diameter_px: Range,
    pub left_vw: Range,
    pub duration_ms: Range,
}

impl Default for BubbleRanges {
    fn default() -> Self {
        Self::from_config(&EffectConfig::default())
    }
}

impl BubbleRanges {
    pub fn from_config(config: &EffectConfig) -> Self {
        Self {
            diameter_px: config.bubble_diameter,
            left_vw: config.bubble_left,
            duration_ms: config.bubble_duration,
        }
    }
}

/// One decorative particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub id: BubbleId,
    pub diameter_px: f64,
    /// Horizontal offset in percent of viewport width
    pub left_vw: f64,
    pub duration_ms: f64,
    pub spawned_at_ms: f64,
}

impl Bubble {
    pub fn expires_at_ms(&self) -> f64 {
        self.spawned_at_ms + self.duration_ms
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at_ms()
    }

    /// Delay for the removal timer, rounded up so it never undercuts the
    /// animation
    pub fn removal_delay_ms(&self) -> u32 {
        self.duration_ms.ceil() as u32
    }
}

/// Tracks bubbles between spawn and removal, with an optional population cap
#[derive(Debug, Default)]
pub struct BubbleField {
    ranges: BubbleRanges,
    max_live: Option<usize>,
    live: FxHashMap<BubbleId, (Bubble, BubbleState)>,
    next_id: u64,
}

impl BubbleField {
    pub fn new(ranges: BubbleRanges, max_live: Option<usize>) -> Self {
        Self {
            ranges,
            max_live,
            live: FxHashMap::default(),
            next_id: 0,
        }
    }

    pub fn from_config(config: &EffectConfig) -> Self {
        Self::new(BubbleRanges::from_config(config), config.max_live_bubbles)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn spawned_total(&self) -> u64 {
        self.next_id
    }

    /// Sample a new bubble, or `None` when the cap is reached
    pub fn spawn<R: RandomSource>(&mut self, now_ms: f64, rng: &mut R) -> Option<Bubble> {
        if let Some(max) = self.max_live {
            if self.live.len() >= max {
                return None;
            }
        }

        let bubble = Bubble {
            id: BubbleId(self.next_id),
            diameter_px: self.ranges.diameter_px.sample(rng.next_unit()),
            left_vw: self.ranges.left_vw.sample(rng.next_unit()),
            duration_ms: self.ranges.duration_ms.sample(rng.next_unit()),
            spawned_at_ms: now_ms,
        };
        self.next_id += 1;
        self.live.insert(bubble.id, (bubble, BubbleState::Spawned));
        Some(bubble)
    }

    /// Animation handed to the platform
    pub fn mark_animating(&mut self, id: BubbleId) {
        if let Some((_, state)) = self.live.get_mut(&id) {
            if *state == BubbleState::Spawned {
                *state = BubbleState::Animating;
            }
        }
    }

    /// Drop a bubble whose removal timer fired; false if it was not live
    pub fn retire(&mut self, id: BubbleId) -> bool {
        self.live.remove(&id).is_some()
    }

    pub fn get(&self, id: BubbleId) -> Option<&Bubble> {
        self.live.get(&id).map(|(bubble, _)| bubble)
    }

    /// `None` for ids that were never handed out
    pub fn state(&self, id: BubbleId) -> Option<BubbleState> {
        match self.live.get(&id) {
            Some((_, state)) => Some(*state),
            None if id.0 < self.next_id => Some(BubbleState::Removed),
            None => None,
        }
    }
}
