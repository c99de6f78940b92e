//! Ambient bubble particles: sampling, lifecycle and styling

mod field;
mod random;
mod style;

pub use field::{Bubble, BubbleField, BubbleId, BubbleRanges, BubbleState};
pub use random::{JsRandom, RandomSource};
pub use style::{BubbleStyle, FloatKeyframe, FLOAT_KEYFRAMES};
