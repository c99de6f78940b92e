//! Inline styling and float animation for bubble elements

use super::Bubble;

pub const BUBBLE_CLASS: &str = "bubble";
const BUBBLE_BACKGROUND: &str = "linear-gradient(to bottom, #87dcff, #87CEFA)";
const BUBBLE_SHADOW: &str = "0px 0px 1px rgba(27, 14, 216, 0.67)";
const BUBBLE_Z_INDEX: &str = "100";

/// One keyframe of the float animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatKeyframe {
    pub transform: &'static str,
    pub opacity: f64,
}

/// Rise from the container to a full viewport height above it while fading out
pub const FLOAT_KEYFRAMES: [FloatKeyframe; 2] = [
    FloatKeyframe {
        transform: "translateY(0)",
        opacity: 1.0,
    },
    FloatKeyframe {
        transform: "translateY(-100vh)",
        opacity: 0.0,
    },
];

/// Ordered CSS declarations for a bubble element
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleStyle {
    pub class_name: &'static str,
    pub declarations: Vec<(&'static str, String)>,
}

impl BubbleStyle {
    pub fn for_bubble(bubble: &Bubble) -> Self {
        let size = format!("{}px", bubble.diameter_px);
        Self {
            class_name: BUBBLE_CLASS,
            declarations: vec![
                ("width", size.clone()),
                ("height", size),
                ("border-radius", "50%".to_string()),
                ("position", "absolute".to_string()),
                ("background", BUBBLE_BACKGROUND.to_string()),
                ("z-index", BUBBLE_Z_INDEX.to_string()),
                ("box-shadow", BUBBLE_SHADOW.to_string()),
                ("left", format!("{}vw", bubble.left_vw)),
            ],
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }
}
