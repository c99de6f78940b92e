//! Scroll-driven background gradient

/// Scroll position snapshot of the document
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub scroll_height: f64,
}

/// Fraction of the document that has been scrolled into or past the viewport.
///
/// Not clamped: odd layouts can push it slightly past 1 or below 0.
pub fn scroll_ratio(metrics: &ScrollMetrics) -> f64 {
    (metrics.scroll_y + metrics.viewport_height) / metrics.scroll_height
}

/// Two-stop top-to-bottom gradient
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub start_color: String,
    pub end_color: String,
    /// Position of the end color stop, in percent
    pub end_stop_percent: f64,
}

impl Gradient {
    pub fn for_scroll(start_color: &str, end_color: &str, metrics: &ScrollMetrics) -> Self {
        Self {
            start_color: start_color.to_string(),
            end_color: end_color.to_string(),
            end_stop_percent: scroll_ratio(metrics) * 100.0,
        }
    }

    /// CSS `background` value
    pub fn css(&self) -> String {
        format!(
            "linear-gradient( to bottom, {} 0%, {} {}%)",
            self.start_color, self.end_color, self.end_stop_percent
        )
    }
}
