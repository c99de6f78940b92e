//! Page-Flip: full-screen page navigation and ambient effects for the web
//!
//! This crate provides:
//! - A wrapping page index driven by touch swipes or the mouse wheel
//! - A background gradient that follows the scroll position
//! - Decorative bubbles that float up the page and clean themselves up
//!
//! The core is plain Rust and testable natively; the `wasm` module binds it
//! to the browser DOM.

pub mod bubbles;
pub mod config;
pub mod error;
pub mod gradient;
pub mod pagination;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::{mount, mount_with_input, PageEffects};

// Re-export primary types
pub use bubbles::{Bubble, BubbleField, BubbleId, BubbleRanges, BubbleState, RandomSource};
pub use config::{EffectConfig, Range};
pub use error::EffectError;
pub use gradient::{scroll_ratio, Gradient, ScrollMetrics};
pub use pagination::{
    DeviceCapabilities, Direction, InputSource, PageSurface, Pager, PaginationController,
    SwipeTracker,
};

#[cfg(test)]
mod tests {
    use super::*;

    struct NullSurface;

    impl PageSurface for NullSurface {
        fn show_page_number(&mut self, _number: usize) {}
        fn scroll_to_page(&mut self, _index: usize) {}
    }

    #[test]
    fn test_desktop_session() {
        let config = EffectConfig::default();
        let caps = DeviceCapabilities {
            touch_events: false,
            max_touch_points: 0,
            viewport_width: 1440.0,
        };
        assert_eq!(
            InputSource::select(&caps, config.desktop_min_width),
            InputSource::Wheel
        );

        let mut controller = PaginationController::new(Pager::new(5).unwrap(), NullSurface);
        let visited: Vec<usize> = (0..5).map(|_| controller.wheel(53.0)).collect();
        assert_eq!(visited, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_gradient_from_default_config() {
        let config = EffectConfig::default();
        let metrics = ScrollMetrics {
            scroll_y: 0.0,
            viewport_height: 800.0,
            scroll_height: 2000.0,
        };
        let gradient = Gradient::for_scroll(&config.gradient_start, &config.gradient_end, &metrics);
        assert_eq!(scroll_ratio(&metrics), 0.4);
        assert!(gradient.css().ends_with("#0d2364 40%)"));
    }
}
