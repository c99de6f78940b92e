//! One-time choice of the navigation input path

/// What the host reports about its input hardware and viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceCapabilities {
    /// `ontouchstart` exists on the window
    pub touch_events: bool,
    /// `navigator.maxTouchPoints`
    pub max_touch_points: u32,
    /// `window.innerWidth`
    pub viewport_width: f64,
}

impl DeviceCapabilities {
    pub fn has_touch(&self) -> bool {
        self.touch_events || self.max_touch_points > 0
    }
}

/// The single input path wired for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Touch,
    Wheel,
    /// Narrow viewport without touch: no navigation input is wired
    None,
}

impl InputSource {
    /// Touch wins whenever present; otherwise only viewports wider than
    /// `desktop_min_width` get the wheel.
    pub fn select(caps: &DeviceCapabilities, desktop_min_width: f64) -> Self {
        if caps.has_touch() {
            InputSource::Touch
        } else if caps.viewport_width > desktop_min_width {
            InputSource::Wheel
        } else {
            InputSource::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputSource::Touch => "touch",
            InputSource::Wheel => "wheel",
            InputSource::None => "none",
        }
    }
}
