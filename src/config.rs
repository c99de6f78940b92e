//! Effect configuration
//!
//! Every field defaults to the values the page was designed around, so an
//! empty JSON object (or no JSON at all) reproduces the stock behavior.

use serde::{de, Deserialize, Serialize};

use crate::error::{EffectError, Result};

/// Half-open sampling range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a unit sample in [0, 1) into the range
    pub fn sample(&self, unit: f64) -> f64 {
        self.min + unit * (self.max - self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    fn check(&self, name: &str, floor: f64) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(invalid(format!(
                "{} needs finite min < max, got [{}, {})",
                name, self.min, self.max
            )));
        }
        if self.min < floor {
            return Err(invalid(format!("{} min must be at least {}", name, floor)));
        }
        Ok(())
    }
}

fn invalid(message: String) -> EffectError {
    EffectError::Config(<serde_json::Error as de::Error>::custom(message))
}

/// Viewport width above which a non-touch device is treated as desktop
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Milliseconds between bubble spawns
pub const BUBBLE_INTERVAL_MS: u32 = 500;

pub const GRADIENT_START: &str = "#607bf4";
pub const GRADIENT_END: &str = "#0d2364";

/// Runtime configuration for the page effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectConfig {
    pub page_selector: String,
    pub page_number_selector: String,
    pub bubble_container_selector: String,
    pub desktop_min_width: f64,
    pub bubble_interval_ms: u32,
    pub gradient_start: String,
    pub gradient_end: String,
    pub bubble_diameter: Range,
    pub bubble_left: Range,
    pub bubble_duration: Range,
    /// Cap on concurrently live bubbles (`None` = unbounded)
    pub max_live_bubbles: Option<usize>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            page_selector: ".page".to_string(),
            page_number_selector: ".page-number".to_string(),
            bubble_container_selector: ".bubbles".to_string(),
            desktop_min_width: DESKTOP_MIN_WIDTH,
            bubble_interval_ms: BUBBLE_INTERVAL_MS,
            gradient_start: GRADIENT_START.to_string(),
            gradient_end: GRADIENT_END.to_string(),
            bubble_diameter: Range::new(10.0, 20.0),
            bubble_left: Range::new(5.0, 95.0),
            bubble_duration: Range::new(4000.0, 4300.0),
            max_live_bubbles: None,
        }
    }
}

impl EffectConfig {
    /// Parse a JSON override; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the timers and sampling cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.bubble_interval_ms == 0 {
            return Err(invalid("bubbleIntervalMs must be positive".to_string()));
        }
        if !self.desktop_min_width.is_finite() {
            return Err(invalid("desktopMinWidth must be finite".to_string()));
        }
        self.bubble_diameter.check("bubbleDiameter", 0.0)?;
        self.bubble_left.check("bubbleLeft", f64::MIN)?;
        self.bubble_duration.check("bubbleDuration", 0.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EffectError;

    #[test]
    fn test_empty_object_is_default() {
        let config = EffectConfig::from_json("{}").unwrap();
        assert_eq!(config, EffectConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EffectConfig::from_json(
            r#"{"desktopMinWidth": 1024, "maxLiveBubbles": 12, "bubbleLeft": {"min": 10, "max": 90}}"#,
        )
        .unwrap();

        assert_eq!(config.desktop_min_width, 1024.0);
        assert_eq!(config.max_live_bubbles, Some(12));
        assert_eq!(config.bubble_left, Range::new(10.0, 90.0));
        assert_eq!(config.page_selector, ".page");
        assert_eq!(config.bubble_interval_ms, 500);
    }

    #[test]
    fn test_invalid_json() {
        let result = EffectConfig::from_json("{\"bubbleIntervalMs\": \"soon\"}");
        assert!(matches!(result, Err(EffectError::Config(_))));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = EffectConfig::from_json(r#"{"bubbleIntervalMs": 0}"#);
        assert!(matches!(result, Err(EffectError::Config(_))));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = EffectConfig::from_json(r#"{"bubbleDiameter": {"min": 20, "max": 10}}"#);
        assert!(matches!(result, Err(EffectError::Config(_))));

        let result = EffectConfig::from_json(r#"{"bubbleLeft": {"min": 50, "max": 50}}"#);
        assert!(matches!(result, Err(EffectError::Config(_))));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let result = EffectConfig::from_json(r#"{"bubbleDuration": {"min": -300, "max": 100}}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("bubbleDuration"));
    }

    #[test]
    fn test_defaults_validate() {
        assert!(EffectConfig::default().validate().is_ok());
        let short = EffectConfig {
            bubble_duration: Range::new(100.0, 200.0),
            bubble_interval_ms: 50,
            ..EffectConfig::default()
        };
        assert!(short.validate().is_ok());
    }

    #[test]
    fn test_range_sample() {
        let range = Range::new(4000.0, 4300.0);
        assert_eq!(range.sample(0.0), 4000.0);
        assert_eq!(range.sample(0.5), 4150.0);
        assert!(range.contains(4000.0));
        assert!(!range.contains(4300.0));
    }
}
