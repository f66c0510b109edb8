//! Caller-supplied configuration for a rating control.

use serde::{Deserialize, Serialize};

/// Number of stars displayed when none is configured.
pub const DEFAULT_TOTAL_STARS: u32 = 5;

/// Configuration of a rating control, immutable per render pass.
///
/// Every field is optional in the sense that leaving it out (or deserializing
/// from a document that omits it) falls back to the default. There is no
/// validation layer: out-of-range values such as `total_stars == 0` are the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Number of stars to display.
    pub total_stars: u32,
    /// Externally controlled committed rating.
    pub rating: u32,
    /// Edge length of a star glyph in points. `None` lets the widget layer
    /// pick its default.
    pub size: Option<f32>,
    /// Suppresses all interaction when set.
    pub disabled: bool,
    /// Opaque label identifying this instance in the change payload.
    pub name: Option<String>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            total_stars: DEFAULT_TOTAL_STARS,
            rating: 0,
            size: None,
            disabled: false,
            name: None,
        }
    }
}

impl RatingConfig {
    /// Create a configuration with the given number of stars.
    pub fn with_total_stars(total_stars: u32) -> Self {
        Self {
            total_stars,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RatingConfig::default();

        assert_eq!(config.total_stars, 5);
        assert_eq!(config.rating, 0);
        assert_eq!(config.size, None);
        assert!(!config.disabled);
        assert_eq!(config.name, None);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: RatingConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, RatingConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: RatingConfig =
            serde_json::from_str(r#"{"total_stars": 3, "name": "quality"}"#).unwrap();

        assert_eq!(config.total_stars, 3);
        assert_eq!(config.name.as_deref(), Some("quality"));
        assert_eq!(config.rating, 0);
        assert!(!config.disabled);
    }

    #[test]
    fn test_with_total_stars() {
        let config = RatingConfig::with_total_stars(10);

        assert_eq!(config.total_stars, 10);
        assert_eq!(config.rating, 0);
    }
}
