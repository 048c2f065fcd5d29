use std::ops::RangeInclusive;
use std::time::Duration;

use crate::core::data::array_model::ArrayModelError;
use crate::core::playback::clock::{DEFAULT_MINIMUM_DELAY, DEFAULT_SPEED, DEFAULT_TIME_UNIT};

const DEFAULT_DISPLAY_WIDTH: u32 = 800;
const DEFAULT_DISPLAY_HEIGHT: u32 = 600;
const DEFAULT_BAR_WIDTH: u32 = 10;
/// Vertical space the control strip takes from the display.
const CONTROL_STRIP_HEIGHT: u32 = 100;
const MIN_BAR_HEIGHT: u32 = 10;

/// Presentation parameters the array model and playback clock are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub display_width: u32,
    pub display_height: u32,
    pub bar_width: u32,
    pub initial_speed: u8,
    pub minimum_delay: u64,
    pub time_unit: Duration,
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            bar_width: DEFAULT_BAR_WIDTH,
            initial_speed: DEFAULT_SPEED,
            minimum_delay: DEFAULT_MINIMUM_DELAY,
            time_unit: DEFAULT_TIME_UNIT,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.display_width
            .checked_div(self.bar_width)
            .unwrap_or(0) as usize
    }

    /// Bar heights span `10 ..= display_height - 91`, leaving room for the control strip.
    #[must_use]
    pub fn value_range(&self) -> RangeInclusive<i32> {
        let span = self.display_height.saturating_sub(CONTROL_STRIP_HEIGHT);
        let low = MIN_BAR_HEIGHT as i32;
        let high = (MIN_BAR_HEIGHT as i64 + span as i64 - 1).min(i32::MAX as i64) as i32;

        low..=high
    }

    pub fn validate(&self) -> Result<(), ArrayModelError> {
        if self.bar_width == 0 {
            return Err(ArrayModelError::invalid("bar width must be positive"));
        }

        if self.bar_count() == 0 {
            return Err(ArrayModelError::invalid(format!(
                "display width {} fits no bars of width {}",
                self.display_width, self.bar_width
            )));
        }

        if self.value_range().is_empty() {
            return Err(ArrayModelError::invalid(format!(
                "display height {} leaves no room for bars",
                self.display_height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_matches_classic_window() {
        let config = VisualizerConfig::default();

        assert_eq!(config.bar_count(), 80);
        assert_eq!(config.value_range(), 10..=509);
        assert_eq!(config.initial_speed, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_bar_width_is_invalid() {
        let config = VisualizerConfig {
            bar_width: 0,
            ..VisualizerConfig::default()
        };

        assert_eq!(config.bar_count(), 0);
        assert!(matches!(
            config.validate(),
            Err(ArrayModelError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_narrow_display_is_invalid() {
        let config = VisualizerConfig {
            display_width: 5,
            ..VisualizerConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_display_is_invalid() {
        let config = VisualizerConfig {
            display_height: 100,
            ..VisualizerConfig::default()
        };

        assert!(config.value_range().is_empty());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_smallest_valid_height_gives_single_value() {
        let config = VisualizerConfig {
            display_height: 101,
            ..VisualizerConfig::default()
        };

        assert_eq!(config.value_range(), 10..=10);
        assert!(config.validate().is_ok());
    }
}
