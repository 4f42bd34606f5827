//! Inclusive range check for readings.

use crate::config::TemperatureConfig;

/// Inclusive bounds a reading must fall within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRange {
    pub min: f64,
    pub max: f64,
}

impl ValidationRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min <= temperature <= max`.
    ///
    /// NaN compares false against both bounds, so it is never valid.
    pub fn is_valid(&self, temperature: f64) -> bool {
        self.min <= temperature && temperature <= self.max
    }
}

impl Default for ValidationRange {
    fn default() -> Self {
        Self::new(-20.0, 130.0)
    }
}

impl From<&TemperatureConfig> for ValidationRange {
    fn from(config: &TemperatureConfig) -> Self {
        Self::new(config.min, config.max)
    }
}
