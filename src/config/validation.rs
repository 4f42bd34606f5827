//! Validation logic for configuration.

use anyhow::Result;

use super::defaults::{TableConfig, TemperatureConfig};
use super::Config;
use crate::table::MAX_SIZE;

impl Config {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.temperature.validate()?;
        self.table.validate()
    }
}

impl TemperatureConfig {
    /// Validate temperature configuration
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            anyhow::bail!(
                "temperature bounds must be finite, got min={} max={}",
                self.min,
                self.max
            );
        }

        if self.min > self.max {
            anyhow::bail!(
                "temperature.min ({}) must not exceed temperature.max ({})",
                self.min,
                self.max
            );
        }

        if self.unit.trim().is_empty() {
            anyhow::bail!("temperature.unit must not be empty");
        }

        if self.quit_sentinel.trim().is_empty() {
            anyhow::bail!("temperature.quit_sentinel must not be empty");
        }

        Ok(())
    }
}

impl TableConfig {
    /// Validate table configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_size == 0 {
            anyhow::bail!("table.default_size must be greater than 0");
        }

        if self.default_size > MAX_SIZE {
            anyhow::bail!(
                "table.default_size must be at most {}, got {}",
                MAX_SIZE,
                self.default_size
            );
        }

        Ok(())
    }
}
