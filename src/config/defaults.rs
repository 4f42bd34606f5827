//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_min_temperature, f64, -20.0);
default_fn!(default_max_temperature, f64, 130.0);
default_fn!(default_unit, String, "Fahrenheit".to_string());
default_fn!(default_quit_sentinel, String, "q".to_string());
default_fn!(default_table_size, usize, 10);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Temperature logger settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TemperatureConfig {
    /// Lowest accepted reading (inclusive)
    #[serde(default = "default_min_temperature")]
    pub min: f64,
    /// Highest accepted reading (inclusive)
    #[serde(default = "default_max_temperature")]
    pub max: f64,
    /// Unit named in the out-of-range notice
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Case-insensitive input that ends the session
    #[serde(default = "default_quit_sentinel")]
    pub quit_sentinel: String,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            min: default_min_temperature(),
            max: default_max_temperature(),
            unit: default_unit(),
            quit_sentinel: default_quit_sentinel(),
        }
    }
}

/// Multiplication table settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TableConfig {
    /// Size used when the user declines or enters an invalid size
    #[serde(default = "default_table_size")]
    pub default_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_size: default_table_size(),
        }
    }
}

/// Practice quiz settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizConfig {
    /// Fixed RNG seed; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}
