//! Temperature logger: reads readings, rejects malformed or out-of-range
//! entries, and reports the count and average on quit.

pub mod logger;
pub mod stats;
pub mod validator;

pub use logger::{format_report, Entry, Rejection, TemperatureLogger};
pub use stats::RunningStatistics;
pub use validator::ValidationRange;
