/// Running count and sum of accepted readings.
///
/// Only ever grows; callers validate before adding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStatistics {
    sum: f64,
    count: usize,
}

impl RunningStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading unconditionally.
    pub fn add_temperature(&mut self, temperature: f64) {
        self.count += 1;
        self.sum += temperature;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Mean of the recorded readings, NaN when nothing was recorded.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        self.sum / self.count as f64
    }
}

impl Extend<f64> for RunningStatistics {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for temperature in iter {
            self.add_temperature(temperature);
        }
    }
}
