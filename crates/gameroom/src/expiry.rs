use std::time::Duration;

/// Tuning for idle-match garbage collection. Abandoned matches would
/// otherwise accumulate indefinitely since nothing explicitly destroys one.
#[derive(Debug, Clone, Copy)]
pub struct Expiry {
    /// A match untouched this long is removed by the sweeper.
    pub idle: Duration,
    /// Interval between sweeps.
    pub period: Duration,
}

impl Default for Expiry {
    fn default() -> Self {
        Self {
            idle: Duration::from_secs(30 * 60),
            period: Duration::from_secs(60),
        }
    }
}
