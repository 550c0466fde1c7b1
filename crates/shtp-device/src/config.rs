use std::time::Duration;

/// Timing and polling parameters for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Settle time after each reset command.
    pub reset_delay: Duration,
    /// Wait between the product-id request and reading its response.
    pub identify_delay: Duration,
    /// Settle time after a set-feature command.
    pub feature_delay: Duration,
    /// Packets discarded after the reset pulses (reset acknowledgement and
    /// startup advertisements).
    pub reset_drain_frames: usize,
    /// Maximum packets read by the implicit poll in `latest`.
    pub poll_budget: usize,
    /// Report interval used by `enable_report`, in microseconds.
    pub default_interval_us: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reset_delay: Duration::from_millis(500),
            identify_delay: Duration::from_millis(100),
            feature_delay: Duration::from_millis(100),
            reset_drain_frames: 3,
            poll_budget: 100,
            default_interval_us: 50_000,
        }
    }
}
