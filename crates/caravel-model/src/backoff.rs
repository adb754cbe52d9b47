use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Capped exponential delay schedule.
///
/// `delay(0)` is `first`; each following attempt grows by `factor`, clamped
/// at `max`. A factor of `1.0` gives a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Backoff {
    pub first: Duration,
    pub max: Duration,
    pub factor: f64,
}

impl Backoff {
    pub fn new(first: Duration, max: Duration, factor: f64) -> Self {
        Self { first, max, factor }
    }

    pub fn fixed(interval: Duration) -> Self {
        Self::new(interval, interval, 1.0)
    }

    /// Delay before the attempt numbered `attempt` (zero-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = self.factor.max(1.0);
        let scaled = self.first.as_secs_f64() * factor.powi(attempt.min(i32::MAX as u32) as i32);
        if scaled.is_finite() {
            Duration::from_secs_f64(scaled.min(self.max.as_secs_f64()))
        } else {
            self.max
        }
    }
}

/// Retry policy for idempotent reads (status and log fetches).
///
/// Registration and launch are performed exactly once and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub attempts: u32,
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff: Backoff::new(Duration::from_secs(1), Duration::from_secs(10), 2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_growth_is_capped() {
        let backoff = Backoff::new(Duration::from_secs(5), Duration::from_secs(60), 2.0);
        assert_eq!(backoff.delay(0), Duration::from_secs(5));
        assert_eq!(backoff.delay(1), Duration::from_secs(10));
        assert_eq!(backoff.delay(2), Duration::from_secs(20));
        assert_eq!(backoff.delay(3), Duration::from_secs(40));
        assert_eq!(backoff.delay(4), Duration::from_secs(60));
        assert_eq!(backoff.delay(100), Duration::from_secs(60));
    }

    #[test]
    fn fixed_interval_never_grows() {
        let backoff = Backoff::fixed(Duration::from_secs(60));
        assert_eq!(backoff.delay(0), Duration::from_secs(60));
        assert_eq!(backoff.delay(9), Duration::from_secs(60));
    }

    #[test]
    fn sub_one_factor_is_clamped_to_fixed() {
        let backoff = Backoff::new(Duration::from_secs(2), Duration::from_secs(60), 0.5);
        assert_eq!(backoff.delay(5), Duration::from_secs(2));
    }

    #[test]
    fn default_retry_policy() {
        let retry = RetryPolicy::default();
        assert_eq!(retry.attempts, 3);
        assert_eq!(retry.backoff.delay(0), Duration::from_secs(1));
        assert_eq!(retry.backoff.delay(1), Duration::from_secs(2));
    }
}
