use std::time::Duration;

/// Retry discipline for the status poll loop.
///
/// `attempt` is the number of status calls already made. The loop asks
/// `should_retry` after every non-terminal response and, if the answer is
/// yes, waits `delay_before` the next call.
pub trait RetryPolicy {
    fn should_retry(&self, attempt: usize) -> bool;
    fn delay_before(&self, attempt: usize) -> Duration;
}

/// Fixed attempt ceiling with a fixed delay between attempts.
///
/// The reference discipline of the registration authority is 10 attempts
/// spaced one second apart, which is what [`Default`] returns.
#[derive(Clone, Debug)]
pub struct FixedInterval {
    pub max_attempts: usize,
    pub interval: Duration,
}

impl Default for FixedInterval {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            interval: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy for FixedInterval {
    fn should_retry(&self, attempt: usize) -> bool {
        attempt < self.max_attempts
    }

    fn delay_before(&self, _attempt: usize) -> Duration {
        self.interval
    }
}
