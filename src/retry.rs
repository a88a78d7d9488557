use std::time::{Duration, Instant};

use rand::Rng;

/// Time-budgeted exponential backoff policy.
///
/// The policy is bounded by wall-clock time, not attempt count: a call keeps
/// retrying until the next delay would push it past `budget`, however many
/// attempts that represents. Constructed once per client and immutable
/// afterwards; each call gets its own [`RetrySchedule`], so budgets never
/// leak across unrelated requests.
#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Multiplier applied to the delay after each attempt.
    pub growth_factor: f64,
    /// Perturb each delay by a uniform multiplier in `[0.5, 1.0]` so that
    /// independent clients retrying the same dependency do not synchronize.
    pub jitter: bool,
    /// Total wall-clock time allotted to all attempts of one call,
    /// inter-attempt delays included.
    pub budget: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(10),
            growth_factor: 1.5,
            jitter: true,
            budget: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Starts the schedule for one logical call, anchored at the current
    /// instant.
    pub fn schedule(&self) -> RetrySchedule {
        RetrySchedule {
            policy: self.clone(),
            started: Instant::now(),
            attempt: 0,
        }
    }
}

/// Per-call retry state: elapsed time since the first attempt plus the index
/// of the next delay in the exponential sequence.
#[derive(Debug)]
pub struct RetrySchedule {
    policy: RetryPolicy,
    started: Instant,
    attempt: u32,
}

impl RetrySchedule {
    /// Returns the delay to sleep before the next attempt, or `None` once the
    /// budget is exhausted.
    pub fn next_delay(&mut self) -> Option<Duration> {
        let raw = self.unjittered_delay(self.attempt);
        let delay = if self.policy.jitter {
            raw.mul_f64(rand::thread_rng().gen_range(0.5..=1.0))
        } else {
            raw
        };

        if self.started.elapsed() + delay >= self.policy.budget {
            return None;
        }

        self.attempt += 1;
        Some(delay)
    }

    fn unjittered_delay(&self, attempt: u32) -> Duration {
        // Degenerate factors (sub-1.0, NaN) fall back to a flat sequence, and
        // the exponent is capped so the f64 product stays finite.
        let factor = if self.policy.growth_factor.is_finite() {
            self.policy.growth_factor.max(1.0)
        } else {
            1.0
        };
        let scaled = self.policy.initial_delay.as_secs_f64() * factor.powi(attempt.min(64) as i32);
        Duration::try_from_secs_f64(scaled).unwrap_or(self.policy.budget)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::RetryPolicy;

    fn policy(initial_ms: u64, factor: f64, budget_ms: u64) -> RetryPolicy {
        RetryPolicy {
            initial_delay: Duration::from_millis(initial_ms),
            growth_factor: factor,
            jitter: false,
            budget: Duration::from_millis(budget_ms),
        }
    }

    #[test]
    fn delays_grow_exponentially_without_jitter() {
        let mut schedule = policy(10, 2.0, 60_000).schedule();
        assert_eq!(schedule.next_delay(), Some(Duration::from_millis(10)));
        assert_eq!(schedule.next_delay(), Some(Duration::from_millis(20)));
        assert_eq!(schedule.next_delay(), Some(Duration::from_millis(40)));
    }

    #[test]
    fn exhausted_budget_stops_the_schedule() {
        let mut schedule = policy(10, 1.5, 5).schedule();
        assert_eq!(schedule.next_delay(), None);
    }

    #[test]
    fn zero_budget_refuses_any_retry() {
        let mut schedule = policy(1, 1.5, 0).schedule();
        assert_eq!(schedule.next_delay(), None);
    }

    #[test]
    fn jittered_delay_stays_within_half_to_full_range() {
        let mut base = RetryPolicy {
            jitter: true,
            ..policy(100, 1.0, 60_000)
        }
        .schedule();
        for _ in 0..32 {
            let delay = base.next_delay().expect("budget must allow the delay");
            assert!(delay >= Duration::from_millis(50), "delay {delay:?} below jitter floor");
            assert!(delay <= Duration::from_millis(100), "delay {delay:?} above base delay");
        }
    }

    #[test]
    fn sub_unit_growth_factor_does_not_shrink_delays() {
        let mut schedule = policy(10, 0.5, 60_000).schedule();
        assert_eq!(schedule.next_delay(), Some(Duration::from_millis(10)));
        assert_eq!(schedule.next_delay(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn huge_attempt_index_keeps_delay_finite() {
        let mut schedule = policy(10, 10.0, u64::MAX / 2).schedule();
        schedule.attempt = 1_000;
        // Must not panic; the capped exponent saturates to the budget.
        let _ = schedule.next_delay();
    }
}
