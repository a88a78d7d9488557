use crate::RetryPolicy;

/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt timeout in milliseconds. Bounds one HTTP exchange,
    /// independently of the retry budget that bounds the whole call.
    pub timeout_ms: u64,
    /// Backoff sequence and wall-clock budget for retryable statuses.
    pub retry: RetryPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            retry: RetryPolicy::default(),
        }
    }
}
