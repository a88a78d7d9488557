/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum AccountsError {
    /// Network or request execution error from `reqwest`.
    ///
    /// Surfaced as soon as the attempt fails; transport failures are never
    /// retried.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Terminal non-success HTTP status outside the retryable set.
    #[error("status code not ok: {status}")]
    Status { status: u16 },
    /// Retry budget elapsed while the server kept answering with retryable
    /// statuses.
    #[error("retry timeout: budget exhausted, last status {last_status}")]
    RetryTimeout { last_status: u16 },
    /// Response body failed to encode or parse against the expected schema.
    #[error("decode error: {0}")]
    Decode(String),
}

impl AccountsError {
    /// Numeric HTTP status carried by the error, where one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::RetryTimeout { last_status } => Some(*last_status),
            Self::Transport(err) => err.status().map(|code| code.as_u16()),
            Self::Decode(_) => None,
        }
    }
}
