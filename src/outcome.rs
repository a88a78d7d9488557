use reqwest::StatusCode;

/// Classification of one response status, consumed by the retry loop.
///
/// Keeping the mapping here leaves the loop itself free of status-code
/// literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StatusOutcome {
    /// 200 or 201: read the full body and return it.
    Body,
    /// 204: success with nothing to read.
    Empty,
    /// Rate limiting or transient server-side unavailability; a later attempt
    /// may succeed.
    Retryable,
    /// Any other terminal status; retrying cannot change the outcome.
    Fatal,
}

impl StatusOutcome {
    pub(crate) fn classify(status: StatusCode) -> Self {
        match status {
            StatusCode::OK | StatusCode::CREATED => Self::Body,
            StatusCode::NO_CONTENT => Self::Empty,
            StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => Self::Retryable,
            _ => Self::Fatal,
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::StatusOutcome;

    #[test]
    fn success_statuses_carry_a_body() {
        assert_eq!(StatusOutcome::classify(StatusCode::OK), StatusOutcome::Body);
        assert_eq!(
            StatusOutcome::classify(StatusCode::CREATED),
            StatusOutcome::Body
        );
    }

    #[test]
    fn no_content_is_empty_success() {
        assert_eq!(
            StatusOutcome::classify(StatusCode::NO_CONTENT),
            StatusOutcome::Empty
        );
    }

    #[test]
    fn transient_statuses_are_retryable() {
        for status in [429u16, 500, 503, 504] {
            let status = StatusCode::from_u16(status).expect("valid status");
            assert_eq!(StatusOutcome::classify(status), StatusOutcome::Retryable);
        }
    }

    #[test]
    fn everything_else_is_fatal() {
        for status in [400u16, 401, 403, 404, 409, 418, 502] {
            let status = StatusCode::from_u16(status).expect("valid status");
            assert_eq!(StatusOutcome::classify(status), StatusOutcome::Fatal);
        }
    }
}
