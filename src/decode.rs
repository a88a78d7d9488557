use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{AccountsError, Result};

/// Serializes a request payload to its JSON wire form.
pub(crate) fn encode_body<T: Serialize>(payload: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(payload)
        .map_err(|err| AccountsError::Decode(format!("invalid request payload: {err}")))
}

/// Deserializes a response body the executor returned for a 200/201 status.
///
/// A `None` body means the server answered 204 where a record was expected;
/// that is a shape violation, not a transport problem.
pub(crate) fn decode_body<T: DeserializeOwned>(body: Option<Vec<u8>>) -> Result<T> {
    let body = body.ok_or_else(|| {
        AccountsError::Decode("expected a response body, got an empty response".to_owned())
    })?;
    serde_json::from_slice(&body)
        .map_err(|err| AccountsError::Decode(format!("invalid response JSON: {err}")))
}
