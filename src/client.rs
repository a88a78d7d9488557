use std::time::Duration;

use reqwest::{header, Method};
use tokio::time::sleep;

use crate::{
    decode::{decode_body, encode_body},
    outcome::StatusOutcome,
    AccountData, AccountList, AccountsError, ClientOptions, ListParams, Result,
};

const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";

/// HTTP client for the organisation accounts API.
///
/// The client is cheap to clone and safe to share across concurrent callers:
/// nothing is mutated after construction, and each call owns its own request
/// and response buffer.
#[derive(Clone, Debug)]
pub struct AccountsClient {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl AccountsClient {
    /// Creates a client for the API rooted at `base_url`, with default
    /// timeout and retry settings.
    ///
    /// A trailing slash on the base URL is trimmed so that paths join
    /// cleanly.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use accounts_http::AccountsClient;
    ///
    /// let api = AccountsClient::new("https://api.example.com");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
            options: ClientOptions::default(),
        }
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Registers an existing bank account or creates a new one.
    pub async fn create(&self, account: &AccountData) -> Result<AccountData> {
        let payload = encode_body(account)?;
        let body = self
            .execute(Method::POST, ACCOUNTS_PATH, &[], Some(payload))
            .await?;
        decode_body(body)
    }

    /// Gets a single account by ID.
    pub async fn fetch(&self, account_id: &str) -> Result<AccountData> {
        let path = format!("{ACCOUNTS_PATH}/{account_id}");
        let body = self.execute(Method::GET, &path, &[], None).await?;
        decode_body(body)
    }

    /// Lists accounts, optionally restricted to one page.
    pub async fn list(&self, params: ListParams) -> Result<AccountList> {
        let body = self
            .execute(Method::GET, ACCOUNTS_PATH, &params.to_pairs(), None)
            .await?;
        decode_body(body)
    }

    /// Deletes an account at the given record version.
    pub async fn delete(&self, account_id: &str, version: u64) -> Result<()> {
        let path = format!("{ACCOUNTS_PATH}/{account_id}");
        let query = [("version", version.to_string())];
        self.execute(Method::DELETE, &path, &query, None).await?;
        Ok(())
    }

    /// Performs one API request under the retry policy and classifies the
    /// outcome.
    ///
    /// Returns the raw response body for 200/201, `None` for 204. Statuses
    /// 429/500/503/504 are retried until the policy's wall-clock budget runs
    /// out; any other status is fatal and returned immediately. Transport
    /// failures are never retried.
    ///
    /// The request is rebuilt from owned parts on every attempt, so a body is
    /// re-sent intact on retries instead of reusing an already consumed
    /// stream. Dropping the returned future aborts the in-flight attempt and
    /// the retry loop with it.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<Option<Vec<u8>>> {
        let url = format!("{}{}", self.base_url, path);
        let mut schedule = self.options.retry.schedule();

        loop {
            let mut request = self
                .http
                .request(method.clone(), &url)
                .timeout(Duration::from_millis(self.options.timeout_ms));
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(body) = &body {
                request = request
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }

            let response = request.send().await.map_err(AccountsError::Transport)?;
            let status = response.status();

            match StatusOutcome::classify(status) {
                StatusOutcome::Body => {
                    let bytes = response.bytes().await.map_err(AccountsError::Transport)?;
                    return Ok(Some(bytes.to_vec()));
                }
                StatusOutcome::Empty => return Ok(None),
                StatusOutcome::Retryable => match schedule.next_delay() {
                    Some(delay) => {
                        tracing::warn!(
                            status = status.as_u16(),
                            delay_ms = delay.as_millis() as u64,
                            "retryable response status, retrying request"
                        );
                        sleep(delay).await;
                    }
                    None => {
                        return Err(AccountsError::RetryTimeout {
                            last_status: status.as_u16(),
                        })
                    }
                },
                StatusOutcome::Fatal => {
                    return Err(AccountsError::Status {
                        status: status.as_u16(),
                    })
                }
            }
        }
    }
}
