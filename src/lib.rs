//! `accounts-http` is an async HTTP client for the organisation accounts API.
//!
//! The crate wraps the `/v1/organisation/accounts` resource with ergonomic
//! methods:
//! - [`AccountsClient::create`]
//! - [`AccountsClient::fetch`]
//! - [`AccountsClient::list`]
//! - [`AccountsClient::delete`]
//!
//! Every call runs through a single request executor that applies a
//! wall-clock retry budget over transient server failures (see
//! [`RetryPolicy`]).

mod client;
mod decode;
mod error;
mod options;
mod outcome;
mod params;
mod retry;
mod types;

pub use client::AccountsClient;
pub use error::AccountsError;
pub use options::ClientOptions;
pub use params::ListParams;
pub use retry::{RetryPolicy, RetrySchedule};
pub use types::{Account, AccountAttributes, AccountData, AccountList, PageLinks};

pub type Result<T> = std::result::Result<T, AccountsError>;
