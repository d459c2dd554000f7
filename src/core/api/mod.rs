//! Golf Genius API request/response pipeline.
//!
//! - `error`: failure taxonomy (raised vs returned-as-data kinds)
//! - `connection`: lazily created, shared `reqwest::Client`
//! - `auth`: path-key vs bearer routing of the credential
//! - `client`: request executor with rate-limit retry and raw passthrough
//! - `envelope`: response shape normalization and ID sanitization

mod auth;
mod client;
mod connection;
mod envelope;
mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{AuthMode, AuthRouter};
pub use client::{ApiClient, RequestOptions, RetryPolicy};
pub use connection::{ClientFactory, SharedConnection, Timeouts};
pub use envelope::{Envelope, sanitize_ids};
pub use error::{ApiError, ApiResult};
pub use reqwest::Method;
