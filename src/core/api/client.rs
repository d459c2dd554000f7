//! Request executor for the Golf Genius API.
//!
//! One call = resolve the target through the [`AuthRouter`], send through the
//! [`SharedConnection`], map the status into an [`ApiError`] or decode the
//! body into an [`Envelope`]. Rate-limited calls are retried with exponential
//! backoff; every other failure kind is returned without retrying.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::auth::AuthRouter;
use super::connection::SharedConnection;
use super::envelope::Envelope;
use super::error::{ApiError, ApiResult};
use crate::core::config::{ApiConfig, RetryConfig};

/// Optional parts of a request descriptor.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query string parameters, in order.
    pub query: Vec<(String, String)>,
    /// JSON body for write requests.
    pub json: Option<Value>,
    /// Extra headers. Auth headers always win over these.
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter when `value` is present.
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Set the JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Replace the caller-supplied headers.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Rate-limit retry schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    /// Delay before attempt `attempt + 1`, where `attempt` starts at 1.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
        }
    }
}

/// Authenticated Golf Genius API client.
#[derive(Debug)]
pub struct ApiClient {
    connection: SharedConnection,
    router: AuthRouter,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(connection: SharedConnection, router: AuthRouter, retry: RetryPolicy) -> Self {
        Self {
            connection,
            router,
            retry,
        }
    }

    /// Build a client from configuration and the API key.
    pub fn from_config(config: &ApiConfig, api_key: &str) -> Self {
        Self::new(
            SharedConnection::new(config.timeouts()),
            AuthRouter::new(&config.base_url, &config.api_prefix, api_key, config.auth_mode),
            RetryPolicy::from(&config.retry),
        )
    }

    /// The shared connection resource.
    pub fn connection(&self) -> &SharedConnection {
        &self.connection
    }

    /// Execute a JSON request.
    ///
    /// `Err` carries only the raised kinds (rate limited after the last
    /// attempt, authentication, not found). Every other failure is returned as
    /// `Ok(Envelope::ErrorBody(..))`.
    pub async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<Envelope> {
        let mut attempt = 1;
        loop {
            match self.send_once(&method, endpoint, &options).await {
                Ok(envelope) => return Ok(envelope),
                Err(e) if e.is_retryable() && attempt < self.retry.max_attempts => {
                    let delay = self.retry.backoff(attempt);
                    warn!(
                        "Rate limited on {} {} (attempt {}/{}), retrying in {:?}",
                        method, endpoint, attempt, self.retry.max_attempts, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) if e.is_raised() => return Err(e),
                Err(e) => return Ok(Envelope::error(e.to_string())),
            }
        }
    }

    /// Execute a request and return the body as text (HTML/XML results).
    ///
    /// Never fails: any error collapses into `"Error fetching response: ..."`.
    pub async fn execute_raw(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> String {
        match self.fetch_text(&method, endpoint, &options).await {
            Ok(text) => text,
            Err(e) => {
                error!("Raw request error on {} {}: {}", method, endpoint, e);
                format!("Error fetching response: {e}")
            }
        }
    }

    /// Issue one call and classify the outcome.
    async fn send_once(
        &self,
        method: &Method,
        endpoint: &str,
        options: &RequestOptions,
    ) -> ApiResult<Envelope> {
        info!("API {} {}", method, endpoint);
        let response = self.send(method, endpoint, options).await?;
        let status = response.status();

        if let Some(err) = classify_status(status, response.headers(), endpoint) {
            match &err {
                ApiError::RateLimited { retry_after } => warn!(
                    "Rate limited on {} {} (retry-after: {:?})",
                    method, endpoint, retry_after
                ),
                ApiError::Authentication { .. } => {
                    error!("Authentication failure on {} {}", method, endpoint)
                }
                _ => warn!("Not found: {} {}", method, endpoint),
            }
            return Err(err);
        }

        let body = response.text().await?;
        if !status.is_success() {
            error!(
                "HTTP error {} on {} {}: {}",
                status.as_u16(),
                method,
                endpoint,
                body
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Response from {} {}: {} bytes", method, endpoint, body.len());
        Envelope::from_body(&body).map_err(|e| ApiError::unexpected(format!("invalid JSON: {e}")))
    }

    async fn fetch_text(
        &self,
        method: &Method,
        endpoint: &str,
        options: &RequestOptions,
    ) -> ApiResult<String> {
        info!("API {} {} (raw)", method, endpoint);
        let response = self.send(method, endpoint, options).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: status.canonical_reason().unwrap_or("").to_string(),
            });
        }
        Ok(response.text().await?)
    }

    async fn send(
        &self,
        method: &Method,
        endpoint: &str,
        options: &RequestOptions,
    ) -> ApiResult<reqwest::Response> {
        let target = self.router.build_target(method, endpoint)?;

        let mut headers = options.headers.clone();
        if self.router.needs_auth_headers(method) {
            headers.extend(self.router.write_headers()?);
        }

        let client = self.connection.get().await?;
        let mut request = client.request(method.clone(), target).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.json {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }
}

/// Map the statuses the executor raises on.
fn classify_status(status: StatusCode, headers: &HeaderMap, endpoint: &str) -> Option<ApiError> {
    match status {
        StatusCode::TOO_MANY_REQUESTS => Some(ApiError::RateLimited {
            retry_after: retry_after(headers),
        }),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Some(ApiError::authentication(status.as_u16()))
        }
        StatusCode::NOT_FOUND => Some(ApiError::not_found(endpoint)),
        _ => None,
    }
}

/// Parse a `Retry-After` header given in seconds.
fn retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
