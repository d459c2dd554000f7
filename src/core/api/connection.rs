//! Shared, lazily created HTTP connection pool.
//!
//! A single `reqwest::Client` is created on first use and reused for every
//! outbound request. The slot is guarded by an async mutex so concurrent first
//! use cannot build two clients. After [`SharedConnection::close`] the next
//! [`SharedConnection::get`] builds a fresh one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use super::error::{ApiError, ApiResult};

/// Builds a new pooled client. Injectable so tests can count or fail creation.
pub type ClientFactory = Arc<dyn Fn() -> reqwest::Result<reqwest::Client> + Send + Sync>;

/// Connect and total request timeouts applied to every pooled client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            request: Duration::from_secs(30),
        }
    }
}

/// Process-wide connection resource owned by the API client.
pub struct SharedConnection {
    factory: ClientFactory,
    slot: Mutex<Option<reqwest::Client>>,
}

impl SharedConnection {
    /// Create a resource whose clients use the given timeouts and no default headers.
    pub fn new(timeouts: Timeouts) -> Self {
        Self::with_factory(Arc::new(move || {
            reqwest::Client::builder()
                .connect_timeout(timeouts.connect)
                .timeout(timeouts.request)
                .build()
        }))
    }

    /// Create a resource with a custom client factory.
    pub fn with_factory(factory: ClientFactory) -> Self {
        Self {
            factory,
            slot: Mutex::new(None),
        }
    }

    /// Return the live client, creating it if none exists or it was closed.
    pub async fn get(&self) -> ApiResult<reqwest::Client> {
        let mut slot = self.slot.lock().await;
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        debug!("Creating pooled HTTP client");
        let client = (self.factory)()
            .map_err(|e| ApiError::unexpected(format!("Failed to create HTTP client: {e}")))?;
        *slot = Some(client.clone());
        Ok(client)
    }

    /// Drop the current client. The next `get` creates a new one.
    pub async fn close(&self) {
        if self.slot.lock().await.take().is_some() {
            debug!("Closed pooled HTTP client");
        }
    }

    /// Whether a client is currently live.
    pub async fn is_open(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}

impl std::fmt::Debug for SharedConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedConnection").finish_non_exhaustive()
    }
}
