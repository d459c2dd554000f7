//! Golf Genius MCP Server Library
//!
//! Exposes the Golf Genius REST API as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server, transports, and the
//!   `api` request/response pipeline (auth routing, shared connection,
//!   rate-limit retry, response normalization)
//! - **domains**: the `tools` domain, one MCP tool per Golf Genius operation
//!
//! # Example
//!
//! ```rust,no_run
//! use golf_genius_mcp_server::core::{ApiClient, Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let client = ApiClient::from_config(&config.api, config.require_api_key()?);
//!     let server = McpServer::new(config, client);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
