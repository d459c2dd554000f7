//! MCP Server implementation and lifecycle management.
//!
//! The server only advertises the tools capability. Tools live in
//! `domains/tools/definitions/` and share one [`ApiClient`]; the ToolRouter is
//! built in `domains/tools/router.rs`, so adding a tool does not touch this
//! file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::api::ApiClient;
use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Authenticated Golf Genius client shared by every tool.
    client: Arc<ApiClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server around an already authenticated client.
    pub fn new(config: Config, client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config: Arc::new(config),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The shared API client.
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Release the pooled upstream connection.
    pub async fn shutdown(&self) {
        self.client.connection().close().await;
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.client.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Golf Genius API server. Tools list and manage seasons, events, rosters, \
                 rounds, tee sheets, divisions, pairings and tournament results. \
                 Run health_check first to verify the API key."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
