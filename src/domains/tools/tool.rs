//! Shared tool plumbing.
//!
//! Every Golf Genius tool implements [`GolfTool`]: a name, a description, a
//! params struct, and an async `run`. The default methods derive the rmcp
//! metadata, the STDIO route and the HTTP handler from those four items.

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use super::error::ToolError;
use crate::core::api::{ApiClient, ApiResult, Envelope};

/// What a tool hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Normalized JSON: a collection, a map, or `{"error": ...}`.
    Json(Value),
    /// Markup passed through verbatim (HTML/XML results).
    Text(String),
}

impl ToolOutput {
    /// Unwrap the collection under `key`, degrading raised API errors to an error map.
    pub fn collection(result: ApiResult<Envelope>, key: &str) -> Self {
        match result {
            Ok(envelope) => Self::Json(envelope.extract(key)),
            Err(e) => Self::degraded(e.to_error_body()),
        }
    }

    /// Return the whole body, degrading raised API errors to an error map.
    pub fn entity(result: ApiResult<Envelope>) -> Self {
        match result {
            Ok(envelope) => Self::Json(envelope.into_value()),
            Err(e) => Self::degraded(e.to_error_body()),
        }
    }

    fn degraded(body: Value) -> Self {
        warn!("API call failed: {}", body["error"]);
        Self::Json(body)
    }

    /// Whether this output is an `{"error": ...}` map.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Json(Value::Object(map)) if map.contains_key("error"))
    }

    /// The output as a JSON value; markup becomes a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }

    /// Convert into an MCP tool result.
    pub fn into_call_result(self) -> CallToolResult {
        let is_error = self.is_error();
        let text = match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text,
        };

        if is_error {
            CallToolResult::error(vec![Content::text(text)])
        } else {
            CallToolResult::success(vec![Content::text(text)])
        }
    }
}

impl From<ToolError> for ToolOutput {
    fn from(err: ToolError) -> Self {
        warn!("Tool validation failed: {}", err);
        Self::Json(err.to_error_body())
    }
}

/// A Golf Genius tool exposed over MCP.
#[async_trait]
pub trait GolfTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Parameters accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Validate `params` and perform the call.
    async fn run(client: &ApiClient, params: Self::Params) -> Result<ToolOutput, ToolError>;

    /// Run the tool, rendering validation failures as an error map.
    async fn call(client: &ApiClient, params: Self::Params) -> ToolOutput {
        Self::run(client, params)
            .await
            .unwrap_or_else(ToolOutput::from)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: Self::Params = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                info!("Tool called: {}", Self::NAME);
                Ok(Self::call(&client, params).await.into_call_result())
            }
            .boxed()
        })
    }

    /// HTTP handler for this tool (for HTTP transport).
    async fn http_handler(arguments: Value, client: Arc<ApiClient>) -> Result<Value, String> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let params: Self::Params = serde_json::from_value(arguments)
            .map_err(|e| format!("Invalid arguments for {}: {}", Self::NAME, e))?;

        info!("Tool called over HTTP: {}", Self::NAME);
        let result = Self::call(&client, params).await.into_call_result();
        serde_json::to_value(result).map_err(|e| e.to_string())
    }
}

/// Deserialize `args` the way the router does and call `T`.
#[cfg(test)]
pub(crate) async fn invoke<T: GolfTool>(client: &ApiClient, args: Value) -> ToolOutput {
    let params: T::Params = serde_json::from_value(args).expect("valid tool arguments");
    T::call(client, params).await
}
