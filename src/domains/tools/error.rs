//! Tool-specific error types.

use serde_json::{Value, json};
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// A parameter failed validation before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Render as the `{"error": "..."}` map returned by every tool.
    pub fn to_error_body(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
