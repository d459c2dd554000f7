//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::GolfTool;
use super::definitions::*;
use crate::core::api::ApiClient;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: Arc<ApiClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Backs `tools/list` on the HTTP transport.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            HealthCheckTool::to_tool(),
            ListSeasonsTool::to_tool(),
            ListCategoriesTool::to_tool(),
            ListDirectoriesTool::to_tool(),
            ListMasterRosterTool::to_tool(),
            GetMasterRosterMemberTool::to_tool(),
            GetPlayerEventsTool::to_tool(),
            ListEventsTool::to_tool(),
            GetEventDetailsTool::to_tool(),
            CreateEventTool::to_tool(),
            UpdateEventTool::to_tool(),
            DeleteEventTool::to_tool(),
            GetEventCoursesTool::to_tool(),
            GetEventRosterTool::to_tool(),
            RegisterMemberToEventTool::to_tool(),
            UpdateMemberInEventTool::to_tool(),
            DeleteMemberFromEventTool::to_tool(),
            ListEventRoundsTool::to_tool(),
            CreateRoundTool::to_tool(),
            UpdateRoundTool::to_tool(),
            DeleteRoundTool::to_tool(),
            GetRoundTeeSheetTool::to_tool(),
            GetRoundTournamentsTool::to_tool(),
            GetTournamentResultsTool::to_tool(),
            GetEventDivisionsTool::to_tool(),
            CreateDivisionTool::to_tool(),
            UpdateDivisionTool::to_tool(),
            DeleteDivisionTool::to_tool(),
            CreatePairingTool::to_tool(),
            UpdatePairingTool::to_tool(),
            DeletePairingTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let client = self.client.clone();
        match name {
            HealthCheckTool::NAME => HealthCheckTool::http_handler(arguments, client).await,
            ListSeasonsTool::NAME => ListSeasonsTool::http_handler(arguments, client).await,
            ListCategoriesTool::NAME => ListCategoriesTool::http_handler(arguments, client).await,
            ListDirectoriesTool::NAME => {
                ListDirectoriesTool::http_handler(arguments, client).await
            }
            ListMasterRosterTool::NAME => {
                ListMasterRosterTool::http_handler(arguments, client).await
            }
            GetMasterRosterMemberTool::NAME => {
                GetMasterRosterMemberTool::http_handler(arguments, client).await
            }
            GetPlayerEventsTool::NAME => {
                GetPlayerEventsTool::http_handler(arguments, client).await
            }
            ListEventsTool::NAME => ListEventsTool::http_handler(arguments, client).await,
            GetEventDetailsTool::NAME => {
                GetEventDetailsTool::http_handler(arguments, client).await
            }
            CreateEventTool::NAME => CreateEventTool::http_handler(arguments, client).await,
            UpdateEventTool::NAME => UpdateEventTool::http_handler(arguments, client).await,
            DeleteEventTool::NAME => DeleteEventTool::http_handler(arguments, client).await,
            GetEventCoursesTool::NAME => {
                GetEventCoursesTool::http_handler(arguments, client).await
            }
            GetEventRosterTool::NAME => GetEventRosterTool::http_handler(arguments, client).await,
            RegisterMemberToEventTool::NAME => {
                RegisterMemberToEventTool::http_handler(arguments, client).await
            }
            UpdateMemberInEventTool::NAME => {
                UpdateMemberInEventTool::http_handler(arguments, client).await
            }
            DeleteMemberFromEventTool::NAME => {
                DeleteMemberFromEventTool::http_handler(arguments, client).await
            }
            ListEventRoundsTool::NAME => {
                ListEventRoundsTool::http_handler(arguments, client).await
            }
            CreateRoundTool::NAME => CreateRoundTool::http_handler(arguments, client).await,
            UpdateRoundTool::NAME => UpdateRoundTool::http_handler(arguments, client).await,
            DeleteRoundTool::NAME => DeleteRoundTool::http_handler(arguments, client).await,
            GetRoundTeeSheetTool::NAME => {
                GetRoundTeeSheetTool::http_handler(arguments, client).await
            }
            GetRoundTournamentsTool::NAME => {
                GetRoundTournamentsTool::http_handler(arguments, client).await
            }
            GetTournamentResultsTool::NAME => {
                GetTournamentResultsTool::http_handler(arguments, client).await
            }
            GetEventDivisionsTool::NAME => {
                GetEventDivisionsTool::http_handler(arguments, client).await
            }
            CreateDivisionTool::NAME => CreateDivisionTool::http_handler(arguments, client).await,
            UpdateDivisionTool::NAME => UpdateDivisionTool::http_handler(arguments, client).await,
            DeleteDivisionTool::NAME => DeleteDivisionTool::http_handler(arguments, client).await,
            CreatePairingTool::NAME => CreatePairingTool::http_handler(arguments, client).await,
            UpdatePairingTool::NAME => UpdatePairingTool::http_handler(arguments, client).await,
            DeletePairingTool::NAME => DeletePairingTool::http_handler(arguments, client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(super::ToolError::not_found(name).to_string())
            }
        }
    }
}
