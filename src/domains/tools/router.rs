//! Tool Router - builds the rmcp ToolRouter for the STDIO transport.
//!
//! Each tool creates its own route from its [`GolfTool`] implementation; all
//! routes share one [`ApiClient`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::GolfTool;
use super::definitions::*;
use crate::core::api::ApiClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ApiClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(HealthCheckTool::create_route(client.clone()))
        // Organization
        .with_route(ListSeasonsTool::create_route(client.clone()))
        .with_route(ListCategoriesTool::create_route(client.clone()))
        .with_route(ListDirectoriesTool::create_route(client.clone()))
        // Master roster
        .with_route(ListMasterRosterTool::create_route(client.clone()))
        .with_route(GetMasterRosterMemberTool::create_route(client.clone()))
        .with_route(GetPlayerEventsTool::create_route(client.clone()))
        // Events
        .with_route(ListEventsTool::create_route(client.clone()))
        .with_route(GetEventDetailsTool::create_route(client.clone()))
        .with_route(CreateEventTool::create_route(client.clone()))
        .with_route(UpdateEventTool::create_route(client.clone()))
        .with_route(DeleteEventTool::create_route(client.clone()))
        .with_route(GetEventCoursesTool::create_route(client.clone()))
        // Members
        .with_route(GetEventRosterTool::create_route(client.clone()))
        .with_route(RegisterMemberToEventTool::create_route(client.clone()))
        .with_route(UpdateMemberInEventTool::create_route(client.clone()))
        .with_route(DeleteMemberFromEventTool::create_route(client.clone()))
        // Rounds
        .with_route(ListEventRoundsTool::create_route(client.clone()))
        .with_route(CreateRoundTool::create_route(client.clone()))
        .with_route(UpdateRoundTool::create_route(client.clone()))
        .with_route(DeleteRoundTool::create_route(client.clone()))
        .with_route(GetRoundTeeSheetTool::create_route(client.clone()))
        .with_route(GetRoundTournamentsTool::create_route(client.clone()))
        .with_route(GetTournamentResultsTool::create_route(client.clone()))
        // Divisions
        .with_route(GetEventDivisionsTool::create_route(client.clone()))
        .with_route(CreateDivisionTool::create_route(client.clone()))
        .with_route(UpdateDivisionTool::create_route(client.clone()))
        .with_route(DeleteDivisionTool::create_route(client.clone()))
        // Pairings
        .with_route(CreatePairingTool::create_route(client.clone()))
        .with_route(UpdatePairingTool::create_route(client.clone()))
        .with_route(DeletePairingTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::api::test_support::test_client;

    struct TestServer {}

    fn client() -> Arc<ApiClient> {
        Arc::new(test_client("http://127.0.0.1:9"))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 31);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"health_check"));
        assert!(names.contains(&"list_events"));
        assert!(names.contains(&"get_tournament_results"));
        assert!(names.contains(&"register_member_to_event"));
        assert!(names.contains(&"delete_pairing"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_tools = ToolRegistry::get_all_tools();

        let router: ToolRouter<TestServer> = build_tool_router(client());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_tools.len(), router_names.len());
        for tool in &registry_tools {
            let name = tool.name.as_ref();
            assert!(router_names.contains(&name), "router is missing {name}");
        }
    }

    #[test]
    fn test_tool_schemas_are_objects() {
        let router: ToolRouter<TestServer> = build_tool_router(client());
        for tool in router.list_all() {
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{} schema",
                tool.name
            );
        }
    }
}
