//! Master roster tools: the organization-wide player list.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use super::common::{email, lenient_id, optional_page, path_segment, positive_id};
use crate::core::api::{ApiClient, Method, RequestOptions};
use crate::domains::tools::{GolfTool, ToolError, ToolOutput};

/// Parameters for [`ListMasterRosterTool`].
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListMasterRosterParams {
    /// Page number for paginated results.
    #[schemars(description = "Page number (1-based) for paginated results")]
    #[serde(default)]
    pub page: Option<i64>,
}

/// Lists players from the master roster.
#[derive(Debug, Clone)]
pub struct ListMasterRosterTool;

#[async_trait]
impl GolfTool for ListMasterRosterTool {
    const NAME: &'static str = "list_master_roster";
    const DESCRIPTION: &'static str =
        "List players from the organization's master roster, optionally paginated.";

    type Params = ListMasterRosterParams;

    #[instrument(skip_all, fields(page = ?params.page))]
    async fn run(
        client: &ApiClient,
        params: ListMasterRosterParams,
    ) -> Result<ToolOutput, ToolError> {
        let page = optional_page(params.page)?;
        let result = client
            .execute(
                Method::GET,
                "master_roster",
                RequestOptions::new().query_opt("page", page),
            )
            .await;
        Ok(ToolOutput::collection(result, "players"))
    }
}

/// Parameters for [`GetMasterRosterMemberTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetMasterRosterMemberParams {
    #[schemars(description = "Email address of the member to look up")]
    pub email: String,
}

/// Looks up a single master roster member by email.
#[derive(Debug, Clone)]
pub struct GetMasterRosterMemberTool;

#[async_trait]
impl GolfTool for GetMasterRosterMemberTool {
    const NAME: &'static str = "get_master_roster_member";
    const DESCRIPTION: &'static str = "Get a master roster member by email address.";

    type Params = GetMasterRosterMemberParams;

    async fn run(
        client: &ApiClient,
        params: GetMasterRosterMemberParams,
    ) -> Result<ToolOutput, ToolError> {
        let email = email(params.email.trim())?;
        let result = client
            .execute(
                Method::GET,
                &format!("master_roster_member/{}", path_segment(email)),
                RequestOptions::new(),
            )
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Parameters for [`GetPlayerEventsTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPlayerEventsParams {
    #[schemars(description = "ID of the player")]
    #[serde(deserialize_with = "lenient_id")]
    pub player_id: i64,
}

/// Lists the events a player is registered in.
#[derive(Debug, Clone)]
pub struct GetPlayerEventsTool;

#[async_trait]
impl GolfTool for GetPlayerEventsTool {
    const NAME: &'static str = "get_player_events";
    const DESCRIPTION: &'static str = "List the events a player is registered in.";

    type Params = GetPlayerEventsParams;

    #[instrument(skip_all, fields(player_id = params.player_id))]
    async fn run(
        client: &ApiClient,
        params: GetPlayerEventsParams,
    ) -> Result<ToolOutput, ToolError> {
        let player_id = positive_id("player_id", params.player_id)?;
        let result = client
            .execute(
                Method::GET,
                &format!("players/{player_id}/events"),
                RequestOptions::new(),
            )
            .await;
        Ok(ToolOutput::collection(result, "events"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::test_support::{MockResponse, MockUpstream, TEST_KEY, test_client};
    use crate::domains::tools::tool::invoke;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_roster_with_page() {
        let upstream = MockUpstream::start(vec![MockResponse::json(
            200,
            json!({ "players": [{ "id": 1, "last_name": "Woods" }] }),
        )])
        .await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<ListMasterRosterTool>(&client, json!({ "page": 2 }))
            .await
            .into_value();
        assert_eq!(result.as_array().map(Vec::len), Some(1));
        assert_eq!(upstream.requests()[0].query.as_deref(), Some("page=2"));
    }

    #[tokio::test]
    async fn test_list_roster_rejects_zero_page() {
        let upstream = MockUpstream::start(vec![]).await;
        let client = test_client(&upstream.base_url);

        let output = invoke::<ListMasterRosterTool>(&client, json!({ "page": 0 })).await;
        assert!(output.is_error());
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_member_by_email() {
        let upstream = MockUpstream::start(vec![MockResponse::json(
            200,
            json!({ "email": "tiger@example.com", "id": 77 }),
        )])
        .await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<GetMasterRosterMemberTool>(
            &client,
            json!({ "email": "tiger@example.com" }),
        )
        .await
        .into_value();
        assert_eq!(result["email"], "tiger@example.com");
        assert_eq!(result["id"], "77");
        assert_eq!(
            upstream.requests()[0].path,
            format!("/api_v2/{TEST_KEY}/master_roster_member/tiger%40example.com")
        );
    }

    #[tokio::test]
    async fn test_member_email_stays_one_path_segment() {
        let upstream = MockUpstream::start(vec![MockResponse::json(200, json!({ "id": 78 }))]).await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<GetMasterRosterMemberTool>(
            &client,
            json!({ "email": "ab#c/d?e@example.com" }),
        )
        .await
        .into_value();
        assert_eq!(result, json!({ "id": "78" }));

        let request = &upstream.requests()[0];
        assert_eq!(
            request.path,
            format!("/api_v2/{TEST_KEY}/master_roster_member/ab%23c%2Fd%3Fe%40example.com")
        );
        assert_eq!(request.query, None);
    }

    #[tokio::test]
    async fn test_player_events_accepts_string_id() {
        let upstream =
            MockUpstream::start(vec![MockResponse::json(200, json!({ "events": [] }))]).await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<GetPlayerEventsTool>(&client, json!({ "player_id": "10" }))
            .await
            .into_value();
        assert_eq!(result, json!([]));
        assert_eq!(
            upstream.requests()[0].path,
            format!("/api_v2/{TEST_KEY}/players/10/events")
        );
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_request() {
        let upstream = MockUpstream::start(vec![]).await;
        let client = test_client(&upstream.base_url);

        let result =
            invoke::<GetMasterRosterMemberTool>(&client, json!({ "email": "not-an-email" }))
                .await
                .into_value();
        assert_eq!(result, json!({ "error": "Validation error: Invalid email format" }));
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_player_events() {
        let upstream = MockUpstream::start(vec![MockResponse::json(
            200,
            json!({ "events": [{ "id": 5 }] }),
        )])
        .await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<GetPlayerEventsTool>(&client, json!({ "player_id": 10 }))
            .await
            .into_value();
        assert_eq!(result, json!([{ "id": "5" }]));
    }

    #[tokio::test]
    async fn test_player_events_invalid_id() {
        let upstream = MockUpstream::start(vec![]).await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<GetPlayerEventsTool>(&client, json!({ "player_id": 0 }))
            .await
            .into_value();
        assert_eq!(result, json!({ "error": "player_id must be a positive integer." }));
    }
}
