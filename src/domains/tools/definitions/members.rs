//! Event roster and membership tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::common::{
    Payload, email, lenient_id, optional_page, optional_text, positive_id, required_text,
};
use crate::core::api::{ApiClient, Method, RequestOptions};
use crate::domains::tools::{GolfTool, ToolError, ToolOutput};

/// Parameters for [`GetEventRosterTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetEventRosterParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "Page number (1-based) for paginated results")]
    #[serde(default)]
    pub page: Option<i64>,
}

/// Lists the players registered in an event.
#[derive(Debug, Clone)]
pub struct GetEventRosterTool;

#[async_trait]
impl GolfTool for GetEventRosterTool {
    const NAME: &'static str = "get_event_roster";
    const DESCRIPTION: &'static str = "Get the roster (registered players) of an event.";

    type Params = GetEventRosterParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(
        client: &ApiClient,
        params: GetEventRosterParams,
    ) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let page = optional_page(params.page)?;
        let result = client
            .execute(
                Method::GET,
                &format!("events/{event_id}/roster"),
                RequestOptions::new().query_opt("page", page),
            )
            .await;
        Ok(ToolOutput::collection(result, "roster"))
    }
}

/// Parameters for [`RegisterMemberToEventTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegisterMemberParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "External identifier of the member (required)")]
    pub external_id: String,

    #[schemars(description = "Member's last name (required)")]
    pub last_name: String,

    #[schemars(description = "Member's first name")]
    #[serde(default)]
    pub first_name: Option<String>,

    #[schemars(description = "Member's email address")]
    #[serde(default)]
    pub email: Option<String>,

    #[schemars(description = "Rounds the member is registered for")]
    #[serde(default)]
    pub rounds: Option<Vec<Value>>,
}

/// Registers a member to an event.
#[derive(Debug, Clone)]
pub struct RegisterMemberToEventTool;

#[async_trait]
impl GolfTool for RegisterMemberToEventTool {
    const NAME: &'static str = "register_member_to_event";
    const DESCRIPTION: &'static str = "Register a member to an event.";

    type Params = RegisterMemberParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(
        client: &ApiClient,
        params: RegisterMemberParams,
    ) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let external_id = required_text("external_id", &params.external_id, None)?;
        let last_name = required_text("last_name", &params.last_name, None)?;
        let email = params.email.as_deref().map(email).transpose()?;

        let body = Payload::new()
            .set("external_id", external_id)
            .set("last_name", last_name.as_str())
            .set_opt("first_name", params.first_name)
            .set_opt("email", email)
            .set_opt("rounds", params.rounds)
            .into_value();

        info!("Registering member {} to event {}", last_name, event_id);
        let result = client
            .execute(
                Method::POST,
                &format!("events/{event_id}/members"),
                RequestOptions::new().json(body),
            )
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Parameters for [`UpdateMemberInEventTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateMemberParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the member within the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub member_id: i64,

    #[schemars(description = "New external identifier")]
    #[serde(default)]
    pub external_id: Option<String>,

    #[schemars(description = "New last name")]
    #[serde(default)]
    pub last_name: Option<String>,

    #[schemars(description = "New first name")]
    #[serde(default)]
    pub first_name: Option<String>,

    #[schemars(description = "New email address")]
    #[serde(default)]
    pub email: Option<String>,

    #[schemars(description = "Replacement round registrations")]
    #[serde(default)]
    pub rounds: Option<Vec<Value>>,
}

/// Updates an event member.
#[derive(Debug, Clone)]
pub struct UpdateMemberInEventTool;

#[async_trait]
impl GolfTool for UpdateMemberInEventTool {
    const NAME: &'static str = "update_member_in_event";
    const DESCRIPTION: &'static str =
        "Update a member registered in an event. Only the supplied fields are changed.";

    type Params = UpdateMemberParams;

    #[instrument(skip_all, fields(event_id = params.event_id, member_id = params.member_id))]
    async fn run(client: &ApiClient, params: UpdateMemberParams) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let member_id = positive_id("member_id", params.member_id)?;
        let external_id = optional_text("external_id", params.external_id, None)?;
        let last_name = optional_text("last_name", params.last_name, None)?;
        let email = params.email.as_deref().map(email).transpose()?;

        let body = Payload::new()
            .set_opt("external_id", external_id)
            .set_opt("last_name", last_name)
            .set_opt("first_name", params.first_name)
            .set_opt("email", email)
            .set_opt("rounds", params.rounds)
            .into_update()?;

        info!("Updating member {} in event {}", member_id, event_id);
        let result = client
            .execute(
                Method::PUT,
                &format!("events/{event_id}/members/{member_id}"),
                RequestOptions::new().json(body),
            )
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Parameters for [`DeleteMemberFromEventTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteMemberParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the member to remove")]
    #[serde(deserialize_with = "lenient_id")]
    pub member_id: i64,
}

/// Removes a member from an event.
#[derive(Debug, Clone)]
pub struct DeleteMemberFromEventTool;

#[async_trait]
impl GolfTool for DeleteMemberFromEventTool {
    const NAME: &'static str = "delete_member_from_event";
    const DESCRIPTION: &'static str = "Remove a member from an event.";

    type Params = DeleteMemberParams;

    #[instrument(skip_all, fields(event_id = params.event_id, member_id = params.member_id))]
    async fn run(client: &ApiClient, params: DeleteMemberParams) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let member_id = positive_id("member_id", params.member_id)?;

        info!("Removing member {} from event {}", member_id, event_id);
        let result = client
            .execute(
                Method::DELETE,
                &format!("events/{event_id}/members/{member_id}"),
                RequestOptions::new(),
            )
            .await;
        Ok(ToolOutput::entity(result))
    }
}
