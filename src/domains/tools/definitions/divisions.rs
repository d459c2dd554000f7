//! Division (flight) tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{Payload, lenient_id, optional_text, positive_id, required_text};
use super::events::EventIdParams;
use crate::core::api::{ApiClient, Method, RequestOptions};
use crate::domains::tools::{GolfTool, ToolError, ToolOutput};

fn division_endpoint(event_id: i64, division_id: i64) -> Result<String, ToolError> {
    let event_id = positive_id("event_id", event_id)?;
    let division_id = positive_id("division_id", division_id)?;
    Ok(format!("events/{event_id}/divisions/{division_id}"))
}

/// Lists the divisions of an event.
#[derive(Debug, Clone)]
pub struct GetEventDivisionsTool;

#[async_trait]
impl GolfTool for GetEventDivisionsTool {
    const NAME: &'static str = "get_event_divisions";
    const DESCRIPTION: &'static str = "List the divisions (flights) of an event.";

    type Params = EventIdParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(client: &ApiClient, params: EventIdParams) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let result = client
            .execute(
                Method::GET,
                &format!("events/{event_id}/divisions"),
                RequestOptions::new(),
            )
            .await;
        Ok(ToolOutput::collection(result, "divisions"))
    }
}

/// Parameters for [`CreateDivisionTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDivisionParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "Name of the division")]
    pub name: String,
}

/// Adds a division to an event.
#[derive(Debug, Clone)]
pub struct CreateDivisionTool;

#[async_trait]
impl GolfTool for CreateDivisionTool {
    const NAME: &'static str = "create_division";
    const DESCRIPTION: &'static str = "Create a division (flight) in an event.";

    type Params = CreateDivisionParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(
        client: &ApiClient,
        params: CreateDivisionParams,
    ) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let name = required_text("name", &params.name, None)?;

        info!("Creating division {} in event {}", name, event_id);
        let body = Payload::new().set("name", name).into_value();
        let result = client
            .execute(
                Method::POST,
                &format!("events/{event_id}/divisions"),
                RequestOptions::new().json(body),
            )
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Parameters for [`UpdateDivisionTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateDivisionParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the division to update")]
    #[serde(deserialize_with = "lenient_id")]
    pub division_id: i64,

    #[schemars(description = "New name of the division")]
    #[serde(default)]
    pub name: Option<String>,
}

/// Renames a division.
#[derive(Debug, Clone)]
pub struct UpdateDivisionTool;

#[async_trait]
impl GolfTool for UpdateDivisionTool {
    const NAME: &'static str = "update_division";
    const DESCRIPTION: &'static str = "Update a division (flight) of an event.";

    type Params = UpdateDivisionParams;

    #[instrument(skip_all, fields(event_id = params.event_id, division_id = params.division_id))]
    async fn run(
        client: &ApiClient,
        params: UpdateDivisionParams,
    ) -> Result<ToolOutput, ToolError> {
        let endpoint = division_endpoint(params.event_id, params.division_id)?;
        let name = optional_text("name", params.name, None)?;
        let body = Payload::new().set_opt("name", name).into_update()?;

        info!("Updating {}", endpoint);
        let result = client
            .execute(Method::PUT, &endpoint, RequestOptions::new().json(body))
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Parameters for [`DeleteDivisionTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteDivisionParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the division to delete")]
    #[serde(deserialize_with = "lenient_id")]
    pub division_id: i64,
}

/// Deletes a division.
#[derive(Debug, Clone)]
pub struct DeleteDivisionTool;

#[async_trait]
impl GolfTool for DeleteDivisionTool {
    const NAME: &'static str = "delete_division";
    const DESCRIPTION: &'static str = "Delete a division (flight) from an event.";

    type Params = DeleteDivisionParams;

    #[instrument(skip_all, fields(event_id = params.event_id, division_id = params.division_id))]
    async fn run(
        client: &ApiClient,
        params: DeleteDivisionParams,
    ) -> Result<ToolOutput, ToolError> {
        let endpoint = division_endpoint(params.event_id, params.division_id)?;
        info!("Deleting {}", endpoint);
        let result = client
            .execute(Method::DELETE, &endpoint, RequestOptions::new())
            .await;
        Ok(ToolOutput::entity(result))
    }
}
