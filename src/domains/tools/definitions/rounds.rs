//! Round tools: the rounds of an event, their tee sheets and tournaments.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{Payload, lenient_id, optional_date, positive_id};
use super::events::EventIdParams;
use crate::core::api::{ApiClient, Method, RequestOptions};
use crate::domains::tools::{GolfTool, ToolError, ToolOutput};

/// Parameters for tools addressing one round of an event.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RoundIdParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the round")]
    #[serde(deserialize_with = "lenient_id")]
    pub round_id: i64,
}

impl RoundIdParams {
    /// Validated `events/{event_id}/rounds/{round_id}` path.
    fn endpoint(&self) -> Result<String, ToolError> {
        round_endpoint(self.event_id, self.round_id)
    }
}

pub(crate) fn round_endpoint(event_id: i64, round_id: i64) -> Result<String, ToolError> {
    let event_id = positive_id("event_id", event_id)?;
    let round_id = positive_id("round_id", round_id)?;
    Ok(format!("events/{event_id}/rounds/{round_id}"))
}

/// Lists the rounds of an event.
#[derive(Debug, Clone)]
pub struct ListEventRoundsTool;

#[async_trait]
impl GolfTool for ListEventRoundsTool {
    const NAME: &'static str = "list_event_rounds";
    const DESCRIPTION: &'static str = "List all rounds of an event.";

    type Params = EventIdParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(client: &ApiClient, params: EventIdParams) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let result = client
            .execute(
                Method::GET,
                &format!("events/{event_id}/rounds"),
                RequestOptions::new(),
            )
            .await;
        Ok(ToolOutput::collection(result, "rounds"))
    }
}

/// Parameters for [`CreateRoundTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateRoundParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "Name of the round")]
    #[serde(default)]
    pub name: Option<String>,

    #[schemars(description = "Date of the round in YYYY-MM-DD format")]
    #[serde(default)]
    pub date: Option<String>,
}

/// Adds a round to an event.
#[derive(Debug, Clone)]
pub struct CreateRoundTool;

#[async_trait]
impl GolfTool for CreateRoundTool {
    const NAME: &'static str = "create_round";
    const DESCRIPTION: &'static str = "Create a new round in an event.";

    type Params = CreateRoundParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(client: &ApiClient, params: CreateRoundParams) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let date = optional_date("date", params.date)?;
        let body = Payload::new()
            .set_opt("name", params.name)
            .set_opt("date", date)
            .into_value();

        info!("Creating round in event {}", event_id);
        let result = client
            .execute(
                Method::POST,
                &format!("events/{event_id}/rounds"),
                RequestOptions::new().json(body),
            )
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Parameters for [`UpdateRoundTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateRoundParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the round to update")]
    #[serde(deserialize_with = "lenient_id")]
    pub round_id: i64,

    #[schemars(description = "New name of the round")]
    #[serde(default)]
    pub name: Option<String>,

    #[schemars(description = "New date in YYYY-MM-DD format")]
    #[serde(default)]
    pub date: Option<String>,
}

/// Updates a round.
#[derive(Debug, Clone)]
pub struct UpdateRoundTool;

#[async_trait]
impl GolfTool for UpdateRoundTool {
    const NAME: &'static str = "update_round";
    const DESCRIPTION: &'static str =
        "Update a round of an event. Only the supplied fields are changed.";

    type Params = UpdateRoundParams;

    #[instrument(skip_all, fields(event_id = params.event_id, round_id = params.round_id))]
    async fn run(client: &ApiClient, params: UpdateRoundParams) -> Result<ToolOutput, ToolError> {
        let endpoint = round_endpoint(params.event_id, params.round_id)?;
        let date = optional_date("date", params.date)?;
        let body = Payload::new()
            .set_opt("name", params.name)
            .set_opt("date", date)
            .into_update()?;

        info!("Updating {}", endpoint);
        let result = client
            .execute(Method::PUT, &endpoint, RequestOptions::new().json(body))
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Deletes a round.
#[derive(Debug, Clone)]
pub struct DeleteRoundTool;

#[async_trait]
impl GolfTool for DeleteRoundTool {
    const NAME: &'static str = "delete_round";
    const DESCRIPTION: &'static str = "Delete a round from an event.";

    type Params = RoundIdParams;

    #[instrument(skip_all, fields(event_id = params.event_id, round_id = params.round_id))]
    async fn run(client: &ApiClient, params: RoundIdParams) -> Result<ToolOutput, ToolError> {
        let endpoint = params.endpoint()?;
        info!("Deleting {}", endpoint);
        let result = client
            .execute(Method::DELETE, &endpoint, RequestOptions::new())
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Fetches the tee sheet of a round.
#[derive(Debug, Clone)]
pub struct GetRoundTeeSheetTool;

#[async_trait]
impl GolfTool for GetRoundTeeSheetTool {
    const NAME: &'static str = "get_round_tee_sheet";
    const DESCRIPTION: &'static str = "Get the tee sheet and scores of a round.";

    type Params = RoundIdParams;

    #[instrument(skip_all, fields(event_id = params.event_id, round_id = params.round_id))]
    async fn run(client: &ApiClient, params: RoundIdParams) -> Result<ToolOutput, ToolError> {
        let endpoint = format!("{}/tee_sheet", params.endpoint()?);
        let result = client
            .execute(Method::GET, &endpoint, RequestOptions::new())
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Lists the tournaments scored in a round.
#[derive(Debug, Clone)]
pub struct GetRoundTournamentsTool;

#[async_trait]
impl GolfTool for GetRoundTournamentsTool {
    const NAME: &'static str = "get_round_tournaments";
    const DESCRIPTION: &'static str = "List the tournaments (competitions) of a round.";

    type Params = RoundIdParams;

    #[instrument(skip_all, fields(event_id = params.event_id, round_id = params.round_id))]
    async fn run(client: &ApiClient, params: RoundIdParams) -> Result<ToolOutput, ToolError> {
        let endpoint = format!("{}/tournaments", params.endpoint()?);
        let result = client
            .execute(Method::GET, &endpoint, RequestOptions::new())
            .await;
        Ok(ToolOutput::collection(result, "tournaments"))
    }
}
