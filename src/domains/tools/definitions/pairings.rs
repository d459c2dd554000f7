//! Pairing group tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::common::{Payload, lenient_id, non_empty, positive_id};
use super::rounds::round_endpoint;
use crate::core::api::{ApiClient, Method, RequestOptions};
use crate::domains::tools::{GolfTool, ToolError, ToolOutput};

fn pairing_endpoint(event_id: i64, round_id: i64, pairing_group_id: i64) -> Result<String, ToolError> {
    let round = round_endpoint(event_id, round_id)?;
    let pairing_group_id = positive_id("pairing_group_id", pairing_group_id)?;
    Ok(format!("{round}/pairing_groups/{pairing_group_id}"))
}

/// Parameters for [`CreatePairingTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePairingParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the round")]
    #[serde(deserialize_with = "lenient_id")]
    pub round_id: i64,

    #[schemars(description = "Players in the group (at least one)")]
    pub players: Vec<Value>,

    #[schemars(description = "Tee time, e.g. '08:30 AM'")]
    #[serde(default)]
    pub tee_time: Option<String>,

    #[schemars(description = "Starting hole number")]
    #[serde(default)]
    pub starting_hole: Option<i64>,
}

/// Creates a pairing group in a round.
#[derive(Debug, Clone)]
pub struct CreatePairingTool;

#[async_trait]
impl GolfTool for CreatePairingTool {
    const NAME: &'static str = "create_pairing";
    const DESCRIPTION: &'static str = "Create a pairing group (tee time group) in a round.";

    type Params = CreatePairingParams;

    #[instrument(skip_all, fields(event_id = params.event_id, round_id = params.round_id))]
    async fn run(
        client: &ApiClient,
        params: CreatePairingParams,
    ) -> Result<ToolOutput, ToolError> {
        let round = round_endpoint(params.event_id, params.round_id)?;
        non_empty("players", &params.players)?;
        let starting_hole = params
            .starting_hole
            .map(|h| positive_id("starting_hole", h))
            .transpose()?;

        let body = Payload::new()
            .set("players", params.players)
            .set_opt("tee_time", params.tee_time)
            .set_opt("starting_hole", starting_hole)
            .into_value();

        info!("Creating pairing group in {}", round);
        let result = client
            .execute(
                Method::POST,
                &format!("{round}/pairing_groups"),
                RequestOptions::new().json(body),
            )
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Parameters for [`UpdatePairingTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdatePairingParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the round")]
    #[serde(deserialize_with = "lenient_id")]
    pub round_id: i64,

    #[schemars(description = "ID of the pairing group to update")]
    #[serde(deserialize_with = "lenient_id")]
    pub pairing_group_id: i64,

    #[schemars(description = "Replacement player list")]
    #[serde(default)]
    pub players: Option<Vec<Value>>,

    #[schemars(description = "New tee time")]
    #[serde(default)]
    pub tee_time: Option<String>,

    #[schemars(description = "New starting hole number")]
    #[serde(default)]
    pub starting_hole: Option<i64>,
}

/// Updates a pairing group.
#[derive(Debug, Clone)]
pub struct UpdatePairingTool;

#[async_trait]
impl GolfTool for UpdatePairingTool {
    const NAME: &'static str = "update_pairing";
    const DESCRIPTION: &'static str =
        "Update a pairing group of a round. Only the supplied fields are changed.";

    type Params = UpdatePairingParams;

    #[instrument(
        skip_all,
        fields(
            event_id = params.event_id,
            round_id = params.round_id,
            pairing_group_id = params.pairing_group_id,
        )
    )]
    async fn run(
        client: &ApiClient,
        params: UpdatePairingParams,
    ) -> Result<ToolOutput, ToolError> {
        let endpoint = pairing_endpoint(params.event_id, params.round_id, params.pairing_group_id)?;
        if let Some(players) = &params.players {
            non_empty("players", players)?;
        }
        let starting_hole = params
            .starting_hole
            .map(|h| positive_id("starting_hole", h))
            .transpose()?;

        let body = Payload::new()
            .set_opt("players", params.players)
            .set_opt("tee_time", params.tee_time)
            .set_opt("starting_hole", starting_hole)
            .into_update()?;

        info!("Updating {}", endpoint);
        let result = client
            .execute(Method::PUT, &endpoint, RequestOptions::new().json(body))
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Parameters for [`DeletePairingTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeletePairingParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the round")]
    #[serde(deserialize_with = "lenient_id")]
    pub round_id: i64,

    #[schemars(description = "ID of the pairing group to delete")]
    #[serde(deserialize_with = "lenient_id")]
    pub pairing_group_id: i64,
}

/// Deletes a pairing group.
#[derive(Debug, Clone)]
pub struct DeletePairingTool;

#[async_trait]
impl GolfTool for DeletePairingTool {
    const NAME: &'static str = "delete_pairing";
    const DESCRIPTION: &'static str = "Delete a pairing group from a round.";

    type Params = DeletePairingParams;

    #[instrument(
        skip_all,
        fields(
            event_id = params.event_id,
            round_id = params.round_id,
            pairing_group_id = params.pairing_group_id,
        )
    )]
    async fn run(
        client: &ApiClient,
        params: DeletePairingParams,
    ) -> Result<ToolOutput, ToolError> {
        let endpoint = pairing_endpoint(params.event_id, params.round_id, params.pairing_group_id)?;
        info!("Deleting {}", endpoint);
        let result = client
            .execute(Method::DELETE, &endpoint, RequestOptions::new())
            .await;
        Ok(ToolOutput::entity(result))
    }
}
