//! Tournament results in JSON, HTML or XML.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use super::common::{lenient_id, one_of, positive_id};
use super::rounds::round_endpoint;
use crate::core::api::{ApiClient, Method, RequestOptions};
use crate::domains::tools::{GolfTool, ToolError, ToolOutput};

const FORMATS: &[&str] = &["json", "html", "xml"];

fn default_format() -> String {
    "json".to_string()
}

/// Parameters for [`GetTournamentResultsTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TournamentResultsParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "ID of the round")]
    #[serde(deserialize_with = "lenient_id")]
    pub round_id: i64,

    #[schemars(description = "ID of the tournament")]
    #[serde(deserialize_with = "lenient_id")]
    pub tournament_id: i64,

    #[schemars(description = "Result format: 'json' (default), 'html' or 'xml'")]
    #[serde(default = "default_format")]
    pub format: String,
}

/// Fetches the results of one tournament.
///
/// `html` and `xml` are returned verbatim as text.
#[derive(Debug, Clone)]
pub struct GetTournamentResultsTool;

#[async_trait]
impl GolfTool for GetTournamentResultsTool {
    const NAME: &'static str = "get_tournament_results";
    const DESCRIPTION: &'static str = "Get the results of a tournament in a round. \
        The 'json' format returns structured data; 'html' and 'xml' return the raw markup.";

    type Params = TournamentResultsParams;

    #[instrument(
        skip_all,
        fields(
            event_id = params.event_id,
            round_id = params.round_id,
            tournament_id = params.tournament_id,
            format = %params.format,
        )
    )]
    async fn run(
        client: &ApiClient,
        params: TournamentResultsParams,
    ) -> Result<ToolOutput, ToolError> {
        let round = round_endpoint(params.event_id, params.round_id)?;
        let tournament_id = positive_id("tournament_id", params.tournament_id)?;
        let format = one_of("format", &params.format, FORMATS)?;
        let endpoint = format!("{round}/tournaments/{tournament_id}.{format}");

        if format == "json" {
            let result = client
                .execute(Method::GET, &endpoint, RequestOptions::new())
                .await;
            Ok(ToolOutput::entity(result))
        } else {
            let text = client
                .execute_raw(Method::GET, &endpoint, RequestOptions::new())
                .await;
            Ok(ToolOutput::Text(text))
        }
    }
}
