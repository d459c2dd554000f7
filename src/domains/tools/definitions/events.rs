//! Event management tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{
    MAX_NAME_LEN, Payload, date_order, lenient_id, lenient_optional_id, optional_date, optional_id,
    optional_page, optional_text, positive_id, required_text,
};
use crate::core::api::{ApiClient, Method, RequestOptions};
use crate::domains::tools::{GolfTool, ToolError, ToolOutput};

fn default_event_type() -> String {
    "event".to_string()
}

// ============================================================================
// Listing and lookup
// ============================================================================

/// Parameters for [`ListEventsTool`].
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListEventsParams {
    #[schemars(description = "Only events in this season")]
    #[serde(default, deserialize_with = "lenient_optional_id")]
    pub season_id: Option<i64>,

    #[schemars(description = "Only events in this category")]
    #[serde(default, deserialize_with = "lenient_optional_id")]
    pub category_id: Option<i64>,

    #[schemars(description = "Only events in this directory")]
    #[serde(default, deserialize_with = "lenient_optional_id")]
    pub directory_id: Option<i64>,

    #[schemars(description = "Include archived events (default: false)")]
    #[serde(default)]
    pub archived: bool,

    #[schemars(description = "Page number (1-based) for paginated results")]
    #[serde(default)]
    pub page: Option<i64>,
}

/// Lists events with optional filters.
#[derive(Debug, Clone)]
pub struct ListEventsTool;

#[async_trait]
impl GolfTool for ListEventsTool {
    const NAME: &'static str = "list_events";
    const DESCRIPTION: &'static str = "List golf events, optionally filtered by season, category \
        or directory, including archived events on request.";

    type Params = ListEventsParams;

    #[instrument(skip_all, fields(season_id = ?params.season_id, page = ?params.page))]
    async fn run(client: &ApiClient, params: ListEventsParams) -> Result<ToolOutput, ToolError> {
        let season_id = optional_id("season_id", params.season_id)?;
        let category_id = optional_id("category_id", params.category_id)?;
        let directory_id = optional_id("directory_id", params.directory_id)?;
        let page = optional_page(params.page)?;

        let options = RequestOptions::new()
            .query_opt("season_id", season_id)
            .query_opt("category_id", category_id)
            .query_opt("directory_id", directory_id)
            .query_opt("archived", params.archived.then_some("true"))
            .query_opt("page", page);

        let result = client.execute(Method::GET, "events", options).await;
        Ok(ToolOutput::collection(result, "events"))
    }
}

/// Parameters for tools addressing a single event.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EventIdParams {
    #[schemars(description = "ID of the event")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,
}

/// Fetches one event.
#[derive(Debug, Clone)]
pub struct GetEventDetailsTool;

#[async_trait]
impl GolfTool for GetEventDetailsTool {
    const NAME: &'static str = "get_event_details";
    const DESCRIPTION: &'static str = "Get detailed information about a specific event.";

    type Params = EventIdParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(client: &ApiClient, params: EventIdParams) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let result = client
            .execute(Method::GET, &format!("events/{event_id}"), RequestOptions::new())
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Lists the courses used by an event.
#[derive(Debug, Clone)]
pub struct GetEventCoursesTool;

#[async_trait]
impl GolfTool for GetEventCoursesTool {
    const NAME: &'static str = "get_event_courses";
    const DESCRIPTION: &'static str = "List the courses configured for an event.";

    type Params = EventIdParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(client: &ApiClient, params: EventIdParams) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let result = client
            .execute(
                Method::GET,
                &format!("events/{event_id}/courses"),
                RequestOptions::new(),
            )
            .await;
        Ok(ToolOutput::collection(result, "courses"))
    }
}

// ============================================================================
// Writes
// ============================================================================

/// Parameters for [`CreateEventTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateEventParams {
    #[schemars(description = "Name of the event (1-255 characters)")]
    pub name: String,

    #[schemars(description = "Type of event (default: 'event')")]
    #[serde(default = "default_event_type")]
    pub event_type: String,

    #[schemars(description = "External identifier for the event")]
    #[serde(default)]
    pub external_id: Option<String>,

    #[schemars(description = "Start date in YYYY-MM-DD format")]
    #[serde(default)]
    pub start_date: Option<String>,

    #[schemars(description = "End date in YYYY-MM-DD format, not before start_date")]
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Creates an event.
#[derive(Debug, Clone)]
pub struct CreateEventTool;

#[async_trait]
impl GolfTool for CreateEventTool {
    const NAME: &'static str = "create_event";
    const DESCRIPTION: &'static str = "Create a new golf event.";

    type Params = CreateEventParams;

    #[instrument(skip_all, fields(name = %params.name))]
    async fn run(client: &ApiClient, params: CreateEventParams) -> Result<ToolOutput, ToolError> {
        let name = required_text("name", &params.name, Some(MAX_NAME_LEN))?;
        let start_date = optional_date("start_date", params.start_date)?;
        let end_date = optional_date("end_date", params.end_date)?;
        date_order(start_date.as_deref(), end_date.as_deref())?;

        info!("Creating event: {}", name);
        let body = Payload::new()
            .set("name", name)
            .set("event_type", params.event_type)
            .set_opt("external_id", params.external_id.filter(|id| !id.is_empty()))
            .set_opt("start_date", start_date)
            .set_opt("end_date", end_date)
            .into_value();

        let result = client
            .execute(Method::POST, "events", RequestOptions::new().json(body))
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Parameters for [`UpdateEventTool`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateEventParams {
    #[schemars(description = "ID of the event to update")]
    #[serde(deserialize_with = "lenient_id")]
    pub event_id: i64,

    #[schemars(description = "New name (1-255 characters)")]
    #[serde(default)]
    pub name: Option<String>,

    #[schemars(description = "New event type")]
    #[serde(default)]
    pub event_type: Option<String>,

    #[schemars(description = "New external identifier")]
    #[serde(default)]
    pub external_id: Option<String>,

    #[schemars(description = "New start date in YYYY-MM-DD format")]
    #[serde(default)]
    pub start_date: Option<String>,

    #[schemars(description = "New end date in YYYY-MM-DD format")]
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Updates the supplied fields of an event.
#[derive(Debug, Clone)]
pub struct UpdateEventTool;

#[async_trait]
impl GolfTool for UpdateEventTool {
    const NAME: &'static str = "update_event";
    const DESCRIPTION: &'static str =
        "Update an existing golf event. Only the supplied fields are changed.";

    type Params = UpdateEventParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(client: &ApiClient, params: UpdateEventParams) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        let name = optional_text("name", params.name, Some(MAX_NAME_LEN))?;
        let start_date = optional_date("start_date", params.start_date)?;
        let end_date = optional_date("end_date", params.end_date)?;
        date_order(start_date.as_deref(), end_date.as_deref())?;

        let body = Payload::new()
            .set_opt("name", name)
            .set_opt("event_type", params.event_type)
            .set_opt("external_id", params.external_id)
            .set_opt("start_date", start_date)
            .set_opt("end_date", end_date)
            .into_update()?;

        info!("Updating event {}", event_id);
        let result = client
            .execute(
                Method::PUT,
                &format!("events/{event_id}"),
                RequestOptions::new().json(body),
            )
            .await;
        Ok(ToolOutput::entity(result))
    }
}

/// Deletes (archives) an event.
#[derive(Debug, Clone)]
pub struct DeleteEventTool;

#[async_trait]
impl GolfTool for DeleteEventTool {
    const NAME: &'static str = "delete_event";
    const DESCRIPTION: &'static str = "Delete (archive) a golf event.";

    type Params = EventIdParams;

    #[instrument(skip_all, fields(event_id = params.event_id))]
    async fn run(client: &ApiClient, params: EventIdParams) -> Result<ToolOutput, ToolError> {
        let event_id = positive_id("event_id", params.event_id)?;
        info!("Deleting event {}", event_id);
        let result = client
            .execute(Method::DELETE, &format!("events/{event_id}"), RequestOptions::new())
            .await;
        Ok(ToolOutput::entity(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::test_support::{MockResponse, MockUpstream, TEST_KEY, test_client};
    use crate::domains::tools::tool::invoke;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_events() {
        let upstream = MockUpstream::start(vec![MockResponse::json(
            200,
            json!({ "events": [{ "id": 1, "name": "Spring Open" }] }),
        )])
        .await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<ListEventsTool>(&client, json!({})).await.into_value();
        assert_eq!(result, json!([{ "id": "1", "name": "Spring Open" }]));
        assert_eq!(upstream.requests()[0].query, None);
    }

    #[tokio::test]
    async fn test_list_events_with_filters() {
        let upstream =
            MockUpstream::start(vec![MockResponse::json(200, json!({ "events": [] }))]).await;
        let client = test_client(&upstream.base_url);

        invoke::<ListEventsTool>(
            &client,
            json!({ "season_id": 1, "page": 2, "archived": true }),
        )
        .await;

        let query = upstream.requests()[0].query.clone().unwrap_or_default();
        assert!(query.contains("season_id=1"));
        assert!(query.contains("page=2"));
        assert!(query.contains("archived=true"));
        assert!(!query.contains("category_id"));
    }

    #[tokio::test]
    async fn test_returned_ids_are_accepted_back() {
        let upstream = MockUpstream::start(vec![
            MockResponse::json(200, json!({ "events": [{ "id": 42, "season_id": 3 }] })),
            MockResponse::json(200, json!({ "id": 42, "name": "Spring Open" })),
        ])
        .await;
        let client = test_client(&upstream.base_url);

        let events = invoke::<ListEventsTool>(&client, json!({ "season_id": "3" }))
            .await
            .into_value();
        let event_id = events[0]["id"].clone();
        assert_eq!(event_id, json!("42"));

        let details = invoke::<GetEventDetailsTool>(&client, json!({ "event_id": event_id }))
            .await
            .into_value();
        assert_eq!(details["name"], "Spring Open");

        let requests = upstream.requests();
        assert_eq!(requests[0].query.as_deref(), Some("season_id=3"));
        assert_eq!(requests[1].path, format!("/api_v2/{TEST_KEY}/events/42"));
    }

    #[test]
    fn test_event_id_params_reject_non_numeric_string() {
        let err = serde_json::from_value::<EventIdParams>(json!({ "event_id": "forty-two" }))
            .unwrap_err();
        assert!(err.to_string().contains("invalid integer"));
    }

    #[tokio::test]
    async fn test_event_details_not_found_degrades() {
        let upstream = MockUpstream::start(vec![MockResponse::status(404)]).await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<GetEventDetailsTool>(&client, json!({ "event_id": 999 }))
            .await
            .into_value();
        assert_eq!(result, json!({ "error": "events/999 not found." }));
    }

    #[tokio::test]
    async fn test_event_courses() {
        let upstream = MockUpstream::start(vec![MockResponse::json(
            200,
            json!({ "courses": [{ "id": 1, "name": "Pebble Beach" }] }),
        )])
        .await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<GetEventCoursesTool>(&client, json!({ "event_id": 1 }))
            .await
            .into_value();
        assert_eq!(result[0]["name"], "Pebble Beach");
    }

    #[tokio::test]
    async fn test_create_event_uses_bearer_and_plain_path() {
        let upstream = MockUpstream::start(vec![MockResponse::json(
            201,
            json!({ "id": 9, "name": "Summer Classic" }),
        )])
        .await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<CreateEventTool>(
            &client,
            json!({ "name": "Summer Classic", "start_date": "2025-07-01" }),
        )
        .await
        .into_value();
        assert_eq!(result["name"], "Summer Classic");

        let request = &upstream.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/api_v2/events");
        assert_eq!(
            request.header("authorization"),
            Some(format!("Bearer {TEST_KEY}"))
        );
        assert_eq!(
            request.json(),
            json!({ "name": "Summer Classic", "event_type": "event", "start_date": "2025-07-01" })
        );
    }

    #[tokio::test]
    async fn test_create_event_rejects_bad_dates() {
        let upstream = MockUpstream::start(vec![]).await;
        let client = test_client(&upstream.base_url);

        let output = invoke::<CreateEventTool>(
            &client,
            json!({ "name": "Test", "start_date": "2025/13/40" }),
        )
        .await;
        assert!(output.is_error());

        let output = invoke::<CreateEventTool>(
            &client,
            json!({ "name": "Test", "start_date": "2025-07-02", "end_date": "2025-07-01" }),
        )
        .await;
        assert!(output.is_error());
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_event_empty_name() {
        let upstream = MockUpstream::start(vec![]).await;
        let client = test_client(&upstream.base_url);

        let output = invoke::<CreateEventTool>(&client, json!({ "name": "" })).await;
        assert!(output.is_error());
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_event() {
        let upstream =
            MockUpstream::start(vec![MockResponse::json(200, json!({ "name": "Updated" }))])
                .await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<UpdateEventTool>(&client, json!({ "event_id": 42, "name": "Updated" }))
            .await
            .into_value();
        assert_eq!(result["name"], "Updated");

        let request = &upstream.requests()[0];
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/api_v2/events/42");
        assert_eq!(request.json(), json!({ "name": "Updated" }));
    }

    #[tokio::test]
    async fn test_update_event_no_fields() {
        let upstream = MockUpstream::start(vec![]).await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<UpdateEventTool>(&client, json!({ "event_id": 42 }))
            .await
            .into_value();
        assert_eq!(result, json!({ "error": "No fields provided to update." }));

        let result = invoke::<UpdateEventTool>(&client, json!({ "event_id": 0, "name": "Test" }))
            .await
            .into_value();
        assert_eq!(result, json!({ "error": "event_id must be a positive integer." }));
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_event() {
        let upstream =
            MockUpstream::start(vec![MockResponse::json(200, json!({ "status": "deleted" }))])
                .await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<DeleteEventTool>(&client, json!({ "event_id": 42 }))
            .await
            .into_value();
        assert_eq!(result["status"], "deleted");
        assert_eq!(upstream.requests()[0].method, Method::DELETE);

        let result = invoke::<DeleteEventTool>(&client, json!({ "event_id": -5 }))
            .await
            .into_value();
        assert!(result.get("error").is_some());
    }
}
