//! API connectivity check.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::common::NoParams;
use crate::core::api::{ApiClient, ApiError, Method, RequestOptions};
use crate::domains::tools::{GolfTool, ToolError, ToolOutput};

/// Checks connectivity and credential validity with a cheap read.
#[derive(Debug, Clone)]
pub struct HealthCheckTool;

#[async_trait]
impl GolfTool for HealthCheckTool {
    const NAME: &'static str = "health_check";
    const DESCRIPTION: &'static str = "Check Golf Genius API connectivity and authentication status. \
        Returns a status of 'ok', 'auth_error' or 'error' with a message.";

    type Params = NoParams;

    async fn run(client: &ApiClient, _params: NoParams) -> Result<ToolOutput, ToolError> {
        info!("Running health check");
        let report = match client.execute(Method::GET, "seasons", RequestOptions::new()).await {
            Ok(envelope) if envelope.is_error() => {
                json!({ "status": "error", "message": envelope.error_message() })
            }
            Ok(_) => json!({
                "status": "ok",
                "message": "Connected and authenticated successfully."
            }),
            Err(ApiError::Authentication { .. }) => json!({
                "status": "auth_error",
                "message": "API key is invalid or expired."
            }),
            Err(e) => json!({ "status": "error", "message": e.to_string() }),
        };
        Ok(ToolOutput::Json(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::test_support::{MockResponse, MockUpstream, test_client};
    use crate::domains::tools::tool::invoke;

    #[tokio::test]
    async fn test_healthy() {
        let upstream =
            MockUpstream::start(vec![MockResponse::json(200, json!({ "seasons": [] }))]).await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<HealthCheckTool>(&client, json!({})).await.into_value();
        assert_eq!(result["status"], "ok");
        assert_eq!(upstream.requests()[0].method, Method::GET);
    }

    #[tokio::test]
    async fn test_auth_failure() {
        let upstream = MockUpstream::start(vec![MockResponse::status(401)]).await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<HealthCheckTool>(&client, json!({})).await.into_value();
        assert_eq!(result["status"], "auth_error");
    }

    #[tokio::test]
    async fn test_server_error() {
        let upstream = MockUpstream::start(vec![MockResponse::text(500, "boom")]).await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<HealthCheckTool>(&client, json!({})).await.into_value();
        assert_eq!(result["status"], "error");
        assert_eq!(result["message"], "API Error 500: boom");
    }

    #[tokio::test]
    async fn test_rate_limit_exhausted_is_error() {
        let upstream = MockUpstream::start(vec![MockResponse::status(429)]).await;
        let client = test_client(&upstream.base_url);

        let result = invoke::<HealthCheckTool>(&client, json!({})).await.into_value();
        assert_eq!(result["status"], "error");
        assert_eq!(result["message"], "Rate limited.");
    }
}
