//! Organization-level reference data: seasons, categories and directories.

use async_trait::async_trait;

use super::common::NoParams;
use crate::core::api::{ApiClient, Method, RequestOptions};
use crate::domains::tools::{GolfTool, ToolError, ToolOutput};

/// Lists the seasons defined for the organization.
#[derive(Debug, Clone)]
pub struct ListSeasonsTool;

#[async_trait]
impl GolfTool for ListSeasonsTool {
    const NAME: &'static str = "list_seasons";
    const DESCRIPTION: &'static str = "List all seasons in the Golf Genius organization.";

    type Params = NoParams;

    async fn run(client: &ApiClient, _params: NoParams) -> Result<ToolOutput, ToolError> {
        let result = client
            .execute(Method::GET, "seasons", RequestOptions::new())
            .await;
        Ok(ToolOutput::collection(result, "seasons"))
    }
}

/// Lists event categories with their event counts.
#[derive(Debug, Clone)]
pub struct ListCategoriesTool;

#[async_trait]
impl GolfTool for ListCategoriesTool {
    const NAME: &'static str = "list_categories";
    const DESCRIPTION: &'static str = "List all event categories with their event counts.";

    type Params = NoParams;

    async fn run(client: &ApiClient, _params: NoParams) -> Result<ToolOutput, ToolError> {
        let result = client
            .execute(Method::GET, "categories", RequestOptions::new())
            .await;
        Ok(ToolOutput::collection(result, "categories"))
    }
}

/// Lists event directories.
#[derive(Debug, Clone)]
pub struct ListDirectoriesTool;

#[async_trait]
impl GolfTool for ListDirectoriesTool {
    const NAME: &'static str = "list_directories";
    const DESCRIPTION: &'static str = "List all event directories.";

    type Params = NoParams;

    async fn run(client: &ApiClient, _params: NoParams) -> Result<ToolOutput, ToolError> {
        let result = client
            .execute(Method::GET, "directories", RequestOptions::new())
            .await;
        Ok(ToolOutput::collection(result, "directories"))
    }
}
