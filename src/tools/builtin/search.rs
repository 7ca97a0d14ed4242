//! Search tool stub.

use async_trait::async_trait;

use crate::context::WorkerContext;
use crate::schema;
use crate::tools::tool::{Tool, ToolError, ToolOutput};

/// Tool that searches for items by keyword or ID.
///
/// Stub implementation: accepts the query shape and returns an empty
/// result list. Wire a data source into `execute` to make it real.
pub struct SearchTool;

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn title(&self) -> &str {
        "Search"
    }

    fn description(&self) -> &str {
        "Search for items by keyword or ID."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        schema::object()
            .property(
                "query",
                schema::nullable(schema::string().description("The search query")),
            )
            .property(
                "limit",
                schema::nullable(schema::integer().description("Maximum number of results")),
            )
            .build()
    }

    fn output_schema(&self) -> Option<serde_json::Value> {
        Some(
            schema::object()
                .required_property("results", schema::array(schema::string()))
                .build(),
        )
    }

    async fn execute(
        &self,
        input: serde_json::Value,
        _ctx: &WorkerContext,
    ) -> Result<ToolOutput, ToolError> {
        let start = std::time::Instant::now();

        let query = input.get("query").and_then(|v| v.as_str());
        let limit = input.get("limit").and_then(|v| v.as_u64());

        tracing::debug!(?query, ?limit, "Search requested");

        // Search your data source here using the query and limit.
        let results: Vec<String> = Vec::new();

        Ok(ToolOutput::success(
            serde_json::json!({ "results": results }),
            start.elapsed(),
        ))
    }
}
