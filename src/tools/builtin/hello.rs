//! Greeting tool.

use async_trait::async_trait;

use crate::context::WorkerContext;
use crate::tools::tool::{Tool, ToolError, ToolOutput};

/// Tool that returns a friendly greeting for the given name.
///
/// Pure function of its input; performs no external calls.
pub struct SayHelloTool;

#[async_trait]
impl Tool for SayHelloTool {
    fn name(&self) -> &str {
        "say_hello"
    }

    fn title(&self) -> &str {
        "Say Hello"
    }

    fn description(&self) -> &str {
        "Returns a friendly greeting for the given name."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name to greet."
                }
            },
            "required": ["name"],
            "additionalProperties": false
        })
    }

    async fn execute(
        &self,
        input: serde_json::Value,
        _ctx: &WorkerContext,
    ) -> Result<ToolOutput, ToolError> {
        let start = std::time::Instant::now();

        let name = input.get("name").and_then(|v| v.as_str()).ok_or_else(|| {
            ToolError::InvalidParameters("missing 'name' parameter".to_string())
        })?;

        Ok(ToolOutput::text(format!("Hello, {name}!"), start.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;

    #[tokio::test]
    async fn test_greets_by_name() {
        let tool = SayHelloTool;
        let ctx = test_context();

        let output = tool
            .execute(serde_json::json!({"name": "Ada"}), &ctx)
            .await
            .unwrap();

        assert_eq!(output.result, serde_json::json!("Hello, Ada!"));
    }

    #[tokio::test]
    async fn test_missing_name_is_invalid() {
        let tool = SayHelloTool;
        let ctx = test_context();

        let err = tool.execute(serde_json::json!({}), &ctx).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameters(_)));
    }
}
