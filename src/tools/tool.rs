//! Tool trait and types.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::WorkerContext;
use crate::error::DocumentError;

/// Error type for tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Output violates the declared schema: {0}")]
    SchemaViolation(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The result data.
    pub result: serde_json::Value,
    /// Time taken.
    pub duration: Duration,
}

impl ToolOutput {
    /// Create a successful output with a JSON result.
    pub fn success(result: serde_json::Value, duration: Duration) -> Self {
        Self { result, duration }
    }

    /// Create a text output.
    pub fn text(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            result: serde_json::Value::String(text.into()),
            duration,
        }
    }
}

/// Declarative description of a tool, published to the agent runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub title: String,
    pub description: String,
    pub parameters: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
}

/// Trait for tools the agent can call.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool name, unique within a worker.
    fn name(&self) -> &str;

    /// Get the human-readable title.
    fn title(&self) -> &str;

    /// Get a description of what the tool does, shown to the agent.
    fn description(&self) -> &str;

    /// Get the JSON Schema for the tool's input.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Get the JSON Schema for the tool's output, if it declares one.
    fn output_schema(&self) -> Option<serde_json::Value> {
        None
    }

    /// Execute the tool with validated input.
    async fn execute(
        &self,
        input: serde_json::Value,
        ctx: &WorkerContext,
    ) -> Result<ToolOutput, ToolError>;

    /// Get the full schema record for this tool.
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            title: self.title().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
            output: self.output_schema(),
        }
    }
}

type ToolHandler = Box<
    dyn Fn(serde_json::Value, WorkerContext) -> BoxFuture<'static, Result<serde_json::Value, ToolError>>
        + Send
        + Sync,
>;

/// Declarative configuration for a closure-backed tool.
///
/// Mirrors the registration shape of the original SDK: a title, a
/// description, an input schema, an optional output schema, and the
/// handler itself.
pub struct ToolConfig {
    title: String,
    description: String,
    schema: serde_json::Value,
    output_schema: Option<serde_json::Value>,
    handler: ToolHandler,
}

impl ToolConfig {
    /// Create a tool configuration from its metadata and handler.
    pub fn new<F, Fut>(
        title: impl Into<String>,
        description: impl Into<String>,
        schema: impl Into<serde_json::Value>,
        handler: F,
    ) -> Self
    where
        F: Fn(serde_json::Value, WorkerContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value, ToolError>> + Send + 'static,
    {
        Self {
            title: title.into(),
            description: description.into(),
            schema: schema.into(),
            output_schema: None,
            handler: Box::new(move |input, ctx| Box::pin(handler(input, ctx))),
        }
    }

    /// Declare the output schema.
    pub fn output_schema(mut self, schema: impl Into<serde_json::Value>) -> Self {
        self.output_schema = Some(schema.into());
        self
    }
}

/// A tool backed by a closure, built from a name plus a [`ToolConfig`].
pub struct FnTool {
    name: String,
    config: ToolConfig,
}

impl FnTool {
    pub fn new(name: impl Into<String>, config: ToolConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    fn parameters_schema(&self) -> serde_json::Value {
        self.config.schema.clone()
    }

    fn output_schema(&self) -> Option<serde_json::Value> {
        self.config.output_schema.clone()
    }

    async fn execute(
        &self,
        input: serde_json::Value,
        ctx: &WorkerContext,
    ) -> Result<ToolOutput, ToolError> {
        let start = std::time::Instant::now();
        let result = (self.config.handler)(input, ctx.clone()).await?;
        Ok(ToolOutput::success(result, start.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use crate::schema;

    fn shout_tool() -> FnTool {
        FnTool::new(
            "shout",
            ToolConfig::new(
                "Shout",
                "Upper-cases the given text.",
                schema::object().required_property("text", schema::string()),
                |input, _ctx| async move {
                    let text = input.get("text").and_then(|v| v.as_str()).ok_or_else(|| {
                        ToolError::InvalidParameters("missing 'text' parameter".to_string())
                    })?;
                    Ok(serde_json::Value::String(text.to_uppercase()))
                },
            )
            .output_schema(schema::string()),
        )
    }

    #[tokio::test]
    async fn test_fn_tool_executes_handler() {
        let tool = shout_tool();
        let ctx = test_context();

        let output = tool
            .execute(serde_json::json!({"text": "hi"}), &ctx)
            .await
            .unwrap();

        assert_eq!(output.result, serde_json::json!("HI"));
    }

    #[test]
    fn test_fn_tool_schema() {
        let tool = shout_tool();
        let schema = tool.schema();

        assert_eq!(schema.name, "shout");
        assert_eq!(schema.title, "Shout");
        assert!(schema.output.is_some());
        assert_eq!(schema.parameters["required"], serde_json::json!(["text"]));
    }
}
