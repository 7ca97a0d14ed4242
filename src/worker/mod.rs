//! The process-wide worker registry.
//!
//! A [`Worker`] is created once per process, handlers are registered
//! against it by name, and the host dispatches incoming invocations to
//! it. Registration happens before serving starts; the worker is shared
//! behind an `Arc` afterwards and never mutated.

pub mod api;

use std::sync::Arc;

use crate::automations::{Automation, AutomationConfig, AutomationEvent, AutomationRegistry, FnAutomation};
use crate::context::WorkerContext;
use crate::error::{RegistryError, WorkerError};
use crate::schema::{SchemaValidator, StructuralValidator};
use crate::tools::{FnTool, Tool, ToolConfig, ToolError, ToolOutput, ToolRegistry, ToolSchema};

/// Registry of tools and automations plus the dispatch path that invokes
/// them.
pub struct Worker {
    tools: ToolRegistry,
    automations: AutomationRegistry,
    validator: Arc<dyn SchemaValidator>,
}

impl Worker {
    /// Create a worker with the structural schema validator.
    pub fn new() -> Self {
        Self {
            tools: ToolRegistry::new(),
            automations: AutomationRegistry::new(),
            validator: Arc::new(StructuralValidator),
        }
    }

    /// Swap in a different schema validator.
    pub fn with_validator(mut self, validator: Arc<dyn SchemaValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Register a closure-backed tool under the given name.
    pub fn tool(&mut self, name: impl Into<String>, config: ToolConfig) -> Result<(), RegistryError> {
        self.register_tool(Arc::new(FnTool::new(name, config)))
    }

    /// Register a tool trait object.
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        self.tools.register(tool)
    }

    /// Register a closure-backed automation under the given name.
    pub fn automation(
        &mut self,
        name: impl Into<String>,
        config: AutomationConfig,
    ) -> Result<(), RegistryError> {
        self.register_automation(Arc::new(FnAutomation::new(name, config)))
    }

    /// Register an automation trait object.
    pub fn register_automation(
        &mut self,
        automation: Arc<dyn Automation>,
    ) -> Result<(), RegistryError> {
        self.automations.register(automation)
    }

    /// Schemas of all registered tools, ordered by name.
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools.schemas()
    }

    /// Names of all registered automations, ordered.
    pub fn automation_names(&self) -> Vec<&str> {
        self.automations.names()
    }

    /// Invoke a tool by name.
    ///
    /// Input is validated against the tool's schema before `execute`
    /// runs; if the tool declares an output schema, the result is checked
    /// against it afterwards.
    pub async fn invoke_tool(
        &self,
        name: &str,
        input: serde_json::Value,
        ctx: &WorkerContext,
    ) -> Result<ToolOutput, WorkerError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))?;

        self.validator
            .validate(&tool.parameters_schema(), &input)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        tracing::debug!(tool = %name, invocation = %ctx.invocation_id, "Invoking tool");
        let output = tool.execute(input, ctx).await.map_err(WorkerError::Tool)?;

        if let Some(schema) = tool.output_schema() {
            self.validator
                .validate(&schema, &output.result)
                .map_err(|e| ToolError::SchemaViolation(e.to_string()))?;
        }

        Ok(output)
    }

    /// Dispatch an event to an automation by name.
    pub async fn dispatch_automation(
        &self,
        name: &str,
        event: AutomationEvent,
        ctx: &WorkerContext,
    ) -> Result<(), WorkerError> {
        let automation = self
            .automations
            .get(name)
            .ok_or_else(|| RegistryError::UnknownAutomation(name.to_string()))?;

        tracing::debug!(
            automation = %name,
            event_type = %event.event_type,
            invocation = %ctx.invocation_id,
            "Dispatching automation"
        );
        automation
            .execute(event, ctx)
            .await
            .map_err(WorkerError::Automation)
    }
}

impl Default for Worker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::test_context;
    use crate::schema;
    use crate::tools::builtin::{SayHelloTool, SearchTool};

    fn worker_with_builtins() -> Worker {
        let mut worker = Worker::new();
        worker.register_tool(Arc::new(SayHelloTool)).unwrap();
        worker.register_tool(Arc::new(SearchTool)).unwrap();
        worker
    }

    #[tokio::test]
    async fn test_invoke_tool_by_name() {
        let worker = worker_with_builtins();
        let ctx = test_context();

        let output = worker
            .invoke_tool("say_hello", serde_json::json!({"name": "Ada"}), &ctx)
            .await
            .unwrap();

        assert_eq!(output.result, serde_json::json!("Hello, Ada!"));
    }

    #[tokio::test]
    async fn test_invalid_input_rejected_before_execute() {
        let worker = worker_with_builtins();
        let ctx = test_context();

        let err = worker
            .invoke_tool("say_hello", serde_json::json!({"name": 42}), &ctx)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WorkerError::Tool(ToolError::InvalidParameters(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let worker = worker_with_builtins();
        let ctx = test_context();

        let err = worker
            .invoke_tool("nope", serde_json::json!({}), &ctx)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WorkerError::Registry(RegistryError::UnknownTool(_))
        ));
    }

    #[tokio::test]
    async fn test_output_schema_enforced() {
        let mut worker = Worker::new();
        worker
            .tool(
                "bad_output",
                ToolConfig::new(
                    "Bad Output",
                    "Returns a number where a string array is declared.",
                    schema::object(),
                    |_input, _ctx| async { Ok(serde_json::json!(42)) },
                )
                .output_schema(schema::array(schema::string())),
            )
            .unwrap();
        let ctx = test_context();

        let err = worker
            .invoke_tool("bad_output", serde_json::json!({}), &ctx)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WorkerError::Tool(ToolError::SchemaViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_closure_registration_mirrors_sdk_shape() {
        let mut worker = Worker::new();
        worker
            .tool(
                "say_hello",
                ToolConfig::new(
                    "Say Hello",
                    "Returns a friendly greeting for the given name.",
                    schema::object()
                        .required_property(
                            "name",
                            schema::string().description("The name to greet."),
                        )
                        .additional_properties(false),
                    |input, _ctx| async move {
                        let name = input.get("name").and_then(|v| v.as_str()).unwrap_or("");
                        Ok(serde_json::json!(format!("Hello, {name}!")))
                    },
                ),
            )
            .unwrap();
        let ctx = test_context();

        let output = worker
            .invoke_tool("say_hello", serde_json::json!({"name": "Grace"}), &ctx)
            .await
            .unwrap();

        assert_eq!(output.result, serde_json::json!("Hello, Grace!"));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_automation() {
        let worker = worker_with_builtins();
        let ctx = test_context();

        let err = worker
            .dispatch_automation("nope", AutomationEvent::new("page.updated"), &ctx)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WorkerError::Registry(RegistryError::UnknownAutomation(_))
        ));
    }

    #[test]
    fn test_tool_schemas_ordered_by_name() {
        let worker = worker_with_builtins();
        let names: Vec<String> = worker.tool_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["say_hello", "search"]);
    }
}
