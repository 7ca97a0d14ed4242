//! Automation trait and event types.

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::context::WorkerContext;
use crate::documents::PageData;
use crate::error::AutomationError;

/// Event delivered to an automation when an external record changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationEvent {
    /// What happened, e.g. "page.updated".
    pub event_type: String,
    /// Identifier of the affected page, if known.
    pub page_id: Option<String>,
    /// The page's property values at event time.
    pub page_data: Option<PageData>,
}

impl AutomationEvent {
    /// Create an event with no page attached.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            page_id: None,
            page_data: None,
        }
    }

    /// Attach the affected page id.
    pub fn with_page_id(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }

    /// Attach the page's current property values.
    pub fn with_page_data(mut self, data: PageData) -> Self {
        self.page_data = Some(data);
        self
    }
}

/// Trait for event-triggered handlers.
#[async_trait]
pub trait Automation: Send + Sync {
    /// Get the automation name, unique within a worker.
    fn name(&self) -> &str;

    /// Get the human-readable title.
    fn title(&self) -> &str;

    /// Get a description of what the automation does.
    fn description(&self) -> &str;

    /// Run the automation for one event.
    ///
    /// Missing prerequisites in the event (absent page id, empty required
    /// property) are treated as a no-op, not an error.
    async fn execute(&self, event: AutomationEvent, ctx: &WorkerContext)
    -> Result<(), AutomationError>;
}

type AutomationHandler = Box<
    dyn Fn(AutomationEvent, WorkerContext) -> BoxFuture<'static, Result<(), AutomationError>>
        + Send
        + Sync,
>;

/// Declarative configuration for a closure-backed automation.
pub struct AutomationConfig {
    title: String,
    description: String,
    handler: AutomationHandler,
}

impl AutomationConfig {
    /// Create an automation configuration from its metadata and handler.
    pub fn new<F, Fut>(
        title: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Self
    where
        F: Fn(AutomationEvent, WorkerContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), AutomationError>> + Send + 'static,
    {
        Self {
            title: title.into(),
            description: description.into(),
            handler: Box::new(move |event, ctx| Box::pin(handler(event, ctx))),
        }
    }
}

/// An automation backed by a closure, built from a name plus an
/// [`AutomationConfig`].
pub struct FnAutomation {
    name: String,
    config: AutomationConfig,
}

impl FnAutomation {
    pub fn new(name: impl Into<String>, config: AutomationConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

#[async_trait]
impl Automation for FnAutomation {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    async fn execute(
        &self,
        event: AutomationEvent,
        ctx: &WorkerContext,
    ) -> Result<(), AutomationError> {
        (self.config.handler)(event, ctx.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::context::test_context;

    #[tokio::test]
    async fn test_fn_automation_runs_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let automation = FnAutomation::new(
            "count",
            AutomationConfig::new("Count", "Counts invocations.", move |_event, _ctx| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            }),
        );

        let ctx = test_context();
        automation
            .execute(AutomationEvent::new("page.updated"), &ctx)
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(automation.name(), "count");
        assert_eq!(automation.title(), "Count");
    }
}
