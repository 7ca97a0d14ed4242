//! Execution context handed to tools and automations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::documents::DocumentService;

/// Context for one handler invocation.
///
/// Carries the document service handle and per-invocation bookkeeping.
/// Cloning is cheap; the service handle is shared.
#[derive(Clone)]
pub struct WorkerContext {
    /// Unique id for this invocation, used for log correlation.
    pub invocation_id: Uuid,
    /// When the invocation was received.
    pub received_at: DateTime<Utc>,
    /// Client for the external document service.
    pub documents: Arc<dyn DocumentService>,
    /// Invocation metadata supplied by the caller.
    pub metadata: serde_json::Value,
}

impl WorkerContext {
    /// Create a context around a document service handle.
    pub fn new(documents: Arc<dyn DocumentService>) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            received_at: Utc::now(),
            documents,
            metadata: serde_json::Value::Null,
        }
    }

    /// Set invocation metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

impl std::fmt::Debug for WorkerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerContext")
            .field("invocation_id", &self.invocation_id)
            .field("received_at", &self.received_at)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> WorkerContext {
    WorkerContext::new(Arc::new(crate::documents::InMemoryDocumentService::new()))
}
