//! Error types shared across subsystems.
//!
//! Each subsystem gets its own error enum; `WorkerError` is the umbrella the
//! dispatch layer reports to callers. `ToolError` lives next to the `Tool`
//! trait in `tools::tool`.

use thiserror::Error;

use crate::tools::ToolError;

/// Errors from registering handlers against a worker.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("A {kind} named '{name}' is already registered")]
    DuplicateName { kind: &'static str, name: String },

    #[error("No tool named '{0}' is registered")]
    UnknownTool(String),

    #[error("No automation named '{0}' is registered")]
    UnknownAutomation(String),
}

/// Errors from the document service client.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Invalid page identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Document service error: {0}")]
    Service(String),
}

/// Errors from automation execution.
#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("Automation failed: {0}")]
    ExecutionFailed(String),

    #[error("Mailer error: {0}")]
    Mailer(String),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors surfaced by the worker dispatch layer.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Automation(#[from] AutomationError),
}

/// Errors from the HTTP host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Host failed to start: {reason}")]
    StartupFailed { reason: String },
}
