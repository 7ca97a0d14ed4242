//! notework: a Worker SDK for agent tools and automations.
//!
//! A [`Worker`] is a process-wide registry. Tools (schema-described
//! callables exposed to an AI agent) and automations (handlers triggered
//! by document events) are registered against it by name, with
//! declarative metadata and an executable callback. The [`host`] layer
//! receives invocations from the external runtime and dispatches them;
//! handlers reach the external document database through the
//! [`documents::DocumentService`] handle on their context.
//!
//! ```
//! use notework::schema;
//! use notework::tools::ToolConfig;
//! use notework::worker::Worker;
//!
//! let mut worker = Worker::new();
//! worker
//!     .tool(
//!         "say_hello",
//!         ToolConfig::new(
//!             "Say Hello",
//!             "Returns a friendly greeting for the given name.",
//!             schema::object()
//!                 .required_property("name", schema::string().description("The name to greet."))
//!                 .additional_properties(false),
//!             |input, _ctx| async move {
//!                 let name = input.get("name").and_then(|v| v.as_str()).unwrap_or("");
//!                 Ok(serde_json::json!(format!("Hello, {name}!")))
//!             },
//!         ),
//!     )
//!     .unwrap();
//! ```

pub mod automations;
pub mod context;
pub mod documents;
pub mod error;
pub mod host;
pub mod schema;
pub mod settings;
pub mod tools;
pub mod worker;

pub use context::WorkerContext;
pub use error::{AutomationError, DocumentError, HostError, RegistryError, WorkerError};
pub use worker::Worker;
