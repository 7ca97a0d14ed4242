//! Tools: schema-described callables exposed to the agent.
//!
//! A tool is registered once against a [`crate::worker::Worker`] under a
//! unique name, either as a [`Tool`] trait object or as a closure via
//! [`ToolConfig`]. The worker validates input against the declared schema
//! before the tool's `execute` runs.

pub mod builtin;

mod registry;
mod tool;

pub use registry::ToolRegistry;
pub use tool::{FnTool, Tool, ToolConfig, ToolError, ToolOutput, ToolSchema};
