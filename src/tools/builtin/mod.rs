//! Built-in example tools.
//!
//! Starter tools a fresh worker ships with. Delete or replace them when
//! building real tools.

mod hello;
mod search;

pub use hello::SayHelloTool;
pub use search::SearchTool;
