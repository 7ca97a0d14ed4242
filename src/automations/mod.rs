//! Automations: handlers triggered by external document events.
//!
//! An automation is registered once against a [`crate::worker::Worker`]
//! under a unique name and runs when the external runtime delivers a
//! matching event, e.g. a database page change. Unlike tools, automations
//! return no value; they exist for their side effects.

pub mod builtin;

mod automation;
mod mailer;
mod registry;

pub use automation::{Automation, AutomationConfig, AutomationEvent, FnAutomation};
pub use mailer::{LogMailer, Mailer};
pub use registry::AutomationRegistry;
