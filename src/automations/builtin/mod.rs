//! Built-in example automations.

mod send_email;

pub use send_email::SendEmailAutomation;
