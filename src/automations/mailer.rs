//! Mailer seam for automations that send email.

use async_trait::async_trait;

use crate::error::AutomationError;

/// Sends email on behalf of an automation.
///
/// The real delivery mechanism lives outside this crate; automations only
/// see this trait.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send an email to the given address.
    async fn send(&self, to: &str) -> Result<(), AutomationError>;
}

/// Mailer that logs instead of sending.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str) -> Result<(), AutomationError> {
        tracing::info!(to = %to, "Sending email");
        Ok(())
    }
}
