//! Email-sending automation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::automations::automation::{Automation, AutomationEvent};
use crate::automations::mailer::Mailer;
use crate::context::WorkerContext;
use crate::documents::{PropertyMap, PropertyValue};
use crate::error::AutomationError;

/// Automation that emails the address stored on a database page.
///
/// Reads the `Email` property from the event's page data, sends one email
/// to that address, then marks the page by setting the `EmailSent`
/// checkbox. If the page id is missing or the extracted address is empty,
/// it does nothing.
pub struct SendEmailAutomation {
    mailer: Arc<dyn Mailer>,
}

impl SendEmailAutomation {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl Automation for SendEmailAutomation {
    fn name(&self) -> &str {
        "send_email"
    }

    fn title(&self) -> &str {
        "Send Email Automation"
    }

    fn description(&self) -> &str {
        "Reads an email address from a database page and sends an email."
    }

    async fn execute(
        &self,
        event: AutomationEvent,
        ctx: &WorkerContext,
    ) -> Result<(), AutomationError> {
        let email = event
            .page_data
            .as_ref()
            .and_then(|data| data.property("Email"))
            .and_then(PropertyValue::plain_text)
            .unwrap_or_default();

        // Absent prerequisites are a no-op, not an error.
        let Some(page_id) = event.page_id.filter(|id| !id.is_empty()) else {
            return Ok(());
        };
        if email.is_empty() {
            return Ok(());
        }

        self.mailer.send(&email).await?;

        let mut properties = PropertyMap::new();
        properties.insert("EmailSent".to_string(), PropertyValue::checkbox(true));
        ctx.documents.update_page(&page_id, properties).await?;

        Ok(())
    }
}
