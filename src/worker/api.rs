//! Wire payloads exchanged with the external runtime.

use serde::{Deserialize, Serialize};

use crate::automations::AutomationEvent;
use crate::documents::PageData;
use crate::tools::ToolOutput;

/// Body of a tool invocation request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolInvocationRequest {
    /// Arguments for the tool, matching its input schema.
    #[serde(default)]
    pub input: serde_json::Value,
}

/// Body of a tool invocation response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolInvocationResponse {
    pub result: serde_json::Value,
    pub duration_ms: u64,
}

impl From<ToolOutput> for ToolInvocationResponse {
    fn from(output: ToolOutput) -> Self {
        Self {
            result: output.result,
            duration_ms: output.duration.as_millis() as u64,
        }
    }
}

/// Body of an automation event delivery, in the runtime's camelCase
/// wire format.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationEventPayload {
    #[serde(default = "default_event_type")]
    pub event_type: String,
    pub page_id: Option<String>,
    pub page_data: Option<PageData>,
}

fn default_event_type() -> String {
    "page.updated".to_string()
}

impl From<AutomationEventPayload> for AutomationEvent {
    fn from(payload: AutomationEventPayload) -> Self {
        Self {
            event_type: payload.event_type,
            page_id: payload.page_id,
            page_data: payload.page_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::documents::PropertyValue;

    #[test]
    fn test_event_payload_camel_case() {
        let payload: AutomationEventPayload = serde_json::from_value(serde_json::json!({
            "eventType": "page.updated",
            "pageId": "page-1",
            "pageData": {
                "properties": {
                    "Email": {"type": "rich_text", "rich_text": [{"plain_text": "x@y.z"}]}
                }
            }
        }))
        .unwrap();

        let event = AutomationEvent::from(payload);
        assert_eq!(event.page_id.as_deref(), Some("page-1"));
        let email = event
            .page_data
            .unwrap()
            .property("Email")
            .and_then(PropertyValue::plain_text);
        assert_eq!(email.as_deref(), Some("x@y.z"));
    }

    #[test]
    fn test_event_type_defaults() {
        let payload: AutomationEventPayload =
            serde_json::from_value(serde_json::json!({"pageId": null, "pageData": null})).unwrap();
        assert_eq!(payload.event_type, "page.updated");
    }

    #[test]
    fn test_invocation_request_default_input() {
        let request: ToolInvocationRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(request.input, serde_json::Value::Null);
    }
}
