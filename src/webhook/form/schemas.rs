//! # Form Webhook Schemas
//!
//! Inbound payload posted by the form platform and the JSON response
//! shapes this service returns.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root payload from the form platform.
///
/// `form_submit_data` maps arbitrary field identifiers to loose
/// `{label, key, value}` objects. Any of the three members may be
/// missing or non-string, so entries are kept as raw JSON values and
/// read leniently during extraction. The map preserves the order the
/// sender serialized the fields in.
#[derive(Debug, Deserialize)]
pub struct FormSubmitPayload {
    #[serde(default)]
    pub form_submit_data: serde_json::Map<String, Value>,
}

/// Contact details echoed back to the webhook caller
#[derive(Debug, Serialize, PartialEq)]
pub struct ContactInfo {
    /// Trimmed full name
    pub name: String,
    /// Phone in E.164 form
    pub phone: String,
    /// Last six digits of the phone, a short fingerprint for logs
    pub last6: String,
}

impl From<super::handler::Contact> for ContactInfo {
    fn from(contact: super::handler::Contact) -> Self {
        Self {
            name: contact.name,
            phone: contact.phone,
            last6: contact.last6,
        }
    }
}

/// Success-path response body. Absent optional fields are omitted from
/// the JSON, not serialized as `null`.
#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub ok: bool,
    /// Present (true) when both provider calls went through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent: Option<bool>,
    /// Present (true) when the duplicate filter suppressed the send
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
    /// Present when the provider is not configured yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub contact: ContactInfo,
    /// Last provider response body, full success only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Value>,
}

impl RelayResponse {
    /// Both provider calls succeeded.
    pub fn sent(contact: ContactInfo, provider: Value) -> Self {
        Self {
            ok: true,
            sent: Some(true),
            skipped: None,
            warning: None,
            contact,
            provider: Some(provider),
        }
    }

    /// Provider not configured: accepted without forwarding.
    pub fn degraded(contact: ContactInfo) -> Self {
        Self {
            ok: true,
            sent: None,
            skipped: None,
            warning: Some(
                "PROVIDER_SEND_ENDPOINT or PROVIDER_TOKEN not configured yet".to_string(),
            ),
            contact,
            provider: None,
        }
    }

    /// Duplicate submission within the retention window.
    pub fn skipped(contact: ContactInfo) -> Self {
        Self {
            ok: true,
            sent: None,
            skipped: Some(true),
            warning: None,
            contact,
            provider: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_payload_deserialization() {
        let json = r#"{
            "form_submit_data": {
                "1": {"label": "Primeiro nome completo", "value": "Maria Silva"},
                "2": {"label": "Telefone Celular", "value": "(11) 91234-5678"}
            }
        }"#;

        let payload: FormSubmitPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.form_submit_data.len(), 2);
        assert_eq!(
            payload.form_submit_data["1"]["value"],
            Value::String("Maria Silva".to_string())
        );
    }

    #[test]
    fn test_form_payload_without_form_submit_data() {
        let payload: FormSubmitPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.form_submit_data.is_empty());
    }

    fn test_contact() -> ContactInfo {
        ContactInfo {
            name: "Maria Silva".to_string(),
            phone: "+5511912345678".to_string(),
            last6: "345678".to_string(),
        }
    }

    #[test]
    fn test_sent_response_shape() {
        let response = RelayResponse::sent(test_contact(), serde_json::json!({"status": "ok"}));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "ok": true,
                "sent": true,
                "contact": {
                    "name": "Maria Silva",
                    "phone": "+5511912345678",
                    "last6": "345678",
                },
                "provider": {"status": "ok"},
            })
        );
    }

    #[test]
    fn test_degraded_response_omits_sent_and_provider() {
        let value = serde_json::to_value(RelayResponse::degraded(test_contact())).unwrap();

        assert_eq!(value["ok"], Value::Bool(true));
        assert!(value.get("sent").is_none());
        assert!(value.get("provider").is_none());
        assert!(value["warning"].as_str().unwrap().contains("not configured"));
    }

    #[test]
    fn test_skipped_response_shape() {
        let value = serde_json::to_value(RelayResponse::skipped(test_contact())).unwrap();

        assert_eq!(value["ok"], Value::Bool(true));
        assert_eq!(value["skipped"], Value::Bool(true));
        assert!(value.get("sent").is_none());
        assert!(value.get("warning").is_none());
    }
}
