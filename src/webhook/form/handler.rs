//! # Form Webhook Handler
//!
//! Field extraction, phone normalization, and the relay pipeline that
//! forwards the welcome message and the contact card to the provider.

use super::schemas::FormSubmitPayload;
use crate::{consts, services};
use anyhow::Result;
use base64::{Engine, prelude::BASE64_STANDARD};
use serde_json::Value;
use std::time::Duration;

/// Contact derived from one form submission. Lives only for the
/// duration of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Trimmed full name
    pub name: String,
    /// Phone in E.164 form, `+55...`
    pub phone: String,
    /// Last six digits of the phone
    pub last6: String,
}

/// Keeps only the ASCII digits of a raw value.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalizes a raw phone value into Brazilian E.164.
///
/// Strips every non-digit character; a digit string already carrying
/// the `55` country code only gains the `+`, otherwise anything with at
/// least ten digits (area code plus subscriber) gains a `+55` prefix.
/// Shorter values cannot be normalized.
pub fn to_e164_br(raw: &str) -> Option<String> {
    let d = digits(raw);
    if d.starts_with("55") {
        return Some(format!("+{}", d));
    }
    if d.len() >= 10 {
        return Some(format!("+55{}", d));
    }
    None
}

/// Reads a member of a form field entry as a string, the way a loosely
/// typed sender would: missing and null become empty, non-strings keep
/// their JSON rendering.
fn field_str(item: &Value, member: &str) -> String {
    match item.get(member) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Locates a field value inside the form mapping.
///
/// Walks the mapping in the order the sender serialized it (provider
/// determined, not canonical). For each entry the label substring is
/// checked first, then the key substring; the first entry matching
/// either wins. Both comparisons are case-insensitive. Returns an empty
/// string when nothing matches.
pub fn pick_field_value(
    payload: &FormSubmitPayload,
    label_contains: &str,
    key_contains: &str,
) -> String {
    let wanted_label = label_contains.to_lowercase();
    let wanted_key = key_contains.to_lowercase();

    for item in payload.form_submit_data.values() {
        let label = field_str(item, "label").to_lowercase();
        if label.contains(&wanted_label) {
            return field_str(item, "value");
        }

        let key = field_str(item, "key").to_lowercase();
        if !wanted_key.is_empty() && key.contains(&wanted_key) {
            return field_str(item, "value");
        }
    }

    String::new()
}

/// Derives the contact from a form submission.
///
/// On failure returns the trimmed name and the raw phone value for the
/// diagnostic response body.
pub fn extract_contact(payload: &FormSubmitPayload) -> Result<Contact, (String, String)> {
    let name_raw = pick_field_value(payload, "Primeiro nome", "firstname");
    let phone_raw = pick_field_value(payload, "Telefone", "phone");

    let name = name_raw.trim().to_string();
    let Some(phone) = to_e164_br(&phone_raw) else {
        return Err((name, phone_raw));
    };
    if name.is_empty() {
        return Err((name, phone_raw));
    }

    let phone_digits = digits(&phone);
    let last6 = phone_digits[phone_digits.len().saturating_sub(6)..].to_string();

    Ok(Contact { name, phone, last6 })
}

/// Composes the welcome message for a contact, interpolating the first
/// name (up to the first space) into the fixed template.
pub fn welcome_message(contact: &Contact) -> String {
    let first_name = contact.name.split(' ').next().unwrap_or_default();
    consts::WELCOME_TEMPLATE.replace("{name}", first_name)
}

/// Runs the two sequential provider calls for one contact.
///
/// The welcome message goes out first; the contact card follows after a
/// pacing delay the provider asks for. Any failure aborts the rest of
/// the pipeline. Returns the provider response body of the last call.
pub async fn relay(
    contact: &Contact,
    messenger: &services::ImplMessengerService,
    send_delay_ms: u64,
) -> Result<Value> {
    let phone = digits(&contact.phone);
    let message = welcome_message(contact);

    messenger.send_text(&phone, &message).await?;

    ntex::time::sleep(Duration::from_millis(send_delay_ms)).await;

    let card_base64 = BASE64_STANDARD.encode(consts::CONTACT_VCARD);
    let card_uri = format!("data:text/vcard;base64,{}", card_base64);

    messenger
        .send_document(&phone, &card_uri, consts::CONTACT_CARD_FILENAME)
        .await
}
