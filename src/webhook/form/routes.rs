//! Form webhook endpoint handler
//!
//! Receives submission events from the form platform and drives the
//! relay pipeline. Authentication is an optional static shared secret
//! in the `x-webhook-secret` header, compared in constant time.

use super::{handler, schemas};
use crate::{server::AppState, webhook::errors::RelayError};
use log::{info, warn};
use ntex::{util::Bytes, web};
use subtle::ConstantTimeEq;

/// Constant-time shared-secret comparison.
fn secret_matches(supplied: &str, expected: &str) -> bool {
    supplied.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Marks the contact's phone fingerprint when the duplicate filter is
/// enabled. Only called after the pipeline accepted the submission.
async fn mark_seen(state: &AppState, contact: &handler::Contact) {
    if let Some(dedupe) = &state.dedupe {
        dedupe.mark(&handler::digits(&contact.phone)).await;
    }
}

/// Webhook receiver endpoint (POST)
///
/// Single linear pipeline with early-exit branches:
/// auth fail → validation fail → duplicate skip → degraded mode →
/// full send → provider error.
///
/// # Responses
/// - `200` sent / degraded / duplicate-skip variants
/// - `400` malformed payload, missing name, or unnormalizable phone
/// - `401` bad or missing shared secret when one is configured
/// - `500` provider call failure, diagnostics included
#[web::post("")]
pub async fn receive(
    req: web::HttpRequest,
    body: Bytes,
    state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let config = &state.config;

    if !config.webhook_secret.is_empty() {
        let supplied = req
            .headers()
            .get("x-webhook-secret")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if !secret_matches(supplied, &config.webhook_secret) {
            warn!("webhook rejected: bad or missing x-webhook-secret header");
            return Err(RelayError::Unauthorized.into());
        }
    }

    let payload: schemas::FormSubmitPayload = serde_json::from_slice(&body)
        .map_err(|e| RelayError::InvalidPayload(e.to_string()))?;

    let contact = handler::extract_contact(&payload)
        .map_err(|(name, phone_raw)| RelayError::MissingContact { name, phone_raw })?;

    info!(
        "contact extracted: name={} phone=...{}",
        contact.name, contact.last6
    );

    if let Some(dedupe) = &state.dedupe {
        if dedupe.seen(&handler::digits(&contact.phone)).await {
            info!("duplicate submission for ...{}, skipping send", contact.last6);
            return Ok(
                web::HttpResponse::Ok().json(&schemas::RelayResponse::skipped(contact.into()))
            );
        }
    }

    let Some(messenger) = &state.messenger else {
        warn!("provider not configured; accepting submission without forwarding");
        mark_seen(&state, &contact).await;
        return Ok(web::HttpResponse::Ok().json(&schemas::RelayResponse::degraded(contact.into())));
    };

    let provider_body = handler::relay(&contact, messenger, config.send_delay_ms)
        .await
        .map_err(|e| RelayError::Provider(format!("{:#}", e)))?;

    info!("relay complete for ...{}", contact.last6);
    mark_seen(&state, &contact).await;

    Ok(web::HttpResponse::Ok()
        .json(&schemas::RelayResponse::sent(contact.into(), provider_body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_matches_exact_value_only() {
        assert!(secret_matches("s3cret", "s3cret"));
        assert!(!secret_matches("s3cret2", "s3cret"));
        assert!(!secret_matches("s3cre", "s3cret"));
        assert!(!secret_matches("", "s3cret"));
    }
}
