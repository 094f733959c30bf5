//! # Provider API Client
//!
//! HTTP client for the WhatsApp messaging provider. The provider
//! authenticates through the access token embedded in the URL and takes
//! its parameters as JSON body fields.

use super::MessengerService;
use crate::{config, consts};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Text message payload for the provider send endpoint
#[derive(Debug, Serialize)]
pub struct OutgoingTextMessage<'a> {
    /// Recipient phone number, digits only
    pub phone: &'a str,
    /// Message text
    pub message: &'a str,
}

/// Document payload for the provider document endpoint
#[derive(Debug, Serialize)]
pub struct OutgoingDocumentMessage<'a> {
    /// Recipient phone number, digits only
    pub phone: &'a str,
    /// `data:` URI carrying the base64-encoded document
    pub base64: &'a str,
    /// Filename shown to the recipient
    pub name: &'a str,
}

/// Provider API client for sending messages and documents
#[derive(Clone)]
pub struct ProviderClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Full send-message URL, token included
    send_message_url: String,
    /// Full send-document URL, token included
    send_document_url: String,
}

impl ProviderClient {
    /// Creates a new provider client with the configured endpoints and
    /// the fixed per-call timeout.
    pub fn new(app_config: &config::AppConfig) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(consts::PROVIDER_TIMEOUT_SECS))
                .build()
                .context("failed to build provider http client")?,
            send_message_url: app_config.send_message_url(),
            send_document_url: app_config.send_document_url(),
        })
    }

    /// Internal method to post any payload to a provider endpoint
    async fn post_json<T: Serialize>(&self, url: &str, payload: &T) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .context("failed to reach messaging provider")?;

        let status = response.status();
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or_else(|_| serde_json::json!("unreadable provider response body"));

        if !status.is_success() {
            anyhow::bail!("provider returned error status {}: {}", status, body);
        }

        Ok(body)
    }
}

#[async_trait]
impl MessengerService for ProviderClient {
    async fn send_text(&self, phone: &str, message: &str) -> Result<serde_json::Value> {
        self.post_json(
            &self.send_message_url,
            &OutgoingTextMessage { phone, message },
        )
        .await
    }

    async fn send_document(
        &self,
        phone: &str,
        base64_uri: &str,
        filename: &str,
    ) -> Result<serde_json::Value> {
        self.post_json(
            &self.send_document_url,
            &OutgoingDocumentMessage {
                phone,
                base64: base64_uri,
                name: filename,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_text_message_serialization() {
        let message = OutgoingTextMessage {
            phone: "5511912345678",
            message: "Olá!",
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({ "phone": "5511912345678", "message": "Olá!" })
        );
    }

    #[test]
    fn test_outgoing_document_message_serialization() {
        let message = OutgoingDocumentMessage {
            phone: "5511912345678",
            base64: "data:text/vcard;base64,QkVHSU4=",
            name: "contact.vcf",
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({
                "phone": "5511912345678",
                "base64": "data:text/vcard;base64,QkVHSU4=",
                "name": "contact.vcf",
            })
        );
    }
}
