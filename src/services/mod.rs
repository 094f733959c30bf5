pub mod dedupe;
pub mod messenger;

use async_trait::async_trait;

/// Outbound messaging provider.
///
/// Phone numbers are passed digit-only (no `+`), the way the provider
/// expects them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessengerService {
    /// Sends a plain text message and returns the provider response body.
    async fn send_text(&self, phone: &str, message: &str) -> anyhow::Result<serde_json::Value>;

    /// Sends a document as a `data:` URI attachment and returns the
    /// provider response body.
    async fn send_document(
        &self,
        phone: &str,
        base64_uri: &str,
        filename: &str,
    ) -> anyhow::Result<serde_json::Value>;
}

/// Duplicate-submission filter keyed by a phone fingerprint.
///
/// Optional: omitting it has no effect on correctness, it only avoids
/// re-sending the welcome sequence to the same number.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DedupeStore {
    /// True when the key was marked within the retention window.
    async fn seen(&self, key: &str) -> bool;

    /// Records the key as seen now.
    async fn mark(&self, key: &str);
}

pub type ImplMessengerService = Box<dyn MessengerService>;
pub type ImplDedupeStore = Box<dyn DedupeStore>;
