//! Application configuration management.
//!
//! All runtime configuration comes from environment variables with safe
//! defaults. The provider credentials may legitimately be absent: the
//! service then accepts webhooks without forwarding anything.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should use secure secret management systems

use envconfig::Envconfig;

/// Application configuration, loaded once at startup and carried in the
/// application state (no process-wide static).
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "3000")]
    pub port: u16,

    /// 🔒 SENSITIVE: shared secret expected in the `x-webhook-secret`
    /// header. Empty disables the check entirely.
    #[envconfig(default = "")]
    pub webhook_secret: String,

    /// Messaging provider base URL (NON-SENSITIVE)
    #[envconfig(default = "https://api-whatsapp.wascript.com.br")]
    pub provider_base_url: String,

    /// Provider send-message path segment (NON-SENSITIVE)
    /// Empty means the provider is not configured yet.
    #[envconfig(default = "")]
    pub provider_send_endpoint: String,

    /// 🔒 SENSITIVE: provider access token, appended to outbound URLs.
    /// Empty means the provider is not configured yet.
    #[envconfig(default = "")]
    pub provider_token: String,

    /// Pacing delay between the message send and the contact-card send,
    /// in milliseconds (NON-SENSITIVE)
    #[envconfig(default = "2000")]
    pub send_delay_ms: u64,

    /// Enables the optional in-memory duplicate-submission filter
    /// (NON-SENSITIVE)
    #[envconfig(default = "false")]
    pub dedupe_enabled: bool,

    /// Retention window for the duplicate filter, in days (NON-SENSITIVE)
    #[envconfig(default = "7")]
    pub dedupe_retention_days: i64,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// True once both the send endpoint and the token are present.
    pub fn provider_configured(&self) -> bool {
        !self.provider_send_endpoint.is_empty() && !self.provider_token.is_empty()
    }

    /// Constructs the provider endpoint for sending a text message
    pub fn send_message_url(&self) -> String {
        format!(
            "{base}{endpoint}/{token}",
            base = self.provider_base_url,
            endpoint = self.provider_send_endpoint,
            token = self.provider_token
        )
    }

    /// Constructs the provider endpoint for sending a document
    pub fn send_document_url(&self) -> String {
        format!(
            "{base}{endpoint}/{token}",
            base = self.provider_base_url,
            endpoint = crate::consts::PROVIDER_DOCUMENT_ENDPOINT,
            token = self.provider_token
        )
    }

    /// Retention window for the duplicate filter
    pub fn dedupe_retention(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::days(self.dedupe_retention_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            env: "local".to_string(),
            port: 3000,
            webhook_secret: String::new(),
            provider_base_url: "https://api-whatsapp.wascript.com.br".to_string(),
            provider_send_endpoint: "/api/enviar-mensagem".to_string(),
            provider_token: "tok123".to_string(),
            send_delay_ms: 2000,
            dedupe_enabled: false,
            dedupe_retention_days: 7,
        }
    }

    #[test]
    fn test_send_message_url() {
        assert_eq!(
            test_config().send_message_url(),
            "https://api-whatsapp.wascript.com.br/api/enviar-mensagem/tok123"
        );
    }

    #[test]
    fn test_send_document_url() {
        assert_eq!(
            test_config().send_document_url(),
            "https://api-whatsapp.wascript.com.br/api/enviar-documento/tok123"
        );
    }

    #[test]
    fn test_provider_configured() {
        assert!(test_config().provider_configured());

        let mut config = test_config();
        config.provider_token = String::new();
        assert!(!config.provider_configured());

        let mut config = test_config();
        config.provider_send_endpoint = String::new();
        assert!(!config.provider_configured());
    }

    #[test]
    fn test_is_prod() {
        let mut config = test_config();
        assert!(!config.is_prod());
        config.env = "PROD".to_string();
        assert!(config.is_prod());
    }
}
