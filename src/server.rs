//! Shared application state and liveness endpoint.

use crate::{config, services};
use ntex::web;

pub struct AppState {
    pub config: config::AppConfig,
    /// `None` while the provider is not configured; webhooks are then
    /// accepted without forwarding.
    pub messenger: Option<services::ImplMessengerService>,
    /// `None` unless the optional duplicate filter is enabled.
    pub dedupe: Option<services::ImplDedupeStore>,
}

/// Liveness probe.
#[web::get("/health")]
pub async fn health() -> impl web::Responder {
    web::HttpResponse::Ok().json(&serde_json::json!({ "ok": true }))
}
