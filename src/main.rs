//! # Form Relay
//!
//! Main entry point for the form-to-WhatsApp relay service.
//! Receives form-submission webhooks, extracts a contact name and phone
//! number, and forwards a welcome message plus a contact card to the
//! WhatsApp messaging provider.

pub mod config;
pub mod consts;
pub mod logger;
pub mod server;
pub mod services;
pub mod webhook;

use anyhow::Context;
use envconfig::Envconfig;
use log::{info, warn};
use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::AppConfig::init_from_env()
        .context("failed to load configuration from environment")?;

    logger::setup_simple_logger()?;

    // Without a send endpoint and token the service still accepts
    // webhooks but forwards nothing (accept-only mode).
    let messenger = if app_config.provider_configured() {
        Some(services::messenger::ProviderClient::new(&app_config)?)
    } else {
        warn!("provider send endpoint or token not configured; running in accept-only mode");
        None
    };

    let dedupe = if app_config.dedupe_enabled {
        let store = services::dedupe::InMemoryDedupeStore::new(app_config.dedupe_retention());
        store.spawn_sweeper();
        Some(store)
    } else {
        None
    };

    configure_and_run_server(app_config, messenger, dedupe).await
}

/// Configures and starts the web server.
async fn configure_and_run_server(
    app_config: config::AppConfig,
    messenger: Option<services::messenger::ProviderClient>,
    dedupe: Option<services::dedupe::InMemoryDedupeStore>,
) -> anyhow::Result<()> {
    let server_addr = ("0.0.0.0", app_config.port);
    info!("listening on port {}", app_config.port);

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(create_app_state(
                app_config.clone(),
                messenger.clone(),
                dedupe.clone(),
            ))
            .service(server::health)
            .configure(webhook::routes::ninja)
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("server error: {}", e))
}

/// Creates application state from the provided services.
fn create_app_state(
    app_config: config::AppConfig,
    messenger: Option<services::messenger::ProviderClient>,
    dedupe: Option<services::dedupe::InMemoryDedupeStore>,
) -> server::AppState {
    server::AppState {
        config: app_config,
        messenger: messenger.map(|m| Box::new(m) as services::ImplMessengerService),
        dedupe: dedupe.map(|d| Box::new(d) as services::ImplDedupeStore),
    }
}
