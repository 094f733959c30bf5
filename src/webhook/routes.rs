use ntex::web;

/// Configures webhook routes for the form platform.
///
/// These routes are public endpoints; authentication is the optional
/// shared-secret header checked inside the handler.
///
/// # Routes
/// - `POST /webhook/ninja` - form submission receiver
pub fn ninja(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/webhook/ninja").service(super::form::routes::receive));
}
