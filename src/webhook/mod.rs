//! Webhook handlers for external integrations
//!
//! ## Modules
//!
//! - [`form`] - form-platform submission webhook

pub mod errors;
pub mod form;
pub mod routes;
