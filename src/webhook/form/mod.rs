//! Form-platform submission webhook.
//!
//! One linear pipeline per request: shared-secret check, field
//! extraction, phone normalization, optional duplicate filter, then two
//! sequential provider calls (welcome message, contact card).

pub mod handler;
pub mod routes;
pub mod schemas;
