//! Webhook error responses.
//!
//! Every failure is surfaced synchronously as a JSON body with an
//! `ok: false` flag; nothing is retried and nothing is persisted.

use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};

#[derive(Debug, Display, Error)]
pub enum RelayError {
    #[display("unauthorized")]
    Unauthorized,
    #[display("invalid payload: {_0}")]
    InvalidPayload(#[error(not(source))] String),
    #[display("missing name/phone")]
    MissingContact { name: String, phone_raw: String },
    #[display("provider call failed: {_0}")]
    Provider(#[error(not(source))] String),
}

impl web::error::WebResponseError for RelayError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        let body = match self {
            RelayError::Unauthorized => serde_json::json!({
                "ok": false,
                "error": "unauthorized",
            }),
            RelayError::InvalidPayload(msg) => serde_json::json!({
                "ok": false,
                "error": format!("invalid payload: {}", msg),
            }),
            RelayError::MissingContact { name, phone_raw } => serde_json::json!({
                "ok": false,
                "error": "missing name/phone",
                "name": name,
                "phoneRaw": phone_raw,
            }),
            RelayError::Provider(details) => serde_json::json!({
                "ok": false,
                "error": details,
            }),
        };

        web::HttpResponse::build(self.status_code()).json(&body)
    }

    fn status_code(&self) -> http::StatusCode {
        match self {
            RelayError::Unauthorized => http::StatusCode::UNAUTHORIZED,
            RelayError::InvalidPayload(_) | RelayError::MissingContact { .. } => {
                http::StatusCode::BAD_REQUEST
            }
            RelayError::Provider(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntex::web::error::WebResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RelayError::Unauthorized.status_code(),
            http::StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            RelayError::InvalidPayload("bad json".into()).status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::MissingContact {
                name: String::new(),
                phone_raw: "123".into(),
            }
            .status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::Provider("timeout".into()).status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(RelayError::Unauthorized.to_string(), "unauthorized");
        assert_eq!(
            RelayError::MissingContact {
                name: String::new(),
                phone_raw: "123".into(),
            }
            .to_string(),
            "missing name/phone"
        );
    }
}
