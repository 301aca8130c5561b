use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid number input: {raw:?}")]
    InvalidNumber { raw: Option<String> },

    #[error("Configuration error: {field} = {value}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Wire shape of a validation failure: the raw token echoed back, or the
/// field omitted entirely when the parameter was absent.
#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    error: bool,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidNumber { raw } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    number: raw,
                    error: true,
                }),
            )
                .into_response(),
            // 其他錯誤不會從請求路徑產生，保守地回 500
            other => {
                tracing::error!("Unexpected internal error: {}", other);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_echoes_raw_token() {
        let body = ErrorBody {
            number: Some("abc".to_string()),
            error: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"number": "abc", "error": true}));
    }

    #[test]
    fn test_invalid_number_maps_to_bad_request() {
        let response = ApiError::InvalidNumber {
            raw: Some("abc".to_string()),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let response = ApiError::InvalidConfigValue {
            field: "port".to_string(),
            value: "0".to_string(),
            reason: "Port must be between 1 and 65535".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_omits_absent_token() {
        let body = ErrorBody {
            number: None,
            error: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": true}));
    }
}
