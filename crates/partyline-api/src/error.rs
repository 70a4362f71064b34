use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("request body error: {0}")]
    Transport(String),

    #[error("completion call failed: {0}")]
    Upstream(#[from] anyhow::Error),
}

/// Error body shape: `message` always, `error` only for upstream failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MethodNotAllowed => {
                tracing::warn!("Rejected non-POST request");
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    ErrorBody {
                        message: "Method Not Allowed".to_string(),
                        error: None,
                    },
                )
            }
            ApiError::BadRequest(ref reason) => {
                tracing::warn!("Rejected request: {}", reason);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        message: self.to_string(),
                        error: None,
                    },
                )
            }
            ApiError::Transport(ref e) => {
                tracing::error!("Error receiving request: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "Internal Server Error".to_string(),
                        error: None,
                    },
                )
            }
            ApiError::Upstream(ref e) => {
                tracing::error!("Error generating response: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "Internal Server Error".to_string(),
                        error: Some(e.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_message() {
        let err = ApiError::BadRequest("Missing \"message\" in request body".to_string());
        assert_eq!(
            err.to_string(),
            "Bad Request: Missing \"message\" in request body"
        );
    }

    #[test]
    fn test_error_body_omits_absent_diagnostic() {
        let body = ErrorBody {
            message: "Internal Server Error".to_string(),
            error: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_error_body_includes_diagnostic() {
        let body = ErrorBody {
            message: "Internal Server Error".to_string(),
            error: Some("boom".to_string()),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"error\":\"boom\""));
    }
}
