/// Server error types
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use hamal_core::HamalError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<HamalError> for ServerError {
    fn from(err: HamalError) -> Self {
        match err {
            HamalError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            HamalError::Conflict(msg) => ServerError::Conflict(msg),
            HamalError::Validation(msg) => ServerError::BadRequest(msg),
            HamalError::Storage(msg) | HamalError::Database(msg) => ServerError::Database(msg),
            HamalError::Other(msg) => ServerError::Internal(msg),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Unauthorized(msg) => {
                let body = Json(json!({ "error": msg }));
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Basic realm=\"hamal-admin\"")],
                    body,
                )
                    .into_response();
            }
            ServerError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Database(ref msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamal_core::ReportId;

    #[test]
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (HamalError::not_found("Report", ReportId::new(1)), StatusCode::NOT_FOUND),
            (HamalError::conflict("taken"), StatusCode::CONFLICT),
            (HamalError::validation("title is required"), StatusCode::BAD_REQUEST),
            (HamalError::storage("disk full"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let response = ServerError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn unauthorized_carries_basic_challenge() {
        let response = ServerError::Unauthorized("login".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }
}
