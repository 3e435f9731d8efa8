use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use brawlgate_brawlstars::api::BrawlStarsApiError;
use brawlgate_core::tag::TagError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps tag validation errors and upstream client errors, and implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The tag in the request body failed validation.
    #[error(transparent)]
    Tag(#[from] TagError),

    /// The requested entity does not exist upstream.
    #[error("{entity} not found")]
    NotFound {
        /// Human-readable entity name, e.g. `"Player"`.
        entity: &'static str,
    },

    /// An error from the upstream Brawl Stars API client.
    #[error(transparent)]
    Upstream(#[from] BrawlStarsApiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Translate an upstream client error, attributing 404s to `entity`
    /// so the caller sees e.g. `"Player not found"` instead of a generic
    /// message.
    pub fn from_upstream(entity: &'static str, err: BrawlStarsApiError) -> Self {
        match err {
            BrawlStarsApiError::NotFound => AppError::NotFound { entity },
            other => AppError::Upstream(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Tag(err) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string()),

            AppError::NotFound { entity } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} not found"),
            ),

            AppError::Upstream(upstream) => match upstream {
                BrawlStarsApiError::NotFound => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Resource not found upstream".to_string(),
                ),
                // Relay the upstream status where representable; anything
                // else becomes a bad-gateway response.
                BrawlStarsApiError::Api { status, body } => (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    "UPSTREAM_ERROR",
                    format!("Upstream error ({status}): {body}"),
                ),
                BrawlStarsApiError::Request(err) => {
                    tracing::error!(error = %err, "Upstream request failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
