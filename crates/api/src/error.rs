use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_bridge::BridgeError;
use catalog_core::error::CoreError;
use catalog_core::presentation::StatusBanner;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`BridgeError`] for upstream
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An upstream character API could not be used.
    #[error(transparent)]
    Upstream(#[from] BridgeError),

    /// An upstream load failed; `status` is the banner the client shows.
    #[error("{source}")]
    UpstreamLoad {
        #[source]
        source: BridgeError,
        status: StatusBanner,
    },

    /// A path parameter that cannot name any resource.
    #[error("Not found")]
    NotFound,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", "Not found".to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Selection(msg) => {
                    (StatusCode::BAD_REQUEST, "SELECTION_ERROR", msg.clone())
                }
            },

            // --- Upstream errors ---
            AppError::Upstream(err) | AppError::UpstreamLoad { source: err, .. } => {
                tracing::warn!(error = %err, "Upstream character API unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_UNAVAILABLE",
                    format!("Upstream character API unavailable: {err}"),
                )
            }

            // --- HTTP-specific errors ---
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "Not found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let AppError::UpstreamLoad { status: banner, .. } = &self {
            body["status"] = json!(banner);
        }

        (status, axum::Json(body)).into_response()
    }
}
