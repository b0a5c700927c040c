//! Error types.
//!
//! `ConfigError` is raised at construction time only. `ApiError` is what a
//! handler sees when it asks for a request ID that was never attached; its
//! `IntoResponse` impl (JSON error body) is gated behind the `axum` feature.

/// Raised while turning a [`RequestIdConfig`](crate::RequestIdConfig) into a
/// usable configuration. Never produced per request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configured header name is not a valid HTTP header token.
    #[error("invalid header name: {0:?}")]
    InvalidHeaderName(String),
}

/// Handler-facing error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A handler extracted a `RequestId` but the middleware did not run
    /// for this request (not layered, or skipped).
    #[error("request id missing from request extensions")]
    MissingRequestId,
}

// ---------------------------------------------------------------------------
// HTTP response conversion (feature-gated)
// ---------------------------------------------------------------------------

#[cfg(feature = "axum")]
mod http_impl {
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use serde::Serialize;

    use super::ApiError;

    #[derive(Serialize)]
    pub struct ErrorBody {
        /// Error code (e.g. "missing_request_id").
        pub(crate) error: String,
        /// Human-readable error detail, if available.
        pub(crate) detail: Option<String>,
    }

    impl IntoResponse for ApiError {
        fn into_response(self) -> Response {
            let (status, error) = match &self {
                ApiError::MissingRequestId => {
                    tracing::error!("handler requires a request id but none was attached");
                    (StatusCode::INTERNAL_SERVER_ERROR, "missing_request_id")
                }
            };

            let body = ErrorBody {
                error: error.to_string(),
                detail: Some(self.to_string()),
            };

            (status, axum::Json(body)).into_response()
        }
    }
}

#[cfg(feature = "axum")]
pub use http_impl::ErrorBody;
