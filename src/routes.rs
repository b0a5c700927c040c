//! HTTP handlers.

use axum::Json;
use reqid_http::{IdSource, RequestId};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Identifier assigned to the current request, as seen by a handler.
#[derive(Serialize)]
pub struct WhoAmIResponse {
    pub request_id: RequestId,
    pub source: IdSource,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Echoes the request ID attached by the middleware.
///
/// Responds 500 `missing_request_id` when the path is configured to skip it.
pub async fn whoami(id: RequestId) -> Json<WhoAmIResponse> {
    tracing::info!(source = %id.source(), "whoami");
    Json(WhoAmIResponse {
        source: id.source(),
        request_id: id,
    })
}
