//! reqid server - demo HTTP server for the request ID middleware.
//!
//! Wires `reqid-http` into an axum router with a couple of endpoints that
//! report the identifier each request was given.

pub mod config;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use config::Config;
use reqid_http::ConfigError;

/// Builds the HTTP router with the request ID middleware outermost, so the
/// trace layer and every handler run inside the `requestid` span.
pub fn router(config: &Config) -> Result<Router, ConfigError> {
    let api = Router::new()
        .route("/health", get(routes::health))
        .route("/whoami", get(routes::whoami))
        .layer(TraceLayer::new_for_http());

    reqid_http::with_request_id(api, Some(config.request_id_config()))
}

/// Serve the router on the given listener with graceful shutdown.
pub async fn serve(
    listener: tokio::net::TcpListener,
    app: Router,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
