//! reqid server entry point.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use reqid_server::config::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        header = %config.header,
        skip_paths = ?config.skip_paths,
        sequential = config.id_prefix.is_some(),
        "reqid server starting",
    );

    let app = reqid_server::router(&config).expect("invalid request id configuration");

    let addr = SocketAddr::new(config.host.parse().expect("invalid host"), config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "reqid server ready");

    reqid_server::serve(listener, app, shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("reqid server shut down");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install signal handler");
    tracing::info!("Shutdown signal received");
}
