//! Binary entrypoint for the cashback HTTP server.
//!
//! Listens on `0.0.0.0:8080`. There are no configuration knobs.

use cashback_server::config::ServerConfig;
use cashback_server::state::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();
    let state = AppState::new();

    let addr = config.socket_addr();
    tracing::info!("cashback server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.inspect_err(|err| {
        tracing::error!("failed to bind {}: {}", addr, err);
    })?;
    cashback_server::serve(listener, state).await.inspect_err(|err| {
        tracing::error!("server stopped: {}", err);
    })
}
