//! # mibridged — mibridge daemon
//!
//! Composition root that wires a backend to the command services and starts
//! the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Open the backend session and build both clients once
//! - Assemble the process-wide [`Bridge`] and inject its services into axum
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT) and close the session
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use mibridge_adapter_http_axum::router;
use mibridge_adapter_http_axum::state::AppState;
use mibridge_app::bridge::Bridge;
use mibridge_app::ports::{MiioClient, MinaClient, NetworkSession};
use tracing_subscriber::EnvFilter;

use crate::config::{BackendKind, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let default_did = config.default_did();
    if default_did.is_none() {
        tracing::info!("no default device id configured, miio requests must name mi_did");
    }

    match config.backend.kind {
        BackendKind::Micli => {
            let (session, miio, mina) =
                mibridge_adapter_micli::connect(&config.backend.micli, config.mi_account());
            run(&config, Bridge::new(session, miio, mina, default_did)).await
        }
        BackendKind::Virtual => {
            tracing::warn!("serving the virtual backend, commands never leave this process");
            let (session, miio, mina) = mibridge_adapter_virtual::connect();
            run(&config, Bridge::new(session, miio, mina, default_did)).await
        }
    }
}

/// Serve until a shutdown signal or a server error, then close the session.
async fn run<S, M, N>(config: &Config, bridge: Bridge<S, M, N>) -> Result<(), Box<dyn std::error::Error>>
where
    S: NetworkSession,
    M: MiioClient + 'static,
    N: MinaClient + 'static,
{
    let state = AppState::from_arcs(bridge.miio(), bridge.mina());
    let app = router::build(state);

    let served = serve(&config.bind_addr(), app).await;

    if let Err(err) = bridge.shutdown().await {
        tracing::warn!(error = %err, "failed to close session");
    }
    served
}

async fn serve(bind_addr: &str, app: axum::Router) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("mibridged listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
