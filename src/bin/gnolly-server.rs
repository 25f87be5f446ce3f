//! gnolly HTTP API server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::signal;
use tower_http::trace::TraceLayer;

use gnolly::server::{AppState, Config, init_logging, router};
use gnolly::{Service, Store};

/// gnolly HTTP API server.
#[derive(Parser, Debug)]
#[command(name = "gnolly-server")]
#[command(about = "HTTP API server for the gnolly key-value record store")]
struct Args {
    /// Path to the configuration file. Defaults are used when omitted.
    #[arg(short, long, env = "GNOLLY_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address, overriding `server.bind`.
    #[arg(long, env = "GNOLLY_BIND")]
    bind: Option<String>,

    /// Port, overriding `server.port`.
    #[arg(short, long, env = "GNOLLY_PORT")]
    port: Option<u16>,

    /// Database directory, overriding `storage.path`.
    #[arg(long, env = "GNOLLY_DB")]
    db: Option<PathBuf>,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(db) = &self.db {
            config.storage.path = db.clone();
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration first (needed for logging setup)
    let config = args.load_config()?;
    init_logging(&config.logging)?;

    // The store is owned by the state from here on; any early return below
    // drops it and closes the database.
    let store = Store::open(&config.storage.path, &config.storage.partition)?;
    let state = AppState::new(Service::new(store));

    let app = router(state.clone()).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match state.into_service() {
        Some(service) => service.into_inner().close()?,
        None => tracing::warn!("requests still in flight, store closed on drop"),
    }

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
