//! Main app runner for server mode

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::http::{build_router, AppState};
use crate::infrastructure::{JsonDirStore, XdgConfigStore};

use super::args::ServerOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the HTTP server until shutdown
pub async fn run_server(options: ServerOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Create the data directory on startup if absent
    let store = JsonDirStore::new(&options.data_dir);
    if let Err(e) = store.ensure_dir().await {
        presenter.error(&format!(
            "Failed to create data directory {}: {}",
            options.data_dir.display(),
            e
        ));
        return ExitCode::from(EXIT_ERROR);
    }

    let state = AppState::new(Arc::new(store));
    let app = build_router(state, &options.cors_origins);

    let addr = SocketAddr::new(options.bind, options.port);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            presenter.error(&format!("Failed to bind {}: {}", addr, e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    tracing::info!("Listening on http://{}", addr);
    presenter.info(&format!(
        "Serving transcriptions from {} on http://{}",
        options.data_dir.display(),
        addr
    ));

    match axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Resolve when Ctrl-C is received
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server can only be killed hard
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
