//! TranscriptStore server entry point

use std::net::IpAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use transcript_store::cli::{
    app::{load_merged_config, run_server, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, ServerOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use transcript_store::domain::config::{AppConfig, CorsConfig};
use transcript_store::infrastructure::XdgConfigStore;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("transcript_store=info")),
        )
        .init();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        bind: cli.bind.clone(),
        port: cli.port,
        data_dir: cli.data_dir.clone(),
        cors: if cli.cors_origin.is_empty() {
            None
        } else {
            Some(CorsConfig {
                allowed_origins: Some(cli.cors_origin.clone()),
            })
        },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Parse bind address
    let bind = match config.bind_or_default().parse::<IpAddr>() {
        Ok(addr) => addr,
        Err(_) => {
            presenter.error(&format!(
                "Invalid bind address: {}",
                config.bind_or_default()
            ));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = ServerOptions {
        bind,
        port: config.port_or_default(),
        data_dir: PathBuf::from(config.data_dir_or_default()),
        cors_origins: config.cors_origins_or_default(),
    };

    run_server(options).await
}
