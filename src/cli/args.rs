//! CLI argument definitions using Clap

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// TranscriptStore - serve transcription records over HTTP
#[derive(Parser, Debug)]
#[command(name = "transcript-store")]
#[command(version = "0.1.0")]
#[command(about = "Serve transcription records stored as JSON files over HTTP")]
#[command(long_about = None)]
pub struct Cli {
    /// Address to bind the server to
    #[arg(short = 'b', long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Directory where record files are stored
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Allowed CORS origin (repeatable; '*' allows any origin)
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origin: Vec<String>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Resolved server options
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub bind: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub cors_origins: Vec<String>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["bind", "port", "data_dir", "cors.allowed_origins"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
