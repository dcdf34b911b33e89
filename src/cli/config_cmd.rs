//! Config command handler

use std::net::IpAddr;

use crate::application::ports::ConfigStore;
use crate::domain::config::CorsConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "bind" => config.bind = Some(value.to_string()),
        "port" => {
            config.port = Some(value.parse().map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a port number (0-65535)".to_string(),
            })?)
        }
        "data_dir" => config.data_dir = Some(value.to_string()),
        "cors.allowed_origins" => {
            // Initialize cors section if None
            if config.cors.is_none() {
                config.cors = Some(CorsConfig::default());
            }
            if let Some(ref mut cors) = config.cors {
                cors.allowed_origins = Some(parse_origin_list(value));
            }
        }
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "bind" => config.bind,
        "port" => config.port.map(|p| p.to_string()),
        "data_dir" => config.data_dir,
        "cors.allowed_origins" => config
            .cors
            .as_ref()
            .and_then(|c| c.allowed_origins.as_ref())
            .map(|origins| origins.join(",")),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("bind", config.bind.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "port",
        &config
            .port
            .map(|p| p.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "data_dir",
        config.data_dir.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "cors.allowed_origins",
        &config
            .cors
            .as_ref()
            .and_then(|c| c.allowed_origins.as_ref())
            .map(|origins| origins.join(","))
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "bind" => {
            value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!("Invalid address '{}'. Expected an IP address", value),
                })?;
        }
        "port" => {
            value
                .parse::<u16>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a port number (0-65535)".to_string(),
                })?;
        }
        "cors.allowed_origins" => {
            if parse_origin_list(value).is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a comma-separated list of origins or '*'".to_string(),
                });
            }
        }
        _ => {} // data_dir accepts any string
    }
    Ok(())
}

/// Parse a comma-separated origin list
fn parse_origin_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origin_list_single() {
        assert_eq!(parse_origin_list("*"), vec!["*".to_string()]);
    }

    #[test]
    fn parse_origin_list_multiple_with_spaces() {
        assert_eq!(
            parse_origin_list("http://a.example, http://b.example"),
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );
    }

    #[test]
    fn parse_origin_list_drops_empty_entries() {
        assert_eq!(
            parse_origin_list("http://a.example,,"),
            vec!["http://a.example".to_string()]
        );
    }

    #[test]
    fn validate_bind_valid() {
        assert!(validate_config_value("bind", "0.0.0.0").is_ok());
        assert!(validate_config_value("bind", "127.0.0.1").is_ok());
        assert!(validate_config_value("bind", "::1").is_ok());
    }

    #[test]
    fn validate_bind_invalid() {
        assert!(validate_config_value("bind", "localhost:8000").is_err());
        assert!(validate_config_value("bind", "not-an-address").is_err());
    }

    #[test]
    fn validate_port_valid() {
        assert!(validate_config_value("port", "8000").is_ok());
        assert!(validate_config_value("port", "0").is_ok());
        assert!(validate_config_value("port", "65535").is_ok());
    }

    #[test]
    fn validate_port_invalid() {
        assert!(validate_config_value("port", "65536").is_err());
        assert!(validate_config_value("port", "-1").is_err());
        assert!(validate_config_value("port", "abc").is_err());
    }

    #[test]
    fn validate_origins_valid() {
        assert!(validate_config_value("cors.allowed_origins", "*").is_ok());
        assert!(validate_config_value("cors.allowed_origins", "http://a,http://b").is_ok());
    }

    #[test]
    fn validate_origins_empty_invalid() {
        assert!(validate_config_value("cors.allowed_origins", "").is_err());
        assert!(validate_config_value("cors.allowed_origins", " , ").is_err());
    }

    #[test]
    fn validate_data_dir_accepts_any_string() {
        assert!(validate_config_value("data_dir", "anything goes").is_ok());
    }
}
