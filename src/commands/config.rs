//! Configuration commands
//!
//! - `config set`: Set a configuration value
//! - `config get`: Read a single value
//! - `config show`: Display current configuration
//!
//! Valid keys: `api_url`, `username`, `role`, `token`. The token is never
//! echoed back in full.

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::{FrontdeskError, Result};
use crate::types::{Role, VALID_ROLES};

pub const VALID_KEYS: &[&str] = &["api_url", "username", "role", "token"];

fn validate_key(key: &str) -> Result<()> {
    if VALID_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(FrontdeskError::Config(format!(
            "unknown config key '{}'. Valid keys: {}",
            key,
            VALID_KEYS.join(", ")
        )))
    }
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    validate_key(key)?;

    let mut config = Config::load()?;
    match key {
        "api_url" => config.set_api_url(value.to_string()),
        "username" => config.set_username(value.to_string()),
        "role" => {
            let role: Role = value.parse().map_err(|_| {
                FrontdeskError::Config(format!(
                    "invalid role '{}'. Must be one of: {}",
                    value,
                    VALID_ROLES.join(", ")
                ))
            })?;
            config.set_role(role);
        }
        "token" => config.set_token(value.to_string()),
        _ => unreachable!("validated above"),
    }
    config.save()?;

    let shown = if key == "token" {
        mask_sensitive_value(value)
    } else {
        value.to_string()
    };

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": &shown,
    }))
    .with_text(format!("Set {key} = {shown}"))
    .print(output_json)
}

/// Read a single configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    validate_key(key)?;

    let config = Config::load()?;
    let value = match key {
        "api_url" => config.api_url(),
        "username" => config.username(),
        "role" => Some(config.role()?.to_string()),
        "token" => config
            .token()
            .map(|_| "configured (not shown)".to_string()),
        _ => unreachable!("validated above"),
    };

    CommandOutput::new(json!({
        "key": key,
        "value": &value,
    }))
    .with_text(value.unwrap_or_else(|| "not configured".to_string()))
    .print(output_json)
}

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    let token_configured = config.token().is_some();
    let json_output = json!({
        "api_url": config.api_url(),
        "username": config.username(),
        "role": config.role()?.to_string(),
        "token_configured": token_configured,
        "config_file": Config::config_path()?.to_string_lossy(),
    });

    let mut text_output = format!("{}\n", "Configuration:".cyan().bold());
    text_output.push_str(&format!(
        "  api_url:  {}\n",
        config
            .api_url()
            .unwrap_or_else(|| "not configured".dimmed().to_string())
    ));
    text_output.push_str(&format!(
        "  username: {}\n",
        config
            .username()
            .unwrap_or_else(|| "not configured".dimmed().to_string())
    ));
    text_output.push_str(&format!("  role:     {}\n", config.role()?));
    let token_status = if token_configured {
        "configured".green().to_string()
    } else {
        "not configured".dimmed().to_string()
    };
    text_output.push_str(&format!("  token:    {token_status}\n"));
    text_output.push_str(&format!(
        "  file:     {}",
        Config::config_path()?.display()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}
