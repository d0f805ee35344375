//! Application configuration.
//!
//! Configuration is stored in the platform config directory (for example
//! `~/.config/frontdesk/config.yaml`) and includes:
//! - The ticket service base URL
//! - The acting identity (username and role)
//! - The bearer token used for write operations
//!
//! Environment variables override the file: `FRONTDESK_API_URL`,
//! `FRONTDESK_USER`, `FRONTDESK_ROLE`, `FRONTDESK_TOKEN`, and
//! `FRONTDESK_CONFIG` (full path to an alternate config file).

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::auth::Viewer;
use crate::error::{FrontdeskError, Result};
use crate::types::Role;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the ticket service, e.g. `https://helpdesk.example.com/api`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Username the service knows the viewer by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Role the viewer acts as (defaults to `user`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Authentication
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Path to the config file. `FRONTDESK_CONFIG` overrides the platform
    /// default location.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var("FRONTDESK_CONFIG")
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("", "", "frontdesk").ok_or_else(|| {
            FrontdeskError::Config("could not determine a config directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            FrontdeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FrontdeskError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            FrontdeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // The file holds a bearer token. Owner read/write only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions).map_err(|e| {
                FrontdeskError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to set permissions on config at {}: {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }

        Ok(())
    }

    /// Get the service base URL from environment or config file
    pub fn api_url(&self) -> Option<String> {
        if let Ok(url) = env::var("FRONTDESK_API_URL")
            && !url.is_empty()
        {
            return Some(url);
        }

        self.api_url.clone()
    }

    pub fn require_api_url(&self) -> Result<String> {
        self.api_url().ok_or_else(|| {
            FrontdeskError::Config(
                "no API URL configured. Set FRONTDESK_API_URL or run: frontdesk config set api_url <url>"
                    .to_string(),
            )
        })
    }

    /// Get the bearer token from environment or config file
    pub fn token(&self) -> Option<SecretString> {
        if let Ok(token) = env::var("FRONTDESK_TOKEN")
            && !token.is_empty()
        {
            return Some(SecretString::from(token));
        }

        self.auth.token.clone().map(SecretString::from)
    }

    pub fn username(&self) -> Option<String> {
        if let Ok(name) = env::var("FRONTDESK_USER")
            && !name.is_empty()
        {
            return Some(name);
        }

        self.username.clone()
    }

    /// Acting role, defaulting to `user` when nothing is configured
    pub fn role(&self) -> Result<Role> {
        if let Ok(raw) = env::var("FRONTDESK_ROLE")
            && !raw.is_empty()
        {
            return raw.parse();
        }

        Ok(self.role.unwrap_or_default())
    }

    /// Build the acting identity passed into every session and service call.
    pub fn viewer(&self) -> Result<Viewer> {
        let username = self.username().ok_or_else(|| {
            FrontdeskError::Config(
                "no username configured. Set FRONTDESK_USER or run: frontdesk config set username <name>"
                    .to_string(),
            )
        })?;

        let mut viewer = Viewer::new(username, self.role()?);
        if let Some(token) = self.token() {
            viewer = viewer.with_token(token);
        }
        Ok(viewer)
    }

    pub fn set_api_url(&mut self, url: String) {
        self.api_url = Some(url);
    }

    pub fn set_username(&mut self, username: String) {
        self.username = Some(username);
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub fn set_token(&mut self, token: String) {
        self.auth.token = Some(token);
    }
}
