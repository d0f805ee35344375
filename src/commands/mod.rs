pub mod interactive;

mod assign;
mod comment;
mod config;
mod create;
mod ls;
mod roster;
mod show;
mod stats;
mod status;

pub use assign::{cmd_assign, cmd_take};
pub use comment::cmd_comment;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::{CreateOptions, cmd_create};
pub use ls::cmd_ls;
pub use roster::cmd_roster;
pub use show::cmd_show;
pub use stats::cmd_stats;
pub use status::{cmd_close, cmd_resolve};

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::service::HttpTicketService;

/// Dual-format command result: JSON for scripting, text for humans.
///
/// Every command builds both representations and lets the `--json` flag pick
/// which one is printed.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        CommandOutput { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output_json: bool) -> Result<()> {
        if output_json {
            println!("{}", serde_json::to_string_pretty(&self.json)?);
        } else if let Some(text) = self.text {
            println!("{text}");
        }
        Ok(())
    }
}

/// Load config and build the service client every command talks through.
pub fn connect() -> Result<(Config, HttpTicketService)> {
    let config = Config::load()?;
    let service = HttpTicketService::from_config(&config)?;
    Ok((config, service))
}
