use crate::config::toml_config::TomlConfig;
use crate::config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL, TOKEN_ENV};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "wger")]
#[command(about = "Command-line access to the wger workout API")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with an [api] table")]
    pub config: Option<PathBuf>,

    #[arg(long, env = BASE_URL_ENV, help = "API base URL [default: https://wger.de/api/v2]")]
    pub base_url: Option<String>,

    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List exercises, 20 per page
    Exercises {
        #[arg(long, default_value = "0")]
        offset: u32,

        /// Extra filter, repeatable: --filter category=10
        #[arg(long = "filter", value_parser = parse_key_value)]
        filters: Vec<(String, String)>,
    },
    /// Show one exercise with translations and images
    ExerciseInfo { id: u64 },
    /// List exercise categories
    Categories,
    /// List the user's own non-template routines
    Routines,
    /// Show one routine
    Routine { id: u64 },
    /// Show the day/slot structure of a routine
    RoutineStructure { id: u64 },
    /// POST a JSON payload to /<type>/
    Save {
        #[arg(value_name = "TYPE")]
        kind: String,

        #[arg(long)]
        data: String,
    },
    /// Create a slot in a routine day
    CreateSlot {
        #[arg(long)]
        data: String,
    },
    /// Create an exercise entry in a slot
    CreateSlotEntry {
        #[arg(long)]
        data: String,
    },
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))
}

impl CliConfig {
    /// File settings first, then flags/env on top. Unset values fall back to
    /// the defaults.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_client_config(),
            None => ClientConfig::new(DEFAULT_BASE_URL, ""),
        };

        if let Some(base_url) = self.base_url.as_ref().filter(|v| !v.is_empty()) {
            config.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.token = token.clone();
        }

        Ok(config)
    }
}
