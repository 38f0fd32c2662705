//! Configuration CLI commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

use crate::cli::load_config;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration after all overrides
    Show,
}

#[derive(Debug, serde::Serialize)]
pub struct ConfigOutput {
    pub source: String,
    pub config: Config,
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        format!(
            "# source: {}\n{}",
            self.source,
            serde_yaml::to_string(&self.config).unwrap_or_default()
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: ConfigArgs, config_path: Option<&Path>, json_mode: bool) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let config = load_config(config_path)?;
            let source = config_path.map_or_else(
                || ".docstore/config.yaml + .docstore/local.yaml".to_string(),
                |p| p.display().to_string(),
            );
            output(&ConfigOutput { source, config }, json_mode);
        }
    }
    Ok(())
}
