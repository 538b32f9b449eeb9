use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::commands::load_merged;
use crate::output;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(short, long, help = "Config file (defaults to twconf.{toml,yaml,json})")]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
    pub format: OutputFormat,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let (located, config) = load_merged(args.config.as_deref())?;

    if located.is_none() {
        output::info("No config file found, showing defaults and environment overrides");
    }

    let rendered = match args.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&config).context("Failed to render JSON")?
        }
        OutputFormat::Yaml => serde_yaml::to_string(&config).context("Failed to render YAML")?,
        OutputFormat::Toml => toml::to_string_pretty(&config).context("Failed to render TOML")?,
    };

    println!("{rendered}");

    Ok(())
}
