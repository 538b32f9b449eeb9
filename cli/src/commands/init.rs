use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use config::BuildConfig;

use crate::output;

#[derive(Args)]
pub struct InitArgs {
    #[arg(short, long, help = "Directory to initialize (defaults to current)")]
    pub path: Option<PathBuf>,

    #[arg(long, help = "Force overwrite an existing twconf.toml")]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let target_dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let config_file = target_dir.join("twconf.toml");

    if config_file.exists() && !args.force {
        output::warn(&format!(
            "Config already exists at {}",
            config_file.display()
        ));
        output::info("Use --force to overwrite");
        return Ok(());
    }

    let config = BuildConfig::default();
    let toml_content =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    fs::write(&config_file, toml_content)
        .with_context(|| format!("Failed to write {}", config_file.display()))?;

    println!(
        "{} Wrote default build config to {}",
        "✓".green().bold(),
        config_file.display()
    );

    println!("\n{}", "Defaults:".bold());
    for pattern in &config.content {
        println!("  content:    {}", pattern.cyan());
    }
    for plugin in &config.plugins {
        println!("  plugin:     {}", plugin.cyan());
    }

    Ok(())
}
