pub mod check;
pub mod init;
pub mod show;
pub mod watch;

use clap::{Parser, Subcommand};

/// Default configuration file name, tried with each supported extension.
pub const DEFAULT_CONFIG_STEM: &str = "twconf";

#[derive(Parser)]
#[command(
    name = "twconf",
    author,
    version,
    about = "twconf - utility-CSS build configuration loader",
    long_about = "Loads, validates, and watches the build configuration for a \
                  utility-CSS pipeline.\n\nThe configuration names the template files to scan \
                  for class usage, design-token overrides, and the plugins that extend the \
                  generated output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default twconf.toml in the current directory")]
    Init(init::InitArgs),

    #[command(about = "Load the configuration, validate it, and resolve plugin references")]
    Check(check::CheckArgs),

    #[command(about = "Print the merged configuration")]
    Show(show::ShowArgs),

    #[command(about = "Watch the configuration file and report reloads")]
    Watch(watch::WatchArgs),
}

/// Locate the configuration file: an explicit path wins, otherwise the
/// default stem is tried with each supported extension.
pub fn find_config(explicit: Option<&std::path::Path>) -> Option<std::path::PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    for ext in ["toml", "yaml", "yml", "json"] {
        let candidate = std::path::PathBuf::from(format!("{DEFAULT_CONFIG_STEM}.{ext}"));
        if candidate.exists() {
            return Some(candidate);
        }
    }

    None
}

/// Load and merge configuration from defaults, the located file, and the
/// environment. Returns the file path actually used, if any.
pub fn load_merged(
    explicit: Option<&std::path::Path>,
) -> anyhow::Result<(Option<std::path::PathBuf>, config::BuildConfig)> {
    use anyhow::Context;

    let located = find_config(explicit);

    let file_config = match &located {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => config::BuildConfig::default(),
    };

    let env_config = config::load_from_env().context("Failed to load environment overrides")?;

    let merged = config::merge_configs(
        config::BuildConfig::default(),
        file_config,
        "file",
        env_config,
        "env",
        None,
        "cli",
    );

    Ok((located, merged))
}
