use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use config::hot_reload::ConfigReloadEvent;
use tokio::signal;

use crate::commands::find_config;
use crate::output;

#[derive(Args)]
pub struct WatchArgs {
    #[arg(short, long, help = "Config file (defaults to twconf.{toml,yaml,json})")]
    pub config: Option<PathBuf>,
}

pub async fn run(args: WatchArgs) -> Result<()> {
    let Some(path) = find_config(args.config.as_deref()) else {
        bail!("No config file found to watch");
    };

    let (_tx, mut rx) = config::watch_config(&path)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .with_context(|| format!("Failed to watch {}", path.display()))?;

    output::info(&format!("Watching {} (Ctrl-C to stop)", path.display()));

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => break,
            event = rx.recv() => {
                let Some(event) = event else { break };
                report(&event);
            }
        }
    }

    Ok(())
}

fn report(event: &ConfigReloadEvent) {
    match event {
        ConfigReloadEvent::Ready => output::info("Watcher ready"),
        ConfigReloadEvent::Reloaded { path, config } => {
            output::success(&format!(
                "Reloaded {}: {} pattern(s), {} plugin(s)",
                path.display(),
                config.content.len(),
                config.plugins.len()
            ));
            if let Err(e) = config::validate_strict(config) {
                output::warn(&e.to_string());
            }
        }
        ConfigReloadEvent::Removed(path) => {
            output::warn(&format!("Config removed: {}", path.display()));
        }
        ConfigReloadEvent::Error { path, error } => {
            output::error(&format!("{}: {}", path.display(), error));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::BuildConfig;

    #[test]
    fn test_report_does_not_panic() {
        report(&ConfigReloadEvent::Ready);
        report(&ConfigReloadEvent::Reloaded {
            path: PathBuf::from("twconf.toml"),
            config: Box::new(BuildConfig::default()),
        });
        report(&ConfigReloadEvent::Removed(PathBuf::from("twconf.toml")));
        report(&ConfigReloadEvent::Error {
            path: PathBuf::from("twconf.toml"),
            error: "parse failure".to_string(),
        });
    }
}
