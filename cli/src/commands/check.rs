use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use config::plugins;

use crate::commands::load_merged;
use crate::output;

#[derive(Args)]
pub struct CheckArgs {
    #[arg(short, long, help = "Config file (defaults to twconf.{toml,yaml,json})")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Expand content globs and report patterns with no matches")]
    pub match_files: bool,

    #[arg(long, help = "Treat unmatched content patterns as errors")]
    pub strict: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let (located, config) = load_merged(args.config.as_deref())?;

    match &located {
        Some(path) => output::info(&format!("Checking {}", path.display())),
        None => output::warn("No config file found, checking defaults"),
    }

    if let Err(e) = config::validate_strict(&config) {
        output::error(&e.to_string());
        bail!("Configuration is malformed");
    }

    let handles = match plugins::resolve_all(&config.plugins) {
        Ok(handles) => handles,
        Err(e) => {
            output::error(&e.to_string());
            output::info(&format!(
                "Known plugins: {}",
                plugins::known_plugins().collect::<Vec<_>>().join(", ")
            ));
            bail!("Plugin resolution failed");
        }
    };

    if args.match_files {
        let base_dir = located
            .as_ref()
            .and_then(|p| p.parent().map(std::path::Path::to_path_buf))
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from("."));

        let matches = plugins::match_content(&config.content, &base_dir);

        for pattern in &matches.unmatched {
            output::warn(&format!("Pattern matched no files: {pattern}"));
        }

        if args.strict && !matches.unmatched.is_empty() {
            bail!(
                "{} content pattern(s) matched no files",
                matches.unmatched.len()
            );
        }

        println!(
            "  {} {} file(s) matched",
            "→".cyan(),
            matches.files.len()
        );
    }

    output::success(&format!(
        "{} pattern(s), {} theme override(s), {} plugin(s) resolved",
        config.content.len(),
        config.theme.extend.len(),
        handles.len()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_check_valid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("twconf.toml");
        fs::write(&path, "content = [\"./a/**/*.html\"]\nplugins = [\"flowbite\"]\n").unwrap();

        let args = CheckArgs {
            config: Some(path),
            match_files: false,
            strict: false,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    #[serial]
    fn test_check_unknown_plugin_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("twconf.toml");
        fs::write(&path, "plugins = [\"no-such-plugin\"]\n").unwrap();

        let args = CheckArgs {
            config: Some(path),
            match_files: false,
            strict: false,
        };
        assert!(run(args).is_err());
    }

    #[test]
    #[serial]
    fn test_check_empty_content_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("twconf.toml");
        fs::write(&path, "content = []\n").unwrap();

        let args = CheckArgs {
            config: Some(path),
            match_files: false,
            strict: false,
        };
        assert!(run(args).is_err());
    }

    #[test]
    #[serial]
    fn test_check_strict_unmatched_pattern_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("twconf.toml");
        fs::write(&path, "content = [\"./nothing/**/*.templ\"]\n").unwrap();

        let args = CheckArgs {
            config: Some(path),
            match_files: true,
            strict: true,
        };
        assert!(run(args).is_err());
    }

    #[test]
    #[serial]
    fn test_check_unmatched_pattern_is_warning_by_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("twconf.toml");
        fs::write(&path, "content = [\"./nothing/**/*.templ\"]\n").unwrap();

        let args = CheckArgs {
            config: Some(path),
            match_files: true,
            strict: false,
        };
        assert!(run(args).is_ok());
    }
}
