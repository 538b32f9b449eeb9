//! # Configuration Hot Reload
//!
//! Watches the build configuration file for changes, re-parses it, and
//! emits reload events carrying the new configuration.

use crate::config::BuildConfig;
use crate::file_loader::load_from_file;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Configuration reload event.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigReloadEvent {
    /// Watcher is installed and running
    Ready,

    /// Configuration file changed and parsed successfully
    Reloaded {
        path: PathBuf,
        config: Box<BuildConfig>,
    },

    /// Configuration file was removed
    Removed(PathBuf),

    /// Configuration file changed but could not be reloaded
    Error { path: PathBuf, error: String },
}

/// Watch the build configuration file and emit reload events.
///
/// ## Purpose
/// Monitors the configuration file with the `notify` crate. On every change
/// the file is re-loaded and re-parsed, so subscribers receive a ready
/// [`BuildConfig`] rather than a raw filesystem event. A change that no
/// longer parses produces an [`ConfigReloadEvent::Error`] and the previous
/// configuration stays in effect on the subscriber side.
///
/// ## Usage
/// ```rust,no_run
/// use config::{hot_reload::ConfigReloadEvent, watch_config};
/// use tokio::signal;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let (_tx, mut rx) = watch_config(std::path::Path::new("twconf.toml")).await?;
///
///     loop {
///         tokio::select! {
///             _ = signal::ctrl_c() => break,
///             Some(event) = rx.recv() => {
///                 if let ConfigReloadEvent::Reloaded { config, .. } = event {
///                     println!("Now scanning {} patterns", config.content.len());
///                 }
///             }
///         }
///     }
///
///     Ok(())
/// }
/// ```
pub async fn watch_config(
    config_path: &Path,
) -> Result<
    (
        tokio::sync::mpsc::Sender<ConfigReloadEvent>,
        tokio::sync::mpsc::Receiver<ConfigReloadEvent>,
    ),
    Box<dyn std::error::Error>,
> {
    let config_path = config_path.to_path_buf();

    if !config_path.exists() {
        return Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Config file not found: {:?}", config_path),
        )));
    }

    let (tx, rx) = tokio::sync::mpsc::channel(100);
    let tx_task = tx.clone();
    let path_task = config_path.clone();

    tokio::spawn(async move {
        let (event_tx, mut event_rx) = tokio::sync::mpsc::channel(100);
        let mut watcher = match RecommendedWatcher::new(
            move |res| {
                let _ = event_tx.blocking_send(res);
            },
            notify::Config::default(),
        ) {
            Ok(w) => w,
            Err(e) => {
                let error_msg = format!("Failed to create file watcher: {}", e);
                error!("{}", error_msg);

                let _ = tx_task
                    .send(ConfigReloadEvent::Error {
                        path: path_task,
                        error: error_msg,
                    })
                    .await;

                return;
            }
        };

        if let Err(e) = watcher.watch(&config_path, RecursiveMode::NonRecursive) {
            let error_msg = format!("Failed to watch config file: {}", e);
            error!("{}", error_msg);

            let _ = tx_task
                .send(ConfigReloadEvent::Error {
                    path: path_task,
                    error: error_msg,
                })
                .await;

            return;
        }

        info!("Watching build config: {:?}", config_path);

        let _ = tx_task.send(ConfigReloadEvent::Ready).await;

        loop {
            tokio::select! {
                _ = tx_task.closed() => {
                    debug!("Receiver dropped, stopping watcher for {:?}", config_path);
                    break;
                }
                event_result = event_rx.recv() => {
                    let Some(event_result) = event_result else {
                        break;
                    };

                    match event_result {
                        Ok(event) => {
                            let Some(path) = event.paths.first().cloned() else {
                                continue;
                            };

                            let reload_event = match event.kind {
                                EventKind::Create(_) | EventKind::Modify(_) => {
                                    match load_from_file(&path) {
                                        Ok(config) => {
                                            info!("Build config reloaded: {:?}", path);
                                            ConfigReloadEvent::Reloaded {
                                                path,
                                                config: Box::new(config),
                                            }
                                        }
                                        Err(e) => {
                                            warn!("Build config no longer loads: {}", e);
                                            ConfigReloadEvent::Error {
                                                path,
                                                error: e.to_string(),
                                            }
                                        }
                                    }
                                }
                                EventKind::Remove(_) => {
                                    warn!("Build config removed: {:?}", path);
                                    ConfigReloadEvent::Removed(path)
                                }
                                _ => {
                                    debug!("Ignoring event: {:?}", event.kind);
                                    continue;
                                }
                            };

                            if let Err(e) = tx_task.send(reload_event).await {
                                error!("Failed to send config reload event: {}", e);
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("Watch error: {}", e);
                        }
                    }
                }
            }
        }
    });

    Ok((tx, rx))
}
