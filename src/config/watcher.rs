//! Hot reload of the joystick config file
//!
//! The watch is placed on the file's directory rather than the file itself.
//! Editors that save by writing a temp file and renaming it over the original
//! replace the inode, which silently ends a watch on the file.

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::JoystickConfig;

/// Time given to a save to finish before the file is read back
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(100);

/// Delivers a freshly parsed [`JoystickConfig`] each time the file changes
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<JoystickConfig>,
}

impl ConfigWatcher {
    /// Start watching an existing config file
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config_path: String) -> Result<Self> {
        let path = PathBuf::from(&config_path);
        let file_name = path
            .file_name()
            .map(OsString::from)
            .with_context(|| format!("Config path has no file name: {}", config_path))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (tx, rx) = mpsc::channel(10);

        // notify callbacks run on their own OS thread, not in Tokio context
        let runtime = Handle::current();

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    error!("Config watch error: {}", e);
                    return;
                }
            };

            if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                return;
            }
            if !event.paths.iter().any(|p| p.file_name() == Some(file_name.as_os_str())) {
                return;
            }

            debug!("Config file changed ({:?})", event.kind);
            runtime.spawn(reload(path.clone(), tx.clone()));
        })?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch config directory: {}", dir.display()))?;

        info!("Watching {} for config changes", config_path);

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Wait for the next config update
    ///
    /// Returns `None` once the watcher has shut down.
    pub async fn next_config(&mut self) -> Option<JoystickConfig> {
        self.rx.recv().await
    }

    /// Latest pending config update, without blocking
    ///
    /// Drains the queue so a burst of saves only applies the newest file.
    pub fn try_next_config(&mut self) -> Option<JoystickConfig> {
        let mut latest = None;
        while let Ok(config) = self.rx.try_recv() {
            latest = Some(config);
        }
        latest
    }
}

/// Re-read the file after the debounce; a broken file keeps the current config
async fn reload(path: PathBuf, tx: mpsc::Sender<JoystickConfig>) {
    tokio::time::sleep(RELOAD_DEBOUNCE).await;

    match JoystickConfig::load(&path.to_string_lossy()).await {
        Ok(config) => {
            info!("Reloaded {}", path.display());
            if tx.send(config).await.is_err() {
                debug!("Config watcher dropped before reload was delivered");
            }
        }
        Err(e) => warn!("Keeping current config, reload of {} failed: {:#}", path.display(), e),
    }
}
