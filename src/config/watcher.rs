//! Manifest file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::ResolverConfig;

/// Monitors a manifest file and emits every valid, changed config.
pub struct ManifestWatcher {
    path: PathBuf,
    initial: Option<ResolverConfig>,
    update_tx: mpsc::UnboundedSender<ResolverConfig>,
}

impl ManifestWatcher {
    /// Create a new watcher for `path`.
    ///
    /// `initial` is the config already in use; reloads producing the same
    /// config are not forwarded. Returns the watcher and a receiver for
    /// configuration updates.
    pub fn new(
        path: &Path,
        initial: Option<ResolverConfig>,
    ) -> (Self, mpsc::UnboundedReceiver<ResolverConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                initial,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let path = self.path.clone();
        let mut last = self.initial;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    match load_config(&path) {
                        Ok(config) if last.as_ref() == Some(&config) => {
                            tracing::debug!(path = ?path, "Manifest touched without changes");
                        }
                        Ok(config) => {
                            tracing::info!(path = ?path, "Manifest changed, reloading");
                            last = Some(config.clone());
                            let _ = tx.send(config);
                        }
                        Err(e) => {
                            tracing::error!(
                                path = ?path,
                                error = %e,
                                "Failed to reload manifest, keeping current configuration"
                            );
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Manifest watcher started");
        Ok(watcher)
    }
}
