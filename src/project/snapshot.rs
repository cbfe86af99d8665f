//! In-memory catalog and active configuration slot.
//!
//! Both are backed by `arc-swap`, so a manifest reload can replace their
//! contents while readers keep working on the snapshot they already took.

use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};
use async_trait::async_trait;

use crate::configuration::ProjectConfiguration;
use crate::project::services::{ActiveConfigurationProvider, ProjectConfigurationCatalog};
use crate::project::types::CatalogError;

/// Catalog over a replaceable list of known configurations.
#[derive(Debug)]
pub struct SnapshotCatalog {
    configurations: ArcSwap<Vec<ProjectConfiguration>>,
}

impl SnapshotCatalog {
    pub fn new(configurations: Vec<ProjectConfiguration>) -> Self {
        Self {
            configurations: ArcSwap::from_pointee(configurations),
        }
    }

    /// Atomically replace the known configurations.
    pub fn replace(&self, configurations: Vec<ProjectConfiguration>) {
        tracing::debug!(count = configurations.len(), "Known configurations replaced");
        self.configurations.store(Arc::new(configurations));
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<Vec<ProjectConfiguration>> {
        self.configurations.load_full()
    }
}

impl Default for SnapshotCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ProjectConfigurationCatalog for SnapshotCatalog {
    async fn known_configurations(&self) -> Result<Vec<ProjectConfiguration>, CatalogError> {
        Ok(self.snapshot().to_vec())
    }
}

/// Holder of the active configuration, updatable at runtime.
#[derive(Debug, Default)]
pub struct ActiveConfigurationSlot {
    current: ArcSwapOption<ProjectConfiguration>,
}

impl ActiveConfigurationSlot {
    pub fn new(active: Option<ProjectConfiguration>) -> Self {
        Self {
            current: ArcSwapOption::new(active.map(Arc::new)),
        }
    }

    /// Make `configuration` the active configuration.
    pub fn set(&self, configuration: ProjectConfiguration) {
        tracing::debug!(active = %configuration, "Active configuration changed");
        self.current.store(Some(Arc::new(configuration)));
    }

    /// Clear the active configuration.
    pub fn clear(&self) {
        tracing::debug!("Active configuration cleared");
        self.current.store(None);
    }
}

impl ActiveConfigurationProvider for ActiveConfigurationSlot {
    fn active_configuration(&self) -> Option<ProjectConfiguration> {
        self.current.load_full().map(|c| (*c).clone())
    }
}
