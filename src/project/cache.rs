//! Caching unconfigured project.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::configuration::ProjectConfiguration;
use crate::lifecycle::CancelToken;
use crate::observability::metrics;
use crate::project::services::UnconfiguredProject;
use crate::project::types::{ConfiguredProject, LoadError};

/// An [`UnconfiguredProject`] that creates one configured project per
/// configuration and hands out the cached instance on later loads.
#[derive(Debug, Clone, Default)]
pub struct CachingProject {
    name: String,
    loaded: Arc<DashMap<ProjectConfiguration, ConfiguredProject>>,
}

impl CachingProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loaded: Arc::new(DashMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cached project for `configuration`, if it was loaded before.
    pub fn get(&self, configuration: &ProjectConfiguration) -> Option<ConfiguredProject> {
        self.loaded.get(configuration).map(|r| r.value().clone())
    }

    /// Drop the cached project for `configuration`.
    pub fn evict(&self, configuration: &ProjectConfiguration) -> Option<ConfiguredProject> {
        let removed = self.loaded.remove(configuration).map(|(_, project)| project);
        metrics::record_cache_size(self.loaded.len());
        removed
    }

    /// Drop every cached project whose configuration is not in `keep`.
    pub fn retain_known(&self, keep: &[ProjectConfiguration]) {
        self.loaded.retain(|configuration, _| keep.contains(configuration));
        metrics::record_cache_size(self.loaded.len());
    }

    pub fn clear(&self) {
        self.loaded.clear();
        metrics::record_cache_size(0);
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

#[async_trait]
impl UnconfiguredProject for CachingProject {
    async fn load_configured_project(
        &self,
        configuration: &ProjectConfiguration,
        cancel: &CancelToken,
    ) -> Result<ConfiguredProject, LoadError> {
        if cancel.is_cancelled() {
            return Err(LoadError::Cancelled {
                configuration: configuration.clone(),
            });
        }

        let project = self
            .loaded
            .entry(configuration.clone())
            .or_insert_with(|| {
                tracing::debug!(
                    project = %self.name,
                    configuration = %configuration,
                    "Creating configured project"
                );
                ConfiguredProject::new(configuration.clone())
            })
            .value()
            .clone();

        metrics::record_cache_size(self.loaded.len());
        Ok(project)
    }
}
