//! Active configured projects provider.
//!
//! Entry point for callers: combines the catalog, the active configuration
//! and the loader behind two operations.

use std::sync::Arc;
use std::time::Duration;

use crate::config::schema::LoadingConfig;
use crate::configuration::{select_active, ProjectConfiguration};
use crate::lifecycle::CancelToken;
use crate::observability::metrics;
use crate::project::loader::{ConfiguredProjectLoader, LoadStrategy};
use crate::project::services::{
    ActiveConfigurationProvider, ProjectConfigurationCatalog, UnconfiguredProject,
};
use crate::project::types::{ConfiguredProject, ProviderError, ProviderResult};

/// Resolves the active configurations of a project and loads them.
#[derive(Clone)]
pub struct ActiveConfiguredProjectsProvider {
    catalog: Arc<dyn ProjectConfigurationCatalog>,
    active: Arc<dyn ActiveConfigurationProvider>,
    loader: ConfiguredProjectLoader,
}

impl ActiveConfiguredProjectsProvider {
    pub fn builder() -> ActiveConfiguredProjectsProviderBuilder {
        ActiveConfiguredProjectsProviderBuilder::default()
    }

    /// The configurations that are currently active, in catalog order.
    ///
    /// Returns an empty list when no configuration is active; the catalog is
    /// not consulted in that case.
    pub async fn active_project_configurations(&self) -> ProviderResult<Vec<ProjectConfiguration>> {
        let Some(active) = self.active.active_configuration() else {
            tracing::debug!("No active configuration");
            metrics::record_selection(0);
            return Ok(Vec::new());
        };

        let known = self.catalog.known_configurations().await?;
        let selected = select_active(&known, Some(&active));

        tracing::debug!(
            active = %active,
            known = known.len(),
            selected = selected.len(),
            "Resolved active configurations"
        );
        metrics::record_selection(selected.len());
        Ok(selected)
    }

    /// Load a configured project for every active configuration.
    pub async fn active_configured_projects(
        &self,
        cancel: &CancelToken,
    ) -> ProviderResult<Vec<ConfiguredProject>> {
        let configurations = self.active_project_configurations().await?;
        Ok(self.loader.load_active(&configurations, cancel).await?)
    }

    pub fn loader(&self) -> &ConfiguredProjectLoader {
        &self.loader
    }
}

/// Builder for [`ActiveConfiguredProjectsProvider`].
#[derive(Default)]
pub struct ActiveConfiguredProjectsProviderBuilder {
    catalog: Option<Arc<dyn ProjectConfigurationCatalog>>,
    active: Option<Arc<dyn ActiveConfigurationProvider>>,
    project: Option<Arc<dyn UnconfiguredProject>>,
    strategy: LoadStrategy,
    timeout: Option<Duration>,
}

impl ActiveConfiguredProjectsProviderBuilder {
    pub fn catalog(mut self, catalog: Arc<dyn ProjectConfigurationCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn active_configuration(mut self, active: Arc<dyn ActiveConfigurationProvider>) -> Self {
        self.active = Some(active);
        self
    }

    pub fn project(mut self, project: Arc<dyn UnconfiguredProject>) -> Self {
        self.project = Some(project);
        self
    }

    pub fn strategy(mut self, strategy: LoadStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Apply the `[loading]` section of a resolver config.
    pub fn loading(self, loading: &LoadingConfig) -> Self {
        self.strategy(loading.strategy).timeout(loading.timeout())
    }

    /// Build the provider, failing if any collaborator is missing.
    pub fn build(self) -> ProviderResult<ActiveConfiguredProjectsProvider> {
        let catalog = self.catalog.ok_or(ProviderError::MissingService("catalog"))?;
        let active = self
            .active
            .ok_or(ProviderError::MissingService("active_configuration"))?;
        let project = self.project.ok_or(ProviderError::MissingService("project"))?;

        let loader = ConfiguredProjectLoader::new(project)
            .with_strategy(self.strategy)
            .with_timeout(self.timeout);

        Ok(ActiveConfiguredProjectsProvider {
            catalog,
            active,
            loader,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::parse_list;
    use crate::project::cache::CachingProject;
    use crate::project::snapshot::{ActiveConfigurationSlot, SnapshotCatalog};

    #[test]
    fn test_missing_services() {
        let err = ActiveConfiguredProjectsProvider::builder().build().err().unwrap();
        assert!(matches!(err, ProviderError::MissingService("catalog")));

        let err = ActiveConfiguredProjectsProvider::builder()
            .catalog(Arc::new(SnapshotCatalog::default()))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, ProviderError::MissingService("active_configuration")));

        let err = ActiveConfiguredProjectsProvider::builder()
            .catalog(Arc::new(SnapshotCatalog::default()))
            .active_configuration(Arc::new(ActiveConfigurationSlot::default()))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, ProviderError::MissingService("project")));
    }

    #[tokio::test]
    async fn test_active_slot_changes_are_observed() {
        let slot = Arc::new(ActiveConfigurationSlot::new(None));
        let provider = ActiveConfiguredProjectsProvider::builder()
            .catalog(Arc::new(SnapshotCatalog::new(
                parse_list("Debug|AnyCPU;Release|AnyCPU").unwrap(),
            )))
            .active_configuration(slot.clone())
            .project(Arc::new(CachingProject::new("app")))
            .build()
            .unwrap();

        assert!(provider.active_project_configurations().await.unwrap().is_empty());

        slot.set(ProjectConfiguration::new("Release", "AnyCPU").unwrap());
        let active = provider.active_project_configurations().await.unwrap();
        assert_eq!(active, vec![ProjectConfiguration::new("Release", "AnyCPU").unwrap()]);
    }

    #[test]
    fn test_loading_config_applied() {
        let loading = LoadingConfig {
            strategy: LoadStrategy::Concurrent,
            timeout_secs: 5,
        };
        let provider = ActiveConfiguredProjectsProvider::builder()
            .catalog(Arc::new(SnapshotCatalog::default()))
            .active_configuration(Arc::new(ActiveConfigurationSlot::default()))
            .project(Arc::new(CachingProject::new("app")))
            .loading(&loading)
            .build()
            .unwrap();
        assert_eq!(provider.loader().strategy(), LoadStrategy::Concurrent);
    }
}
