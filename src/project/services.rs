//! Collaborator interfaces consumed by the provider.

use async_trait::async_trait;

use crate::configuration::ProjectConfiguration;
use crate::lifecycle::CancelToken;
use crate::project::types::{CatalogError, ConfiguredProject, LoadError};

/// Source of the configurations a project declares.
#[async_trait]
pub trait ProjectConfigurationCatalog: Send + Sync {
    /// All known configurations, in declaration order.
    async fn known_configurations(&self) -> Result<Vec<ProjectConfiguration>, CatalogError>;
}

/// Source of the currently active configuration.
pub trait ActiveConfigurationProvider: Send + Sync {
    /// The active configuration, or `None` when nothing is active.
    fn active_configuration(&self) -> Option<ProjectConfiguration>;
}

impl<F> ActiveConfigurationProvider for F
where
    F: Fn() -> Option<ProjectConfiguration> + Send + Sync,
{
    fn active_configuration(&self) -> Option<ProjectConfiguration> {
        self()
    }
}

/// The project system that turns a configuration into a loaded project.
#[async_trait]
pub trait UnconfiguredProject: Send + Sync {
    /// Load, or return an already loaded, project for `configuration`.
    ///
    /// Implementations should stop early once `cancel` is triggered.
    async fn load_configured_project(
        &self,
        configuration: &ProjectConfiguration,
        cancel: &CancelToken,
    ) -> Result<ConfiguredProject, LoadError>;
}
