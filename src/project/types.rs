//! Configured project handles and error definitions.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::configuration::ProjectConfiguration;

/// A project loaded for one configuration.
///
/// The `id` identifies the loaded instance, so two handles with the same
/// configuration and id refer to the same cached project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfiguredProject {
    id: Uuid,
    configuration: ProjectConfiguration,
}

impl ConfiguredProject {
    /// Create a fresh instance for `configuration`.
    pub fn new(configuration: ProjectConfiguration) -> Self {
        Self {
            id: Uuid::new_v4(),
            configuration,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The configuration this project was loaded for.
    pub fn configuration(&self) -> &ProjectConfiguration {
        &self.configuration
    }
}

/// Errors reported by a configuration catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The known configurations could not be read.
    #[error("configuration catalog unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while loading a configured project.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The project system failed to load the configuration.
    #[error("failed to load configured project '{configuration}': {reason}")]
    Failed {
        configuration: ProjectConfiguration,
        reason: String,
    },

    /// The load did not finish within the configured timeout.
    #[error("loading configured project '{configuration}' timed out after {timeout:?}")]
    Timeout {
        configuration: ProjectConfiguration,
        timeout: Duration,
    },

    /// The load was cancelled before it finished.
    #[error("loading configured project '{configuration}' was cancelled")]
    Cancelled { configuration: ProjectConfiguration },
}

impl LoadError {
    /// The configuration whose load failed.
    pub fn configuration(&self) -> &ProjectConfiguration {
        match self {
            LoadError::Failed { configuration, .. }
            | LoadError::Timeout { configuration, .. }
            | LoadError::Cancelled { configuration } => configuration,
        }
    }

    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Failed { .. } => "failed",
            LoadError::Timeout { .. } => "timeout",
            LoadError::Cancelled { .. } => "cancelled",
        }
    }
}

/// Errors surfaced by [`crate::project::ActiveConfiguredProjectsProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A required collaborator was not supplied to the builder.
    #[error("required service '{0}' was not supplied")]
    MissingService(&'static str),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
