//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from manifest files.
//!
//! ```toml
//! [project]
//! name = "App"
//! configurations = ["Debug|AnyCPU|net45", "Debug|AnyCPU|net46"]
//! active = "Debug|AnyCPU|net45"
//!
//! [loading]
//! strategy = "concurrent"
//! timeout_secs = 30
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::configuration::ProjectConfiguration;
use crate::project::loader::LoadStrategy;
use crate::resilience::timeouts;

/// Root configuration for the resolver.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// The project and its configurations.
    pub project: ProjectManifest,

    /// Configured project loading settings.
    pub loading: LoadingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Project declaration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectManifest {
    /// Project name for logging.
    pub name: String,

    /// Known configurations, in declaration order.
    pub configurations: Vec<ProjectConfiguration>,

    /// The active configuration, if any.
    pub active: Option<ProjectConfiguration>,
}

impl Default for ProjectManifest {
    fn default() -> Self {
        Self {
            name: "project".to_string(),
            configurations: Vec::new(),
            active: None,
        }
    }
}

/// Loading configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Sequential or concurrent loads.
    pub strategy: LoadStrategy,

    /// Per-load timeout in seconds (0 = no timeout).
    pub timeout_secs: u64,
}

impl LoadingConfig {
    pub fn timeout(&self) -> Option<Duration> {
        timeouts::from_secs(self.timeout_secs)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.project.name, "project");
        assert!(config.project.configurations.is_empty());
        assert!(config.project.active.is_none());
        assert_eq!(config.loading.strategy, LoadStrategy::Sequential);
        assert_eq!(config.loading.timeout(), None);
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_deserialize_manifest() {
        let config: ResolverConfig = toml::from_str(
            r#"
            [project]
            name = "App"
            configurations = ["Debug|AnyCPU|net45", "Debug|AnyCPU|net46"]
            active = "Debug|AnyCPU|net46"

            [loading]
            strategy = "concurrent"
            timeout_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.project.name, "App");
        assert_eq!(config.project.configurations.len(), 2);
        assert_eq!(
            config.project.active,
            Some(ProjectConfiguration::with_target_framework("Debug", "AnyCPU", "net46").unwrap())
        );
        assert_eq!(config.loading.strategy, LoadStrategy::Concurrent);
        assert_eq!(config.loading.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_bad_configuration_name_rejected() {
        let result: Result<ResolverConfig, _> = toml::from_str(
            r#"
            [project]
            configurations = ["Debug"]
            "#,
        );
        assert!(result.is_err());
    }
}
