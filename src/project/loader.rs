//! Loading configured projects for the active configurations.
//!
//! # Responsibilities
//! - Call the unconfigured project once per active configuration
//! - Keep results index-aligned with the input
//! - Enforce the optional per-load timeout and honour cancellation
//!
//! # Design Decisions
//! - Fail fast: the first error aborts the remaining loads and is returned as is
//! - Concurrent loads still return results in input order
//! - Empty input never reaches the project system

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::try_join_all;
use serde::{Deserialize, Serialize};

use crate::configuration::ProjectConfiguration;
use crate::lifecycle::CancelToken;
use crate::observability::metrics;
use crate::project::services::UnconfiguredProject;
use crate::project::types::{ConfiguredProject, LoadError};
use crate::resilience::timeouts::with_timeout;

/// How multiple configured projects are loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStrategy {
    /// One load at a time, in order.
    #[default]
    Sequential,
    /// All loads in flight together; results are reordered to input order.
    Concurrent,
}

/// Loads configured projects through an [`UnconfiguredProject`].
#[derive(Clone)]
pub struct ConfiguredProjectLoader {
    project: Arc<dyn UnconfiguredProject>,
    strategy: LoadStrategy,
    timeout: Option<Duration>,
}

impl ConfiguredProjectLoader {
    pub fn new(project: Arc<dyn UnconfiguredProject>) -> Self {
        Self {
            project,
            strategy: LoadStrategy::default(),
            timeout: None,
        }
    }

    pub fn with_strategy(mut self, strategy: LoadStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Limit each individual load; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn strategy(&self) -> LoadStrategy {
        self.strategy
    }

    /// Load a configured project for each of `configurations`.
    pub async fn load_active(
        &self,
        configurations: &[ProjectConfiguration],
        cancel: &CancelToken,
    ) -> Result<Vec<ConfiguredProject>, LoadError> {
        if configurations.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(
            count = configurations.len(),
            strategy = ?self.strategy,
            "Loading configured projects"
        );

        match self.strategy {
            LoadStrategy::Sequential => {
                let mut loaded = Vec::with_capacity(configurations.len());
                for configuration in configurations {
                    loaded.push(self.load_one(configuration, cancel).await?);
                }
                Ok(loaded)
            }
            LoadStrategy::Concurrent => {
                try_join_all(configurations.iter().map(|c| self.load_one(c, cancel))).await
            }
        }
    }

    async fn load_one(
        &self,
        configuration: &ProjectConfiguration,
        cancel: &CancelToken,
    ) -> Result<ConfiguredProject, LoadError> {
        if cancel.is_cancelled() {
            return Err(LoadError::Cancelled {
                configuration: configuration.clone(),
            });
        }

        let start = Instant::now();
        let load = with_timeout(
            self.timeout,
            self.project.load_configured_project(configuration, cancel),
        );

        // The load is polled first so a project that honours the token reports
        // its own error.
        let result = tokio::select! {
            biased;
            outcome = load => match outcome {
                Ok(result) => result,
                Err(_) => Err(LoadError::Timeout {
                    configuration: configuration.clone(),
                    timeout: self.timeout.unwrap_or_default(),
                }),
            },
            _ = cancel.cancelled() => Err(LoadError::Cancelled {
                configuration: configuration.clone(),
            }),
        };

        match &result {
            Ok(_) => metrics::record_load("success", start),
            Err(e) => {
                tracing::warn!(
                    configuration = %configuration,
                    error = %e,
                    "Configured project load failed"
                );
                metrics::record_load(e.kind(), start);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::parse_list;
    use crate::project::cache::CachingProject;

    #[tokio::test]
    async fn test_empty_input() {
        let project = Arc::new(CachingProject::new("app"));
        let loader = ConfiguredProjectLoader::new(project.clone());

        let loaded = loader.load_active(&[], &CancelToken::none()).await.unwrap();
        assert!(loaded.is_empty());
        assert!(project.is_empty());
    }

    #[tokio::test]
    async fn test_results_index_aligned() {
        let configs =
            parse_list("Debug|AnyCPU|net45;Debug|AnyCPU|net46;Debug|AnyCPU|net47").unwrap();

        for strategy in [LoadStrategy::Sequential, LoadStrategy::Concurrent] {
            let loader = ConfiguredProjectLoader::new(Arc::new(CachingProject::new("app")))
                .with_strategy(strategy);
            let loaded = loader.load_active(&configs, &CancelToken::none()).await.unwrap();

            let loaded_configs: Vec<_> = loaded.iter().map(|p| p.configuration().clone()).collect();
            assert_eq!(loaded_configs, configs, "strategy {:?}", strategy);
        }
    }

    #[test]
    fn test_strategy_serde() {
        let strategy: LoadStrategy = serde_json::from_str("\"concurrent\"").unwrap();
        assert_eq!(strategy, LoadStrategy::Concurrent);
        assert_eq!(LoadStrategy::default(), LoadStrategy::Sequential);
    }
}
