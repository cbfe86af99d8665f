//! Shared fakes for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use active_configs::configuration::{parse_list, ProjectConfiguration};
use active_configs::lifecycle::CancelToken;
use active_configs::project::{
    ActiveConfiguredProjectsProvider, CatalogError, ConfiguredProject, LoadError,
    ProjectConfigurationCatalog, UnconfiguredProject,
};
use async_trait::async_trait;

pub fn config(name: &str) -> ProjectConfiguration {
    name.parse().unwrap()
}

pub fn configs(list: &str) -> Vec<ProjectConfiguration> {
    parse_list(list).unwrap()
}

pub fn names(configurations: &[ProjectConfiguration]) -> Vec<String> {
    configurations.iter().map(|c| c.name()).collect()
}

/// Catalog that counts how often it was read.
#[derive(Default)]
pub struct CountingCatalog {
    configurations: Vec<ProjectConfiguration>,
    fail: bool,
    pub calls: AtomicUsize,
}

impl CountingCatalog {
    pub fn new(list: &str) -> Self {
        Self {
            configurations: configs(list),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectConfigurationCatalog for CountingCatalog {
    async fn known_configurations(&self) -> Result<Vec<ProjectConfiguration>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CatalogError::Unavailable("project file locked".into()));
        }
        Ok(self.configurations.clone())
    }
}

/// How the scripted project answers a load.
#[derive(Clone)]
pub enum Behavior {
    Delay(Duration),
    Fail(String),
    Hang,
    /// Wait for the caller's token and report the cancellation.
    WaitForCancel,
}

/// Project that records every load and can be scripted per configuration.
#[derive(Default)]
pub struct ScriptedProject {
    behaviors: HashMap<ProjectConfiguration, Behavior>,
    pub requested: Mutex<Vec<ProjectConfiguration>>,
    pub tokens: Mutex<Vec<CancelToken>>,
    pub cancellations_seen: AtomicUsize,
}

impl ScriptedProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, name: &str, behavior: Behavior) -> Self {
        self.behaviors.insert(config(name), behavior);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        names(&self.requested.lock().unwrap())
    }

    /// True when every token handed to a load reports cancellation.
    pub fn all_tokens_cancelled(&self) -> bool {
        let tokens = self.tokens.lock().unwrap();
        !tokens.is_empty() && tokens.iter().all(CancelToken::is_cancelled)
    }

    pub fn cancellations_seen(&self) -> usize {
        self.cancellations_seen.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UnconfiguredProject for ScriptedProject {
    async fn load_configured_project(
        &self,
        configuration: &ProjectConfiguration,
        cancel: &CancelToken,
    ) -> Result<ConfiguredProject, LoadError> {
        self.requested.lock().unwrap().push(configuration.clone());
        self.tokens.lock().unwrap().push(cancel.clone());

        match self.behaviors.get(configuration).cloned() {
            Some(Behavior::Delay(delay)) => tokio::time::sleep(delay).await,
            Some(Behavior::Fail(reason)) => {
                return Err(LoadError::Failed {
                    configuration: configuration.clone(),
                    reason,
                })
            }
            Some(Behavior::Hang) => std::future::pending::<()>().await,
            Some(Behavior::WaitForCancel) => {
                cancel.cancelled().await;
                self.cancellations_seen.fetch_add(1, Ordering::SeqCst);
                return Err(LoadError::Cancelled {
                    configuration: configuration.clone(),
                });
            }
            None => {}
        }

        Ok(ConfiguredProject::new(configuration.clone()))
    }
}

/// Provider over a catalog, an active configuration and a project.
pub fn provider(
    active: Option<&str>,
    catalog: Arc<CountingCatalog>,
    project: Arc<ScriptedProject>,
) -> ActiveConfiguredProjectsProvider {
    let active = active.map(config);
    ActiveConfiguredProjectsProvider::builder()
        .catalog(catalog)
        .active_configuration(Arc::new(move || active.clone()))
        .project(project)
        .build()
        .unwrap()
}
