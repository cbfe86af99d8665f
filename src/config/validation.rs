//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Known configurations share one dimension shape and are unique
//! - Observability settings are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ResolverConfig → Result<(), Vec<ValidationError>>
//! - An active configuration missing from the known set is valid; it
//!   simply resolves to no active configurations

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ResolverConfig;
use crate::configuration::ProjectConfiguration;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a resolver config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error(
        "configuration '{conflicting}' has {} dimensions but '{first}' has {}",
        .conflicting.dimension_count(),
        .first.dimension_count()
    )]
    MixedDimensions {
        first: ProjectConfiguration,
        conflicting: ProjectConfiguration,
    },

    #[error("configuration '{0}' is declared more than once")]
    DuplicateConfiguration(ProjectConfiguration),

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),
}

/// Validate a parsed config.
pub fn validate_config(config: &ResolverConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.project.name.trim().is_empty() {
        errors.push(ValidationError::EmptyProjectName);
    }

    let known = &config.project.configurations;
    if let Some(first) = known.first() {
        let mut seen = HashSet::new();
        for configuration in known {
            if configuration.dimension_count() != first.dimension_count() {
                errors.push(ValidationError::MixedDimensions {
                    first: first.clone(),
                    conflicting: configuration.clone(),
                });
            }
            if !seen.insert(configuration) {
                errors.push(ValidationError::DuplicateConfiguration(configuration.clone()));
            }
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
