//! Active configuration selection.
//!
//! # Responsibilities
//! - Detect the dimension shape of the known configurations
//! - Pick the configurations that match the active configuration
//!
//! # Design Decisions
//! - Pure function over explicit snapshots; no ambient state
//! - Without a target framework dimension the match is exact (one result)
//! - With a target framework dimension the match ignores the framework, so
//!   one active configuration can expand to several active configurations
//! - Output follows the order of the known configurations

use crate::configuration::descriptor::ProjectConfiguration;

/// How known configurations are compared against the active configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Build type and platform must equal the active configuration's.
    Exact,
    /// Build type and platform must match; the target framework is ignored
    /// and every matching framework is selected.
    IgnoreTargetFramework,
}

impl MatchStrategy {
    /// Choose a strategy from the shape of the known configurations.
    ///
    /// Returns `None` for an empty set.
    pub fn for_known(known: &[ProjectConfiguration]) -> Option<Self> {
        let first = known.first()?;
        Some(if first.target_framework().is_some() {
            MatchStrategy::IgnoreTargetFramework
        } else {
            MatchStrategy::Exact
        })
    }

    fn matches(self, candidate: &ProjectConfiguration, active: &ProjectConfiguration) -> bool {
        match self {
            MatchStrategy::Exact => {
                candidate.same_build_and_platform(active) && candidate.target_framework().is_none()
            }
            MatchStrategy::IgnoreTargetFramework => candidate.same_build_and_platform(active),
        }
    }
}

/// Compute the active configurations from the known set and the active
/// configuration.
pub fn select_active(
    known: &[ProjectConfiguration],
    active: Option<&ProjectConfiguration>,
) -> Vec<ProjectConfiguration> {
    let (Some(active), Some(strategy)) = (active, MatchStrategy::for_known(known)) else {
        return Vec::new();
    };

    let mut selected: Vec<ProjectConfiguration> = Vec::new();
    for candidate in known {
        if strategy.matches(candidate, active) && !selected.contains(candidate) {
            selected.push(candidate.clone());
            if strategy == MatchStrategy::Exact {
                break;
            }
        }
    }
    selected
}
