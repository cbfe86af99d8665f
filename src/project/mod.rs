//! Configured project subsystem.
//!
//! # Data Flow
//! ```text
//! ActiveConfiguredProjectsProvider
//!     → ActiveConfigurationProvider (snapshot of the active configuration)
//!     → ProjectConfigurationCatalog (snapshot of known configurations)
//!     → configuration::select_active
//!     → loader.rs (one load per active configuration, in order)
//!         → UnconfiguredProject::load_configured_project (external, may fail)
//!     → ordered ConfiguredProject handles
//! ```
//!
//! # Design Decisions
//! - Collaborators are traits so hosts can plug in their own project system
//! - Loads fail fast; the first error is returned unchanged
//! - Missing collaborators are rejected when the provider is built

pub mod cache;
pub mod loader;
pub mod provider;
pub mod services;
pub mod snapshot;
pub mod types;

pub use cache::CachingProject;
pub use loader::{ConfiguredProjectLoader, LoadStrategy};
pub use provider::{ActiveConfiguredProjectsProvider, ActiveConfiguredProjectsProviderBuilder};
pub use services::{ActiveConfigurationProvider, ProjectConfigurationCatalog, UnconfiguredProject};
pub use snapshot::{ActiveConfigurationSlot, SnapshotCatalog};
pub use types::{CatalogError, ConfiguredProject, LoadError, ProviderError};
