//! Resolver configuration subsystem.
//!
//! # Data Flow
//! ```text
//! manifest file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ResolverConfig (validated, immutable)
//!     → SnapshotCatalog / ActiveConfigurationSlot
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new manifest
//!     → validation.rs validates
//!     → new ResolverConfig sent to the consumer
//!     → consumer swaps catalog and active snapshots
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal manifests
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LoadingConfig, ObservabilityConfig, ProjectManifest, ResolverConfig};
