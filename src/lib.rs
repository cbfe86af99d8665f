//! Active project configuration resolution.
//!
//! Given the configurations a project declares and the configuration the user
//! has made active, work out which configurations are live and load a
//! configured project for each of them.

pub mod config;
pub mod configuration;
pub mod lifecycle;
pub mod observability;
pub mod project;
pub mod resilience;

pub use config::schema::ResolverConfig;
pub use configuration::{select_active, ProjectConfiguration};
pub use lifecycle::{CancelToken, Cancellation};
pub use project::{ActiveConfiguredProjectsProvider, ConfiguredProject, ConfiguredProjectLoader};
