//! Configuration model and selection.
//!
//! # Data Flow
//! ```text
//! known configurations (catalog snapshot)
//!     + active configuration (provider snapshot)
//!     → selector.rs (match on build type + platform)
//!     → ordered active configurations
//! ```

pub mod descriptor;
pub mod selector;

pub use descriptor::{parse_list, ParseConfigurationError, ProjectConfiguration};
pub use selector::{select_active, MatchStrategy};
