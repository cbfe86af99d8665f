//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! provider / loader / cache / watcher produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (selection sizes, load outcomes, cache size)
//!
//! Consumers:
//!     → stderr via tracing-subscriber fmt layer
//!     → Prometheus scrape endpoint (CLI watch mode)
//! ```
//!
//! # Design Decisions
//! - Configuration selection itself stays pure; events are emitted around it
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
