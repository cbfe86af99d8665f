//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Configured project load:
//!     → timeouts.rs (enforce the per-load deadline, if configured)
//!     → On expiry: LoadError::Timeout, remaining loads aborted
//! ```
//!
//! # Design Decisions
//! - No retries: load failures go back to the caller unchanged
//! - A missing deadline means wait for the project system

pub mod timeouts;
