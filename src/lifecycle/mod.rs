//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Cancellation (cancel.rs):
//!     Cancellation::trigger → every CancelToken observes it
//!     → in-flight configured project loads stop with LoadError::Cancelled
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger cancellation, CLI watch loop exits
//! ```
//!
//! # Design Decisions
//! - Tokens are cheap to clone and can be handed to every external call
//! - A token created after the trigger still reports cancellation

pub mod cancel;
pub mod signals;

pub use cancel::{CancelToken, Cancellation};
