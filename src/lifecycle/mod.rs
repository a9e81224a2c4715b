//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → TerminationSignal
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → server stops accepting → process exits 0
//! ```
//!
//! # Design Decisions
//! - No drain phase: in-flight requests are dropped with the runtime
//! - Counters are in memory only, so there is nothing to flush

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::{wait_for_termination, TerminationSignal};
