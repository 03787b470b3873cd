//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Logging → Validate → Upstream client → Metrics → Listener → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Broadcast → server stops accepting → in-flight lookups drain → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: every startup error is fatal and reported, never a panic
//! - Listener binds last, so traffic only arrives once everything is ready

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{start, StartupError};
