//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and startup produce:
//!     → logging.rs (structured log events, JSON or pretty)
//!     → metrics.rs (lookup counters and latency histograms)
//!     → tracing.rs (per-request spans carrying the request id)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every span
//! - Credentials are never recorded in events or labels

pub mod logging;
pub mod metrics;
pub mod tracing;
