//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → handed to lifecycle::startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the proxy runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks
//! - Upstream credentials are never configuration; they arrive per request

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    CorsConfig, LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, ProxyConfig,
    UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
