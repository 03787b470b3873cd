//! Startup orchestration.
//!
//! # Responsibilities
//! - Install logging, then validate the configuration
//! - Build the upstream client (base URL checked here, before any traffic)
//! - Start the metrics exporter when enabled
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and carries a diagnostic
//! - Subsystems initialize in order, not concurrently
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::validation::join_errors;
use crate::config::{validate_config, ProxyConfig, UpstreamConfig, ValidationError};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::logging::{init_logging, LoggingError};
use crate::observability::metrics;
use crate::upstream::{parse_base_url, DictionaryClient, LookupError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Errors that abort process startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("failed to build upstream client: {0}")]
    Upstream(#[from] LookupError),

    #[error("failed to build HTTP transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] BuildError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the dictionary client for the configured upstream.
pub fn build_client(config: &UpstreamConfig) -> Result<DictionaryClient, StartupError> {
    let base_url = parse_base_url(&config.base_url)?;
    let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(DictionaryClient::new(http, base_url)?)
}

/// Run the proxy until `shutdown` fires.
pub async fn start(config: ProxyConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    init_logging(&config.observability)?;
    validate_config(&config).map_err(StartupError::Config)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    let client = build_client(&config.upstream)?;

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.listener.bind_address.clone(),
            source,
        })?;

    let server = HttpServer::new(config, client);
    server
        .run(listener, shutdown.subscribe())
        .await
        .map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_from_defaults() {
        let client = build_client(&UpstreamConfig::default()).unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://od-api.oxforddictionaries.com/api/v2"
        );
    }

    #[test]
    fn test_build_client_rejects_bad_base() {
        let config = UpstreamConfig {
            base_url: "od-api.oxforddictionaries.com/api/v2".into(),
        };
        let err = build_client(&config).unwrap_err();
        assert!(matches!(err, StartupError::Upstream(LookupError::InvalidBaseUrl(_))));
        assert!(err.to_string().contains("invalid upstream base URL"));
    }

    #[test]
    fn test_config_error_lists_problems() {
        let err = StartupError::Config(vec![
            ValidationError::ZeroBodyLimit,
            ValidationError::BindAddress("x".into()),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("max_body_bytes"));
        assert!(msg.contains("'x'"));
    }
}
