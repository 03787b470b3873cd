//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum Router: every path, `GET` for liveness, `POST` for lookups
//! - Wire up middleware (request id, tracing, panic recovery, CORS, JSON content type)
//! - Decode lookups, call the dictionary client, render result or error envelope
//! - Serve until the shutdown broadcast fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::{CorsConfig, ProxyConfig};
use crate::http::request::LookupRequest;
use crate::http::response::{ApiError, ApiErrorKind};
use crate::lifecycle::shutdown;
use crate::observability::{metrics, tracing::make_request_span};
use crate::upstream::{DictionaryClient, EntriesResponse};

/// Body of every `GET` response.
pub const LIVENESS_BODY: &str = "oed-proxy";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<DictionaryClient>,
    pub max_body_bytes: usize,
}

/// HTTP server for the dictionary proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server around an already-built dictionary client.
    pub fn new(config: ProxyConfig, client: DictionaryClient) -> Self {
        let state = AppState {
            client: Arc::new(client),
            max_body_bytes: config.limits.max_body_bytes,
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(liveness).post(lookup))
            .route("/{*path}", get(liveness).post(lookup))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(SetResponseHeaderLayer::overriding(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("application/json"),
                    ))
                    .layer(CatchPanicLayer::custom(panic_response))
                    .layer(cors_layer(&config.cors)),
            )
    }

    /// A handle to the router, for driving it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Any origin, fixed method list, any header, no credentials.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_credentials(false)
        .max_age(Duration::from_secs(config.max_age_secs))
}

fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");
    ApiError::new(ApiErrorKind::Panic(detail))
        .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}

/// Liveness check.
async fn liveness() -> &'static str {
    LIVENESS_BODY
}

/// Lookup handler.
async fn lookup(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<EntriesResponse>, ApiError> {
    let start_time = Instant::now();

    let result = lookup_word(&state, body).await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::record_lookup(outcome, start_time);

    result.map(Json)
}

async fn lookup_word(state: &AppState, body: Body) -> Result<EntriesResponse, ApiError> {
    let bytes = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to read request body");
            ApiError::new(ApiErrorKind::BodyRead(e))
        })?;

    let request = LookupRequest::from_slice(&bytes).map_err(|e| {
        tracing::warn!(error = %e, "Failed to decode request body");
        ApiError::from(e)
    })?;

    state
        .client
        .lookup(&request.app_id, &request.app_key, &request.lang, &request.word)
        .await
        .map_err(|e| {
            tracing::warn!(
                error = %e,
                word = %request.word,
                lang = %request.lang,
                "Failed to search word"
            );
            ApiError::from(e)
        })
}
