//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, method dispatch)
//!     → request.rs (decode LookupRequest)
//!     → upstream client (one GET to the dictionary provider)
//!     → response.rs (success JSON, or the normalized error envelope)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{LookupRequest, X_REQUEST_ID};
pub use response::{ApiError, ApiErrorKind, ErrorEnvelope};
pub use server::{AppState, HttpServer, LIVENESS_BODY};
