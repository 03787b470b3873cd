//! Dictionary lookup proxy library.
//!
//! Accepts `POST` lookups on any path, forwards them to the Oxford
//! Dictionaries entries API with the caller's credentials injected as
//! headers, and relays the JSON document or a `{"status":"error"}` envelope.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::DictionaryClient;
