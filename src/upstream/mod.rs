//! Dictionary provider integration.
//!
//! # Data Flow
//! ```text
//! (app_id, app_key, lang, word)
//!     → client.rs (templated entries URL, credential headers, one GET)
//!     → types.rs (typed EntriesResponse decode)
//!     → back to the HTTP handler for re-encoding
//! ```
//!
//! # Security Constraints
//! - Credentials travel only as the `app_id` / `app_key` request headers
//! - Credentials are never logged and never placed in the URL

pub mod client;
pub mod types;

pub use client::{parse_base_url, DictionaryClient, LookupError, DEFAULT_BASE_URL, DEFAULT_LANG};
pub use types::EntriesResponse;
