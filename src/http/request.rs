//! Inbound lookup request.
//!
//! # Responsibilities
//! - Decode the POST body into a [`LookupRequest`]
//! - Keep credentials out of debug output
//!
//! # Design Decisions
//! - Every field defaults to the empty string
//! - The body must be a JSON object; arrays, scalars and `null` are rejected
//! - No Content-Type requirement; the body is decoded whatever it is labelled

use std::fmt;

use serde::de::{Error as _, Unexpected};
use serde::Deserialize;
use serde_json::Value;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Body of a lookup call.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupRequest {
    pub word: String,
    /// Empty means the upstream default locale.
    pub lang: String,
    pub app_id: String,
    pub app_key: String,
}

impl LookupRequest {
    /// Decode a raw request body.
    ///
    /// Only a JSON object is accepted; the derived decoder alone would also
    /// fill the struct positionally from an array.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(serde_json::Error::invalid_type(
                unexpected(&value),
                &"a JSON object",
            ));
        }
        serde_json::from_value(value)
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

impl fmt::Debug for LookupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupRequest")
            .field("word", &self.word)
            .field("lang", &self.lang)
            .field("app_id", &"<redacted>")
            .field("app_key", &"<redacted>")
            .finish()
    }
}
