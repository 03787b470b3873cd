//! Entries document returned by the dictionary provider.
//!
//! The proxy relays this document without interpreting it. Every field is
//! optional and absent fields stay absent when re-encoded, so a response
//! passes through field-for-field.

use serde::{Deserialize, Serialize};

/// Top-level entries response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntriesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<HeadwordEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

/// One headword and its lexical entries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadwordEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical_entries: Option<Vec<LexicalEntry>>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

/// Entries grouped by lexical category (noun, verb, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Entry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical_category: Option<Tag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etymologies: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub homograph_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciations: Option<Vec<Pronunciation>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub senses: Option<Vec<Sense>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pronunciation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialects: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic_notation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic_spelling: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
}

/// A sense of an entry. Subsenses share the same shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Sense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registers: Option<Vec<Tag>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsenses: Option<Vec<Sense>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Example {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An `{ id, text }` pair, used for lexical categories and registers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
