//! Document domain model.
//!
//! A document is an id, an ordered list of tags and an opaque JSON payload.
//! Nothing outside the serialization boundary looks inside `data`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum id length in bytes. Ids double as file names.
pub const MAX_ID_LEN: usize = 255;

/// A stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identity key, unique within the store.
    pub id: String,

    /// Tags in the order given; duplicates are kept.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Arbitrary structured payload.
    #[serde(default)]
    pub data: Value,
}

impl Document {
    /// Create a document with no tags and a `null` payload.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
            data: Value::Null,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Validate the document's identity.
    pub fn validate(&self) -> Result<(), String> {
        validate_id(&self.id)
    }
}

/// Check that `id` can be used as a storage key.
///
/// Rejects empty and oversized ids, path separators, NUL and the `.`/`..`
/// directory entries.
pub fn validate_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("Document id cannot be empty".to_string());
    }
    if id.len() > MAX_ID_LEN {
        return Err(format!(
            "Document id is too long ({} bytes, max {MAX_ID_LEN})",
            id.len()
        ));
    }
    if id == "." || id == ".." {
        return Err(format!("Document id ({id}) is reserved"));
    }
    if id.contains(['/', '\\', '\0']) {
        return Err(format!("Document id ({id}) contains a path separator"));
    }
    Ok(())
}
