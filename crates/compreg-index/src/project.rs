//! # Record Projection
//!
//! Copies the public subset of a record into an [`IndexItem`]. Raw values
//! are copied unchanged. Defaults apply only when a key is absent; an
//! explicit `null` in the record stays `null` in the index.
//!
//! | field | default when absent |
//! |---|---|
//! | `schemaVersion` | `""` (always coerced to a string) |
//! | `images`, `description`, `tags` | `{}` |
//! | `freeformKeywords`, `fontFamily` | `[]` |
//! | everything else | `null` |

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

use compreg_core::record::{
    is_truthy, FIELD_CATEGORY, FIELD_CREATED_AT, FIELD_DESCRIPTION, FIELD_FONT_FAMILY,
    FIELD_FREEFORM_KEYWORDS, FIELD_IMAGES, FIELD_LANGUAGE, FIELD_NAME, FIELD_SCHEMA_VERSION,
    FIELD_STATUS, FIELD_TAGS,
};

/// One entry of the published index.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexItem {
    pub schema_version: String,
    pub name: Value,
    pub category: Value,
    pub images: Value,
    pub description: Value,
    pub created_at: Value,
    pub status: Value,
    pub language: Value,
    pub freeform_keywords: Value,
    pub font_family: Value,
    pub tags: Value,
}

impl IndexItem {
    /// Whether the item is published. Items with a falsy `name` are dropped.
    pub fn is_listed(&self) -> bool {
        is_truthy(&self.name)
    }

    /// Ordering key: the name string, `""` for null, the JSON rendering for
    /// any other shape.
    pub fn sort_key(&self) -> Cow<'_, str> {
        match &self.name {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// Project the top-level fields of one record.
pub fn project_record(fields: &Map<String, Value>) -> IndexItem {
    let raw = |key: &str| fields.get(key).cloned().unwrap_or(Value::Null);
    let or_object = |key: &str| {
        fields
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    };
    let or_array = |key: &str| {
        fields
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()))
    };

    IndexItem {
        schema_version: coerce_to_string(fields.get(FIELD_SCHEMA_VERSION)),
        name: raw(FIELD_NAME),
        category: raw(FIELD_CATEGORY),
        images: or_object(FIELD_IMAGES),
        description: or_object(FIELD_DESCRIPTION),
        created_at: raw(FIELD_CREATED_AT),
        status: raw(FIELD_STATUS),
        language: raw(FIELD_LANGUAGE),
        freeform_keywords: or_array(FIELD_FREEFORM_KEYWORDS),
        font_family: or_array(FIELD_FONT_FAMILY),
        tags: or_object(FIELD_TAGS),
    }
}

/// `schemaVersion` may be written unquoted (`2.0`) and parse as a number.
fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
