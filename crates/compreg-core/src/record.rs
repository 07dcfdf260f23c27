//! # Metadata Record Model
//!
//! One component's descriptor, loaded from `metadata.yaml`. The record is
//! held as a raw JSON object rather than a typed struct: the validator must
//! report *which* field is wrong in a fixed order, and the index builder must
//! copy whatever is present without enforcing the schema. Both read the same
//! [`RecordDocument`].
//!
//! ## Loading Rules
//!
//! - An empty or comment-only document loads as an empty object.
//! - A document whose top level is not a mapping is `MalformedDocument`.
//! - YAML that cannot be represented as JSON (non-string keys, tags) is
//!   `MalformedDocument` carrying the parser message.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RegistryError;
use crate::layout::RegistryLayout;

pub const FIELD_SCHEMA_VERSION: &str = "schemaVersion";
pub const FIELD_NAME: &str = "name";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_TAGS: &str = "tags";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_IMAGES: &str = "images";
pub const FIELD_FREEFORM_KEYWORDS: &str = "freeformKeywords";
pub const FIELD_FONT_FAMILY: &str = "fontFamily";
pub const FIELD_CREATED_AT: &str = "createdAt";
pub const FIELD_LANGUAGE: &str = "language";

/// Top-level fields every record must carry, in check order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    FIELD_NAME,
    FIELD_TITLE,
    FIELD_DESCRIPTION,
    FIELD_CATEGORY,
    FIELD_TAGS,
];

/// Fields required inside `description`.
pub const REQUIRED_DESCRIPTION_FIELDS: [&str; 1] = ["short"];

/// Lifecycle status of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Scaffolded, not yet reviewed. Implied when `status` is absent.
    #[default]
    Draft,
    /// Published and supported.
    Stable,
    /// Kept for existing consumers; not for new use.
    Deprecated,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 3] = [Status::Draft, Status::Stable, Status::Deprecated];

    /// Wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Stable => "stable",
            Self::Deprecated => "deprecated",
        }
    }

    /// Parse an exact wire string. Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Resolve the `status` field of a record: absent means `Draft`,
    /// anything other than one of the three wire strings is `None`.
    pub fn from_field(value: Option<&Value>) -> Option<Self> {
        match value {
            None => Some(Self::default()),
            Some(Value::String(s)) => Self::parse(s),
            Some(_) => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if `value` is a string that is not blank after trimming.
pub fn is_nonempty_str(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

/// Truthiness as the index builder applies it to `name`: `null`, `false`,
/// zero, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// A parsed metadata file.
#[derive(Debug, Clone)]
pub struct RecordDocument {
    display_path: String,
    fields: Map<String, Value>,
}

impl RecordDocument {
    /// Read and parse the metadata file at `path`.
    ///
    /// Error paths are rendered relative to the layout root.
    pub fn load(layout: &RegistryLayout, path: &Path) -> Result<Self, RegistryError> {
        let display_path = layout.relative(path);
        let content = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::io(display_path.clone(), e))?;
        let fields = parse_document(&content, &display_path)?;
        Ok(Self {
            display_path,
            fields,
        })
    }

    /// Build a document from already-parsed fields.
    pub fn from_fields(display_path: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            display_path: display_path.into(),
            fields,
        }
    }

    /// Location relative to the project root, for diagnostics.
    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    /// All top-level fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Raw value of a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// `name`, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.get(FIELD_NAME).and_then(Value::as_str)
    }
}

/// Parse YAML text into a top-level object.
pub fn parse_document(content: &str, display_path: &str) -> Result<Map<String, Value>, RegistryError> {
    if is_blank_document(content) {
        return Ok(Map::new());
    }
    let malformed = |e: serde_yaml::Error| RegistryError::MalformedDocument {
        path: display_path.to_string(),
        reason: format!("invalid YAML: {e}"),
    };
    let mut yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(malformed)?;
    // `<<: *anchor` merge keys are expanded; explicit keys win over merged ones.
    yaml.apply_merge().map_err(malformed)?;
    let value: Value = serde_yaml::from_value(yaml).map_err(malformed)?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(RegistryError::MalformedDocument {
            path: display_path.to_string(),
            reason: "metadata must be a YAML object".to_string(),
        }),
    }
}

fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
