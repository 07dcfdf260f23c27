//! # Error Types: Registry Error Taxonomy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Display Contract
//!
//! Record-level errors render as `<path>: <reason>` with the path relative
//! to the project root. The validator binary prefixes that with `ERROR: `,
//! so the rendered message is the operator's sole diagnostic.

use thiserror::Error;

/// Top-level error type for the component registry toolchain.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The scan found no metadata files. Fatal for the validator, never
    /// raised by the index builder.
    #[error("No {file_name} files found under {registry_dir}")]
    NoRecordsFound {
        /// Metadata filename that was searched for.
        file_name: String,
        /// Registry directory, relative to the project root.
        registry_dir: String,
    },

    /// The document is not valid YAML, or does not parse to a mapping.
    #[error("{path}: {reason}")]
    MalformedDocument {
        /// Offending file, relative to the project root.
        path: String,
        /// Parser message or shape complaint.
        reason: String,
    },

    /// A required-field or type constraint is violated.
    #[error("{path}: {reason}")]
    Validation {
        /// Offending file, relative to the project root.
        path: String,
        /// One-line human-readable reason.
        reason: String,
    },

    /// The layout configuration file could not be loaded.
    #[error("config error for '{path}': {reason}")]
    Config {
        /// Path to the config file.
        path: String,
        /// Reason the config could not be loaded.
        reason: String,
    },

    /// A timestamp string is not UTC RFC 3339.
    #[error("{0}")]
    InvalidTimestamp(String),

    /// Filesystem failure.
    #[error("{path}: {source}")]
    Io {
        /// Path the operation was acting on.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Rendering the index artifact failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RegistryError {
    /// Build an [`RegistryError::Io`] for `path`.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The offending file for record-level errors.
    pub fn record_path(&self) -> Option<&str> {
        match self {
            Self::MalformedDocument { path, .. } | Self::Validation { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_renders_path_and_reason() {
        let err = RegistryError::Validation {
            path: "src/components/registry/hero/metadata.yaml".into(),
            reason: "missing required field 'category'".into(),
        };
        assert_eq!(
            err.to_string(),
            "src/components/registry/hero/metadata.yaml: missing required field 'category'"
        );
        assert_eq!(
            err.record_path(),
            Some("src/components/registry/hero/metadata.yaml")
        );
    }

    #[test]
    fn no_records_found_names_registry_dir() {
        let err = RegistryError::NoRecordsFound {
            file_name: "metadata.yaml".into(),
            registry_dir: "src/components/registry".into(),
        };
        assert_eq!(
            err.to_string(),
            "No metadata.yaml files found under src/components/registry"
        );
        assert!(err.record_path().is_none());
    }

    #[test]
    fn io_error_keeps_source() {
        let err = RegistryError::io(
            "public/registry",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("public/registry: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
