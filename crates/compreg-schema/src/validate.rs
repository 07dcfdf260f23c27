//! # Record Validation
//!
//! Applies the metadata schema to scanned records.
//!
//! ## Check Order
//!
//! 1. Required top-level fields present: `name`, `title`, `description`,
//!    `category`, `tags`.
//! 2. `name` and `title` are non-empty strings.
//! 3. `description` is an object whose `short` is a non-empty string.
//! 4. `category` is a non-empty string.
//! 5. `tags` is a non-empty sequence of non-empty strings.
//! 6. `status`, if present, is `draft`, `stable` or `deprecated`.
//! 7. `images`, if present, is an object; a non-null `preview` is a
//!    non-empty string.
//!
//! The first failing check is the only one reported for a file. Reason
//! strings are part of the CLI output contract; change them with care.

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};

use compreg_core::record::{
    is_nonempty_str, FIELD_CATEGORY, FIELD_DESCRIPTION, FIELD_IMAGES, FIELD_NAME, FIELD_STATUS,
    FIELD_TAGS, FIELD_TITLE, REQUIRED_DESCRIPTION_FIELDS, REQUIRED_FIELDS,
};
use compreg_core::{scan_metadata_files, RecordDocument, RegistryError, RegistryLayout, Status};

/// Knobs for a registry validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Validate every file and report all failing files instead of
    /// stopping at the first.
    pub collect_all: bool,
    /// Reject a `name` already declared by an earlier file.
    pub check_duplicates: bool,
}

/// Outcome of a registry validation run.
#[derive(Debug)]
pub struct RegistryValidationReport {
    /// Number of metadata files discovered.
    pub total: usize,
    /// Number of files that passed every check.
    pub passed: usize,
    /// One error per failing file, in scan order. Always empty in
    /// fail-fast mode, since the first failure is returned as `Err`.
    pub failures: Vec<RegistryError>,
}

impl RegistryValidationReport {
    /// True when every discovered file passed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check the fields of one record, returning the reason for the first
/// violation.
pub fn check_fields(fields: &Map<String, Value>) -> Result<(), String> {
    for key in REQUIRED_FIELDS {
        if !fields.contains_key(key) {
            return Err(format!("missing required field '{key}'"));
        }
    }

    for key in [FIELD_NAME, FIELD_TITLE] {
        if !is_nonempty_str(fields.get(key)) {
            return Err(format!("'{key}' must be a non-empty string"));
        }
    }

    let description = match fields.get(FIELD_DESCRIPTION) {
        Some(Value::Object(d)) => d,
        _ => return Err(format!("'{FIELD_DESCRIPTION}' must be an object")),
    };
    for key in REQUIRED_DESCRIPTION_FIELDS {
        if !is_nonempty_str(description.get(key)) {
            return Err(format!("'{FIELD_DESCRIPTION}.{key}' must be a non-empty string"));
        }
    }

    if !is_nonempty_str(fields.get(FIELD_CATEGORY)) {
        return Err(format!("'{FIELD_CATEGORY}' must be a non-empty string"));
    }

    match fields.get(FIELD_TAGS) {
        Some(Value::Array(tags)) if !tags.is_empty() => {
            if !tags.iter().all(|t| is_nonempty_str(Some(t))) {
                return Err("each tag must be a non-empty string".to_string());
            }
        }
        _ => return Err(format!("'{FIELD_TAGS}' must be a non-empty array")),
    }

    if Status::from_field(fields.get(FIELD_STATUS)).is_none() {
        let allowed: Vec<&str> = Status::ALL.iter().map(Status::as_str).collect();
        return Err(format!("'{FIELD_STATUS}' must be one of {}", allowed.join("/")));
    }

    match fields.get(FIELD_IMAGES) {
        None | Some(Value::Null) => {}
        Some(Value::Object(images)) => {
            if let Some(preview) = images.get("preview") {
                if !preview.is_null() && !is_nonempty_str(Some(preview)) {
                    return Err(format!(
                        "'{FIELD_IMAGES}.preview' must be a non-empty string if provided"
                    ));
                }
            }
        }
        Some(_) => return Err(format!("'{FIELD_IMAGES}' must be an object if provided")),
    }

    Ok(())
}

/// Validates records one at a time, remembering names across files when
/// the duplicate check is enabled.
#[derive(Debug, Default)]
pub struct RecordValidator {
    check_duplicates: bool,
    seen_names: HashMap<String, String>,
}

impl RecordValidator {
    /// New validator. `check_duplicates` enables the cross-file name check.
    pub fn new(check_duplicates: bool) -> Self {
        Self {
            check_duplicates,
            seen_names: HashMap::new(),
        }
    }

    /// Check an already-loaded document.
    pub fn check_document(&mut self, doc: &RecordDocument) -> Result<(), RegistryError> {
        check_fields(doc.fields()).map_err(|reason| RegistryError::Validation {
            path: doc.display_path().to_string(),
            reason,
        })?;

        if self.check_duplicates {
            // check_fields guarantees a non-empty string name.
            let name = doc.name().unwrap_or_default().to_string();
            if let Some(first) = self.seen_names.get(&name) {
                return Err(RegistryError::Validation {
                    path: doc.display_path().to_string(),
                    reason: format!("duplicate name '{name}' (already declared in {first})"),
                });
            }
            self.seen_names.insert(name, doc.display_path().to_string());
        }

        Ok(())
    }

    /// Load and check the metadata file at `path`.
    pub fn validate_file(
        &mut self,
        layout: &RegistryLayout,
        path: &Path,
    ) -> Result<(), RegistryError> {
        let doc = RecordDocument::load(layout, path)?;
        self.check_document(&doc)?;
        tracing::debug!(path = doc.display_path(), "metadata file valid");
        Ok(())
    }
}

/// Validate every metadata file in the registry.
///
/// # Errors
///
/// - `NoRecordsFound` if the scan yields no files.
/// - In fail-fast mode, the first `MalformedDocument`, `Validation` or
///   `Io` error encountered.
///
/// In aggregate mode, record-level failures are collected into the
/// report; only `NoRecordsFound` is returned as `Err`.
pub fn validate_registry(
    layout: &RegistryLayout,
    options: &ValidateOptions,
) -> Result<RegistryValidationReport, RegistryError> {
    let files = scan_metadata_files(layout);
    if files.is_empty() {
        return Err(RegistryError::NoRecordsFound {
            file_name: layout.metadata_file().to_string(),
            registry_dir: layout.relative(&layout.registry_dir()),
        });
    }

    let mut validator = RecordValidator::new(options.check_duplicates);
    let mut report = RegistryValidationReport {
        total: files.len(),
        passed: 0,
        failures: Vec::new(),
    };

    for path in &files {
        match validator.validate_file(layout, path) {
            Ok(()) => report.passed += 1,
            Err(e) if options.collect_all => {
                tracing::debug!(error = %e, "metadata file invalid");
                report.failures.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        total = report.total,
        passed = report.passed,
        failed = report.failures.len(),
        "registry validation finished"
    );

    Ok(report)
}
