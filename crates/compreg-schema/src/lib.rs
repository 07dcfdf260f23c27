//! # compreg-schema: Metadata Schema Validation
//!
//! The publication gate. Every discovered `metadata.yaml` is checked
//! against the record schema before the index may be published.
//!
//! ## Contract
//!
//! - Zero discovered files is `NoRecordsFound`: an empty registry is a
//!   misconfiguration, not a pass.
//! - Field checks run in a fixed order and stop at the first violation.
//! - By default the run stops at the first failing file. Aggregate mode
//!   ([`ValidateOptions::collect_all`]) reports one violation per failing
//!   file instead.
//! - Nothing is written to disk.
//!
//! The index builder in `compreg-index` deliberately does not reuse these
//! checks; it stays tolerant of records this crate would reject.

pub mod validate;

pub use validate::{
    check_fields, validate_registry, RecordValidator, RegistryValidationReport, ValidateOptions,
};
