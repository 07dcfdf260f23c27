//! # compreg-core: Foundational Types for the Component Registry
//!
//! Every other crate in the workspace depends on `compreg-core`; it depends
//! on nothing internal.
//!
//! ## Contents
//!
//! - [`layout`]: `RegistryLayout`, the explicit set of paths (project root,
//!   registry directory, index output) threaded through every component,
//!   plus the optional YAML layout configuration.
//! - [`record`]: the metadata record model: field names, the `Status`
//!   enum, string predicates, and `RecordDocument` loading.
//! - [`scan`]: the repository scanner that yields candidate
//!   `metadata.yaml` locations.
//! - [`temporal`]: UTC-only `Timestamp` used for `createdAt`.
//! - [`error`]: `RegistryError`, the error taxonomy shared by the
//!   validator and the index builder.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `compreg-*` crates.
//! - The core only reads the registry. Writing is the job of the index
//!   builder and the scaffolder.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod layout;
pub mod record;
pub mod scan;
pub mod temporal;

pub use error::RegistryError;
pub use layout::{discover_root, LayoutConfig, RegistryLayout};
pub use record::{RecordDocument, Status};
pub use scan::scan_metadata_files;
pub use temporal::Timestamp;
