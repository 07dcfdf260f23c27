//! # compreg-index: Registry Index Builder
//!
//! Aggregates every discoverable metadata record into the published
//! `index.json` consumed by the site build.
//!
//! ## Tolerance
//!
//! The builder reflects whatever currently exists. It does not re-enforce
//! the validator's schema: a missing field becomes `null` or an empty
//! default, and a file that cannot be loaded is skipped with a warning.
//! It fails only on I/O errors writing the artifact.
//!
//! ## Determinism
//!
//! - Items are stably sorted by `name`.
//! - Item keys follow a fixed projection order; nested object keys are
//!   emitted sorted.
//! - All artifact bytes are produced by [`IndexBytes::new`].
//!
//! Running the builder twice on an unchanged registry produces
//! byte-identical output.

pub mod builder;
pub mod project;
pub mod render;

pub use builder::{
    build_index, check_index, collect_items, order_items, render_index, BuildSummary, IndexCheck,
};
pub use project::{project_record, IndexItem};
pub use render::IndexBytes;
