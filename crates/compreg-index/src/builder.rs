//! # Index Build
//!
//! Scan, load, project, filter, sort, render, write. The artifact is
//! replaced atomically: bytes go to a temporary file in the output
//! directory which is then renamed over the target, so readers never see a
//! partial index.

use std::io::Write;
use std::path::{Path, PathBuf};

use compreg_core::{scan_metadata_files, RecordDocument, RegistryError, RegistryLayout};

use crate::project::{project_record, IndexItem};
use crate::render::{sha256_hex, IndexBytes};

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of items written.
    pub items: usize,
    /// Absolute path of the artifact.
    pub output_path: PathBuf,
    /// Artifact path relative to the project root.
    pub output_display: String,
}

/// Result of comparing the on-disk artifact with a fresh render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexCheck {
    /// On-disk bytes match the computed index.
    UpToDate,
    /// No artifact exists at the output path.
    Missing,
    /// The artifact differs from the computed index.
    Outdated {
        /// Digest of the computed index.
        expected_sha256: String,
        /// Digest of the on-disk artifact.
        existing_sha256: String,
    },
}

/// Load and project every record, drop unnamed items, and sort by name.
///
/// Files that cannot be loaded are skipped with a warning.
pub fn collect_items(layout: &RegistryLayout) -> Vec<IndexItem> {
    let mut items: Vec<IndexItem> = Vec::new();

    for path in scan_metadata_files(layout) {
        let doc = match RecordDocument::load(layout, &path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable metadata file");
                continue;
            }
        };

        let item = project_record(doc.fields());
        if !item.is_listed() {
            tracing::debug!(path = doc.display_path(), "record has no name; not listed");
        }
        items.push(item);
    }

    order_items(items)
}

/// Drop unlisted items and stably sort the rest by name.
pub fn order_items(items: Vec<IndexItem>) -> Vec<IndexItem> {
    let mut items: Vec<IndexItem> = items.into_iter().filter(IndexItem::is_listed).collect();
    // Vec::sort_by is stable: equal names keep input order.
    items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    items
}

/// Render the index for the current registry without touching disk.
pub fn render_index(layout: &RegistryLayout) -> Result<(IndexBytes, usize), RegistryError> {
    let items = collect_items(layout);
    let bytes = IndexBytes::new(&items)?;
    Ok((bytes, items.len()))
}

/// Build the index and write it to the layout's output path.
///
/// Creates the output directory when needed.
pub fn build_index(layout: &RegistryLayout) -> Result<BuildSummary, RegistryError> {
    let output_path = layout.index_path();
    let output_display = layout.relative(&output_path);
    let out_dir = output_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| layout.root().to_path_buf());

    std::fs::create_dir_all(&out_dir)
        .map_err(|e| RegistryError::io(layout.relative(&out_dir), e))?;

    let (bytes, items) = render_index(layout)?;
    write_atomic(&out_dir, &output_path, bytes.as_bytes())
        .map_err(|e| RegistryError::io(output_display.clone(), e))?;

    tracing::info!(items, output = %output_display, "wrote registry index");

    Ok(BuildSummary {
        items,
        output_path,
        output_display,
    })
}

/// Compare the on-disk artifact against a fresh render.
///
/// Never writes and never creates the output directory.
pub fn check_index(layout: &RegistryLayout) -> Result<IndexCheck, RegistryError> {
    let output_path = layout.index_path();
    if !output_path.exists() {
        return Ok(IndexCheck::Missing);
    }

    let existing = std::fs::read(&output_path)
        .map_err(|e| RegistryError::io(layout.relative(&output_path), e))?;
    let (computed, _) = render_index(layout)?;

    if existing == computed.as_bytes() {
        Ok(IndexCheck::UpToDate)
    } else {
        Ok(IndexCheck::Outdated {
            expected_sha256: computed.sha256_hex(),
            existing_sha256: sha256_hex(&existing),
        })
    }
}

fn write_atomic(dir: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    // Temp files are created 0600; the artifact is read by the site build.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
