//! # Repository Scanner
//!
//! Yields every `metadata.yaml` that lives in a descendant directory of the
//! registry directory. Component directories may be grouped under nested
//! category directories; the walk descends through all of them. A metadata
//! file placed directly in the registry directory is not a component and is
//! ignored.
//!
//! Results are sorted. Ordering of the published index is established by
//! the index builder, not here; sorting only makes the validator's
//! fail-fast diagnostic stable across filesystems.

use std::path::{Path, PathBuf};

use crate::layout::RegistryLayout;

/// Find all metadata files beneath the layout's registry directory.
///
/// Returns an empty list when the registry directory does not exist.
/// Unreadable directories are logged and skipped. Symlinked directories
/// are not followed.
pub fn scan_metadata_files(layout: &RegistryLayout) -> Vec<PathBuf> {
    let base = layout.registry_dir();
    if !base.is_dir() {
        tracing::debug!(
            registry_dir = %base.display(),
            "registry directory not found; nothing to scan"
        );
        return Vec::new();
    }

    let mut found = Vec::new();
    walk_component_dirs(&base, layout.metadata_file(), &mut found);
    found.sort();

    tracing::debug!(count = found.len(), "scanned registry");
    found
}

fn walk_component_dirs(dir: &Path, file_name: &str, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to read directory during registry scan"
            );
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }

        let path = entry.path();
        let candidate = path.join(file_name);
        if candidate.is_file() {
            tracing::trace!(path = %candidate.display(), "found metadata file");
            acc.push(candidate);
        }
        walk_component_dirs(&path, file_name, acc);
    }
}
