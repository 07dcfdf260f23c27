//! # Registry Layout: Explicit Path Configuration
//!
//! `RegistryLayout` is the resolved set of paths every component works
//! against. It is constructed once at the entry point and passed down by
//! reference; nothing in the workspace reads the current directory or the
//! environment on its own.
//!
//! ## On-Disk Contract
//!
//! ```text
//! <root>/src/components/registry/<component-name>/metadata.yaml
//! <root>/src/components/registry/<component-name>/index.tsx
//! <root>/public/registry/index.json
//! ```
//!
//! Every relative path in the layout resolves against `root`. A
//! [`LayoutConfig`] YAML file can override any of the defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RegistryError;

/// Registry directory, relative to the project root.
pub const DEFAULT_REGISTRY_DIR: &str = "src/components/registry";

/// Filename of each component's metadata record.
pub const DEFAULT_METADATA_FILE: &str = "metadata.yaml";

/// Filename of each component's source stub.
pub const DEFAULT_STUB_FILE: &str = "index.tsx";

/// Index artifact path, relative to the project root.
pub const DEFAULT_INDEX_PATH: &str = "public/registry/index.json";

/// Optional overrides loaded from a YAML layout file.
///
/// ```yaml
/// registry_dir: packages/ui/registry
/// index_path: site/static/registry.json
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Registry directory override.
    #[serde(default)]
    pub registry_dir: Option<PathBuf>,
    /// Metadata filename override.
    #[serde(default)]
    pub metadata_file: Option<String>,
    /// Stub filename override.
    #[serde(default)]
    pub stub_file: Option<String>,
    /// Index output path override.
    #[serde(default)]
    pub index_path: Option<PathBuf>,
}

impl LayoutConfig {
    /// Load a layout config from a YAML file.
    ///
    /// An empty file yields the default (no overrides).
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|e| RegistryError::Config {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| RegistryError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Resolved registry paths rooted at a project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryLayout {
    root: PathBuf,
    registry_dir: PathBuf,
    metadata_file: String,
    stub_file: String,
    index_path: PathBuf,
}

impl RegistryLayout {
    /// Layout with all defaults under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, &LayoutConfig::default())
    }

    /// Layout under `root` with the overrides from `config` applied.
    pub fn with_config(root: impl Into<PathBuf>, config: &LayoutConfig) -> Self {
        Self {
            root: root.into(),
            registry_dir: config
                .registry_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY_DIR)),
            metadata_file: config
                .metadata_file
                .clone()
                .unwrap_or_else(|| DEFAULT_METADATA_FILE.to_string()),
            stub_file: config
                .stub_file
                .clone()
                .unwrap_or_else(|| DEFAULT_STUB_FILE.to_string()),
            index_path: config
                .index_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_PATH)),
        }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (root-joined) registry directory.
    pub fn registry_dir(&self) -> PathBuf {
        self.root.join(&self.registry_dir)
    }

    /// Metadata filename searched for in every component directory.
    pub fn metadata_file(&self) -> &str {
        &self.metadata_file
    }

    /// Source stub filename written by the scaffolder.
    pub fn stub_file(&self) -> &str {
        &self.stub_file
    }

    /// Root-joined index artifact path.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_path)
    }

    /// Directory for the component `name`.
    pub fn component_dir(&self, name: &str) -> PathBuf {
        self.registry_dir().join(name)
    }

    /// Render `path` relative to the project root for diagnostics.
    ///
    /// Paths outside the root are rendered as-is.
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Walk up from `start` to the first ancestor containing `registry_dir`.
///
/// Returns `None` when no ancestor has one; callers decide the fallback.
pub fn discover_root(start: &Path, registry_dir: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(registry_dir).is_dir())
        .map(Path::to_path_buf)
}
