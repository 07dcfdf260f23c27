//! # compreg-cli: Component Registry Command-Line Tools
//!
//! Three independent binaries, no subcommands:
//!
//! - `validate-metadata`: the publication gate. Exit 0 when every record
//!   conforms, 1 otherwise.
//! - `registry-build`: writes `public/registry/index.json`, or with
//!   `--check` verifies it is up to date.
//! - `create-component`: scaffolds a new component directory.
//!
//! ```bash
//! create-component -n hero-banner -c hero -i /registry/hero-banner.png -k hero,landing
//! validate-metadata && registry-build
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in the binaries; handlers here take parsed
//!   args plus an explicit [`RegistryLayout`] and return an exit code.
//! - Protocol lines (`OK:`, `ERROR:`, `Built ...`) are written by the
//!   handlers; diagnostics beyond those go through `tracing` on stderr.

pub mod build;
pub mod create;
pub mod validate;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tracing_subscriber::EnvFilter;

use compreg_core::layout::DEFAULT_REGISTRY_DIR;
use compreg_core::{discover_root, LayoutConfig, RegistryLayout};

/// Flags shared by every binary.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Project root. Defaults to the nearest ancestor of the current
    /// directory that contains the registry directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// YAML layout configuration overriding the default paths.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Install the stderr tracing subscriber for the chosen verbosity.
    pub fn init_tracing(&self) {
        let filter = match self.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        };

        // A subscriber may already be installed when handlers run in-process.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Resolve the layout from the current directory.
    pub fn layout(&self) -> Result<RegistryLayout> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        self.resolve_layout(&cwd)
    }

    /// Resolve the layout as if invoked from `cwd`.
    ///
    /// `--root` and `--config` are taken relative to `cwd`. Without
    /// `--root`, the root is discovered by walking up from `cwd`; when no
    /// ancestor holds the registry, `cwd` itself is used.
    pub fn resolve_layout(&self, cwd: &Path) -> Result<RegistryLayout> {
        let config = match &self.config {
            Some(path) => LayoutConfig::from_file(&resolve_from(path, cwd))?,
            None => LayoutConfig::default(),
        };

        let root = match &self.root {
            Some(root) => resolve_from(root, cwd),
            None => {
                let registry_dir = config
                    .registry_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY_DIR));
                discover_root(cwd, &registry_dir).unwrap_or_else(|| {
                    tracing::warn!(
                        cwd = %cwd.display(),
                        "could not locate project root; using current directory"
                    );
                    cwd.to_path_buf()
                })
            }
        };

        tracing::debug!(root = %root.display(), "resolved project root");
        Ok(RegistryLayout::with_config(root, &config))
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_from(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Map a handler result to the process exit code.
pub fn exit_code(result: Result<u8>) -> ExitCode {
    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
