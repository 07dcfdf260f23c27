//! # registry-build
//!
//! Writes the published index, or with `--check` compares the on-disk
//! artifact against a fresh render without writing anything.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use compreg_core::RegistryLayout;
use compreg_index::{build_index, check_index, IndexCheck};

/// Arguments for `registry-build`.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Verify the index is up to date instead of regenerating it.
    #[arg(long)]
    pub check: bool,
}

/// Execute `registry-build` against the process stdout.
pub fn run_build(args: &BuildArgs, layout: &RegistryLayout) -> Result<u8> {
    run_build_with(args, layout, &mut io::stdout().lock())
}

/// Execute `registry-build`, writing report lines to `out`.
///
/// Invalid records never fail a build; only I/O errors do.
pub fn run_build_with(
    args: &BuildArgs,
    layout: &RegistryLayout,
    out: &mut impl Write,
) -> Result<u8> {
    if args.check {
        return cmd_check(layout, out);
    }

    let summary = build_index(layout).context("failed to build registry index")?;
    writeln!(out, "Built {} items -> {}", summary.items, summary.output_display)?;
    Ok(0)
}

fn cmd_check(layout: &RegistryLayout, out: &mut impl Write) -> Result<u8> {
    let output = layout.relative(&layout.index_path());
    match check_index(layout).context("failed to check registry index")? {
        IndexCheck::UpToDate => {
            writeln!(out, "OK: index is up to date")?;
            Ok(0)
        }
        IndexCheck::Missing => {
            writeln!(out, "FAIL: index does not exist: {output}")?;
            Ok(1)
        }
        IndexCheck::Outdated {
            expected_sha256,
            existing_sha256,
        } => {
            writeln!(out, "FAIL: index is outdated or differs from computed index")?;
            writeln!(out, "  Expected digest: {expected_sha256}")?;
            writeln!(out, "  Existing digest: {existing_sha256}")?;
            Ok(1)
        }
    }
}
