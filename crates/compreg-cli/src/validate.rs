//! # validate-metadata
//!
//! The publication gate. Stdout carries the single `OK:` line on success;
//! every failure line goes to stderr.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use compreg_core::RegistryLayout;
use compreg_schema::{validate_registry, ValidateOptions};

/// Arguments for `validate-metadata`.
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Validate every file and report all failures instead of stopping at
    /// the first.
    #[arg(long)]
    pub all: bool,

    /// Reject a component name already declared by another record.
    #[arg(long)]
    pub check_duplicates: bool,
}

impl ValidateArgs {
    fn options(&self) -> ValidateOptions {
        ValidateOptions {
            collect_all: self.all,
            check_duplicates: self.check_duplicates,
        }
    }
}

/// Execute `validate-metadata` against the process stdout and stderr.
pub fn run_validate(args: &ValidateArgs, layout: &RegistryLayout) -> Result<u8> {
    run_validate_with(args, layout, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Execute `validate-metadata`, writing the `OK:` line to `out` and every
/// failure line to `err`. Returns 0 when every record conforms.
pub fn run_validate_with(
    args: &ValidateArgs,
    layout: &RegistryLayout,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    let report = match validate_registry(layout, &args.options()) {
        Ok(report) => report,
        Err(e) => {
            writeln!(err, "ERROR: {e}")?;
            return Ok(1);
        }
    };

    if report.is_success() {
        writeln!(out, "OK: validated {} metadata files.", report.total)?;
        return Ok(0);
    }

    for failure in &report.failures {
        writeln!(err, "ERROR: {failure}")?;
    }
    writeln!(
        err,
        "FAILED: {} of {} metadata files invalid.",
        report.failures.len(),
        report.total
    )?;
    Ok(1)
}
