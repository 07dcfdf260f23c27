//! # validate-metadata
//!
//! Exit 0 when every record in the registry conforms, 1 otherwise.

use std::process::ExitCode;

use clap::Parser;

use compreg_cli::validate::{run_validate, ValidateArgs};
use compreg_cli::{exit_code, GlobalArgs};

/// Validate every component metadata record in the registry.
#[derive(Parser, Debug)]
#[command(name = "validate-metadata", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.global.init_tracing();

    let result = cli
        .global
        .layout()
        .and_then(|layout| run_validate(&cli.args, &layout));
    exit_code(result)
}
