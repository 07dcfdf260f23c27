//! # registry-build
//!
//! Writes `public/registry/index.json` from every record in the registry.

use std::process::ExitCode;

use clap::Parser;

use compreg_cli::build::{run_build, BuildArgs};
use compreg_cli::{exit_code, GlobalArgs};

/// Build the published component index.
#[derive(Parser, Debug)]
#[command(name = "registry-build", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: BuildArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.global.init_tracing();

    let result = cli
        .global
        .layout()
        .and_then(|layout| run_build(&cli.args, &layout));
    exit_code(result)
}
