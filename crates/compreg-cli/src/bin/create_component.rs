//! # create-component
//!
//! Scaffolds a new component directory under the registry.

use std::process::ExitCode;

use clap::Parser;

use compreg_cli::create::{run_create, CreateArgs};
use compreg_cli::{exit_code, GlobalArgs};

/// Create a registry component with draft metadata and a stub.
#[derive(Parser, Debug)]
#[command(name = "create-component", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: CreateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.global.init_tracing();

    let result = cli
        .global
        .layout()
        .and_then(|layout| run_create(&cli.args, &layout));
    exit_code(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_short_flags() {
        let cli = Cli::try_parse_from([
            "create-component",
            "-n",
            "hero-banner",
            "-c",
            "hero",
            "-i",
            "/registry/hero-banner.png",
            "-k",
            "hero,landing",
        ])
        .unwrap();
        assert_eq!(cli.args.name, "hero-banner");
        assert_eq!(cli.args.category, "hero");
        assert_eq!(cli.args.image_path, "/registry/hero-banner.png");
        assert_eq!(cli.args.keywords, "hero,landing");
        assert_eq!(cli.args.font_family, "Inter");
        assert!(!cli.args.force);
        assert!(!cli.args.dry_run);
    }

    #[test]
    fn cli_parses_long_flags() {
        let cli = Cli::try_parse_from([
            "create-component",
            "--name",
            "card",
            "--category",
            "cards",
            "--image-path",
            "/card.png",
            "--keywords",
            "card",
            "--font-family",
            "Pretendard",
            "--created-at",
            "2025-01-01T00:00:00Z",
            "--force",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.args.font_family, "Pretendard");
        assert_eq!(cli.args.created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
        assert!(cli.args.force);
        assert!(cli.args.dry_run);
    }

    #[test]
    fn cli_requires_keywords() {
        let result = Cli::try_parse_from([
            "create-component",
            "-n",
            "card",
            "-c",
            "cards",
            "-i",
            "/card.png",
        ]);
        assert!(result.is_err());
    }
}
