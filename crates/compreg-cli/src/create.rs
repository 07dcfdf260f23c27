//! # create-component
//!
//! Scaffolds `<registry>/<name>/` with a draft `metadata.yaml` and an
//! `index.tsx` stub. The generated record passes `validate-metadata` as
//! written; authors replace the placeholder description before review.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use compreg_core::{RegistryLayout, Status, Timestamp};

/// Schema version stamped on new records.
pub const SCHEMA_VERSION: &str = "2.0";

/// Placeholder written to `description.short`.
pub const DESCRIPTION_PLACEHOLDER: &str = "TODO: short description (150 chars max)";

/// Arguments for `create-component`.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Component name in kebab-case (e.g. hero-banner).
    #[arg(long, short = 'n')]
    pub name: String,

    /// Category the component is listed under.
    #[arg(long, short = 'c')]
    pub category: String,

    /// Public path of the preview image.
    #[arg(long, short = 'i')]
    pub image_path: String,

    /// Comma-separated keywords; also used as the initial tags.
    #[arg(long, short = 'k')]
    pub keywords: String,

    /// Comma-separated font families.
    #[arg(long, short = 'f', default_value = "Inter")]
    pub font_family: String,

    /// Pin `createdAt` (UTC, `YYYY-MM-DDTHH:MM:SSZ`) instead of using the
    /// current time.
    #[arg(long, value_name = "TIMESTAMP")]
    pub created_at: Option<String>,

    /// Overwrite an existing non-empty component directory.
    #[arg(long)]
    pub force: bool,

    /// Print the generated metadata without writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftMetadata<'a> {
    schema_version: &'static str,
    name: &'a str,
    title: String,
    category: &'a str,
    images: DraftImages<'a>,
    description: DraftDescription,
    tags: &'a [String],
    freeform_keywords: &'a [String],
    font_family: &'a [String],
    created_at: String,
    status: Status,
    language: &'static str,
}

#[derive(Debug, Serialize)]
struct DraftImages<'a> {
    preview: &'a str,
}

#[derive(Debug, Serialize)]
struct DraftDescription {
    short: &'static str,
}

/// Execute `create-component`.
pub fn run_create(args: &CreateArgs, layout: &RegistryLayout) -> Result<u8> {
    let name = args.name.as_str();
    if !is_kebab_case(name) {
        eprintln!("Error: '{name}' is not valid kebab-case.");
        return Ok(1);
    }

    let keywords = parse_csv(&args.keywords);
    if keywords.is_empty() {
        eprintln!("Error: --keywords is required.");
        return Ok(1);
    }
    let fonts = parse_csv(&args.font_family);

    let category = args.category.trim();
    if category.is_empty() {
        eprintln!("Error: --category must not be empty.");
        return Ok(1);
    }
    let image_path = args.image_path.trim();
    if image_path.is_empty() {
        eprintln!("Error: --image-path must not be empty.");
        return Ok(1);
    }

    let created_at = match &args.created_at {
        Some(s) => match Timestamp::parse(s) {
            Ok(ts) => ts,
            Err(e) => {
                eprintln!("Error: --created-at: {e}");
                return Ok(1);
            }
        },
        None => Timestamp::now(),
    };

    let metadata = render_metadata(&DraftMetadata {
        schema_version: SCHEMA_VERSION,
        name,
        title: title_case(name),
        category,
        images: DraftImages {
            preview: image_path,
        },
        description: DraftDescription {
            short: DESCRIPTION_PLACEHOLDER,
        },
        tags: &keywords,
        freeform_keywords: &keywords,
        font_family: &fonts,
        created_at: created_at.to_iso8601(),
        status: Status::Draft,
        language: "en",
    })?;

    if args.dry_run {
        print!("{metadata}");
        return Ok(0);
    }

    let component_dir = layout.component_dir(name);
    let display = layout.relative(&component_dir);
    if is_nonempty_dir(&component_dir)? && !args.force {
        eprintln!("Error: folder already exists and not empty: {display}");
        eprintln!("Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::create_dir_all(&component_dir)
        .with_context(|| format!("failed to create component directory: {display}"))?;

    let metadata_path = component_dir.join(layout.metadata_file());
    std::fs::write(&metadata_path, &metadata)
        .with_context(|| format!("failed to write {}", layout.relative(&metadata_path)))?;

    let stub_path = component_dir.join(layout.stub_file());
    std::fs::write(&stub_path, render_stub(name))
        .with_context(|| format!("failed to write {}", layout.relative(&stub_path)))?;

    tracing::info!(component = name, "scaffolded component");
    println!("[SUCCESS] Created: {display}");
    Ok(0)
}

fn render_metadata(draft: &DraftMetadata<'_>) -> Result<String> {
    serde_yaml::to_string(draft).context("failed to serialize metadata")
}

fn render_stub(name: &str) -> String {
    format!(
        r#""use client";

export default function Component() {{
  return (
    <section className="w-full bg-white text-gray-900">
      <div className="mx-auto max-w-5xl p-8">
        <h1 className="text-2xl font-semibold">{name}</h1>
        <p className="mt-2 text-gray-600">TODO: Implement this component.</p>
      </div>
    </section>
  );
}}
"#
    )
}

fn is_nonempty_dir(dir: &std::path::Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    Ok(entries.next().is_some())
}

/// `^[a-z0-9]+(-[a-z0-9]+)*$`
pub fn is_kebab_case(name: &str) -> bool {
    name.split('-').all(|segment| {
        !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

/// Split on commas, trim, drop blanks.
pub fn parse_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// `hero-banner` becomes `Hero Banner`.
pub fn title_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
