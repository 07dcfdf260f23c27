//! Integration tests: validate scratch registries end to end.

use std::path::{Path, PathBuf};

use compreg_core::{RegistryError, RegistryLayout};
use compreg_schema::{validate_registry, ValidateOptions};

const VALID: &str = r#"schemaVersion: "2.0"
name: hero-banner
title: Hero Banner
category: hero
description:
  short: Full-width hero with primary CTA
tags:
  - hero
  - landing
images:
  preview: /registry/hero-banner.png
status: stable
"#;

fn write_record(root: &Path, dir: &str, body: &str) -> PathBuf {
    let comp = root.join("src/components/registry").join(dir);
    std::fs::create_dir_all(&comp).unwrap();
    let path = comp.join("metadata.yaml");
    std::fs::write(&path, body).unwrap();
    path
}

fn record_named(name: &str) -> String {
    VALID.replace("hero-banner", name)
}

#[test]
fn empty_registry_is_no_records_found() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src/components/registry")).unwrap();
    let layout = RegistryLayout::new(dir.path());

    let err = validate_registry(&layout, &ValidateOptions::default()).unwrap_err();
    assert!(matches!(err, RegistryError::NoRecordsFound { .. }));
    assert_eq!(
        err.to_string(),
        "No metadata.yaml files found under src/components/registry"
    );
}

#[test]
fn missing_registry_dir_is_no_records_found() {
    let dir = tempfile::tempdir().unwrap();
    let layout = RegistryLayout::new(dir.path());
    let err = validate_registry(&layout, &ValidateOptions::default()).unwrap_err();
    assert!(matches!(err, RegistryError::NoRecordsFound { .. }));
}

#[test]
fn valid_registry_passes_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "hero-banner", VALID);
    write_record(dir.path(), "pricing-table", &record_named("pricing-table"));
    let layout = RegistryLayout::new(dir.path());

    for _ in 0..2 {
        let report = validate_registry(&layout, &ValidateOptions::default()).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 2);
        assert!(report.is_success());
    }
}

#[test]
fn missing_category_names_file_and_field() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "hero-banner", VALID);
    let broken = VALID
        .replace("hero-banner", "broken-card")
        .replace("category: hero\n", "");
    write_record(dir.path(), "broken-card", &broken);
    let layout = RegistryLayout::new(dir.path());

    let err = validate_registry(&layout, &ValidateOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "src/components/registry/broken-card/metadata.yaml: missing required field 'category'"
    );
}

#[test]
fn fail_fast_stops_at_first_file_in_scan_order() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "a-first", "name: a-first\n");
    write_record(dir.path(), "b-second", "- not\n- an\n- object\n");
    let layout = RegistryLayout::new(dir.path());

    let err = validate_registry(&layout, &ValidateOptions::default()).unwrap_err();
    assert_eq!(
        err.record_path(),
        Some("src/components/registry/a-first/metadata.yaml")
    );
}

#[test]
fn list_document_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "weird", "- a\n- b\n");
    let layout = RegistryLayout::new(dir.path());

    let err = validate_registry(&layout, &ValidateOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "src/components/registry/weird/metadata.yaml: metadata must be a YAML object"
    );
}

#[test]
fn archived_status_fails_with_status_message() {
    let dir = tempfile::tempdir().unwrap();
    write_record(
        dir.path(),
        "hero-banner",
        &VALID.replace("status: stable", "status: archived"),
    );
    let layout = RegistryLayout::new(dir.path());

    let err = validate_registry(&layout, &ValidateOptions::default()).unwrap_err();
    assert!(err.to_string().ends_with("'status' must be one of draft/stable/deprecated"));
}

#[test]
fn empty_preview_fails_but_absent_images_passes() {
    let dir = tempfile::tempdir().unwrap();
    write_record(
        dir.path(),
        "hero-banner",
        &VALID.replace("  preview: /registry/hero-banner.png", "  preview: \"\""),
    );
    let layout = RegistryLayout::new(dir.path());
    let err = validate_registry(&layout, &ValidateOptions::default()).unwrap_err();
    assert!(err.to_string().ends_with("'images.preview' must be a non-empty string if provided"));

    let dir = tempfile::tempdir().unwrap();
    write_record(
        dir.path(),
        "hero-banner",
        &VALID.replace("images:\n  preview: /registry/hero-banner.png\n", ""),
    );
    let layout = RegistryLayout::new(dir.path());
    assert!(validate_registry(&layout, &ValidateOptions::default()).is_ok());
}

#[test]
fn aggregate_mode_reports_every_failing_file() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "a-ok", &record_named("a-ok"));
    write_record(dir.path(), "b-bad", "name: b-bad\n");
    write_record(dir.path(), "c-bad", &VALID.replace("tags:\n  - hero\n  - landing\n", "tags: []\n"));
    let layout = RegistryLayout::new(dir.path());

    let options = ValidateOptions {
        collect_all: true,
        ..Default::default()
    };
    let report = validate_registry(&layout, &options).unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.passed, 1);
    let messages: Vec<String> = report.failures.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "src/components/registry/b-bad/metadata.yaml: missing required field 'title'"
                .to_string(),
            "src/components/registry/c-bad/metadata.yaml: 'tags' must be a non-empty array"
                .to_string(),
        ]
    );
}

#[test]
fn duplicate_names_detected_across_directories() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "hero-banner", VALID);
    write_record(dir.path(), "hero-banner-copy", VALID);
    let layout = RegistryLayout::new(dir.path());

    assert!(validate_registry(&layout, &ValidateOptions::default()).is_ok());

    let options = ValidateOptions {
        check_duplicates: true,
        ..Default::default()
    };
    let err = validate_registry(&layout, &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "src/components/registry/hero-banner-copy/metadata.yaml: duplicate name 'hero-banner' \
         (already declared in src/components/registry/hero-banner/metadata.yaml)"
    );
}

#[test]
fn nested_category_directories_are_validated() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "marketing/hero-banner", VALID);
    write_record(dir.path(), "marketing/cta-strip", "name: cta-strip\n");
    let layout = RegistryLayout::new(dir.path());

    let err = validate_registry(&layout, &ValidateOptions::default()).unwrap_err();
    assert_eq!(
        err.record_path(),
        Some("src/components/registry/marketing/cta-strip/metadata.yaml")
    );
}

#[test]
fn description_from_merge_key_passes() {
    let dir = tempfile::tempdir().unwrap();
    write_record(
        dir.path(),
        "hero-banner",
        "shared: &shared\n  short: Full-width hero\n\
         name: hero-banner\ntitle: Hero Banner\ncategory: hero\n\
         description:\n  <<: *shared\ntags: [hero]\n",
    );
    let layout = RegistryLayout::new(dir.path());

    let report = validate_registry(&layout, &ValidateOptions::default()).unwrap();
    assert!(report.is_success());
}
