//! Integration tests: build indexes from scratch registries and inspect the
//! written artifact.

use std::path::Path;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use compreg_core::RegistryLayout;
use compreg_index::{build_index, order_items, project_record, IndexItem};

fn write_record(root: &Path, dir: &str, body: &str) {
    let comp = root.join("src/components/registry").join(dir);
    std::fs::create_dir_all(&comp).unwrap();
    std::fs::write(comp.join("metadata.yaml"), body).unwrap();
}

fn read_index(layout: &RegistryLayout) -> Vec<Value> {
    let bytes = std::fs::read(layout.index_path()).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn output_is_sorted_by_name() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "one", "name: zeta\n");
    write_record(dir.path(), "two", "name: alpha\n");
    write_record(dir.path(), "three", "name: mid\n");
    let layout = RegistryLayout::new(dir.path());

    let summary = build_index(&layout).unwrap();
    assert_eq!(summary.items, 3);

    let names: Vec<Value> = read_index(&layout).into_iter().map(|i| i["name"].clone()).collect();
    assert_eq!(names, vec![json!("alpha"), json!("mid"), json!("zeta")]);
}

#[test]
fn double_build_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_record(
        dir.path(),
        "hero-banner",
        "schemaVersion: \"2.0\"\nname: hero-banner\ncategory: hero\n\
         description:\n  short: 큰 배너\n  detailed: wide\n\
         tags:\n  - hero\ncreatedAt: \"2025-01-01T00:00:00Z\"\n",
    );
    write_record(dir.path(), "footer", "name: footer\nfontFamily: [Inter, Pretendard]\n");
    let layout = RegistryLayout::new(dir.path());

    build_index(&layout).unwrap();
    let first = std::fs::read(layout.index_path()).unwrap();
    build_index(&layout).unwrap();
    let second = std::fs::read(layout.index_path()).unwrap();

    assert_eq!(first, second);
    assert!(String::from_utf8(first).unwrap().contains("큰 배너"));
}

#[test]
fn n_records_give_n_items_minus_unnamed() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..5 {
        write_record(dir.path(), &format!("c{i}"), &format!("name: comp-{i}\n"));
    }
    write_record(dir.path(), "unnamed", "name: \"\"\ncategory: hero\n");
    let layout = RegistryLayout::new(dir.path());

    assert_eq!(build_index(&layout).unwrap().items, 5);
    assert_eq!(read_index(&layout).len(), 5);
}

#[test]
fn broken_record_is_still_indexed_with_null_category() {
    let dir = tempfile::tempdir().unwrap();
    write_record(
        dir.path(),
        "hero-banner",
        "name: hero-banner\ntitle: Hero Banner\ncategory: hero\n\
         description:\n  short: Hero\ntags: [hero]\n",
    );
    write_record(
        dir.path(),
        "broken-card",
        "name: broken-card\ntitle: Broken\ndescription:\n  short: x\ntags: [card]\n",
    );
    let layout = RegistryLayout::new(dir.path());

    build_index(&layout).unwrap();
    let items = read_index(&layout);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], json!("broken-card"));
    assert_eq!(items[0]["category"], Value::Null);
    assert_eq!(items[1]["name"], json!("hero-banner"));
    assert_eq!(items[1]["category"], json!("hero"));
}

#[test]
fn every_item_has_the_projected_keys_and_nothing_else() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "card", "name: card\ntitle: Card\nparentPage: home\n");
    let layout = RegistryLayout::new(dir.path());

    build_index(&layout).unwrap();
    let items = read_index(&layout);
    let keys: Vec<&String> = items[0].as_object().unwrap().keys().collect();
    let mut expected = vec![
        "category",
        "createdAt",
        "description",
        "fontFamily",
        "freeformKeywords",
        "images",
        "language",
        "name",
        "schemaVersion",
        "status",
        "tags",
    ];
    expected.sort();
    let mut keys: Vec<&str> = keys.into_iter().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, expected);
}

#[test]
fn configured_output_path_is_used() {
    let dir = tempfile::tempdir().unwrap();
    write_record(dir.path(), "card", "name: card\n");
    let config = compreg_core::LayoutConfig {
        index_path: Some("site/static/registry.json".into()),
        ..Default::default()
    };
    let layout = RegistryLayout::with_config(dir.path(), &config);

    let summary = build_index(&layout).unwrap();
    assert_eq!(summary.output_display, "site/static/registry.json");
    assert!(dir.path().join("site/static/registry.json").is_file());
}

#[test]
fn merge_keys_are_expanded_in_published_items() {
    let dir = tempfile::tempdir().unwrap();
    write_record(
        dir.path(),
        "card",
        "shared: &shared\n  short: A card\nname: card\ndescription:\n  <<: *shared\n",
    );
    let layout = RegistryLayout::new(dir.path());

    build_index(&layout).unwrap();
    let items = read_index(&layout);
    assert_eq!(items[0]["description"], json!({"short": "A card"}));
}

fn named(name: &str, marker: usize) -> IndexItem {
    let mut m = Map::new();
    m.insert("name".into(), json!(name));
    m.insert("category".into(), json!(marker));
    project_record(&m)
}

proptest! {
    /// Output is sorted by name and keeps every non-empty name.
    #[test]
    fn ordering_is_sorted_and_complete(names in prop::collection::vec("[a-z]{0,6}", 0..24)) {
        let items: Vec<IndexItem> = names.iter().enumerate().map(|(i, n)| named(n, i)).collect();
        let ordered = order_items(items);

        let expected_len = names.iter().filter(|n| !n.is_empty()).count();
        prop_assert_eq!(ordered.len(), expected_len);

        let keys: Vec<String> = ordered.iter().map(|i| i.sort_key().into_owned()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    /// Items with equal names keep their input order.
    #[test]
    fn ordering_is_stable(names in prop::collection::vec("[ab]", 1..16)) {
        let items: Vec<IndexItem> = names.iter().enumerate().map(|(i, n)| named(n, i)).collect();
        let ordered = order_items(items);

        for pair in ordered.windows(2) {
            if pair[0].name == pair[1].name {
                prop_assert!(pair[0].category.as_u64() < pair[1].category.as_u64());
            }
        }
    }
}
