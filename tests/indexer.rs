use json_index::{build_index, write_index, RuntimeConfig};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

fn sample_tree(root: &Path) {
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a/x.json"), "{}").unwrap();
    fs::write(root.join("b/y.json"), "{}").unwrap();
    fs::write(root.join("z.json"), "{}").unwrap();
    fs::write(root.join("index.json"), "stale").unwrap();
}

fn config(root: &Path, output: &str, base_url: &str) -> RuntimeConfig {
    let root = fs::canonicalize(root).unwrap();
    RuntimeConfig {
        output: root.join(output),
        root,
        base_url: base_url.to_string(),
        exclude: Vec::new(),
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn writes_relative_addresses_and_skips_itself() {
    let dir = tempfile::tempdir().unwrap();
    sample_tree(dir.path());
    let cfg = config(dir.path(), "index.json", "");

    let count = write_index(&cfg).expect("index should be written");

    assert_eq!(count, 3);
    assert_eq!(
        read_json(&cfg.output),
        json!([
            {"name": "x.json", "address": "a/x.json"},
            {"name": "y.json", "address": "b/y.json"},
            {"name": "z.json", "address": "z.json"}
        ])
    );
}

#[test]
fn prefixes_base_url_without_double_slashes() {
    let dir = tempfile::tempdir().unwrap();
    sample_tree(dir.path());
    let cfg = config(dir.path(), "index.json", "https://cdn.example.com/data/");

    let entries = build_index(&cfg).unwrap();
    let addresses: Vec<&str> = entries.iter().map(|e| e.address.as_str()).collect();

    assert_eq!(
        addresses,
        vec![
            "https://cdn.example.com/data/a/x.json",
            "https://cdn.example.com/data/b/y.json",
            "https://cdn.example.com/data/z.json",
        ]
    );
}

#[test]
fn second_run_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    sample_tree(dir.path());
    fs::create_dir_all(dir.path().join("with space")).unwrap();
    fs::write(dir.path().join("with space/x.json"), "{}").unwrap();
    let cfg = config(dir.path(), "index.json", "https://cdn.example.com/");

    write_index(&cfg).unwrap();
    let first = fs::read(&cfg.output).unwrap();
    write_index(&cfg).unwrap();
    let second = fs::read(&cfg.output).unwrap();

    assert_eq!(first, second);
    assert!(first.ends_with(b"]\n"));
    assert!(String::from_utf8(first).unwrap().contains("with%20space/x.json"));
}

#[test]
fn duplicate_names_are_ordered_by_address() {
    let dir = tempfile::tempdir().unwrap();
    for sub in ["c", "a", "b/deeper"] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
        fs::write(dir.path().join(sub).join("data.json"), "{}").unwrap();
    }
    fs::write(dir.path().join("alpha.json"), "{}").unwrap();
    let cfg = config(dir.path(), "files.index.json", "");

    let entries = build_index(&cfg).unwrap();

    for pair in entries.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.name < b.name || (a.name == b.name && a.address <= b.address));
    }
    let addresses: Vec<&str> = entries.iter().map(|e| e.address.as_str()).collect();
    assert_eq!(
        addresses,
        vec!["alpha.json", "a/data.json", "b/deeper/data.json", "c/data.json"]
    );
}

#[test]
fn creates_missing_output_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("only.json"), "{}").unwrap();
    let cfg = config(dir.path(), "out/nested/files.index.json", "");

    assert_eq!(write_index(&cfg).unwrap(), 1);
    assert_eq!(
        read_json(&cfg.output),
        json!([{"name": "only.json", "address": "only.json"}])
    );

    // The freshly written index must not list itself on the next run
    assert_eq!(write_index(&cfg).unwrap(), 1);
}

#[test]
fn empty_tree_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path(), "files.index.json", "");

    assert_eq!(write_index(&cfg).unwrap(), 0);
    assert_eq!(fs::read_to_string(&cfg.output).unwrap(), "[]\n");
}

#[test]
fn missing_root_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("missing");
    let cfg = RuntimeConfig {
        output: root.join("files.index.json"),
        root: root.clone(),
        base_url: String::new(),
        exclude: Vec::new(),
    };

    assert!(write_index(&cfg).is_err());
    assert!(!root.exists());
}
