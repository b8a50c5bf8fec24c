// CLASSIFICATION: COMMUNITY
// Filename: test_discovery.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use cbuild::discovery::find_files;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn tree(root: &Path, files: &[&str]) {
    for f in files {
        let p = root.join(f);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, "").unwrap();
    }
}

fn rel(files: Vec<PathBuf>, root: &Path) -> Vec<String> {
    files
        .into_iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn full_recursive_listing_without_exclusions() {
    let dir = tempdir().unwrap();
    tree(
        dir.path(),
        &["main.c", "base/base_os.c", "base/base.h", "base/deep/x.c", "notes.txt"],
    );
    let files = find_files(dir.path(), "c", None::<&str>);
    assert_eq!(
        rel(files, dir.path()),
        vec!["base/base_os.c", "base/deep/x.c", "main.c"]
    );
}

#[test]
fn every_result_has_extension_and_no_excluded_text() {
    let dir = tempdir().unwrap();
    tree(
        dir.path(),
        &[
            "a.c",
            "test.c",
            "unit/test.c",
            "unit/helper.c",
            "legacy/old.c",
            "b.cpp",
        ],
    );
    let exclude = vec!["test.c".to_string(), "legacy".to_string()];
    let files = find_files(dir.path(), "c", &exclude);
    for f in &files {
        assert_eq!(f.extension().unwrap(), "c");
        let text = f.to_string_lossy();
        assert!(exclude.iter().all(|e| !text.contains(e.as_str())));
    }
    assert_eq!(rel(files, dir.path()), vec!["a.c", "unit/helper.c"]);
}

#[test]
fn a_b_test_scenario() {
    let dir = tempdir().unwrap();
    tree(dir.path(), &["a.c", "b.c", "test.c"]);
    let files = find_files(dir.path(), "c", Some("test.c"));
    assert_eq!(rel(files, dir.path()), vec!["a.c", "b.c"]);
}
