//! Tests for the directory-backed output manager.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use crate::{NamespaceLayout, OutputError, OutputManager, PackageOutputManager};

fn write_artifact(manager: &PackageOutputManager, name: &str, content: &[u8]) {
    let mut out = manager.new_output(name).expect("open output");
    out.write_all(content).unwrap();
    out.finish().expect("finish output");
}

#[test]
fn create_maps_namespace_segments_to_nested_dirs() {
    let dir = tempfile::tempdir().unwrap();

    let manager = PackageOutputManager::create(dir.path(), "com.example").unwrap();

    let expected = dir.path().join("com").join("example");
    assert_eq!(manager.output_dir(), expected.as_path());
    assert!(expected.is_dir());
    assert_eq!(manager.namespace().as_str(), "com.example");
    assert_eq!(manager.extension(), "java");
}

#[test]
fn create_accepts_trailing_separator_on_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    let base = format!("{}/gen/", dir.path().display());

    let manager = PackageOutputManager::create(&base, "com.example").unwrap();

    assert!(dir.path().join("gen/com/example").is_dir());
    assert_eq!(
        manager.output_path("Widget").unwrap(),
        dir.path().join("gen/com/example/Widget.java")
    );
}

#[test]
fn create_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();

    let first = PackageOutputManager::create(dir.path(), "a.b.c").unwrap();
    let second = PackageOutputManager::create(dir.path(), "a.b.c").unwrap();

    assert_eq!(first.output_dir(), second.output_dir());
    assert!(dir.path().join("a/b/c").is_dir());
}

#[test]
fn create_keeps_existing_directory_contents() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("com/example");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("Old.java"), b"old").unwrap();

    PackageOutputManager::create(dir.path(), "com.example").unwrap();

    assert_eq!(fs::read(existing.join("Old.java")).unwrap(), b"old".to_vec());
}

#[test]
fn empty_namespace_targets_base_dir() {
    let dir = tempfile::tempdir().unwrap();

    let manager = PackageOutputManager::create(dir.path(), "").unwrap();

    assert_eq!(manager.output_dir(), dir.path());
    assert!(manager.namespace().is_root());
}

#[test]
fn flattened_layout_uses_single_directory() {
    let dir = tempfile::tempdir().unwrap();

    let manager =
        PackageOutputManager::create_with(dir.path(), "acme.codec", "h", NamespaceLayout::Flattened)
            .unwrap();

    assert_eq!(manager.output_dir(), dir.path().join("acme_codec").as_path());
    assert!(!dir.path().join("acme").exists());
    assert_eq!(
        manager.output_path("Car").unwrap(),
        dir.path().join("acme_codec/Car.h")
    );
}

#[test]
fn new_output_persists_written_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let manager = PackageOutputManager::create(dir.path(), "com.example").unwrap();

    write_artifact(&manager, "Widget", b"class Widget {}\n");

    let path = dir.path().join("com/example/Widget.java");
    assert_eq!(fs::read(&path).unwrap(), b"class Widget {}\n".to_vec());
}

#[test]
fn handle_reports_artifact_and_path() {
    let dir = tempfile::tempdir().unwrap();
    let manager = PackageOutputManager::create(dir.path(), "com.example").unwrap();

    let out = manager.new_output("Widget").unwrap();

    assert_eq!(out.name(), "Widget");
    let expected = dir.path().join("com/example/Widget.java");
    assert_eq!(Path::new(out.id()), expected.as_path());
}

#[test]
fn dropping_handle_flushes_content() {
    let dir = tempfile::tempdir().unwrap();
    let manager = PackageOutputManager::create(dir.path(), "pkg").unwrap();

    {
        let mut out = manager.new_output("Dropped").unwrap();
        out.write_all(b"flushed on drop").unwrap();
    }

    let path = dir.path().join("pkg/Dropped.java");
    assert_eq!(fs::read(path).unwrap(), b"flushed on drop".to_vec());
}

#[test]
fn second_output_with_same_name_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let manager = PackageOutputManager::create(dir.path(), "com.example").unwrap();

    write_artifact(&manager, "Widget", b"a much longer first version");
    write_artifact(&manager, "Widget", b"short");

    let path = dir.path().join("com/example/Widget.java");
    assert_eq!(fs::read(path).unwrap(), b"short".to_vec());
}

#[test]
fn empty_extension_appends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let manager =
        PackageOutputManager::create_with(dir.path(), "", "", NamespaceLayout::Nested).unwrap();

    assert_eq!(manager.output_path("Makefile").unwrap(), dir.path().join("Makefile"));
}

#[test]
fn leading_dot_in_extension_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let manager =
        PackageOutputManager::create_with(dir.path(), "x", ".rs", NamespaceLayout::Nested).unwrap();

    assert_eq!(manager.extension(), "rs");
    assert_eq!(manager.output_path("lib").unwrap(), dir.path().join("x/lib.rs"));
}

#[test]
fn empty_base_dir_is_invalid_argument() {
    let err = PackageOutputManager::create("", "com.example").unwrap_err();

    assert!(matches!(
        err,
        OutputError::InvalidArgument {
            argument: "base_directory",
            ..
        }
    ));
}

#[test]
fn malformed_namespace_is_rejected_without_touching_disk() {
    let dir = tempfile::tempdir().unwrap();

    for namespace in ["com..example", ".com", "com."] {
        let err = PackageOutputManager::create(dir.path(), namespace).unwrap_err();
        assert!(err.is_invalid_argument(), "namespace {namespace:?}");
    }

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn base_dir_that_is_a_file_fails_directory_creation() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-dir");
    fs::write(&file, b"").unwrap();

    let err = PackageOutputManager::create(&file, "com.example").unwrap_err();

    match err {
        OutputError::DirectoryCreationFailed { path, .. } => {
            assert_eq!(path, file.join("com").join("example"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn root_namespace_on_a_file_fails_directory_creation() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, b"").unwrap();

    let err = PackageOutputManager::create(&file, "").unwrap_err();

    assert!(matches!(err, OutputError::DirectoryCreationFailed { .. }));
    assert_eq!(err.path(), Some(file.as_path()));
}

#[test]
fn empty_name_is_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let manager = PackageOutputManager::create(dir.path(), "pkg").unwrap();

    let err = manager.new_output("").unwrap_err();

    assert!(matches!(
        err,
        OutputError::InvalidArgument {
            argument: "name",
            ..
        }
    ));
}

#[test]
fn removed_directory_fails_file_open() {
    let dir = tempfile::tempdir().unwrap();
    let manager = PackageOutputManager::create(dir.path(), "gone").unwrap();
    fs::remove_dir(manager.output_dir()).unwrap();

    let err = manager.new_output("Widget").unwrap_err();

    match err {
        OutputError::FileOpenFailed { path, .. } => {
            assert_eq!(path, dir.path().join("gone/Widget.java"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn name_is_used_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let manager = PackageOutputManager::create(dir.path(), "pkg").unwrap();

    // No sanitization: a separator in the name points into a missing subdirectory.
    let err = manager.new_output("sub/Widget").unwrap_err();

    assert!(matches!(err, OutputError::FileOpenFailed { .. }));
}

#[test]
fn concurrent_construction_on_overlapping_namespaces_succeeds() {
    let dir = Arc::new(tempfile::tempdir().unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dir = Arc::clone(&dir);
            thread::spawn(move || {
                let namespace = if i % 2 == 0 { "org.shared.deep" } else { "org.shared" };
                PackageOutputManager::create(dir.path(), namespace).map(|_| ())
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert!(dir.path().join("org/shared/deep").is_dir());
}

#[test]
fn rooted_namespace_segment_stays_under_base_dir() {
    let base = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let namespace = format!("{}/x", elsewhere.path().display()).replace('.', "_");

    let err = PackageOutputManager::create(base.path(), &namespace).unwrap_err();

    assert!(matches!(
        err,
        OutputError::InvalidArgument {
            argument: "namespace",
            ..
        }
    ));
    assert!(!elsewhere.path().join("x").exists());
    assert_eq!(fs::read_dir(base.path()).unwrap().count(), 0);
}

#[test]
fn rooted_artifact_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let manager = PackageOutputManager::create(dir.path(), "com.example").unwrap();
    let name = elsewhere.path().join("Evil").to_string_lossy().into_owned();

    let err = manager.new_output(&name).unwrap_err();

    assert!(matches!(
        err,
        OutputError::InvalidArgument {
            argument: "name",
            ..
        }
    ));
    assert!(manager.output_path(&name).is_err());
    assert!(!elsewhere.path().join("Evil.java").exists());
}
