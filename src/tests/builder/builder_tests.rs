//! Tests for OutputManagerBuilder.

use std::io::Write;

use crate::{
    NamespaceLayout, OutputConfig, OutputError, OutputManager, OutputManagerBuilder,
    TargetLanguage, build_manager_from_config, build_manager_from_config_with,
};

#[test]
fn builder_defaults_to_java_nested() {
    let dir = tempfile::tempdir().unwrap();

    let manager = OutputManagerBuilder::new(dir.path())
        .with_namespace("com.example")
        .build()
        .unwrap();

    assert_eq!(manager.extension(), "java");
    assert_eq!(manager.layout(), NamespaceLayout::Nested);
    assert!(dir.path().join("com/example").is_dir());
}

#[test]
fn language_sets_extension_and_layout() {
    let dir = tempfile::tempdir().unwrap();

    let manager = OutputManagerBuilder::new(dir.path())
        .with_namespace("acme.codec")
        .with_language(TargetLanguage::Cpp)
        .build()
        .unwrap();

    assert_eq!(
        manager.output_path("Car").unwrap(),
        dir.path().join("acme_codec/Car.h")
    );
}

#[test]
fn explicit_extension_and_layout_override_language() {
    let dir = tempfile::tempdir().unwrap();

    let manager = OutputManagerBuilder::new(dir.path())
        .with_namespace("acme.codec")
        .with_language(TargetLanguage::Cpp)
        .with_extension("hpp")
        .with_layout(NamespaceLayout::Nested)
        .build()
        .unwrap();

    assert_eq!(
        manager.output_path("Car").unwrap(),
        dir.path().join("acme/codec/Car.hpp")
    );
}

#[test]
fn from_config_builds_and_writes() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = OutputConfig::new(dir.path(), "svc").with_language(TargetLanguage::Golang);

    let manager = build_manager_from_config(&cfg).unwrap();
    let mut out = manager.new_output("client").unwrap();
    out.write_all(b"package svc\n").unwrap();
    out.finish().unwrap();

    assert_eq!(
        std::fs::read(dir.path().join("svc/client.go")).unwrap(),
        b"package svc\n".to_vec()
    );
}

#[test]
fn from_config_rejects_rooted_namespace_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = OutputConfig::new(dir.path(), "/escape.x");

    let err = build_manager_from_config(&cfg).unwrap_err();

    assert!(matches!(
        err,
        OutputError::InvalidArgument {
            argument: "namespace",
            ..
        }
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn build_manager_from_config_with_customizes_builder() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = OutputConfig::new(dir.path(), "a.b");

    let manager =
        build_manager_from_config_with(&cfg, |b| b.with_layout(NamespaceLayout::Flattened))
            .unwrap();

    assert_eq!(manager.output_dir(), dir.path().join("a_b").as_path());
}
