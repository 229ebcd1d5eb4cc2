//! DiagnosticsService end to end: configuration, classpath scanning and
//! batch validation over files on disk.

#[path = "../common/mod.rs"]
mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::*;
use ft_diagnostics::features::project_model::ProjectModel;
use ft_diagnostics::{DiagnosticsService, ValidatorConfig};
use tempfile::TempDir;

const FALLBACK_STUB: &str = r#"package org.eclipse.microprofile.faulttolerance;

public @interface Fallback {
    String fallbackMethod() default "";
}
"#;

const SERVICE: &str = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Fallback;

public class Service {
    @Fallback(fallbackMethod = "gone")
    public String call() { return ""; }
}
"#;

fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_source_roots_make_project_applicable() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "api/org/eclipse/microprofile/faulttolerance/Fallback.java", FALLBACK_STUB);
    let service_path = write(dir.path(), "src/com/example/Service.java", SERVICE);

    let mut config = ValidatorConfig::default();
    config.classpath.source_roots.push(dir.path().join("api"));
    let service = DiagnosticsService::new(config).unwrap();

    assert!(service.classpath().contains_type(FALLBACK_FQN).unwrap());
    let report = service.validate_file(&service_path).unwrap();
    assert!(!report.skipped);
    assert_codes(&report.diagnostics, &[FALLBACK_METHOD_DOES_NOT_EXIST]);
}

#[test]
fn test_without_fault_tolerance_api_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    let service_path = write(dir.path(), "Service.java", SERVICE);

    let service = DiagnosticsService::new(ValidatorConfig::default()).unwrap();
    let report = service.validate_file(&service_path).unwrap();
    assert!(report.skipped);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_config_file_drives_rules_and_classpath() {
    let dir = TempDir::new().unwrap();
    let config_path = write(
        dir.path(),
        "ftcheck.yaml",
        r#"version: 1
diagnostic_source: microprofile-fault-tolerance
rules:
  asynchronous_return_type: false
classpath:
  types:
    - org.eclipse.microprofile.faulttolerance.Fallback
    - org.eclipse.microprofile.faulttolerance.Asynchronous
"#,
    );
    let source = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.*;

public class Service {
    @Asynchronous
    @Fallback(fallbackMethod = "gone")
    public String call() { return ""; }
}
"#;

    let config = ValidatorConfig::from_yaml(&config_path).unwrap();
    let service = DiagnosticsService::new(config).unwrap();
    let report = service
        .validate_source(&dir.path().join("Service.java"), source)
        .unwrap();

    assert_codes(&report.diagnostics, &[FALLBACK_METHOD_DOES_NOT_EXIST]);
    assert_eq!(
        report.diagnostics[0].source.as_deref(),
        Some("microprofile-fault-tolerance")
    );
}

#[test]
fn test_batch_keeps_order_and_isolates_failures() {
    let dir = TempDir::new().unwrap();
    let clean = write(dir.path(), "Clean.java", &fixture_plain_class("Clean", 3));
    let broken = write(dir.path(), "Service.java", SERVICE);
    let missing = dir.path().join("Missing.java");

    let mut config = ValidatorConfig::default();
    config.classpath.types.push(FALLBACK_FQN.to_string());
    let service = DiagnosticsService::new(config).unwrap();

    let batch = service.validate_files(&[clean.clone(), missing.clone(), broken.clone()]);

    let paths: Vec<&Path> = batch.reports.iter().map(|r| r.path.as_path()).collect();
    assert_eq!(paths, vec![clean.as_path(), broken.as_path()]);
    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].path, missing);
    assert_eq!(batch.error_count(), 1);
    assert_eq!(batch.diagnostic_count(), 1);
}

#[test]
fn test_batch_report_serializes_to_json() {
    let mut config = ValidatorConfig::default();
    config.classpath.types.push(FALLBACK_FQN.to_string());
    let service = DiagnosticsService::new(config).unwrap();

    let report = service
        .validate_source(Path::new("/project/Service.java"), SERVICE)
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["skipped"], false);
    assert_eq!(json["diagnostics"][0]["code"], FALLBACK_METHOD_DOES_NOT_EXIST);
    assert_eq!(json["diagnostics"][0]["severity"], 1);
    assert_eq!(json["diagnostics"][0]["source"], "java");
    assert_eq!(json["diagnostics"][0]["message"], fallback_message("gone"));
}

#[test]
fn test_syntax_errors_still_validated() {
    let source = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Fallback;

public class Broken {
    @Fallback(fallbackMethod = "gone")
    public String call() { return "" }
}
"#;
    let mut config = ValidatorConfig::default();
    config.classpath.types.push(FALLBACK_FQN.to_string());
    let service = DiagnosticsService::new(config).unwrap();

    let report = service.validate_source(Path::new("/project/Broken.java"), source).unwrap();
    assert_codes(&report.diagnostics, &[FALLBACK_METHOD_DOES_NOT_EXIST]);
}
