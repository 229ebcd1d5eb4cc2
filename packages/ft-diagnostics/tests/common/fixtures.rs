//! Test fixtures
//!
//! Java sources, classpaths and a one-call diagnostics run.

use ft_diagnostics::features::diagnostics::{JavaDiagnosticsContext, JavaDiagnosticsParticipant};
use ft_diagnostics::features::fault_tolerance::FaultToleranceDiagnosticsParticipant;
use ft_diagnostics::features::parsing::{CompilationUnit, JavaParser, Parser};
use ft_diagnostics::features::project_model::ClasspathIndex;
use ft_diagnostics::features::type_resolution::ImportTypeResolver;
use lsp_types::{Diagnostic, Url};

pub const FALLBACK_FQN: &str = "org.eclipse.microprofile.faulttolerance.Fallback";
pub const ASYNCHRONOUS_FQN: &str = "org.eclipse.microprofile.faulttolerance.Asynchronous";
pub const UNI_FQN: &str = "io.smallrye.mutiny.Uni";

pub fn test_uri() -> Url {
    Url::parse("file:///project/src/main/java/Test.java").unwrap()
}

pub fn parse_java(source: &str) -> CompilationUnit {
    JavaParser::new().parse(source, "Test.java").unwrap()
}

/// JDK types plus the fault tolerance annotations and Mutiny's `Uni`
pub fn fault_tolerance_classpath() -> ClasspathIndex {
    let mut classpath = ClasspathIndex::with_jdk_types();
    classpath.extend([FALLBACK_FQN, ASYNCHRONOUS_FQN, UNI_FQN]);
    classpath
}

/// Run the fault tolerance participant over `source`
pub fn collect_diagnostics(source: &str) -> Vec<Diagnostic> {
    collect_diagnostics_with(source, &fault_tolerance_classpath())
}

pub fn collect_diagnostics_with(source: &str, classpath: &ClasspathIndex) -> Vec<Diagnostic> {
    let unit = parse_java(source);
    let resolver = ImportTypeResolver::new(classpath);
    let context = JavaDiagnosticsContext::new(test_uri(), &unit, classpath, &resolver);
    let participant = FaultToleranceDiagnosticsParticipant::default();

    assert!(
        participant.is_adapted_for_diagnostics(&context).unwrap(),
        "fault tolerance participant should apply to this classpath"
    );
    participant.collect_diagnostics(&context).unwrap()
}

/// Class with `method_count` plain methods and no annotations
pub fn fixture_plain_class(class_name: &str, method_count: usize) -> String {
    let methods: String = (0..method_count)
        .map(|i| format!("    public String method{i}(int arg) {{ return \"\" + arg; }}\n"))
        .collect();
    format!("package com.example;\n\npublic class {class_name} {{\n{methods}}}\n")
}
