//! Fault tolerance diagnostics over complete Java sources
//!
//! Covers the fallback method rule, the asynchronous return type rule, the
//! type-level `@Asynchronous` trigger and the applicability gate.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use ft_diagnostics::features::fault_tolerance::is_applicable;
use ft_diagnostics::features::project_model::ClasspathIndex;

// ============================================================================
// No annotations
// ============================================================================

#[test]
fn test_no_fault_tolerance_annotations() {
    let source = r#"package com.example;

import java.util.concurrent.CompletionStage;

@Deprecated
public class PlainService {
    @Override
    public String toString() { return "plain"; }

    public CompletionStage<String> stage() { return null; }

    public void run() {}
}
"#;
    assert_java_diagnostics(&collect_diagnostics(source), &[]);
}

// ============================================================================
// @Fallback(fallbackMethod = ...)
// ============================================================================

const FALLBACK_CLIENT: &str = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Fallback;

public class FallbackClient {

    @Fallback(fallbackMethod = "serviceAFallback")
    public String serviceA() {
        return "ok";
    }

    private String serviceAFallback(String reason, int attempts) {
        return "fallback";
    }

    @Fallback(fallbackMethod = "missingFallback")
    public String serviceB() {
        return "ok";
    }

    @Fallback(fallbackMethod = "serviceA")
    public String serviceC() {
        return "ok";
    }
}
"#;

#[test]
fn test_fallback_method_exists_with_any_signature() {
    let diagnostics = collect_diagnostics(FALLBACK_CLIENT);
    assert!(diagnostics
        .iter()
        .all(|d| !d.message.contains("serviceAFallback")));
}

#[test]
fn test_fallback_method_does_not_exist() {
    let diagnostics = collect_diagnostics(FALLBACK_CLIENT);
    assert_java_diagnostics(
        &diagnostics,
        &[d(
            literal_range(FALLBACK_CLIENT, "missingFallback"),
            fallback_message("missingFallback"),
            FALLBACK_METHOD_DOES_NOT_EXIST,
        )],
    );
}

#[test]
fn test_fallback_without_fallback_method() {
    let source = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Fallback;

public class HandlerClient {
    @Fallback
    public String marker() { return ""; }

    @Fallback(MyHandler.class)
    public String handler() { return ""; }

    @Fallback(applyOn = RuntimeException.class)
    public String applyOn() { return ""; }

    @Fallback(value = MyHandler.class, skipOn = IllegalStateException.class)
    public String valueAndSkip() { return ""; }
}
"#;
    assert_java_diagnostics(&collect_diagnostics(source), &[]);
}

#[test]
fn test_fallback_method_with_other_members() {
    let source = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Fallback;

public class MixedClient {
    @Fallback(applyOn = RuntimeException.class, fallbackMethod = "nowhere")
    public String call() { return ""; }
}
"#;
    assert_java_diagnostics(
        &collect_diagnostics(source),
        &[d(
            literal_range(source, "nowhere"),
            fallback_message("nowhere"),
            FALLBACK_METHOD_DOES_NOT_EXIST,
        )],
    );
}

#[test]
fn test_fallback_does_not_see_inherited_or_nested_methods() {
    let source = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Fallback;

public class Child extends Parent {
    @Fallback(fallbackMethod = "parentRecovery")
    public String call() { return ""; }

    public static class Nested {
        public String nestedRecovery() { return ""; }
    }

    @Fallback(fallbackMethod = "nestedRecovery")
    public String other() { return ""; }
}
"#;
    assert_java_diagnostics(
        &collect_diagnostics(source),
        &[
            d(
                literal_range(source, "parentRecovery"),
                fallback_message("parentRecovery"),
                FALLBACK_METHOD_DOES_NOT_EXIST,
            ),
            d(
                literal_range(source, "nestedRecovery"),
                fallback_message("nestedRecovery"),
                FALLBACK_METHOD_DOES_NOT_EXIST,
            ),
        ],
    );
}

#[test]
fn test_fallback_name_is_not_unescaped() {
    let source = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Fallback;

public class EscapeClient {
    @Fallback(fallbackMethod = "re\u0063over")
    public String call() { return ""; }

    public String recover() { return ""; }
}
"#;
    let diagnostics = collect_diagnostics(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, fallback_message("re\\u0063over"));
}

#[test]
fn test_fallback_constant_reference_is_skipped() {
    let source = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Fallback;

public class ConstantClient {
    static final String RECOVER = "missing";

    @Fallback(fallbackMethod = RECOVER)
    public String call() { return ""; }
}
"#;
    assert_java_diagnostics(&collect_diagnostics(source), &[]);
}

// ============================================================================
// @Asynchronous
// ============================================================================

const ASYNC_CLIENT: &str = r#"package com.example;

import java.util.concurrent.CompletionStage;
import java.util.concurrent.CompletableFuture;
import java.util.concurrent.Future;
import io.smallrye.mutiny.Uni;
import org.eclipse.microprofile.faulttolerance.Asynchronous;

public class AsyncClient {

    @Asynchronous
    public CompletionStage<String> stage() { return null; }

    @Asynchronous
    public Future<Integer> future() { return null; }

    @Asynchronous
    public Uni<String> uni() { return null; }

    @Asynchronous
    public java.util.concurrent.Future<String> qualifiedFuture() { return null; }

    @Asynchronous
    public <T extends CompletionStage<String>> T bounded() { return null; }

    @Asynchronous
    public String objectResult() { return ""; }

    @Asynchronous
    public void noResult() {}

    @Asynchronous
    public int primitiveResult() { return 0; }

    @Asynchronous
    public CompletableFuture<String> completable() { return null; }
}
"#;

#[test]
fn test_asynchronous_return_types() {
    let diagnostics = collect_diagnostics(ASYNC_CLIENT);
    assert_java_diagnostics(
        &diagnostics,
        &[
            d(
                range_at(ASYNC_CLIENT, "String objectResult", 6),
                ASYNCHRONOUS_MESSAGE,
                FAULT_TOLERANCE_DEFINITION_EXCEPTION,
            ),
            d(
                range_at(ASYNC_CLIENT, "void noResult", 4),
                ASYNCHRONOUS_MESSAGE,
                FAULT_TOLERANCE_DEFINITION_EXCEPTION,
            ),
            d(
                range_at(ASYNC_CLIENT, "int primitiveResult", 3),
                ASYNCHRONOUS_MESSAGE,
                FAULT_TOLERANCE_DEFINITION_EXCEPTION,
            ),
            d(
                range_at(ASYNC_CLIENT, "CompletableFuture<String> completable", 25),
                ASYNCHRONOUS_MESSAGE,
                FAULT_TOLERANCE_DEFINITION_EXCEPTION,
            ),
        ],
    );
}

#[test]
fn test_class_level_asynchronous() {
    let source = r#"package com.example;

import java.util.concurrent.Future;
import org.eclipse.microprofile.faulttolerance.Asynchronous;

@Asynchronous
public class AsyncService {
    public Future<String> first() { return null; }

    public Future<Integer> second() { return null; }

    public int count() { return 0; }
}
"#;
    assert_java_diagnostics(
        &collect_diagnostics(source),
        &[d(
            range_at(source, "int count", 3),
            ASYNCHRONOUS_MESSAGE,
            FAULT_TOLERANCE_DEFINITION_EXCEPTION,
        )],
    );
}

#[test]
fn test_class_level_asynchronous_applies_once() {
    let source = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Asynchronous;

@Asynchronous
@org.eclipse.microprofile.faulttolerance.Asynchronous
public class TwiceAnnotated {
    public String call() { return ""; }
}
"#;
    assert_eq!(collect_diagnostics(source).len(), 1);
}

#[test]
fn test_class_level_asynchronous_does_not_reach_nested_types() {
    let source = r#"package com.example;

import java.util.concurrent.Future;
import org.eclipse.microprofile.faulttolerance.Asynchronous;

@Asynchronous
public class Outer {
    public Future<String> call() { return null; }

    static class Helper {
        String helper() { return ""; }
    }
}
"#;
    assert_java_diagnostics(&collect_diagnostics(source), &[]);
}

#[test]
fn test_unresolvable_return_type_is_skipped_per_method() {
    let source = r#"package com.example;

import org.eclipse.microprofile.faulttolerance.Asynchronous;

@Asynchronous
public class PartiallyResolvable {
    public UnknownResult unknown() { return null; }

    public String known() { return ""; }
}
"#;
    assert_java_diagnostics(
        &collect_diagnostics(source),
        &[d(
            range_at(source, "String known", 6),
            ASYNCHRONOUS_MESSAGE,
            FAULT_TOLERANCE_DEFINITION_EXCEPTION,
        )],
    );
}

// ============================================================================
// Both rules
// ============================================================================

#[test]
fn test_rules_fire_independently_in_traversal_order() {
    let source = r#"package com.example;

import java.util.concurrent.CompletionStage;
import org.eclipse.microprofile.faulttolerance.Asynchronous;
import org.eclipse.microprofile.faulttolerance.Fallback;

public class Combined {
    @Asynchronous
    @Fallback(fallbackMethod = "absent")
    public String both() { return ""; }

    @Fallback(fallbackMethod = "both")
    @Asynchronous
    public CompletionStage<String> fine() { return null; }

    public class Inner {
        @Fallback(fallbackMethod = "fine")
        public String inner() { return ""; }
    }
}
"#;
    assert_java_diagnostics(
        &collect_diagnostics(source),
        &[
            d(
                range_at(source, "String both", 6),
                ASYNCHRONOUS_MESSAGE,
                FAULT_TOLERANCE_DEFINITION_EXCEPTION,
            ),
            d(
                literal_range(source, "absent"),
                fallback_message("absent"),
                FALLBACK_METHOD_DOES_NOT_EXIST,
            ),
            d(
                literal_range(source, "fine"),
                fallback_message("fine"),
                FALLBACK_METHOD_DOES_NOT_EXIST,
            ),
        ],
    );
}

#[test]
fn test_validation_is_idempotent() {
    let first = collect_diagnostics(FALLBACK_CLIENT);
    let second = collect_diagnostics(FALLBACK_CLIENT);
    assert_java_diagnostics(&first, &second);

    let first = collect_diagnostics(ASYNC_CLIENT);
    let second = collect_diagnostics(ASYNC_CLIENT);
    assert_java_diagnostics(&first, &second);
}

// ============================================================================
// Anonymous classes
// ============================================================================

const ANONYMOUS_CLIENT: &str = r#"package com.example;

import java.util.concurrent.Callable;
import java.util.concurrent.Future;
import org.eclipse.microprofile.faulttolerance.Asynchronous;
import org.eclipse.microprofile.faulttolerance.Fallback;

public class AnonymousClient {
    private final Runnable hook = new Runnable() {
        @Fallback(fallbackMethod = "missingHook")
        public void run() {}
    };

    public void start() {
        Callable<String> task = new Callable<String>() {
            @Asynchronous
            public String call() { return ""; }

            @Fallback(fallbackMethod = "start")
            public String other() { return ""; }
        };
    }

    public void schedule() {
        Runnable r = () -> new Object() {
            @Asynchronous
            Future<String> later() { return null; }
        };
    }
}

enum Level {
    LOW {
        @Fallback(fallbackMethod = "describe")
        String label() { return "low"; }

        @Fallback(fallbackMethod = "label")
        String name2() { return "low"; }
    };

    String describe() { return ""; }
}
"#;

#[test]
fn test_anonymous_class_methods_are_validated() {
    let diagnostics = collect_diagnostics(ANONYMOUS_CLIENT);
    assert_java_diagnostics(
        &diagnostics,
        &[
            d(
                literal_range(ANONYMOUS_CLIENT, "missingHook"),
                fallback_message("missingHook"),
                FALLBACK_METHOD_DOES_NOT_EXIST,
            ),
            d(
                range_at(ANONYMOUS_CLIENT, "String call()", 6),
                ASYNCHRONOUS_MESSAGE,
                FAULT_TOLERANCE_DEFINITION_EXCEPTION,
            ),
            d(
                literal_range(ANONYMOUS_CLIENT, "label"),
                fallback_message("label"),
                FALLBACK_METHOD_DOES_NOT_EXIST,
            ),
        ],
    );
}

// ============================================================================
// Applicability gate
// ============================================================================

#[test]
fn test_is_applicable() {
    let mut classpath = ClasspathIndex::with_jdk_types();
    assert!(!is_applicable(&classpath).unwrap());

    classpath.register(FALLBACK_FQN);
    assert!(is_applicable(&classpath).unwrap());

    let mut classpath = ClasspathIndex::new();
    classpath.register(ASYNCHRONOUS_FQN);
    assert!(is_applicable(&classpath).unwrap());
}
