//! Centralized constants
//!
//! Annotation names, accepted asynchronous result types and the JDK types the
//! classpath index knows without any configuration.

/// MicroProfile Fault Tolerance annotation types
pub mod fault_tolerance {
    pub const FALLBACK_ANNOTATION: &str = "org.eclipse.microprofile.faulttolerance.Fallback";
    pub const ASYNCHRONOUS_ANNOTATION: &str =
        "org.eclipse.microprofile.faulttolerance.Asynchronous";

    /// `@Fallback(fallbackMethod = "...")`
    pub const FALLBACK_METHOD_FALLBACK_ANNOTATION_MEMBER: &str = "fallbackMethod";

    /// Source tag carried by every diagnostic
    pub const DIAGNOSTIC_SOURCE: &str = "java";
}

/// Return types accepted on `@Asynchronous` methods (erased, fully qualified)
pub mod async_types {
    pub const FUTURE_TYPE_UTILITY: &str = "java.util.concurrent.Future";
    pub const COMPLETION_STAGE_TYPE_UTILITY: &str = "java.util.concurrent.CompletionStage";
    pub const UNI_TYPE_UTILITY: &str = "io.smallrye.mutiny.Uni";

    pub const ACCEPTED_RETURN_TYPES: [&str; 3] = [
        FUTURE_TYPE_UTILITY,
        COMPLETION_STAGE_TYPE_UTILITY,
        UNI_TYPE_UTILITY,
    ];
}

/// Java language constants
pub mod java {
    pub const JAVA_LANG_PACKAGE: &str = "java.lang";
    pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";

    pub const PRIMITIVE_TYPES: [&str; 8] = [
        "boolean", "byte", "char", "short", "int", "long", "float", "double",
    ];

    /// Simple names implicitly visible through `java.lang`
    pub const JAVA_LANG_TYPES: &[&str] = &[
        "Object",
        "String",
        "Boolean",
        "Byte",
        "Character",
        "Short",
        "Integer",
        "Long",
        "Float",
        "Double",
        "Number",
        "Void",
        "Class",
        "Enum",
        "Record",
        "Iterable",
        "Runnable",
        "Thread",
        "Throwable",
        "Exception",
        "RuntimeException",
        "Error",
        "CharSequence",
        "StringBuilder",
        "Comparable",
        "Math",
        "System",
        "Override",
        "Deprecated",
        "FunctionalInterface",
        "SuppressWarnings",
    ];

    /// Well-known JDK types outside `java.lang`, registered in every classpath
    pub const JDK_TYPES: &[&str] = &[
        "java.util.concurrent.Future",
        "java.util.concurrent.CompletionStage",
        "java.util.concurrent.CompletableFuture",
        "java.util.concurrent.Callable",
        "java.util.concurrent.Executor",
        "java.util.concurrent.ExecutorService",
        "java.util.List",
        "java.util.Map",
        "java.util.Set",
        "java.util.Collection",
        "java.util.Optional",
    ];
}
