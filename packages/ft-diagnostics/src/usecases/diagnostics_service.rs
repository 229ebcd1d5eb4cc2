//! Diagnostics Service - Usecase Layer for validating Java files
//!
//! # Flow
//!
//! ```text
//! source ─▶ JavaParser ─▶ CompilationUnit
//!                              │
//!          ClasspathIndex ─────┤  applicability gate
//!                              ▼
//!              FaultToleranceDiagnosticsParticipant
//!                              │
//!                              ▼
//!                     Vec<lsp_types::Diagnostic>
//! ```
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use ft_diagnostics::config::ValidatorConfig;
//! use ft_diagnostics::usecases::DiagnosticsService;
//!
//! let service = DiagnosticsService::new(ValidatorConfig::default())?;
//! let report = service.validate_source("src/Service.java".as_ref(), &source)?;
//! for diagnostic in &report.diagnostics {
//!     println!("{}", diagnostic.message);
//! }
//! ```

use std::path::{Path, PathBuf};

use lsp_types::{Diagnostic, DiagnosticSeverity, Url};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::errors::{FtError, Result};
use crate::features::diagnostics::{JavaDiagnosticsContext, JavaDiagnosticsParticipant};
use crate::features::fault_tolerance::FaultToleranceDiagnosticsParticipant;
use crate::features::parsing::{JavaParser, Parser};
use crate::features::project_model::ClasspathIndex;
use crate::features::type_resolution::ImportTypeResolver;

/// Diagnostics for one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// The project cannot resolve the fault tolerance annotations
    pub skipped: bool,
}

impl FileReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Some(DiagnosticSeverity::ERROR))
            .count()
    }
}

/// A file that could not be validated
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of validating several files
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// In input order
    pub reports: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn error_count(&self) -> usize {
        self.reports.iter().map(FileReport::error_count).sum()
    }

    pub fn diagnostic_count(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }
}

pub struct DiagnosticsService {
    config: ValidatorConfig,
    classpath: ClasspathIndex,
    parser: JavaParser,
    participant: FaultToleranceDiagnosticsParticipant,
}

impl DiagnosticsService {
    /// Build the classpath from `config` (JDK types, listed types and the
    /// types declared under the source roots)
    pub fn new(config: ValidatorConfig) -> Result<Self> {
        config.validate()?;

        let mut classpath = if config.classpath.include_jdk {
            ClasspathIndex::with_jdk_types()
        } else {
            ClasspathIndex::new()
        };
        classpath.extend(config.classpath.types.iter().cloned());
        if !config.classpath.source_roots.is_empty() {
            let files = classpath.scan_source_roots(&config.classpath.source_roots)?;
            debug!(files, types = classpath.len(), "classpath ready");
        }

        Ok(Self::with_classpath(config, classpath))
    }

    /// Use a prepared classpath as is
    pub fn with_classpath(config: ValidatorConfig, classpath: ClasspathIndex) -> Self {
        Self {
            participant: FaultToleranceDiagnosticsParticipant::new(config.rules),
            config,
            classpath,
            parser: JavaParser::new(),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn classpath(&self) -> &ClasspathIndex {
        &self.classpath
    }

    /// Validate in-memory source; `path` names the document
    pub fn validate_source(&self, path: &Path, source: &str) -> Result<FileReport> {
        let unit = self.parser.parse(source, &path.to_string_lossy())?;
        if unit.has_errors {
            debug!(path = %path.display(), "source has syntax errors, validating what parsed");
        }

        let resolver = ImportTypeResolver::new(&self.classpath);
        let context = JavaDiagnosticsContext::new(document_uri(path)?, &unit, &self.classpath, &resolver)
            .with_source_tag(self.config.diagnostic_source.as_str());

        if !self.participant.is_adapted_for_diagnostics(&context)? {
            debug!(path = %path.display(), "fault tolerance API not on the classpath, skipping");
            return Ok(FileReport {
                path: path.to_path_buf(),
                diagnostics: Vec::new(),
                skipped: true,
            });
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            diagnostics: self.participant.collect_diagnostics(&context)?,
            skipped: false,
        })
    }

    pub fn validate_file(&self, path: &Path) -> Result<FileReport> {
        let source = std::fs::read_to_string(path)?;
        self.validate_source(path, &source)
    }

    /// Validate files in parallel, one pass per file. A file that fails is
    /// recorded in `failures` and does not stop the others.
    pub fn validate_files(&self, paths: &[PathBuf]) -> BatchReport {
        let outcomes: Vec<(PathBuf, Result<FileReport>)> = paths
            .par_iter()
            .map(|path| (path.clone(), self.validate_file(path)))
            .collect();

        let mut batch = BatchReport::default();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(report) => batch.reports.push(report),
                Err(e) => batch.failures.push(FileFailure {
                    path,
                    error: e.to_string(),
                }),
            }
        }
        batch
    }
}

/// `file://` URI of `path`, made absolute against the working directory
fn document_uri(path: &Path) -> Result<Url> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Url::from_file_path(&absolute).map_err(|()| {
        FtError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("cannot build a file URI for {}", absolute.display()),
        ))
    })
}
