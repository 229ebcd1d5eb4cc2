//! ftcheck - Fault Tolerance annotation checker
//!
//! Validates `@Fallback` and `@Asynchronous` usage in Java sources.
//!
//! # Usage
//!
//! ```bash
//! # Check a source tree, declaring the fault tolerance API as available
//! ftcheck --classpath-type org.eclipse.microprofile.faulttolerance.Fallback \
//!         --classpath-type org.eclipse.microprofile.faulttolerance.Asynchronous src/main/java
//!
//! # Use a configuration file, JSON output
//! ftcheck --config ftcheck.yaml --format json src/
//! ```
//!
//! Exit codes: 0 clean, 1 error diagnostics reported, 2 the check could not
//! run (bad configuration, unreadable input).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ft_diagnostics::features::parsing::{JavaParser, Parser as _};
use ft_diagnostics::usecases::BatchReport;
use ft_diagnostics::{DiagnosticsService, ValidatorConfig};
use lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

const EXIT_CLEAN: u8 = 0;
const EXIT_DIAGNOSTICS: u8 = 1;
const EXIT_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "ftcheck")]
#[command(about = "Check MicroProfile Fault Tolerance annotations in Java sources", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fully-qualified type the project can resolve (repeatable)
    #[arg(long = "classpath-type", value_name = "FQN")]
    classpath_types: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Java files or directories to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `path:line:col: error[CODE]: message`
    Text,
    /// Batch report as JSON
    Json,
    /// GitHub Actions annotations
    Github,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => ValidatorConfig::from_yaml(path)?,
        None => ValidatorConfig::default(),
    };
    config.classpath.types.extend(cli.classpath_types.iter().cloned());
    // The checked sources are part of the project
    config.classpath.source_roots.extend(cli.paths.iter().cloned());

    let files = collect_java_files(&cli.paths)?;
    let service = DiagnosticsService::new(config)?;
    let batch = service.validate_files(&files);

    let mut out = io::stdout().lock();
    write_report(&mut out, &batch, cli.format)?;
    out.flush()?;
    if cli.format == OutputFormat::Text {
        print_summary(&batch);
    }

    Ok(ExitCode::from(exit_status(&batch)))
}

/// 2 when any file failed, 1 when error diagnostics were reported, else 0
fn exit_status(batch: &BatchReport) -> u8 {
    if !batch.failures.is_empty() {
        EXIT_FAILURE
    } else if batch.error_count() > 0 {
        EXIT_DIAGNOSTICS
    } else {
        EXIT_CLEAN
    }
}

fn write_report(out: &mut impl Write, batch: &BatchReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, batch),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, batch)?;
            writeln!(out)
        }
        OutputFormat::Github => write_github(out, batch),
    }
}

/// Explicit files are taken as is; directories contribute their `.java` files
fn collect_java_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let parser = JavaParser::new();
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            return Err(format!("{}: no such file or directory", path.display()).into());
        }

        let mut found: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(path) {
            let entry = entry?;
            let is_source = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| parser.supports_extension(ext));
            if entry.file_type().is_file() && is_source {
                found.push(entry.into_path());
            }
        }
        found.sort();
        files.extend(found);
    }
    Ok(files)
}

fn severity_label(diagnostic: &Diagnostic) -> &'static str {
    match diagnostic.severity {
        Some(DiagnosticSeverity::WARNING) => "warning",
        Some(DiagnosticSeverity::INFORMATION) => "info",
        Some(DiagnosticSeverity::HINT) => "hint",
        _ => "error",
    }
}

fn code_of(diagnostic: &Diagnostic) -> String {
    match &diagnostic.code {
        Some(NumberOrString::String(code)) => code.clone(),
        Some(NumberOrString::Number(code)) => code.to_string(),
        None => String::new(),
    }
}

fn write_text(out: &mut impl Write, batch: &BatchReport) -> io::Result<()> {
    for report in &batch.reports {
        for diagnostic in &report.diagnostics {
            writeln!(
                out,
                "{}:{}:{}: {}[{}]: {}",
                report.path.display(),
                diagnostic.range.start.line + 1,
                diagnostic.range.start.character + 1,
                severity_label(diagnostic),
                code_of(diagnostic),
                diagnostic.message
            )?;
        }
    }
    Ok(())
}

/// Failures, skipped files and totals go to stderr
fn print_summary(batch: &BatchReport) {
    for failure in &batch.failures {
        eprintln!("{}: {}", failure.path.display(), failure.error);
    }

    let skipped = batch.reports.iter().filter(|r| r.skipped).count();
    if skipped > 0 {
        eprintln!(
            "note: {} file(s) skipped, the fault tolerance API is not on the classpath \
             (use --classpath-type or classpath.types)",
            skipped
        );
    }
    eprintln!(
        "{} file(s) checked, {} diagnostic(s)",
        batch.reports.len(),
        batch.diagnostic_count()
    );
}

fn write_github(out: &mut impl Write, batch: &BatchReport) -> io::Result<()> {
    for report in &batch.reports {
        for diagnostic in &report.diagnostics {
            let level = match severity_label(diagnostic) {
                "error" => "error",
                "warning" => "warning",
                _ => "notice",
            };
            writeln!(
                out,
                "::{} file={},line={},col={},title={}::{}",
                level,
                report.path.display(),
                diagnostic.range.start.line + 1,
                diagnostic.range.start.character + 1,
                code_of(diagnostic),
                diagnostic.message
            )?;
        }
    }
    for failure in &batch.failures {
        writeln!(out, "::error file={}::{}", failure.path.display(), failure.error)?;
    }
    Ok(())
}
