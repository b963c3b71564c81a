//! Conversion entry point behind the `franca-to-ifex` binary

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bridge_core::{Diagnostic, Severity, TranslatorConfig, UnsupportedPolicy};
use tracing::info;

/// Command-line options of one conversion
#[derive(Debug, Clone)]
pub struct Options {
    /// JSON-encoded Franca package
    pub input: PathBuf,
    /// Write the YAML here instead of returning it for stdout
    pub output: Option<PathBuf>,
    pub allow_unsupported: bool,
    /// Fail on any Error-severity diagnostic, merge conflicts included
    pub strict: bool,
    pub max_depth: usize,
}

impl Options {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            allow_unsupported: false,
            strict: false,
            max_depth: TranslatorConfig::default().max_depth,
        }
    }

    pub fn config(&self) -> TranslatorConfig {
        let unsupported = if self.allow_unsupported {
            UnsupportedPolicy::Warn
        } else {
            UnsupportedPolicy::Reject
        };
        TranslatorConfig::new()
            .with_unsupported(unsupported)
            .with_max_depth(self.max_depth)
            .with_strict_merge(self.strict)
    }
}

/// Result of a successful conversion
#[derive(Debug)]
pub struct Report {
    pub yaml: String,
    pub diagnostics: Vec<Diagnostic>,
    /// Set when the YAML went to a file
    pub written_to: Option<PathBuf>,
}

pub fn run(options: &Options) -> Result<Report> {
    let input = fs::read_to_string(&options.input)
        .with_context(|| format!("failed to read {}", options.input.display()))?;

    let translation = bridge_franca::convert_json(&input, options.config())
        .with_context(|| format!("failed to convert {}", options.input.display()))?;

    if options.strict && translation.has_errors() {
        let errors = translation
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        bail!(
            "{} error diagnostic(s) in {}, no output written",
            errors,
            options.input.display()
        );
    }

    if let Some(path) = &options.output {
        fs::write(path, &translation.output)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(output = %path.display(), "IFEX written");
    }

    Ok(Report {
        yaml: translation.output,
        diagnostics: translation.diagnostics,
        written_to: options.output.clone(),
    })
}
