//! Non-fatal findings collected during a translation
//!
//! Every diagnostic is logged through `tracing` when it is reported and kept
//! so the caller can show it next to the produced tree.

use std::fmt;

use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Source attribute with no counterpart on the target kind
    UnmappedAttribute,
    /// Source attribute marked unsupported carries a value
    UnsupportedFeature,
    /// Second contribution to a scalar target attribute
    MergeConflict,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Source node the finding is about
    pub node: String,
    pub attribute: String,
    pub message: String,
}

impl Diagnostic {
    pub fn unmapped_attribute(node: &str, attribute: &str, target_kind: &str) -> Self {
        Self {
            severity: Severity::Warning,
            kind: DiagnosticKind::UnmappedAttribute,
            node: node.to_string(),
            attribute: attribute.to_string(),
            message: format!("attribute '{attribute}' of {node} has no counterpart in {target_kind}, dropped"),
        }
    }

    pub fn unsupported_feature(node: &str, attribute: &str, value: &str) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::UnsupportedFeature,
            node: node.to_string(),
            attribute: attribute.to_string(),
            message: format!("feature '{attribute}' is unsupported but {node} sets it to {value}, dropped"),
        }
    }

    pub fn merge_conflict(node: &str, attribute: &str) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::MergeConflict,
            node: node.to_string(),
            attribute: attribute.to_string(),
            message: format!(
                "target attribute '{attribute}' of {node} already has a scalar value, kept the first one"
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Collector for the diagnostics of one run
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => warn!(
                node = %diagnostic.node,
                attribute = %diagnostic.attribute,
                "{}", diagnostic.message
            ),
            Severity::Error => error!(
                node = %diagnostic.node,
                attribute = %diagnostic.attribute,
                "{}", diagnostic.message
            ),
        }
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_is_preserved() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(Diagnostic::unmapped_attribute("Struct 'Point'", "extra", "Struct"));
        assert!(!diagnostics.has_errors());

        diagnostics.report(Diagnostic::merge_conflict("Struct 'Point'", "name"));
        assert!(diagnostics.has_errors());

        let kinds: Vec<_> = diagnostics.entries().iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::UnmappedAttribute, DiagnosticKind::MergeConflict]
        );
    }

    #[test]
    fn test_display_includes_severity() {
        let d = Diagnostic::unsupported_feature("Struct 'S'", "extends", "\"Base\"");
        let text = d.to_string();
        assert!(text.starts_with("error:"));
        assert!(text.contains("extends"));
    }
}
