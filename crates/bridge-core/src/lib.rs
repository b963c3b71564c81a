//! # Bridge Core
//!
//! Generic model-to-model tree translation driven by a declarative table:
//! - Marker types used inside tables (constants, unsupported features,
//!   preparation hooks, homogeneous lists)
//! - The mapping table and its validation against both node catalogs
//! - The translator: type dispatch, two-phase attribute resolution,
//!   container handling and the merge strategy
//! - Diagnostics and error types
//!
//! The crate knows nothing about any concrete tree. Node catalogs plug in
//! through [`SourceNode`] and [`TargetNode`].

#![warn(clippy::all)]

pub mod diagnostics;
pub mod error;
pub mod markers;
pub mod model;
pub mod table;
pub mod translator;
pub mod value;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use error::{TableError, TranslateError};
pub use markers::{Constant, ListOf, Preparation, Unsupported};
pub use model::{
    Attributes, ConstructError, FieldName, FieldSpec, MergeConflict, MergePolicy, NodeKind, Shape,
    SourceNode, TargetNode,
};
pub use table::{MappingTable, Rename, Rule, SourceSpec, TargetSpec, TransformFn, TypeRule};
pub use translator::{Run, Translation, Translator};
pub use value::Value;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for bridge components
pub fn init_tracing() {
    init_tracing_with("bridge_core=info");
}

/// Initialize tracing with an explicit default directive.
///
/// `RUST_LOG` still takes precedence over the default.
pub fn init_tracing_with(default_directive: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    // A subscriber may already be installed (tests, embedding programs)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// What to do when an attribute marked unsupported carries a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Abort the translation with [`TranslateError::UnsupportedFeature`]
    #[default]
    Reject,
    /// Report an Error-severity diagnostic, drop the value and continue
    Warn,
}

/// Translation run configuration
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub unsupported: UnsupportedPolicy,
    /// Maximum node nesting depth before the run is aborted
    pub max_depth: usize,
    /// Treat merge conflicts as fatal instead of reporting them
    pub strict_merge: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            unsupported: UnsupportedPolicy::Reject,
            max_depth: 256,
            strict_merge: false,
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_strict_merge(mut self, strict: bool) -> Self {
        self.strict_merge = strict;
        self
    }
}
