use thiserror::Error;

use crate::model::ConstructError;

/// Problems found in a mapping table before any traversal
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("source kind {kind} has more than one type rule")]
    DuplicateSourceKind { kind: String },

    #[error("rule {source_kind} -> {target_kind} reads '{field}', which {source_kind} does not declare")]
    UnknownSourceField {
        source_kind: String,
        target_kind: String,
        field: &'static str,
    },

    #[error("rule {source_kind} -> {target_kind} writes '{field}', which {target_kind} does not declare")]
    UnknownTargetField {
        source_kind: String,
        target_kind: String,
        field: &'static str,
    },

    #[error("rule {source_kind} -> {target_kind} has a constant without a target attribute")]
    ConstantWithoutTarget {
        source_kind: String,
        target_kind: String,
    },
}

/// Fatal translation errors. Any of these aborts the whole run.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("no type rule for {node} (kind {kind})")]
    UnmappedType { kind: String, node: String },

    #[error("cannot build {target_kind} from {node}: {source}")]
    IncompleteNode {
        target_kind: String,
        node: String,
        #[source]
        source: ConstructError,
    },

    #[error("{node} uses unsupported feature '{attribute}' ({value})")]
    UnsupportedFeature {
        node: String,
        attribute: String,
        value: String,
    },

    #[error("target attribute '{attribute}' of {node} assigned twice")]
    MergeConflict { node: String, attribute: String },

    #[error("maximum nesting depth {max_depth} exceeded at {node}")]
    DepthExceeded { node: String, max_depth: usize },

    #[error("{message}")]
    Transform { message: String },
}

impl TranslateError {
    /// Error raised from inside a value-transform function
    pub fn transform(message: impl Into<String>) -> Self {
        Self::Transform {
            message: message.into(),
        }
    }

    pub fn is_unmapped_type(&self) -> bool {
        matches!(self, Self::UnmappedType { .. })
    }
}
