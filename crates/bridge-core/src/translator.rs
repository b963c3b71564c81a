/*!
# Translator - Table-Driven Tree Translation

Walks a source tree depth-first and builds the equivalent target tree,
bottom-up, following a [`MappingTable`].

For every node the rule of its kind is applied in two phases:

1. explicit entries, strictly in table order (preparation hooks, ignored
   and unsupported attributes, constants, attribute copies with optional
   transforms)
2. same-name auto-mapping of every attribute phase 1 did not handle,
   after the global renames

The collected attribute set is then handed to the target catalog, which
builds the node in one step.
*/

use std::collections::HashSet;

use tracing::debug;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{TableError, TranslateError};
use crate::markers::Constant;
use crate::model::{Attributes, FieldName, MergePolicy, SourceNode, TargetNode};
use crate::table::{MappingTable, Rename, Rule, SourceSpec, TargetSpec, TransformFn, TypeRule};
use crate::value::Value;
use crate::{TranslatorConfig, UnsupportedPolicy};

/// Result of a successful translation
#[derive(Debug, Clone)]
pub struct Translation<T> {
    pub output: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Translation<T> {
    /// True if any Error-severity diagnostic was collected
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == crate::diagnostics::Severity::Error)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Translation<U> {
        Translation {
            output: f(self.output),
            diagnostics: self.diagnostics,
        }
    }
}

/// A validated mapping table plus its run configuration
pub struct Translator<S: SourceNode, T: TargetNode, C = ()> {
    table: MappingTable<S, T, C>,
    config: TranslatorConfig,
}

impl<S: SourceNode, T: TargetNode, C> Translator<S, T, C> {
    /// Validate `table` and wrap it. Invalid tables never reach a traversal.
    pub fn new(table: MappingTable<S, T, C>) -> Result<Self, TableError> {
        table.validate()?;
        Ok(Self {
            table,
            config: TranslatorConfig::default(),
        })
    }

    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Start a run with fresh traversal state.
    ///
    /// Useful for drivers that translate several roots into one result.
    pub fn start(&self) -> Run<'_, S, T, C>
    where
        C: Default,
    {
        Run::new(&self.table, &self.config, C::default())
    }

    /// Translate a whole tree. Any fatal error aborts with no output.
    pub fn translate(&self, root: S) -> Result<Translation<T>, TranslateError>
    where
        C: Default,
    {
        let mut run = self.start();
        let output = run.transform(root)?;
        Ok(run.finish(output))
    }
}

/// State of one traversal
pub struct Run<'t, S: SourceNode, T: TargetNode, C> {
    table: &'t MappingTable<S, T, C>,
    config: &'t TranslatorConfig,
    /// Traversal-local state, reset by preparation hooks
    pub state: C,
    diagnostics: Diagnostics,
    depth: usize,
}

impl<'t, S: SourceNode, T: TargetNode, C> Run<'t, S, T, C> {
    pub fn new(table: &'t MappingTable<S, T, C>, config: &'t TranslatorConfig, state: C) -> Self {
        Self {
            table,
            config,
            state,
            diagnostics: Diagnostics::new(),
            depth: 0,
        }
    }

    /// Close the run, attaching the collected diagnostics to `output`
    pub fn finish<O>(self, output: O) -> Translation<O> {
        Translation {
            output,
            diagnostics: self.diagnostics.into_vec(),
        }
    }

    /// Translate one source node into a target node
    pub fn transform(&mut self, node: S) -> Result<T, TranslateError> {
        let table = self.table;
        let label = node.label();

        if self.depth >= self.config.max_depth {
            return Err(TranslateError::DepthExceeded {
                node: label,
                max_depth: self.config.max_depth,
            });
        }

        let Some(type_rule) = table.lookup(node.kind()) else {
            return Err(TranslateError::UnmappedType {
                kind: node.kind().to_string(),
                node: label,
            });
        };
        debug!(source = %type_rule.source, target = %type_rule.target, node = %label, "type rule found");

        self.depth += 1;
        let result = self.apply(node, &label, type_rule);
        self.depth -= 1;
        result
    }

    /// Translate any value: scalars are copied, nodes dispatched, and
    /// collections translated element by element
    pub fn translate(&mut self, value: Value<S>) -> Result<Value<T>, TranslateError> {
        match value {
            Value::Node(node) => self.transform(node).map(Value::Node),
            Value::List(_) | Value::Map(_) => self.transform_value(value, None),
            scalar => scalar
                .cast_scalar()
                .ok_or_else(|| TranslateError::transform("scalar expected")),
        }
    }

    /// Container transformer.
    ///
    /// Keyed collections become lists in iteration order with the keys
    /// dropped, lists keep their order, and anything else goes through
    /// `transform` (or [`Run::translate`] when there is none).
    pub fn transform_value(
        &mut self,
        value: Value<S>,
        transform: Option<&TransformFn<S, T, C>>,
    ) -> Result<Value<T>, TranslateError> {
        match value {
            Value::Map(entries) => entries
                .into_values()
                .map(|item| self.translate(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Value::List(items) => items
                .into_iter()
                .map(|item| self.translate(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            other => match transform {
                Some(f) => f(self, other),
                None => self.translate(other),
            },
        }
    }

    fn apply(
        &mut self,
        node: S,
        label: &str,
        type_rule: &'t TypeRule<S, T, C>,
    ) -> Result<T, TranslateError> {
        let target_kind = type_rule.target;
        let mut attrs = Attributes::new();
        let mut handled = HashSet::new();

        for rule in &type_rule.rules {
            let (source, target, transform) = match rule {
                Rule::Prepare(preparation) => {
                    preparation.run(&mut self.state);
                    continue;
                }
                Rule::Map {
                    source,
                    target,
                    transform,
                } => (source, target, transform.as_ref()),
            };

            if let SourceSpec::Attr(field) = source {
                handled.insert(*field);
            }

            match (source, target) {
                (SourceSpec::Attr(field), TargetSpec::Ignore) => {
                    debug!(node = %label, attribute = field.name(), "ignored");
                }
                (SourceSpec::Attr(field), TargetSpec::Unsupported(_)) => {
                    let value = node.attribute(*field).unwrap_or_default();
                    if !value.is_unset() {
                        self.unsupported(label, field.name(), &value)?;
                    }
                }
                (SourceSpec::Constant(Constant(value)), TargetSpec::Attr(to)) => {
                    self.assign(&mut attrs, target_kind, *to, value.clone(), label)?;
                }
                (SourceSpec::Attr(field), TargetSpec::Attr(to)) => {
                    let value = node.attribute(*field).unwrap_or_default();
                    let value = self.transform_value(value, transform)?;
                    self.assign(&mut attrs, target_kind, *to, value, label)?;
                }
                // rejected by MappingTable::validate
                (SourceSpec::Constant(_), _) => {}
            }
        }

        for &field in S::fields(node.kind()) {
            if handled.contains(&field) {
                continue;
            }

            let to = match self.table.global(field) {
                Some(Rename::Ignore) => {
                    debug!(node = %label, attribute = field.name(), "ignored globally");
                    continue;
                }
                Some(Rename::To(to)) => T::field_spec(target_kind, to).map(|spec| spec.field),
                None => T::field_named(target_kind, field.name()),
            };

            let Some(value) = node.attribute(field) else {
                continue;
            };

            match to {
                Some(to) => {
                    debug!(node = %label, from = field.name(), to = to.name(), "auto-mapped");
                    let value = self.transform_value(value, None)?;
                    self.assign(&mut attrs, target_kind, to, value, label)?;
                }
                None => self.diagnostics.report(Diagnostic::unmapped_attribute(
                    label,
                    field.name(),
                    &target_kind.to_string(),
                )),
            }
        }

        debug!(target = %target_kind, attributes = attrs.len(), "constructing node");
        T::construct(target_kind, attrs).map_err(|source| TranslateError::IncompleteNode {
            target_kind: target_kind.to_string(),
            node: label.to_string(),
            source,
        })
    }

    /// Merge strategy: lists append, scalars keep their first value
    fn assign(
        &mut self,
        attrs: &mut Attributes<T>,
        target_kind: T::Kind,
        field: T::Field,
        value: Value<T>,
        label: &str,
    ) -> Result<(), TranslateError> {
        let policy = T::field_spec(target_kind, field)
            .map(|spec| spec.policy())
            .unwrap_or(MergePolicy::Reject);

        let Err(conflict) = attrs.merge(field, value, policy) else {
            return Ok(());
        };

        if self.config.strict_merge {
            return Err(TranslateError::MergeConflict {
                node: label.to_string(),
                attribute: conflict.field.to_string(),
            });
        }
        self.diagnostics
            .report(Diagnostic::merge_conflict(label, conflict.field));
        Ok(())
    }

    fn unsupported(
        &mut self,
        label: &str,
        attribute: &str,
        value: &Value<S>,
    ) -> Result<(), TranslateError> {
        match self.config.unsupported {
            UnsupportedPolicy::Reject => Err(TranslateError::UnsupportedFeature {
                node: label.to_string(),
                attribute: attribute.to_string(),
                value: value.to_string(),
            }),
            UnsupportedPolicy::Warn => {
                self.diagnostics.report(Diagnostic::unsupported_feature(
                    label,
                    attribute,
                    &value.to_string(),
                ));
                Ok(())
            }
        }
    }
}
