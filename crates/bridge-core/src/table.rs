/*!
# Mapping Table

Declarative description of how source node kinds map onto target node
kinds. The table is built once, validated, and then only read while a
translation runs.

```rust,ignore
let table = MappingTable::new()
    .rename(SrcField::Fields, DstField::Members)
    .ignore(SrcField::Comments)
    .map(SrcKind::Enumeration, DstKind::Enumeration, vec![
        Rule::prepare(|state: &mut State| state.reset()),
        Rule::constant("int32", DstField::Datatype),
        Rule::unsupported(SrcField::Extends),
    ]);
```
*/

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{TableError, TranslateError};
use crate::markers::{Constant, Preparation, Unsupported};
use crate::model::{FieldName, SourceNode, TargetNode};
use crate::translator::Run;
use crate::value::Value;

/// Value-transform function attached to a mapping entry.
///
/// It may read and update the traversal state through the run, and must
/// call [`Run::transform`] itself if it wants to recurse into a node.
pub type TransformFn<S, T, C> =
    Arc<dyn Fn(&mut Run<'_, S, T, C>, Value<S>) -> Result<Value<T>, TranslateError> + Send + Sync>;

/// Where a mapping entry takes its value from
pub enum SourceSpec<F, T> {
    Attr(F),
    Constant(Constant<Value<T>>),
}

/// Where a mapping entry puts its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSpec<F> {
    Attr(F),
    /// Drop the attribute
    Ignore,
    /// Report the attribute if the source sets it
    Unsupported(Unsupported),
}

/// One entry in a type rule's ordered list
pub enum Rule<S: SourceNode, T: TargetNode, C> {
    Prepare(Preparation<C>),
    Map {
        source: SourceSpec<S::Field, T>,
        target: TargetSpec<T::Field>,
        transform: Option<TransformFn<S, T, C>>,
    },
}

impl<S: SourceNode, T: TargetNode, C> Rule<S, T, C> {
    /// Copy `source` to `target`, recursing into nodes and collections
    pub fn attr(source: S::Field, target: T::Field) -> Self {
        Rule::Map {
            source: SourceSpec::Attr(source),
            target: TargetSpec::Attr(target),
            transform: None,
        }
    }

    /// Copy `source` to `target` through a value transform
    pub fn attr_with<F>(source: S::Field, target: T::Field, transform: F) -> Self
    where
        F: Fn(&mut Run<'_, S, T, C>, Value<S>) -> Result<Value<T>, TranslateError>
            + Send
            + Sync
            + 'static,
    {
        Rule::Map {
            source: SourceSpec::Attr(source),
            target: TargetSpec::Attr(target),
            transform: Some(Arc::new(transform)),
        }
    }

    pub fn ignore(source: S::Field) -> Self {
        Rule::Map {
            source: SourceSpec::Attr(source),
            target: TargetSpec::Ignore,
            transform: None,
        }
    }

    pub fn unsupported(source: S::Field) -> Self {
        Rule::Map {
            source: SourceSpec::Attr(source),
            target: TargetSpec::Unsupported(Unsupported),
            transform: None,
        }
    }

    pub fn constant(value: impl Into<Value<T>>, target: T::Field) -> Self {
        Rule::Map {
            source: SourceSpec::Constant(Constant(value.into())),
            target: TargetSpec::Attr(target),
            transform: None,
        }
    }

    pub fn prepare(hook: impl Fn(&mut C) + Send + Sync + 'static) -> Self {
        Rule::Prepare(Preparation::new(hook))
    }
}

/// Global attribute rename, applied during same-name auto-mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rename<F> {
    To(F),
    Ignore,
}

/// Rules for one (source kind, target kind) pair
pub struct TypeRule<S: SourceNode, T: TargetNode, C> {
    pub source: S::Kind,
    pub target: T::Kind,
    pub rules: Vec<Rule<S, T, C>>,
}

pub struct MappingTable<S: SourceNode, T: TargetNode, C = ()> {
    type_map: Vec<TypeRule<S, T, C>>,
    global: IndexMap<S::Field, Rename<T::Field>>,
}

impl<S: SourceNode, T: TargetNode, C> Default for MappingTable<S, T, C> {
    fn default() -> Self {
        Self {
            type_map: Vec::new(),
            global: IndexMap::new(),
        }
    }
}

impl<S: SourceNode, T: TargetNode, C> MappingTable<S, T, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `source` as `target` in every node type
    pub fn rename(mut self, source: S::Field, target: T::Field) -> Self {
        self.global.insert(source, Rename::To(target));
        self
    }

    /// Drop `source` in every node type unless a rule handles it
    pub fn ignore(mut self, source: S::Field) -> Self {
        self.global.insert(source, Rename::Ignore);
        self
    }

    /// Add the rule list for a kind pair
    pub fn map(mut self, source: S::Kind, target: T::Kind, rules: Vec<Rule<S, T, C>>) -> Self {
        self.type_map.push(TypeRule {
            source,
            target,
            rules,
        });
        self
    }

    pub fn lookup(&self, kind: S::Kind) -> Option<&TypeRule<S, T, C>> {
        self.type_map.iter().find(|rule| rule.source == kind)
    }

    pub fn global(&self, field: S::Field) -> Option<Rename<T::Field>> {
        self.global.get(&field).copied()
    }

    /// Check the table against both node catalogs.
    ///
    /// Every kind may have at most one rule, and every field a rule names
    /// must be declared by the kind it is read from or written to.
    pub fn validate(&self) -> Result<(), TableError> {
        for (index, type_rule) in self.type_map.iter().enumerate() {
            let source_kind = type_rule.source.to_string();
            let target_kind = type_rule.target.to_string();

            if self.type_map[..index]
                .iter()
                .any(|earlier| earlier.source == type_rule.source)
            {
                return Err(TableError::DuplicateSourceKind { kind: source_kind });
            }

            let source_fields = S::fields(type_rule.source);
            for rule in &type_rule.rules {
                let Rule::Map { source, target, .. } = rule else {
                    continue;
                };

                if let SourceSpec::Attr(field) = source {
                    if !source_fields.contains(field) {
                        return Err(TableError::UnknownSourceField {
                            source_kind,
                            target_kind,
                            field: field.name(),
                        });
                    }
                }

                match (source, target) {
                    (_, TargetSpec::Attr(field)) => {
                        if T::field_spec(type_rule.target, *field).is_none() {
                            return Err(TableError::UnknownTargetField {
                                source_kind,
                                target_kind,
                                field: field.name(),
                            });
                        }
                    }
                    (SourceSpec::Constant(_), _) => {
                        return Err(TableError::ConstantWithoutTarget {
                            source_kind,
                            target_kind,
                        });
                    }
                    (SourceSpec::Attr(_), _) => {}
                }
            }
        }
        Ok(())
    }
}
