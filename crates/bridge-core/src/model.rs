/*!
# Node Model Contracts

What the translator needs from the two node catalogs. The source catalog
exposes attributes by typed field name; the target catalog declares a
schema per kind and builds a node from a complete attribute set.
*/

use std::fmt::{Debug, Display};
use std::hash::Hash;

use indexmap::IndexMap;
use thiserror::Error;

use crate::markers::ListOf;
use crate::value::Value;

/// Tag of one node variant out of a closed set
pub trait NodeKind: Copy + Eq + Hash + Debug + Display + 'static {}

impl<K> NodeKind for K where K: Copy + Eq + Hash + Debug + Display + 'static {}

/// Finite set of attribute names of one node catalog
pub trait FieldName: Copy + Eq + Hash + Debug + 'static {
    /// Attribute name as it appears in the catalog.
    ///
    /// Same-name auto-mapping compares these strings across catalogs.
    fn name(&self) -> &'static str;
}

/// A handle to a node of the source tree
pub trait SourceNode: Copy + Debug {
    type Kind: NodeKind;
    type Field: FieldName;

    fn kind(&self) -> Self::Kind;

    /// All fields declared by a kind, in declaration order
    fn fields(kind: Self::Kind) -> &'static [Self::Field];

    /// Read one attribute. `None` if the kind has no such field.
    fn attribute(&self, field: Self::Field) -> Option<Value<Self>>;

    /// Human-readable identification for diagnostics
    fn label(&self) -> String {
        self.kind().to_string()
    }
}

/// How repeated contributions to one target field are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// List field: every contribution is appended
    Append,
    /// Scalar field: a second contribution is a conflict
    Reject,
}

/// Declared shape of a target field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<K> {
    Scalar,
    Node(K),
    ListOf(ListOf<K>),
}

/// One entry of a target kind's schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<K, F> {
    pub field: F,
    pub required: bool,
    pub shape: Shape<K>,
}

impl<K, F> FieldSpec<K, F> {
    pub const fn scalar(field: F) -> Self {
        Self {
            field,
            required: false,
            shape: Shape::Scalar,
        }
    }

    pub const fn node(field: F, kind: K) -> Self {
        Self {
            field,
            required: false,
            shape: Shape::Node(kind),
        }
    }

    pub const fn list_of(field: F, kind: K) -> Self {
        Self {
            field,
            required: false,
            shape: Shape::ListOf(ListOf(kind)),
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn policy(&self) -> MergePolicy {
        match self.shape {
            Shape::ListOf(_) => MergePolicy::Append,
            Shape::Scalar | Shape::Node(_) => MergePolicy::Reject,
        }
    }
}

/// Errors raised while building a target node from its attributes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructError {
    #[error("missing required field '{field}'")]
    Missing { field: &'static str },

    #[error("field '{field}' expects {expected}, got {actual}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

/// A target node type
pub trait TargetNode: Sized + Clone + Debug {
    type Kind: NodeKind;
    type Field: FieldName;

    fn kind(&self) -> Self::Kind;

    fn schema(kind: Self::Kind) -> &'static [FieldSpec<Self::Kind, Self::Field>];

    /// Build a node from a fully resolved attribute set.
    ///
    /// Must fail with [`ConstructError::Missing`] for an absent required
    /// field and must never invent a value for it.
    fn construct(kind: Self::Kind, attrs: Attributes<Self>) -> Result<Self, ConstructError>;

    fn field_spec(
        kind: Self::Kind,
        field: Self::Field,
    ) -> Option<&'static FieldSpec<Self::Kind, Self::Field>> {
        Self::schema(kind).iter().find(|spec| spec.field == field)
    }

    /// Resolve an attribute name against a kind's schema
    fn field_named(kind: Self::Kind, name: &str) -> Option<Self::Field> {
        Self::schema(kind)
            .iter()
            .find(|spec| spec.field.name() == name)
            .map(|spec| spec.field)
    }
}

/// A second scalar contribution to an already assigned field
#[derive(Debug, Clone, PartialEq)]
pub struct MergeConflict<N> {
    pub field: &'static str,
    pub rejected: Value<N>,
}

/// Attribute set of a target node under construction
#[derive(Debug, Clone)]
pub struct Attributes<T: TargetNode> {
    values: IndexMap<T::Field, Value<T>>,
}

impl<T: TargetNode> Default for Attributes<T> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }
}

impl<T: TargetNode> Attributes<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, field: T::Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn get(&self, field: T::Field) -> Option<&Value<T>> {
        self.values.get(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Assign without merge checks. Meant for building attribute sets by
    /// hand, e.g. in drivers and tests.
    pub fn with(mut self, field: T::Field, value: impl Into<Value<T>>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Write a contribution according to the field's merge policy.
    ///
    /// `Null` contributes nothing and an assigned `Null` counts as vacant.
    /// On conflict the first value stays in place and the rejected one is
    /// handed back.
    pub fn merge(
        &mut self,
        field: T::Field,
        value: Value<T>,
        policy: MergePolicy,
    ) -> Result<(), MergeConflict<T>> {
        match self.values.get_mut(&field) {
            Some(Value::Null) | None => {
                let value = match (value, policy) {
                    (Value::List(items), _) => Value::List(items),
                    (Value::Null, MergePolicy::Append) => Value::List(Vec::new()),
                    (other, MergePolicy::Append) => Value::List(vec![other]),
                    (other, MergePolicy::Reject) => other,
                };
                self.values.insert(field, value);
                Ok(())
            }
            Some(_) if matches!(value, Value::Null) => Ok(()),
            Some(Value::List(items)) if policy == MergePolicy::Append => {
                match value {
                    Value::List(more) => items.extend(more),
                    other => items.push(other),
                }
                Ok(())
            }
            Some(_) => Err(MergeConflict {
                field: field.name(),
                rejected: value,
            }),
        }
    }

    pub fn take(&mut self, field: T::Field) -> Option<Value<T>> {
        self.values.shift_remove(&field)
    }

    /// Optional string field; `Null` counts as absent
    pub fn take_string(&mut self, field: T::Field) -> Result<Option<String>, ConstructError> {
        match self.take(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Str(s)) => Ok(Some(s)),
            Some(other) => Err(wrong_type(field, "string", &other)),
        }
    }

    pub fn require_string(&mut self, field: T::Field) -> Result<String, ConstructError> {
        self.take_string(field)?.ok_or(ConstructError::Missing {
            field: field.name(),
        })
    }

    pub fn take_int(&mut self, field: T::Field) -> Result<Option<i64>, ConstructError> {
        match self.take(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Int(i)) => Ok(Some(i)),
            Some(other) => Err(wrong_type(field, "integer", &other)),
        }
    }

    pub fn take_bool(&mut self, field: T::Field) -> Result<Option<bool>, ConstructError> {
        match self.take(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(wrong_type(field, "boolean", &other)),
        }
    }

    /// Optional single node, narrowed to a concrete type by `extract`
    pub fn take_node<N>(
        &mut self,
        field: T::Field,
        extract: impl Fn(T) -> Option<N>,
    ) -> Result<Option<N>, ConstructError> {
        match self.take(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Node(node)) => {
                extract(node)
                    .map(Some)
                    .ok_or_else(|| node_type_error(field))
            }
            Some(other) => Err(wrong_type(field, "node", &other)),
        }
    }

    /// List of nodes, empty when absent
    pub fn take_nodes<N>(
        &mut self,
        field: T::Field,
        extract: impl Fn(T) -> Option<N>,
    ) -> Result<Vec<N>, ConstructError> {
        match self.take(field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::List(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Node(node) => extract(node).ok_or_else(|| node_type_error(field)),
                    other => Err(wrong_type(field, "node", &other)),
                })
                .collect(),
            Some(other) => Err(wrong_type(field, "list", &other)),
        }
    }

    pub fn require_nodes<N>(
        &mut self,
        field: T::Field,
        extract: impl Fn(T) -> Option<N>,
    ) -> Result<Vec<N>, ConstructError> {
        if !self.contains(field) {
            return Err(ConstructError::Missing {
                field: field.name(),
            });
        }
        self.take_nodes(field, extract)
    }
}

fn wrong_type<F: FieldName, N>(field: F, expected: &'static str, actual: &Value<N>) -> ConstructError {
    ConstructError::WrongType {
        field: field.name(),
        expected,
        actual: actual.type_name(),
    }
}

fn node_type_error<F: FieldName>(field: F) -> ConstructError {
    ConstructError::WrongType {
        field: field.name(),
        expected: "node of the declared kind",
        actual: "node of another kind",
    }
}
