//! Miniature node catalogs shared by the integration tests.
//!
//! The source side is a loosely typed tree so scenarios can be assembled
//! inline; the target side builds nodes through the schema like any real
//! catalog would.

#![allow(dead_code)]

use std::fmt;

use bridge_core::{
    Attributes, ConstructError, FieldName, FieldSpec, SourceNode, TargetNode, Value,
};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SrcKind {
    Module,
    Record,
    Field,
    Enumeration,
    Enumerator,
    Opaque,
}

impl fmt::Display for SrcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SrcField {
    Name,
    Records,
    Primary,
    Secondary,
    Fields,
    Type,
    Enumerators,
    Value,
    Extends,
    Comment,
    Note,
}

impl FieldName for SrcField {
    fn name(&self) -> &'static str {
        match self {
            SrcField::Name => "name",
            SrcField::Records => "records",
            SrcField::Primary => "primary",
            SrcField::Secondary => "secondary",
            SrcField::Fields => "fields",
            SrcField::Type => "type",
            SrcField::Enumerators => "enumerators",
            SrcField::Value => "value",
            SrcField::Extends => "extends",
            SrcField::Comment => "comment",
            SrcField::Note => "note",
        }
    }
}

/// Raw attribute value of a test source node
#[derive(Debug)]
pub enum Raw {
    Null,
    Int(i64),
    Str(&'static str),
    Bool(bool),
    Node(Src),
    List(Vec<Src>),
    Keyed(Vec<(&'static str, Src)>),
}

#[derive(Debug)]
pub struct Src {
    pub kind: SrcKind,
    pub attrs: Vec<(SrcField, Raw)>,
}

impl Src {
    pub fn new(kind: SrcKind) -> Self {
        Self {
            kind,
            attrs: Vec::new(),
        }
    }

    pub fn with(mut self, field: SrcField, raw: Raw) -> Self {
        self.attrs.push((field, raw));
        self
    }
}

fn raw_to_value(raw: &Raw) -> Value<&Src> {
    match raw {
        Raw::Null => Value::Null,
        Raw::Int(i) => Value::Int(*i),
        Raw::Str(s) => Value::Str(s.to_string()),
        Raw::Bool(b) => Value::Bool(*b),
        Raw::Node(n) => Value::Node(n),
        Raw::List(items) => Value::nodes(items.iter()),
        Raw::Keyed(items) => Value::keyed(items.iter().map(|(k, n)| (*k, n))),
    }
}

impl<'a> SourceNode for &'a Src {
    type Kind = SrcKind;
    type Field = SrcField;

    fn kind(&self) -> SrcKind {
        self.kind
    }

    fn fields(kind: SrcKind) -> &'static [SrcField] {
        use SrcField::*;
        match kind {
            SrcKind::Module => &[Name, Records, Primary, Secondary, Comment],
            SrcKind::Record => &[Name, Fields, Extends, Comment, Note],
            SrcKind::Field => &[Name, Type],
            SrcKind::Enumeration => &[Name, Enumerators, Extends],
            SrcKind::Enumerator => &[Name, Value],
            SrcKind::Opaque => &[Name],
        }
    }

    fn attribute(&self, field: SrcField) -> Option<Value<Self>> {
        let node: &'a Src = self;
        if !Self::fields(node.kind).contains(&field) {
            return None;
        }
        Some(
            node.attrs
                .iter()
                .find(|(f, _)| *f == field)
                .map(|(_, raw)| raw_to_value(raw))
                .unwrap_or(Value::Null),
        )
    }

    fn label(&self) -> String {
        match self.attrs.iter().find(|(f, _)| *f == SrcField::Name) {
            Some((_, Raw::Str(name))) => format!("{} '{}'", self.kind, name),
            _ => self.kind.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DstKind {
    Module,
    Record,
    Member,
    Enumeration,
    Option,
}

impl fmt::Display for DstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DstField {
    Name,
    Records,
    Members,
    Datatype,
    Options,
    Value,
    Comment,
    Origin,
}

impl FieldName for DstField {
    fn name(&self) -> &'static str {
        match self {
            DstField::Name => "name",
            DstField::Records => "records",
            DstField::Members => "members",
            DstField::Datatype => "datatype",
            DstField::Options => "options",
            DstField::Value => "value",
            DstField::Comment => "comment",
            DstField::Origin => "origin",
        }
    }
}

const MODULE_SCHEMA: &[FieldSpec<DstKind, DstField>] = &[
    FieldSpec::scalar(DstField::Name).required(),
    FieldSpec::list_of(DstField::Records, DstKind::Record),
    FieldSpec::scalar(DstField::Comment),
];

const RECORD_SCHEMA: &[FieldSpec<DstKind, DstField>] = &[
    FieldSpec::scalar(DstField::Name).required(),
    FieldSpec::list_of(DstField::Members, DstKind::Member),
    FieldSpec::scalar(DstField::Comment),
    FieldSpec::scalar(DstField::Origin),
];

const MEMBER_SCHEMA: &[FieldSpec<DstKind, DstField>] = &[
    FieldSpec::scalar(DstField::Name).required(),
    FieldSpec::scalar(DstField::Datatype).required(),
];

const ENUMERATION_SCHEMA: &[FieldSpec<DstKind, DstField>] = &[
    FieldSpec::scalar(DstField::Name).required(),
    FieldSpec::scalar(DstField::Datatype).required(),
    FieldSpec::list_of(DstField::Options, DstKind::Option).required(),
];

const OPTION_SCHEMA: &[FieldSpec<DstKind, DstField>] = &[
    FieldSpec::scalar(DstField::Name).required(),
    FieldSpec::scalar(DstField::Value),
];

/// Generic target node: kind plus the attributes its schema declares
#[derive(Debug, Clone, PartialEq)]
pub struct Dst {
    pub kind: DstKind,
    pub attrs: IndexMap<DstField, Value<Dst>>,
}

impl Dst {
    pub fn get(&self, field: DstField) -> Option<&Value<Dst>> {
        self.attrs.get(&field)
    }

    pub fn str(&self, field: DstField) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn int(&self, field: DstField) -> Option<i64> {
        self.get(field).and_then(Value::as_int)
    }

    /// Child nodes of a list field
    pub fn children(&self, field: DstField) -> Vec<&Dst> {
        match self.get(field) {
            Some(Value::List(items)) => items.iter().filter_map(Value::as_node).collect(),
            _ => Vec::new(),
        }
    }

    pub fn names(&self, field: DstField) -> Vec<&str> {
        self.children(field)
            .into_iter()
            .filter_map(|child| child.str(DstField::Name))
            .collect()
    }
}

impl TargetNode for Dst {
    type Kind = DstKind;
    type Field = DstField;

    fn kind(&self) -> DstKind {
        self.kind
    }

    fn schema(kind: DstKind) -> &'static [FieldSpec<DstKind, DstField>] {
        match kind {
            DstKind::Module => MODULE_SCHEMA,
            DstKind::Record => RECORD_SCHEMA,
            DstKind::Member => MEMBER_SCHEMA,
            DstKind::Enumeration => ENUMERATION_SCHEMA,
            DstKind::Option => OPTION_SCHEMA,
        }
    }

    fn construct(kind: DstKind, mut attrs: Attributes<Self>) -> Result<Self, ConstructError> {
        let mut built = IndexMap::new();
        for spec in Self::schema(kind) {
            match attrs.take(spec.field) {
                None | Some(Value::Null) if spec.required => {
                    return Err(ConstructError::Missing {
                        field: spec.field.name(),
                    })
                }
                None | Some(Value::Null) => {}
                Some(value) => {
                    built.insert(spec.field, value);
                }
            }
        }
        Ok(Dst { kind, attrs: built })
    }
}

/// Traversal state for the enumeration scenarios
#[derive(Debug)]
pub struct Counter {
    pub next: i64,
    pub resets: usize,
}

impl Default for Counter {
    fn default() -> Self {
        Self { next: -1, resets: 0 }
    }
}

pub fn field(name: &'static str, ty: &'static str) -> Src {
    Src::new(SrcKind::Field)
        .with(SrcField::Name, Raw::Str(name))
        .with(SrcField::Type, Raw::Str(ty))
}

pub fn record(name: &'static str, fields: Vec<(&'static str, Src)>) -> Src {
    Src::new(SrcKind::Record)
        .with(SrcField::Name, Raw::Str(name))
        .with(SrcField::Fields, Raw::Keyed(fields))
}

pub fn enumerator(name: &'static str, value: Option<i64>) -> Src {
    Src::new(SrcKind::Enumerator)
        .with(SrcField::Name, Raw::Str(name))
        .with(SrcField::Value, value.map(Raw::Int).unwrap_or(Raw::Null))
}

pub fn enumeration(name: &'static str, enumerators: Vec<Src>) -> Src {
    let keyed = enumerators
        .into_iter()
        .map(|e| {
            let name = match e.attrs.first() {
                Some((_, Raw::Str(n))) => *n,
                _ => "",
            };
            (name, e)
        })
        .collect();
    Src::new(SrcKind::Enumeration)
        .with(SrcField::Name, Raw::Str(name))
        .with(SrcField::Enumerators, Raw::Keyed(keyed))
}
