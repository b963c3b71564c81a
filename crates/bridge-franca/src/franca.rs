/*!
# Franca Source Catalog

Deserializable Franca IDL model, as produced by an external Franca parser
and exported to JSON, plus the [`FrancaRef`] handle that exposes it to the
translator.

Keyed collections keep their document order. A type is either a name
(primitive or reference) or `{"array": <type>}`.
*/

use std::fmt;

use bridge_core::{FieldName, SourceNode, Value};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::FrancaError;

/// Free-form comment block, e.g. `{"@description": "..."}`
pub type Comments = IndexMap<String, String>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Package {
    pub name: String,
    pub comments: Comments,
    pub imports: Vec<Import>,
    pub typecollections: IndexMap<String, TypeCollection>,
    pub interfaces: IndexMap<String, Interface>,
}

impl Package {
    pub fn from_json(input: &str) -> Result<Self, FrancaError> {
        Ok(serde_json::from_str(input)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Import {
    pub file: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Version {
    pub major: i64,
    pub minor: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypeCollection {
    pub name: String,
    pub comments: Comments,
    pub version: Option<Version>,
    pub typedefs: IndexMap<String, Typedef>,
    pub enumerations: IndexMap<String, Enumeration>,
    pub structs: IndexMap<String, Struct>,
    pub arrays: IndexMap<String, Array>,
    pub maps: IndexMap<String, MapType>,
    pub unions: IndexMap<String, Union>,
    pub constants: IndexMap<String, Constant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Interface {
    pub name: String,
    pub comments: Comments,
    pub version: Option<Version>,
    pub extends: Option<String>,
    pub manages: Vec<String>,
    pub attributes: IndexMap<String, Attribute>,
    pub methods: IndexMap<String, Method>,
    pub broadcasts: IndexMap<String, Broadcast>,
    pub typedefs: IndexMap<String, Typedef>,
    pub enumerations: IndexMap<String, Enumeration>,
    pub structs: IndexMap<String, Struct>,
    pub arrays: IndexMap<String, Array>,
    pub maps: IndexMap<String, MapType>,
    pub unions: IndexMap<String, Union>,
    pub constants: IndexMap<String, Constant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Method {
    pub name: String,
    pub comments: Comments,
    pub fire_and_forget: bool,
    pub in_args: IndexMap<String, Argument>,
    pub out_args: IndexMap<String, Argument>,
    /// Name of the error enumeration
    pub errors: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Broadcast {
    pub name: String,
    pub comments: Comments,
    pub selective: bool,
    pub out_args: IndexMap<String, Argument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(default)]
    pub comments: Comments,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub comments: Comments,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub no_subscriptions: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Typedef {
    pub name: String,
    #[serde(default)]
    pub comments: Comments,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// Named array type, `array Foo of Bar`
#[derive(Debug, Clone, Deserialize)]
pub struct Array {
    pub name: String,
    #[serde(default)]
    pub comments: Comments,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Enumeration {
    pub name: String,
    pub comments: Comments,
    pub enumerators: IndexMap<String, Enumerator>,
    pub extends: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Enumerator {
    pub name: String,
    pub comments: Comments,
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Struct {
    pub name: String,
    pub comments: Comments,
    pub fields: IndexMap<String, StructField>,
    pub extends: Option<String>,
    pub polymorphic: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StructField {
    pub name: String,
    #[serde(default)]
    pub comments: Comments,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapType {
    pub name: String,
    #[serde(default)]
    pub comments: Comments,
    pub key_type: TypeRef,
    pub value_type: TypeRef,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Union {
    pub name: String,
    pub comments: Comments,
    pub fields: IndexMap<String, StructField>,
    pub extends: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Constant {
    pub name: String,
    #[serde(default)]
    pub comments: Comments,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub value: String,
}

/// Type of an argument, attribute, field or typedef
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    /// Primitive type or reference to a named type
    Named(String),
    Array { array: Box<TypeRef> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrancaKind {
    Package,
    Import,
    TypeCollection,
    Interface,
    Version,
    Method,
    Broadcast,
    Argument,
    Attribute,
    Typedef,
    Enumeration,
    Enumerator,
    Struct,
    StructField,
    Array,
    Map,
    Union,
    Constant,
    Type,
}

impl fmt::Display for FrancaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrancaField {
    Name,
    Comments,
    Imports,
    File,
    Namespace,
    Typecollections,
    Interfaces,
    Version,
    Major,
    Minor,
    Typedefs,
    Enumerations,
    Structs,
    Arrays,
    Maps,
    Unions,
    Constants,
    Extends,
    Manages,
    Attributes,
    Methods,
    Broadcasts,
    FireAndForget,
    InArgs,
    OutArgs,
    Errors,
    Selective,
    Type,
    Readonly,
    NoSubscriptions,
    Enumerators,
    Value,
    Fields,
    Polymorphic,
    KeyType,
    ValueType,
}

impl FieldName for FrancaField {
    fn name(&self) -> &'static str {
        match self {
            FrancaField::Name => "name",
            FrancaField::Comments => "comments",
            FrancaField::Imports => "imports",
            FrancaField::File => "file",
            FrancaField::Namespace => "namespace",
            FrancaField::Typecollections => "typecollections",
            FrancaField::Interfaces => "interfaces",
            FrancaField::Version => "version",
            FrancaField::Major => "major",
            FrancaField::Minor => "minor",
            FrancaField::Typedefs => "typedefs",
            FrancaField::Enumerations => "enumerations",
            FrancaField::Structs => "structs",
            FrancaField::Arrays => "arrays",
            FrancaField::Maps => "maps",
            FrancaField::Unions => "unions",
            FrancaField::Constants => "constants",
            FrancaField::Extends => "extends",
            FrancaField::Manages => "manages",
            FrancaField::Attributes => "attributes",
            FrancaField::Methods => "methods",
            FrancaField::Broadcasts => "broadcasts",
            FrancaField::FireAndForget => "fire_and_forget",
            FrancaField::InArgs => "in_args",
            FrancaField::OutArgs => "out_args",
            FrancaField::Errors => "errors",
            FrancaField::Selective => "selective",
            FrancaField::Type => "type",
            FrancaField::Readonly => "readonly",
            FrancaField::NoSubscriptions => "no_subscriptions",
            FrancaField::Enumerators => "enumerators",
            FrancaField::Value => "value",
            FrancaField::Fields => "fields",
            FrancaField::Polymorphic => "polymorphic",
            FrancaField::KeyType => "key_type",
            FrancaField::ValueType => "value_type",
        }
    }
}

/// Borrowed handle to any node of a Franca package
#[derive(Debug, Clone, Copy)]
pub enum FrancaRef<'a> {
    Package(&'a Package),
    Import(&'a Import),
    TypeCollection(&'a TypeCollection),
    Interface(&'a Interface),
    Version(&'a Version),
    Method(&'a Method),
    Broadcast(&'a Broadcast),
    Argument(&'a Argument),
    Attribute(&'a Attribute),
    Typedef(&'a Typedef),
    Enumeration(&'a Enumeration),
    Enumerator(&'a Enumerator),
    Struct(&'a Struct),
    StructField(&'a StructField),
    Array(&'a Array),
    Map(&'a MapType),
    Union(&'a Union),
    Constant(&'a Constant),
    Type(&'a TypeRef),
}

type Val<'a> = Value<FrancaRef<'a>>;

fn text<'a>(s: &str) -> Val<'a> {
    Value::Str(s.to_string())
}

fn keyed<'a, T>(items: &'a IndexMap<String, T>, wrap: fn(&'a T) -> FrancaRef<'a>) -> Val<'a> {
    Value::keyed(items.iter().map(|(name, item)| (name.as_str(), wrap(item))))
}

fn comments<'a>(comments: &'a Comments) -> Val<'a> {
    Value::Map(
        comments
            .iter()
            .map(|(key, text)| (key.clone(), Value::Str(text.clone())))
            .collect(),
    )
}

fn version<'a>(version: &'a Option<Version>) -> Val<'a> {
    version
        .as_ref()
        .map(|v| Value::Node(FrancaRef::Version(v)))
        .unwrap_or_default()
}

fn type_ref(ty: &TypeRef) -> Val<'_> {
    Value::Node(FrancaRef::Type(ty))
}

impl<'a> FrancaRef<'a> {
    /// Declared name of the node, if its kind has one
    pub fn name(&self) -> Option<&'a str> {
        let name = match *self {
            FrancaRef::Package(p) => &p.name,
            FrancaRef::TypeCollection(t) => &t.name,
            FrancaRef::Interface(i) => &i.name,
            FrancaRef::Method(m) => &m.name,
            FrancaRef::Broadcast(b) => &b.name,
            FrancaRef::Argument(a) => &a.name,
            FrancaRef::Attribute(a) => &a.name,
            FrancaRef::Typedef(t) => &t.name,
            FrancaRef::Enumeration(e) => &e.name,
            FrancaRef::Enumerator(e) => &e.name,
            FrancaRef::Struct(s) => &s.name,
            FrancaRef::StructField(f) => &f.name,
            FrancaRef::Array(a) => &a.name,
            FrancaRef::Map(m) => &m.name,
            FrancaRef::Union(u) => &u.name,
            FrancaRef::Constant(c) => &c.name,
            FrancaRef::Import(i) => &i.file,
            FrancaRef::Version(_) | FrancaRef::Type(_) => return None,
        };
        Some(name.as_str())
    }

    fn read(self, field: FrancaField) -> Val<'a> {
        use FrancaField as F;
        match (self, field) {
            (FrancaRef::Package(p), F::Name) => text(&p.name),
            (FrancaRef::Package(p), F::Comments) => comments(&p.comments),
            (FrancaRef::Package(p), F::Imports) => Value::nodes(p.imports.iter().map(FrancaRef::Import)),
            (FrancaRef::Package(p), F::Typecollections) => keyed(&p.typecollections, FrancaRef::TypeCollection),
            (FrancaRef::Package(p), F::Interfaces) => keyed(&p.interfaces, FrancaRef::Interface),

            (FrancaRef::Import(i), F::File) => text(&i.file),
            (FrancaRef::Import(i), F::Namespace) => i.namespace.clone().into(),

            (FrancaRef::Version(v), F::Major) => Value::Int(v.major),
            (FrancaRef::Version(v), F::Minor) => Value::Int(v.minor),

            (FrancaRef::TypeCollection(t), F::Name) => text(&t.name),
            (FrancaRef::TypeCollection(t), F::Comments) => comments(&t.comments),
            (FrancaRef::TypeCollection(t), F::Version) => version(&t.version),
            (FrancaRef::TypeCollection(t), F::Typedefs) => keyed(&t.typedefs, FrancaRef::Typedef),
            (FrancaRef::TypeCollection(t), F::Enumerations) => keyed(&t.enumerations, FrancaRef::Enumeration),
            (FrancaRef::TypeCollection(t), F::Structs) => keyed(&t.structs, FrancaRef::Struct),
            (FrancaRef::TypeCollection(t), F::Arrays) => keyed(&t.arrays, FrancaRef::Array),
            (FrancaRef::TypeCollection(t), F::Maps) => keyed(&t.maps, FrancaRef::Map),
            (FrancaRef::TypeCollection(t), F::Unions) => keyed(&t.unions, FrancaRef::Union),
            (FrancaRef::TypeCollection(t), F::Constants) => keyed(&t.constants, FrancaRef::Constant),

            (FrancaRef::Interface(i), F::Name) => text(&i.name),
            (FrancaRef::Interface(i), F::Comments) => comments(&i.comments),
            (FrancaRef::Interface(i), F::Version) => version(&i.version),
            (FrancaRef::Interface(i), F::Extends) => i.extends.clone().into(),
            (FrancaRef::Interface(i), F::Manages) => {
                Value::List(i.manages.iter().map(|name| text(name.as_str())).collect())
            }
            (FrancaRef::Interface(i), F::Attributes) => keyed(&i.attributes, FrancaRef::Attribute),
            (FrancaRef::Interface(i), F::Methods) => keyed(&i.methods, FrancaRef::Method),
            (FrancaRef::Interface(i), F::Broadcasts) => keyed(&i.broadcasts, FrancaRef::Broadcast),
            (FrancaRef::Interface(i), F::Typedefs) => keyed(&i.typedefs, FrancaRef::Typedef),
            (FrancaRef::Interface(i), F::Enumerations) => keyed(&i.enumerations, FrancaRef::Enumeration),
            (FrancaRef::Interface(i), F::Structs) => keyed(&i.structs, FrancaRef::Struct),
            (FrancaRef::Interface(i), F::Arrays) => keyed(&i.arrays, FrancaRef::Array),
            (FrancaRef::Interface(i), F::Maps) => keyed(&i.maps, FrancaRef::Map),
            (FrancaRef::Interface(i), F::Unions) => keyed(&i.unions, FrancaRef::Union),
            (FrancaRef::Interface(i), F::Constants) => keyed(&i.constants, FrancaRef::Constant),

            (FrancaRef::Method(m), F::Name) => text(&m.name),
            (FrancaRef::Method(m), F::Comments) => comments(&m.comments),
            (FrancaRef::Method(m), F::FireAndForget) => Value::Bool(m.fire_and_forget),
            (FrancaRef::Method(m), F::InArgs) => keyed(&m.in_args, FrancaRef::Argument),
            (FrancaRef::Method(m), F::OutArgs) => keyed(&m.out_args, FrancaRef::Argument),
            (FrancaRef::Method(m), F::Errors) => m.errors.clone().into(),

            (FrancaRef::Broadcast(b), F::Name) => text(&b.name),
            (FrancaRef::Broadcast(b), F::Comments) => comments(&b.comments),
            (FrancaRef::Broadcast(b), F::Selective) => Value::Bool(b.selective),
            (FrancaRef::Broadcast(b), F::OutArgs) => keyed(&b.out_args, FrancaRef::Argument),

            (FrancaRef::Argument(a), F::Name) => text(&a.name),
            (FrancaRef::Argument(a), F::Comments) => comments(&a.comments),
            (FrancaRef::Argument(a), F::Type) => type_ref(&a.ty),

            (FrancaRef::Attribute(a), F::Name) => text(&a.name),
            (FrancaRef::Attribute(a), F::Comments) => comments(&a.comments),
            (FrancaRef::Attribute(a), F::Type) => type_ref(&a.ty),
            (FrancaRef::Attribute(a), F::Readonly) => Value::Bool(a.readonly),
            (FrancaRef::Attribute(a), F::NoSubscriptions) => Value::Bool(a.no_subscriptions),

            (FrancaRef::Typedef(t), F::Name) => text(&t.name),
            (FrancaRef::Typedef(t), F::Comments) => comments(&t.comments),
            (FrancaRef::Typedef(t), F::Type) => type_ref(&t.ty),

            (FrancaRef::Array(a), F::Name) => text(&a.name),
            (FrancaRef::Array(a), F::Comments) => comments(&a.comments),
            (FrancaRef::Array(a), F::Type) => type_ref(&a.ty),

            (FrancaRef::Enumeration(e), F::Name) => text(&e.name),
            (FrancaRef::Enumeration(e), F::Comments) => comments(&e.comments),
            (FrancaRef::Enumeration(e), F::Enumerators) => keyed(&e.enumerators, FrancaRef::Enumerator),
            (FrancaRef::Enumeration(e), F::Extends) => e.extends.clone().into(),

            (FrancaRef::Enumerator(e), F::Name) => text(&e.name),
            (FrancaRef::Enumerator(e), F::Comments) => comments(&e.comments),
            (FrancaRef::Enumerator(e), F::Value) => e.value.into(),

            (FrancaRef::Struct(s), F::Name) => text(&s.name),
            (FrancaRef::Struct(s), F::Comments) => comments(&s.comments),
            (FrancaRef::Struct(s), F::Fields) => keyed(&s.fields, FrancaRef::StructField),
            (FrancaRef::Struct(s), F::Extends) => s.extends.clone().into(),
            (FrancaRef::Struct(s), F::Polymorphic) => Value::Bool(s.polymorphic),

            (FrancaRef::StructField(f), F::Name) => text(&f.name),
            (FrancaRef::StructField(f), F::Comments) => comments(&f.comments),
            (FrancaRef::StructField(f), F::Type) => type_ref(&f.ty),

            (FrancaRef::Map(m), F::Name) => text(&m.name),
            (FrancaRef::Map(m), F::Comments) => comments(&m.comments),
            (FrancaRef::Map(m), F::KeyType) => type_ref(&m.key_type),
            (FrancaRef::Map(m), F::ValueType) => type_ref(&m.value_type),

            (FrancaRef::Union(u), F::Name) => text(&u.name),
            (FrancaRef::Union(u), F::Comments) => comments(&u.comments),
            (FrancaRef::Union(u), F::Fields) => keyed(&u.fields, FrancaRef::StructField),
            (FrancaRef::Union(u), F::Extends) => u.extends.clone().into(),

            (FrancaRef::Constant(c), F::Name) => text(&c.name),
            (FrancaRef::Constant(c), F::Comments) => comments(&c.comments),
            (FrancaRef::Constant(c), F::Type) => type_ref(&c.ty),
            (FrancaRef::Constant(c), F::Value) => text(&c.value),

            _ => Value::Null,
        }
    }
}

impl<'a> SourceNode for FrancaRef<'a> {
    type Kind = FrancaKind;
    type Field = FrancaField;

    fn kind(&self) -> FrancaKind {
        match self {
            FrancaRef::Package(_) => FrancaKind::Package,
            FrancaRef::Import(_) => FrancaKind::Import,
            FrancaRef::TypeCollection(_) => FrancaKind::TypeCollection,
            FrancaRef::Interface(_) => FrancaKind::Interface,
            FrancaRef::Version(_) => FrancaKind::Version,
            FrancaRef::Method(_) => FrancaKind::Method,
            FrancaRef::Broadcast(_) => FrancaKind::Broadcast,
            FrancaRef::Argument(_) => FrancaKind::Argument,
            FrancaRef::Attribute(_) => FrancaKind::Attribute,
            FrancaRef::Typedef(_) => FrancaKind::Typedef,
            FrancaRef::Enumeration(_) => FrancaKind::Enumeration,
            FrancaRef::Enumerator(_) => FrancaKind::Enumerator,
            FrancaRef::Struct(_) => FrancaKind::Struct,
            FrancaRef::StructField(_) => FrancaKind::StructField,
            FrancaRef::Array(_) => FrancaKind::Array,
            FrancaRef::Map(_) => FrancaKind::Map,
            FrancaRef::Union(_) => FrancaKind::Union,
            FrancaRef::Constant(_) => FrancaKind::Constant,
            FrancaRef::Type(_) => FrancaKind::Type,
        }
    }

    fn fields(kind: FrancaKind) -> &'static [FrancaField] {
        use FrancaField::*;
        match kind {
            FrancaKind::Package => &[Name, Comments, Imports, Typecollections, Interfaces],
            FrancaKind::Import => &[File, Namespace],
            FrancaKind::Version => &[Major, Minor],
            FrancaKind::TypeCollection => &[
                Name,
                Comments,
                Version,
                Typedefs,
                Enumerations,
                Structs,
                Arrays,
                Maps,
                Unions,
                Constants,
            ],
            FrancaKind::Interface => &[
                Name,
                Comments,
                Version,
                Extends,
                Manages,
                Attributes,
                Methods,
                Broadcasts,
                Typedefs,
                Enumerations,
                Structs,
                Arrays,
                Maps,
                Unions,
                Constants,
            ],
            FrancaKind::Method => &[Name, Comments, FireAndForget, InArgs, OutArgs, Errors],
            FrancaKind::Broadcast => &[Name, Comments, Selective, OutArgs],
            FrancaKind::Argument => &[Name, Comments, Type],
            FrancaKind::Attribute => &[Name, Comments, Type, Readonly, NoSubscriptions],
            FrancaKind::Typedef => &[Name, Comments, Type],
            FrancaKind::Array => &[Name, Comments, Type],
            FrancaKind::Enumeration => &[Name, Comments, Enumerators, Extends],
            FrancaKind::Enumerator => &[Name, Comments, Value],
            FrancaKind::Struct => &[Name, Comments, Fields, Extends, Polymorphic],
            FrancaKind::StructField => &[Name, Comments, Type],
            FrancaKind::Map => &[Name, Comments, KeyType, ValueType],
            FrancaKind::Union => &[Name, Comments, Fields, Extends],
            FrancaKind::Constant => &[Name, Comments, Type, Value],
            FrancaKind::Type => &[],
        }
    }

    fn attribute(&self, field: FrancaField) -> Option<Value<Self>> {
        if !Self::fields(self.kind()).contains(&field) {
            return None;
        }
        Some(self.read(field))
    }

    fn label(&self) -> String {
        match self.name() {
            Some(name) if !name.is_empty() => format!("{} '{}'", self.kind(), name),
            _ => self.kind().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_refs_deserialize() {
        let named: TypeRef = serde_json::from_str(r#""Int32""#).unwrap();
        assert_eq!(named, TypeRef::Named("Int32".to_string()));

        let nested: TypeRef = serde_json::from_str(r#"{"array": {"array": "String"}}"#).unwrap();
        assert_eq!(
            nested,
            TypeRef::Array {
                array: Box::new(TypeRef::Array {
                    array: Box::new(TypeRef::Named("String".to_string()))
                })
            }
        );
    }

    #[test]
    fn test_collections_keep_document_order() {
        let package = Package::from_json(
            r#"{
                "name": "p",
                "typecollections": {
                    "T": {
                        "name": "T",
                        "structs": {
                            "Zeta": {"name": "Zeta"},
                            "Alpha": {"name": "Alpha"}
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let tc = FrancaRef::TypeCollection(&package.typecollections["T"]);
        let Some(Value::Map(structs)) = tc.attribute(FrancaField::Structs) else {
            panic!("structs should be keyed");
        };
        let names: Vec<_> = structs.keys().cloned().collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_undeclared_field_is_none() {
        let enumerator = Enumerator {
            name: "A".to_string(),
            ..Default::default()
        };
        let node = FrancaRef::Enumerator(&enumerator);
        assert!(node.attribute(FrancaField::Methods).is_none());
        assert!(matches!(node.attribute(FrancaField::Value), Some(Value::Null)));
        assert_eq!(node.label(), "Enumerator 'A'");
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = Package::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FrancaError::Parse(_)));
    }
}
