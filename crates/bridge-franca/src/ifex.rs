/*!
# IFEX Target Catalog

Owned IFEX interface model. Every node kind declares a schema (which
fields exist, which are mandatory, which are lists of which kind) and is
built in one step from a resolved attribute set. The tree renders to
YAML with empty fields left out.
*/

use std::fmt;

use bridge_core::{Attributes, ConstructError, FieldName, FieldSpec, TargetNode};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ast {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<Namespace>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<Include>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Namespace {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_version: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<Namespace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<Interface>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub typedefs: Vec<Typedef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub structs: Vec<Struct>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enumerations: Vec<Enumeration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Interface {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_version: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub typedefs: Vec<Typedef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub structs: Vec<Struct>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enumerations: Vec<Enumeration>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Method {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<Argument>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<Argument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Event {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<Argument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    pub datatype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub datatype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Typedef {
    pub name: String,
    pub datatype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Struct {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Member {
    pub name: String,
    pub datatype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Enumeration {
    pub name: String,
    pub datatype: String,
    pub options: Vec<EnumOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One named value of an [`Enumeration`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnumOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Include {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Render a tree as an IFEX YAML document
pub fn to_yaml(ast: &Ast) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(ast)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IfexKind {
    Namespace,
    Interface,
    Method,
    Event,
    Argument,
    Property,
    Typedef,
    Struct,
    Member,
    Enumeration,
    Option,
    Include,
}

impl fmt::Display for IfexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IfexField {
    Name,
    Description,
    MajorVersion,
    MinorVersion,
    Namespaces,
    Interface,
    Typedefs,
    Structs,
    Enumerations,
    Methods,
    Events,
    Properties,
    Input,
    Output,
    Datatype,
    Members,
    Options,
    Value,
    File,
}

impl FieldName for IfexField {
    fn name(&self) -> &'static str {
        match self {
            IfexField::Name => "name",
            IfexField::Description => "description",
            IfexField::MajorVersion => "major_version",
            IfexField::MinorVersion => "minor_version",
            IfexField::Namespaces => "namespaces",
            IfexField::Interface => "interface",
            IfexField::Typedefs => "typedefs",
            IfexField::Structs => "structs",
            IfexField::Enumerations => "enumerations",
            IfexField::Methods => "methods",
            IfexField::Events => "events",
            IfexField::Properties => "properties",
            IfexField::Input => "input",
            IfexField::Output => "output",
            IfexField::Datatype => "datatype",
            IfexField::Members => "members",
            IfexField::Options => "options",
            IfexField::Value => "value",
            IfexField::File => "file",
        }
    }
}

type Spec = FieldSpec<IfexKind, IfexField>;

const NAMESPACE_SCHEMA: &[Spec] = &[
    FieldSpec::scalar(IfexField::Name).required(),
    FieldSpec::scalar(IfexField::Description),
    FieldSpec::scalar(IfexField::MajorVersion),
    FieldSpec::scalar(IfexField::MinorVersion),
    FieldSpec::list_of(IfexField::Namespaces, IfexKind::Namespace),
    FieldSpec::node(IfexField::Interface, IfexKind::Interface),
    FieldSpec::list_of(IfexField::Typedefs, IfexKind::Typedef),
    FieldSpec::list_of(IfexField::Structs, IfexKind::Struct),
    FieldSpec::list_of(IfexField::Enumerations, IfexKind::Enumeration),
];

const INTERFACE_SCHEMA: &[Spec] = &[
    FieldSpec::scalar(IfexField::Name).required(),
    FieldSpec::scalar(IfexField::Description),
    FieldSpec::scalar(IfexField::MajorVersion),
    FieldSpec::scalar(IfexField::MinorVersion),
    FieldSpec::list_of(IfexField::Typedefs, IfexKind::Typedef),
    FieldSpec::list_of(IfexField::Structs, IfexKind::Struct),
    FieldSpec::list_of(IfexField::Enumerations, IfexKind::Enumeration),
    FieldSpec::list_of(IfexField::Methods, IfexKind::Method),
    FieldSpec::list_of(IfexField::Events, IfexKind::Event),
    FieldSpec::list_of(IfexField::Properties, IfexKind::Property),
];

const METHOD_SCHEMA: &[Spec] = &[
    FieldSpec::scalar(IfexField::Name).required(),
    FieldSpec::scalar(IfexField::Description),
    FieldSpec::list_of(IfexField::Input, IfexKind::Argument),
    FieldSpec::list_of(IfexField::Output, IfexKind::Argument),
];

const EVENT_SCHEMA: &[Spec] = &[
    FieldSpec::scalar(IfexField::Name).required(),
    FieldSpec::scalar(IfexField::Description),
    FieldSpec::list_of(IfexField::Input, IfexKind::Argument),
];

// Argument, Property, Typedef and Member share one shape
const TYPED_SCHEMA: &[Spec] = &[
    FieldSpec::scalar(IfexField::Name).required(),
    FieldSpec::scalar(IfexField::Datatype).required(),
    FieldSpec::scalar(IfexField::Description),
];

const STRUCT_SCHEMA: &[Spec] = &[
    FieldSpec::scalar(IfexField::Name).required(),
    FieldSpec::scalar(IfexField::Description),
    FieldSpec::list_of(IfexField::Members, IfexKind::Member),
];

const ENUMERATION_SCHEMA: &[Spec] = &[
    FieldSpec::scalar(IfexField::Name).required(),
    FieldSpec::scalar(IfexField::Datatype).required(),
    FieldSpec::list_of(IfexField::Options, IfexKind::Option).required(),
    FieldSpec::scalar(IfexField::Description),
];

const OPTION_SCHEMA: &[Spec] = &[
    FieldSpec::scalar(IfexField::Name).required(),
    FieldSpec::scalar(IfexField::Value),
    FieldSpec::scalar(IfexField::Description),
];

const INCLUDE_SCHEMA: &[Spec] = &[
    FieldSpec::scalar(IfexField::File).required(),
    FieldSpec::scalar(IfexField::Description),
];

macro_rules! ifex_nodes {
    ($($variant:ident($ty:ident)),* $(,)?) => {
        /// Any IFEX node, as produced by the translator
        #[derive(Debug, Clone, PartialEq)]
        pub enum IfexNode {
            $($variant($ty)),*
        }

        impl IfexNode {
            fn node_kind(&self) -> IfexKind {
                match self {
                    $(IfexNode::$variant(_) => IfexKind::$variant),*
                }
            }
        }

        $(
            impl From<$ty> for IfexNode {
                fn from(node: $ty) -> Self {
                    IfexNode::$variant(node)
                }
            }

            impl TryFrom<IfexNode> for $ty {
                type Error = IfexNode;

                fn try_from(node: IfexNode) -> Result<Self, IfexNode> {
                    match node {
                        IfexNode::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

ifex_nodes! {
    Namespace(Namespace),
    Interface(Interface),
    Method(Method),
    Event(Event),
    Argument(Argument),
    Property(Property),
    Typedef(Typedef),
    Struct(Struct),
    Member(Member),
    Enumeration(Enumeration),
    Option(EnumOption),
    Include(Include),
}

/// Narrow a generic node to one concrete IFEX type
pub fn narrow<N: TryFrom<IfexNode>>(node: IfexNode) -> Option<N> {
    N::try_from(node).ok()
}

impl TargetNode for IfexNode {
    type Kind = IfexKind;
    type Field = IfexField;

    fn kind(&self) -> IfexKind {
        self.node_kind()
    }

    fn schema(kind: IfexKind) -> &'static [Spec] {
        match kind {
            IfexKind::Namespace => NAMESPACE_SCHEMA,
            IfexKind::Interface => INTERFACE_SCHEMA,
            IfexKind::Method => METHOD_SCHEMA,
            IfexKind::Event => EVENT_SCHEMA,
            IfexKind::Argument | IfexKind::Property | IfexKind::Typedef | IfexKind::Member => {
                TYPED_SCHEMA
            }
            IfexKind::Struct => STRUCT_SCHEMA,
            IfexKind::Enumeration => ENUMERATION_SCHEMA,
            IfexKind::Option => OPTION_SCHEMA,
            IfexKind::Include => INCLUDE_SCHEMA,
        }
    }

    fn construct(kind: IfexKind, mut attrs: Attributes<Self>) -> Result<Self, ConstructError> {
        use IfexField as F;

        let node = match kind {
            IfexKind::Namespace => Namespace {
                name: attrs.require_string(F::Name)?,
                description: attrs.take_string(F::Description)?,
                major_version: attrs.take_int(F::MajorVersion)?,
                minor_version: attrs.take_int(F::MinorVersion)?,
                namespaces: attrs.take_nodes(F::Namespaces, narrow)?,
                interface: attrs.take_node(F::Interface, narrow)?,
                typedefs: attrs.take_nodes(F::Typedefs, narrow)?,
                structs: attrs.take_nodes(F::Structs, narrow)?,
                enumerations: attrs.take_nodes(F::Enumerations, narrow)?,
            }
            .into(),
            IfexKind::Interface => Interface {
                name: attrs.require_string(F::Name)?,
                description: attrs.take_string(F::Description)?,
                major_version: attrs.take_int(F::MajorVersion)?,
                minor_version: attrs.take_int(F::MinorVersion)?,
                typedefs: attrs.take_nodes(F::Typedefs, narrow)?,
                structs: attrs.take_nodes(F::Structs, narrow)?,
                enumerations: attrs.take_nodes(F::Enumerations, narrow)?,
                methods: attrs.take_nodes(F::Methods, narrow)?,
                events: attrs.take_nodes(F::Events, narrow)?,
                properties: attrs.take_nodes(F::Properties, narrow)?,
            }
            .into(),
            IfexKind::Method => Method {
                name: attrs.require_string(F::Name)?,
                description: attrs.take_string(F::Description)?,
                input: attrs.take_nodes(F::Input, narrow)?,
                output: attrs.take_nodes(F::Output, narrow)?,
            }
            .into(),
            IfexKind::Event => Event {
                name: attrs.require_string(F::Name)?,
                description: attrs.take_string(F::Description)?,
                input: attrs.take_nodes(F::Input, narrow)?,
            }
            .into(),
            IfexKind::Argument => Argument {
                name: attrs.require_string(F::Name)?,
                datatype: attrs.require_string(F::Datatype)?,
                description: attrs.take_string(F::Description)?,
            }
            .into(),
            IfexKind::Property => Property {
                name: attrs.require_string(F::Name)?,
                datatype: attrs.require_string(F::Datatype)?,
                description: attrs.take_string(F::Description)?,
            }
            .into(),
            IfexKind::Typedef => Typedef {
                name: attrs.require_string(F::Name)?,
                datatype: attrs.require_string(F::Datatype)?,
                description: attrs.take_string(F::Description)?,
            }
            .into(),
            IfexKind::Struct => Struct {
                name: attrs.require_string(F::Name)?,
                description: attrs.take_string(F::Description)?,
                members: attrs.take_nodes(F::Members, narrow)?,
            }
            .into(),
            IfexKind::Member => Member {
                name: attrs.require_string(F::Name)?,
                datatype: attrs.require_string(F::Datatype)?,
                description: attrs.take_string(F::Description)?,
            }
            .into(),
            IfexKind::Enumeration => {
                let name = attrs.require_string(F::Name)?;
                let datatype = attrs.require_string(F::Datatype)?;
                let options: Vec<EnumOption> = attrs.require_nodes(F::Options, narrow)?;
                // IFEX has no empty enumerations
                if options.is_empty() {
                    return Err(ConstructError::Missing {
                        field: F::Options.name(),
                    });
                }
                Enumeration {
                    name,
                    datatype,
                    options,
                    description: attrs.take_string(F::Description)?,
                }
                .into()
            }
            IfexKind::Option => EnumOption {
                name: attrs.require_string(F::Name)?,
                value: attrs.take_int(F::Value)?,
                description: attrs.take_string(F::Description)?,
            }
            .into(),
            IfexKind::Include => Include {
                file: attrs.require_string(F::File)?,
                description: attrs.take_string(F::Description)?,
            }
            .into(),
        };
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use bridge_core::Value;

    use super::*;

    fn member(name: &str, datatype: &str) -> IfexNode {
        Member {
            name: name.to_string(),
            datatype: datatype.to_string(),
            description: None,
        }
        .into()
    }

    #[test]
    fn test_construct_struct_from_attributes() {
        let attrs = Attributes::new()
            .with(IfexField::Name, "Pair")
            .with(
                IfexField::Members,
                Value::nodes([member("a", "int32"), member("b", "string")]),
            );

        let node = IfexNode::construct(IfexKind::Struct, attrs).unwrap();
        let Some(s) = narrow::<Struct>(node) else {
            panic!("expected a struct");
        };
        assert_eq!(s.name, "Pair");
        assert_eq!(s.members.len(), 2);
        assert_eq!(s.members[1].datatype, "string");
    }

    #[test]
    fn test_missing_required_field() {
        let attrs = Attributes::new().with(IfexField::Name, "x");
        let err = IfexNode::construct(IfexKind::Member, attrs).unwrap_err();
        assert_eq!(err, ConstructError::Missing { field: "datatype" });
    }

    #[test]
    fn test_empty_enumeration_is_incomplete() {
        let attrs = Attributes::new()
            .with(IfexField::Name, "E")
            .with(IfexField::Datatype, "int32")
            .with(IfexField::Options, Value::<IfexNode>::List(Vec::new()));
        let err = IfexNode::construct(IfexKind::Enumeration, attrs).unwrap_err();
        assert_eq!(err, ConstructError::Missing { field: "options" });
    }

    #[test]
    fn test_wrong_node_kind_in_list() {
        let attrs = Attributes::new()
            .with(IfexField::Name, "S")
            .with(IfexField::Members, Value::nodes([IfexNode::from(Include::default())]));
        let err = IfexNode::construct(IfexKind::Struct, attrs).unwrap_err();
        assert!(matches!(err, ConstructError::WrongType { field: "members", .. }));
    }

    #[test]
    fn test_yaml_omits_empty_fields() {
        let ast = Ast {
            namespaces: vec![Namespace {
                name: "ns".to_string(),
                enumerations: vec![Enumeration {
                    name: "Color".to_string(),
                    datatype: "int32".to_string(),
                    options: vec![EnumOption {
                        name: "Red".to_string(),
                        value: Some(0),
                        description: None,
                    }],
                    description: None,
                }],
                ..Default::default()
            }],
            includes: Vec::new(),
        };

        let yaml = to_yaml(&ast).unwrap();
        assert!(yaml.contains("datatype: int32"));
        assert!(yaml.contains("value: 0"));
        assert!(!yaml.contains("includes"));
        assert!(!yaml.contains("description"));
        assert!(!yaml.contains("structs"));
    }
}
