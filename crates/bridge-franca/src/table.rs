/*!
# Franca to IFEX Mapping Table

One type rule per Franca node kind. Most attributes line up by name (or
through the global renames) and need no entry at all; the entries below
cover what differs: type names, version splitting, enumerator numbering,
include file names, and the Franca features IFEX cannot express.
*/

use bridge_core::{MappingTable, Rule, Run, TranslateError, Value};

use crate::franca::{FrancaField, FrancaKind, FrancaRef, TypeRef};
use crate::ifex::{IfexField, IfexKind, IfexNode};

/// Traversal state of one Franca translation
#[derive(Debug, Clone)]
pub struct FrancaState {
    /// Last value handed out to an enumerator without an explicit value
    pub enumerator: i64,
}

impl Default for FrancaState {
    fn default() -> Self {
        Self { enumerator: -1 }
    }
}

pub type FrancaTable<'a> = MappingTable<FrancaRef<'a>, IfexNode, FrancaState>;

type FrancaRun<'r, 'a> = Run<'r, FrancaRef<'a>, IfexNode, FrancaState>;
type Translated = Result<Value<IfexNode>, TranslateError>;

/// IFEX name of a Franca primitive type
fn primitive(name: &str) -> Option<&'static str> {
    let ifex = match name {
        "Boolean" => "boolean",
        "ByteBuffer" => "uint8[]",
        "Double" => "double",
        "Float" => "float",
        "Int8" => "int8",
        "Int16" => "int16",
        "Int32" => "int32",
        "Int64" => "int64",
        "UInt8" => "uint8",
        "UInt16" => "uint16",
        "UInt32" => "uint32",
        "UInt64" => "uint64",
        "String" => "string",
        _ => return None,
    };
    Some(ifex)
}

/// Translate a Franca type into an IFEX datatype string.
///
/// Named references (structs, enumerations, typedefs) keep their name.
pub fn translate_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => primitive(name)
            .map(str::to_string)
            .unwrap_or_else(|| name.clone()),
        TypeRef::Array { array } => format!("{}[]", translate_type(array)),
    }
}

/// `common.fidl` includes become `common.ifex`
pub fn include_file(fidl: &str) -> String {
    match fidl.strip_suffix(".fidl") {
        Some(stem) => format!("{stem}.ifex"),
        None => fidl.to_string(),
    }
}

fn expect_type<'a>(value: &Value<FrancaRef<'a>>) -> Result<&'a TypeRef, TranslateError> {
    match value {
        Value::Node(FrancaRef::Type(ty)) => Ok(ty),
        other => Err(TranslateError::transform(format!(
            "expected a type reference, got {}",
            other.type_name()
        ))),
    }
}

fn datatype<'a>(_run: &mut FrancaRun<'_, 'a>, value: Value<FrancaRef<'a>>) -> Translated {
    Ok(Value::Str(translate_type(expect_type(&value)?)))
}

/// A named array definition is a typedef of the element type's array
fn array_datatype<'a>(_run: &mut FrancaRun<'_, 'a>, value: Value<FrancaRef<'a>>) -> Translated {
    Ok(Value::Str(format!("{}[]", translate_type(expect_type(&value)?))))
}

fn major_version<'a>(_run: &mut FrancaRun<'_, 'a>, value: Value<FrancaRef<'a>>) -> Translated {
    match value {
        Value::Node(FrancaRef::Version(v)) => Ok(Value::Int(v.major)),
        Value::Null => Ok(Value::Null),
        other => Err(TranslateError::transform(format!(
            "expected a version, got {}",
            other.type_name()
        ))),
    }
}

fn minor_version<'a>(_run: &mut FrancaRun<'_, 'a>, value: Value<FrancaRef<'a>>) -> Translated {
    match value {
        Value::Node(FrancaRef::Version(v)) => Ok(Value::Int(v.minor)),
        Value::Null => Ok(Value::Null),
        other => Err(TranslateError::transform(format!(
            "expected a version, got {}",
            other.type_name()
        ))),
    }
}

/// Enumerators without a value are numbered from zero within their
/// enumeration; explicit values are kept and do not move the counter.
fn enumerator_value<'a>(run: &mut FrancaRun<'_, 'a>, value: Value<FrancaRef<'a>>) -> Translated {
    match value {
        Value::Null => {
            run.state.enumerator += 1;
            Ok(Value::Int(run.state.enumerator))
        }
        Value::Int(i) => Ok(Value::Int(i)),
        other => Err(TranslateError::transform(format!(
            "enumerator value must be an integer, got {}",
            other.type_name()
        ))),
    }
}

fn include_name<'a>(_run: &mut FrancaRun<'_, 'a>, value: Value<FrancaRef<'a>>) -> Translated {
    match value.as_str() {
        Some(file) => Ok(Value::Str(include_file(file))),
        None => Err(TranslateError::transform("import without a file name")),
    }
}

/// Anonymous packages get the placeholder namespace `_`
fn namespace_name<'a>(_run: &mut FrancaRun<'_, 'a>, value: Value<FrancaRef<'a>>) -> Translated {
    match value.as_str() {
        Some(name) if !name.is_empty() => Ok(Value::Str(name.to_string())),
        _ => Ok(Value::from("_")),
    }
}

/// Build the Franca to IFEX table.
///
/// Interfaces and imports of a package are placed by the driver, see
/// [`crate::franca_to_ifex`].
pub fn franca_table<'a>() -> FrancaTable<'a> {
    use FrancaField as F;
    use IfexField as I;

    MappingTable::new()
        .rename(F::Attributes, I::Properties)
        .rename(F::Broadcasts, I::Events)
        .rename(F::Fields, I::Members)
        .rename(F::Enumerators, I::Options)
        .rename(F::InArgs, I::Input)
        .rename(F::OutArgs, I::Output)
        .ignore(F::Comments)
        .map(
            FrancaKind::Package,
            IfexKind::Namespace,
            vec![
                Rule::attr_with(F::Name, I::Name, namespace_name),
                Rule::attr(F::Typecollections, I::Namespaces),
                Rule::ignore(F::Interfaces),
                Rule::ignore(F::Imports),
            ],
        )
        .map(
            FrancaKind::TypeCollection,
            IfexKind::Namespace,
            vec![
                Rule::attr_with(F::Version, I::MajorVersion, major_version),
                Rule::attr_with(F::Version, I::MinorVersion, minor_version),
                Rule::attr(F::Typedefs, I::Typedefs),
                Rule::attr(F::Arrays, I::Typedefs),
                Rule::unsupported(F::Maps),
                Rule::unsupported(F::Unions),
                Rule::unsupported(F::Constants),
            ],
        )
        .map(
            FrancaKind::Interface,
            IfexKind::Interface,
            vec![
                Rule::attr_with(F::Version, I::MajorVersion, major_version),
                Rule::attr_with(F::Version, I::MinorVersion, minor_version),
                Rule::unsupported(F::Extends),
                // managing interfaces are groupings, the driver leaves them out
                Rule::ignore(F::Manages),
                Rule::attr(F::Typedefs, I::Typedefs),
                Rule::attr(F::Arrays, I::Typedefs),
                Rule::unsupported(F::Maps),
                Rule::unsupported(F::Unions),
                Rule::unsupported(F::Constants),
            ],
        )
        .map(
            FrancaKind::Method,
            IfexKind::Method,
            vec![
                Rule::unsupported(F::FireAndForget),
                Rule::unsupported(F::Errors),
            ],
        )
        .map(
            FrancaKind::Broadcast,
            IfexKind::Event,
            vec![
                Rule::unsupported(F::Selective),
                Rule::attr(F::OutArgs, I::Input),
            ],
        )
        .map(
            FrancaKind::Argument,
            IfexKind::Argument,
            vec![Rule::attr_with(F::Type, I::Datatype, datatype)],
        )
        .map(
            FrancaKind::Attribute,
            IfexKind::Property,
            vec![
                Rule::attr_with(F::Type, I::Datatype, datatype),
                Rule::ignore(F::Readonly),
                Rule::unsupported(F::NoSubscriptions),
            ],
        )
        .map(
            FrancaKind::Typedef,
            IfexKind::Typedef,
            vec![Rule::attr_with(F::Type, I::Datatype, datatype)],
        )
        .map(
            FrancaKind::Array,
            IfexKind::Typedef,
            vec![Rule::attr_with(F::Type, I::Datatype, array_datatype)],
        )
        .map(
            FrancaKind::Struct,
            IfexKind::Struct,
            vec![
                Rule::unsupported(F::Extends),
                Rule::unsupported(F::Polymorphic),
            ],
        )
        .map(
            FrancaKind::StructField,
            IfexKind::Member,
            vec![Rule::attr_with(F::Type, I::Datatype, datatype)],
        )
        .map(
            FrancaKind::Enumeration,
            IfexKind::Enumeration,
            vec![
                Rule::prepare(|state: &mut FrancaState| state.enumerator = -1),
                Rule::constant("int32", I::Datatype),
                Rule::unsupported(F::Extends),
            ],
        )
        .map(
            FrancaKind::Enumerator,
            IfexKind::Option,
            vec![Rule::attr_with(F::Value, I::Value, enumerator_value)],
        )
        .map(
            FrancaKind::Import,
            IfexKind::Include,
            vec![
                Rule::attr_with(F::File, I::File, include_name),
                Rule::ignore(F::Namespace),
            ],
        )
}
