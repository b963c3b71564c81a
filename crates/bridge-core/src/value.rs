//! Attribute values flowing through a translation
//!
//! Both trees share one value shape. On the source side `N` is a cheap
//! handle into the source tree; on the target side it is an owned target
//! node.

use std::fmt;

use indexmap::IndexMap;

/// A single attribute value of a node in either tree
#[derive(Debug, Clone, PartialEq)]
pub enum Value<N> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A nested node, owned (target) or referenced (source)
    Node(N),
    /// Ordered sequence
    List(Vec<Value<N>>),
    /// Ordered-keyed collection, insertion order is significant
    Map(IndexMap<String, Value<N>>),
}

impl<N> Value<N> {
    /// True when the value carries nothing worth translating.
    ///
    /// Used to decide whether an attribute marked unsupported was actually
    /// used in the source tree.
    pub fn is_unset(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Str(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            Value::Int(_) | Value::Float(_) | Value::Node(_) => false,
        }
    }

    /// Copy a scalar into a value of another tree.
    ///
    /// Returns `None` for nodes and collections, which must go through the
    /// dispatcher instead.
    pub fn cast_scalar<M>(&self) -> Option<Value<M>> {
        match self {
            Value::Null => Some(Value::Null),
            Value::Bool(b) => Some(Value::Bool(*b)),
            Value::Int(i) => Some(Value::Int(*i)),
            Value::Float(f) => Some(Value::Float(*f)),
            Value::Str(s) => Some(Value::Str(s.clone())),
            Value::Node(_) | Value::List(_) | Value::Map(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&N> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Short name of the value shape, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Node(_) => "node",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Wrap a list of nodes
    pub fn nodes(items: impl IntoIterator<Item = N>) -> Self {
        Value::List(items.into_iter().map(Value::Node).collect())
    }

    /// Wrap a keyed collection of nodes, keeping the iteration order
    pub fn keyed<'k>(items: impl IntoIterator<Item = (&'k str, N)>) -> Self {
        Value::Map(
            items
                .into_iter()
                .map(|(name, node)| (name.to_string(), Value::Node(node)))
                .collect(),
        )
    }
}

impl<N> Default for Value<N> {
    fn default() -> Self {
        Value::Null
    }
}

impl<N> From<&str> for Value<N> {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl<N> From<String> for Value<N> {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<N> From<i64> for Value<N> {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl<N> From<bool> for Value<N> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<N, T: Into<Value<N>>> From<Option<T>> for Value<N> {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<N> fmt::Display for Value<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Node(_) => write!(f, "<node>"),
            Value::List(items) => write!(f, "[{} items]", items.len()),
            Value::Map(entries) => write!(f, "{{{} entries}}", entries.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type V = Value<u8>;

    #[test]
    fn test_unset_values() {
        assert!(V::Null.is_unset());
        assert!(V::Bool(false).is_unset());
        assert!(V::Str(String::new()).is_unset());
        assert!(V::List(Vec::new()).is_unset());
        assert!(V::Map(IndexMap::new()).is_unset());

        assert!(!V::Bool(true).is_unset());
        assert!(!V::Int(0).is_unset());
        assert!(!V::Node(1).is_unset());
        assert!(!V::from("x").is_unset());
    }

    #[test]
    fn test_cast_scalar_refuses_composites() {
        let s: Value<String> = V::from("abc").cast_scalar().unwrap();
        assert_eq!(s, Value::Str("abc".to_string()));

        assert!(V::Node(3).cast_scalar::<String>().is_none());
        assert!(V::nodes([1, 2]).cast_scalar::<String>().is_none());
    }

    #[test]
    fn test_keyed_preserves_order() {
        let v = V::keyed([("z", 1), ("a", 2), ("m", 3)]);
        let Value::Map(entries) = v else {
            panic!("expected map");
        };
        let keys: Vec<_> = entries.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(V::from(None::<i64>), V::Null);
        assert_eq!(V::from(Some(5i64)), V::Int(5));
    }
}
