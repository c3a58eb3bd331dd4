use std::collections::BTreeMap;

use lbgen_model::{Collection, Entity};
use lbgen_query::GroupMap;

/// Dynamic value exchanged between the template engine and the registry.
///
/// Template arguments and results are untyped at the engine boundary; this
/// enum is the closed set of shapes that can cross it. Shape errors (a string
/// where a collection is expected, a nil collection) are reported by the
/// registry functions as typed failures, never as panics.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent result, e.g. a lookup that found nothing.
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    StrList(Vec<String>),
    /// A single entity, e.g. the result of `first`.
    Entity(Entity),
    /// A homogeneous entity collection.
    Entities(Collection),
    /// A grouping result, label key to entities.
    Groups(GroupMap),
    /// String-keyed bag built by `dict`.
    Dict(BTreeMap<String, Value>),
}

impl Value {
    /// Short shape name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::StrList(_) => "string list",
            Value::Entity(_) => "entity",
            Value::Entities(_) => "entity collection",
            Value::Groups(_) => "group map",
            Value::Dict(_) => "dict",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            Value::StrList(xs) => Some(xs),
            _ => None,
        }
    }

    pub fn as_entities(&self) -> Option<&Collection> {
        match self {
            Value::Entities(coll) => Some(coll),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<Vec<String>> for Value {
    fn from(xs: Vec<String>) -> Self {
        Value::StrList(xs)
    }
}

impl From<Entity> for Value {
    fn from(e: Entity) -> Self {
        Value::Entity(e)
    }
}

impl From<Collection> for Value {
    fn from(coll: Collection) -> Self {
        Value::Entities(coll)
    }
}

impl From<GroupMap> for Value {
    fn from(groups: GroupMap) -> Self {
        Value::Groups(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use lbgen_model::{Collection, Labels, Service};

    #[test]
    fn accessors_match_shape() {
        let v: Value = "hello".into();
        assert_eq!(v.as_str(), Some("hello"));
        assert!(v.as_entities().is_none());

        let coll = Collection::Services(vec![Service::new("web", Labels::new())]);
        let v: Value = coll.clone().into();
        assert_eq!(v.as_entities(), Some(&coll));
        assert!(!v.is_null());
    }

    #[test]
    fn type_names_are_stable() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Str(String::new()).type_name(), "string");
        assert_eq!(Value::StrList(Vec::new()).type_name(), "string list");
    }
}
