//! Parametrize ID formatting.
//!
//! When the host generates identifiers for parametrized cases, each
//! parameter value is rendered through [`format_parametrize_id`] so the
//! resulting node ids stay stable and diffable across runs.

use std::any::Any;
use std::fmt;

/// A parameter value under test, as handed over by the host.
///
/// Maps preserve insertion order, which the canonical representation relies
/// on.
///
/// # Examples
///
/// ```rust
/// use testpulse::params::ParamValue;
/// let v = ParamValue::from(42);
/// assert_eq!(v.to_string(), "42");
/// let m = ParamValue::map([("a", 1), ("b", 2)]);
/// assert_eq!(m.to_string(), "{'a': 1, 'b': 2}");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParamValue {
    #[default]
    Nil,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<ParamValue>),
    /// Key/value pairs in insertion order.
    Map(Vec<(String, ParamValue)>),
}

impl ParamValue {
    /// Builds a map value from key/value pairs, preserving their order.
    pub fn map<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        ParamValue::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Nil => "Nil",
            ParamValue::Int(_) => "Int",
            ParamValue::Float(_) => "Float",
            ParamValue::Bool(_) => "Bool",
            ParamValue::Str(_) => "Str",
            ParamValue::List(_) => "List",
            ParamValue::Map(_) => "Map",
        }
    }
}

/// Canonical human-readable representation: integers in decimal, strings
/// single-quoted, lists bracketed, maps braced with quoted keys and
/// comma-space separators, all in insertion order.
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Nil => write!(f, "nil"),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Str(s) => write!(f, "'{}'", s),
            ParamValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ParamValue::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}': {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(n.into())
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Float(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(items: Vec<ParamValue>) -> Self {
        ParamValue::List(items)
    }
}

/// Formats the display id for one parametrized case.
///
/// The request context is accepted for host-API compatibility but never
/// consulted. Deterministic: the same `(value, name)` pair always yields the
/// same string.
///
/// # Examples
///
/// ```rust
/// use testpulse::params::format_parametrize_id;
/// assert_eq!(format_parametrize_id(None, 1, "param"), "|param = 1|");
/// ```
pub fn format_parametrize_id(
    _request: Option<&dyn Any>,
    value: impl Into<ParamValue>,
    name: &str,
) -> String {
    format!("|{} = {}|", name, value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_int_param() {
        assert_eq!(format_parametrize_id(None, 1, "param"), "|param = 1|");
    }

    #[test]
    fn formats_dict_param_in_insertion_order() {
        let value = ParamValue::map([("a", 1), ("b", 2)]);
        assert_eq!(
            format_parametrize_id(None, value, "param_dict"),
            "|param_dict = {'a': 1, 'b': 2}|"
        );
    }

    #[test]
    fn insertion_order_is_not_sorted_order() {
        let value = ParamValue::map([("z", 1), ("a", 2)]);
        assert_eq!(value.to_string(), "{'z': 1, 'a': 2}");
    }

    #[test]
    fn formats_nested_values() {
        let value = ParamValue::map([
            ("name", ParamValue::from("eth0")),
            ("mtus", ParamValue::List(vec![1500.into(), 9000.into()])),
        ]);
        assert_eq!(
            format_parametrize_id(None, value, "link"),
            "|link = {'name': 'eth0', 'mtus': [1500, 9000]}|"
        );
    }

    #[test]
    fn same_input_same_id() {
        let a = format_parametrize_id(None, 7, "retry");
        let b = format_parametrize_id(None, 7, "retry");
        assert_eq!(a, b);
    }
}
