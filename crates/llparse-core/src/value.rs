//! Dynamically typed values produced by parser nodes.

use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Payload of a successful parse step.
///
/// Primitive matchers produce `Text`, sequences and repetitions produce
/// `List`, end-of-input produces `Null`. Everything else comes from mapping
/// functions. `Object` keeps field order; `Tagged` carries an optional payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
    Tagged {
        tag: String,
        data: Option<Box<Value>>,
    },
}

/// Shape of a [`Value`], used in mismatch errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    List,
    Object,
    Tagged,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Object => "object",
            ValueKind::Tagged => "tagged",
        };
        f.write_str(name)
    }
}

/// A value was read as a shape it does not have.
///
/// Always a bug in the grammar's mapping functions, never a property of the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("expected {expected} value, found {found}")]
    Mismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("expected tag `{expected}`, found `{found}`")]
    TagMismatch { expected: String, found: String },

    #[error("tag `{0}` has no payload")]
    MissingData(String),

    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("expected list of length {expected}, found length {found}")]
    Length { expected: usize, found: usize },

    #[error("{0}")]
    Custom(String),
}

impl ValueError {
    /// Free-form error for mapping functions.
    pub fn custom(message: impl Into<String>) -> Self {
        ValueError::Custom(message.into())
    }

    fn mismatch(expected: ValueKind, found: &Value) -> Self {
        ValueError::Mismatch {
            expected,
            found: found.kind(),
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
            Value::Tagged { .. } => ValueKind::Tagged,
        }
    }

    /// Tag with a payload.
    pub fn tagged(tag: impl Into<String>, data: Value) -> Self {
        Value::Tagged {
            tag: tag.into(),
            data: Some(Box::new(data)),
        }
    }

    /// Tag without a payload.
    pub fn tag(tag: impl Into<String>) -> Self {
        Value::Tagged {
            tag: tag.into(),
            data: None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_text(self) -> Result<String, ValueError> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(ValueError::mismatch(ValueKind::Text, &other)),
        }
    }

    pub fn into_int(self) -> Result<i64, ValueError> {
        match self {
            Value::Int(n) => Ok(n),
            other => Err(ValueError::mismatch(ValueKind::Int, &other)),
        }
    }

    pub fn into_list(self) -> Result<Vec<Value>, ValueError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(ValueError::mismatch(ValueKind::List, &other)),
        }
    }

    /// Take element `index` out of a list, dropping the rest.
    pub fn nth(self, index: usize) -> Result<Value, ValueError> {
        let items = self.into_list()?;
        let len = items.len();
        items
            .into_iter()
            .nth(index)
            .ok_or(ValueError::IndexOutOfRange { index, len })
    }

    /// Split a two-element list.
    pub fn into_pair(self) -> Result<(Value, Value), ValueError> {
        let items = self.into_list()?;
        let found = items.len();
        let mut iter = items.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(first), Some(second), None) => Ok((first, second)),
            _ => Err(ValueError::Length { expected: 2, found }),
        }
    }

    /// Check the tag and return the payload.
    pub fn into_tagged(self, expected: &str) -> Result<Option<Value>, ValueError> {
        match self {
            Value::Tagged { tag, data } if tag == expected => Ok(data.map(|d| *d)),
            Value::Tagged { tag, .. } => Err(ValueError::TagMismatch {
                expected: expected.to_owned(),
                found: tag,
            }),
            other => Err(ValueError::mismatch(ValueKind::Tagged, &other)),
        }
    }

    /// Remove a field from an object, returning its value.
    pub fn remove_field(&mut self, name: &str) -> Result<Value, ValueError> {
        let Value::Object(fields) = self else {
            return Err(ValueError::mismatch(ValueKind::Object, self));
        };
        let index = fields
            .iter()
            .position(|(key, _)| key == name)
            .ok_or_else(|| ValueError::MissingField(name.to_owned()))?;
        Ok(fields.remove(index).1)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl TryFrom<Value> for String {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.into_text()
    }
}

impl TryFrom<Value> for i64 {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.into_int()
    }
}

impl TryFrom<Value> for f64 {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            other => Err(ValueError::mismatch(ValueKind::Float, &other)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(ValueError::mismatch(ValueKind::Bool, &other)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.into_list()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Tagged { tag, data } => {
                let len = if data.is_some() { 2 } else { 1 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("$tag", tag)?;
                if let Some(d) = data {
                    map.serialize_entry("$data", d)?;
                }
                map.end()
            }
        }
    }
}

/// Compact single-line rendering, used by traces and test output.
///
/// Text is quoted with Rust escaping, lists use `[..]`, objects `{k: v}`,
/// tags `tag(data)`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Tagged { tag, data: None } => f.write_str(tag),
            Value::Tagged {
                tag,
                data: Some(data),
            } => write!(f, "{tag}({data})"),
        }
    }
}
