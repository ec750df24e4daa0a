use std::{fmt, ops::Deref, time::Duration};

use log::kv::{self, Key, Source, VisitSource};

/// A typed value carried by a [`Field`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    I64(i64),
    U64(u64),
    Bool(bool),
    Duration(Duration),
    /// Rendered message of an error.
    Error(String),
    Strings(Vec<String>),
}

impl Value {
    /// Borrow this value as a `log` key/value so it can be handed to any `log` backend.
    pub fn to_kv(&self) -> kv::Value<'_> {
        match self {
            Value::Str(s) | Value::Error(s) => kv::Value::from(s.as_str()),
            Value::I64(v) => kv::Value::from(*v),
            Value::U64(v) => kv::Value::from(*v),
            Value::Bool(v) => kv::Value::from(*v),
            Value::Duration(d) => kv::Value::from_debug(d),
            Value::Strings(v) => kv::Value::from_debug(v),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) | Value::Error(s) => f.write_str(s),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Duration(d) => write!(f, "{d:?}"),
            Value::Strings(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::U64(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::U64(value.into())
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::U64(value.into())
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::U64(value as u64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Value::Duration(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::Strings(value)
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Value::Strings(value.into_iter().map(String::from).collect())
    }
}

/// A named value destined for a structured log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: &'static str,
    pub value: Value,
}

impl Field {
    pub fn new(key: &'static str, value: impl Into<Value>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// A field holding the rendered message of `err`.
    pub fn error(key: &'static str, err: &dyn std::error::Error) -> Self {
        Self {
            key,
            value: Value::Error(err.to_string()),
        }
    }
}

impl Source for Field {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        visitor.visit_pair(Key::from_str(self.key), self.value.to_kv())
    }
}

/// An ordered, detached snapshot of fields produced by
/// [`FieldBuilder::build`](crate::FieldBuilder::build).
///
/// Keys are unique and appear in the order they were first set.
/// `Fields` is a [`log::kv::Source`], so it can be attached to a
/// [`log::Record`] as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(pub(crate) Vec<Field>);

impl Fields {
    /// An empty field sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value stored under `key`.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|f| f.key)
    }

    pub fn into_vec(self) -> Vec<Field> {
        self.0
    }
}

impl Deref for Fields {
    type Target = [Field];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Fields {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Source for Fields {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        for field in &self.0 {
            visitor.visit_pair(Key::from_str(field.key), field.value.to_kv())?;
        }
        Ok(())
    }
}
