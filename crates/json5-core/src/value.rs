//! The tagged value tree produced by parsing and consumed by stringifying.
//!
//! [`Value`] holds exactly one of seven alternatives. Numbers are split
//! into [`Value::Integer`] (64-bit signed) and [`Value::Real`] (double
//! precision); all narrowing and widening between them lives in the
//! conversion layer ([`crate::convert`]), not in extra tags.
//!
//! Objects are backed by a [`BTreeMap`], so entries are ordered
//! lexicographically by key. That ordering is an observable contract:
//! serialization order is always key-sorted, never insertion order.

use std::collections::BTreeMap;

use crate::error::{Json5Error, Result};

/// Object payload: string keys mapped to owned values, key-sorted.
pub type Object = BTreeMap<String, Value>;

static NULL: Value = Value::Null;

/// A JSON / JSON5 value.
///
/// A `Value` is born [`Null`](Value::Null) and owns all of its
/// descendants exclusively; clone is a deep copy, move transfers
/// ownership. Assigning a new value replaces the old payload entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Name of the active tag, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /*
     * Type predicates. Pure, total, constant-time queries on the tag.
     */

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// True for either numeric tag.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Real(_))
    }

    /// True only for [`Value::Integer`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /*
     * Strict casts. These return the payload when the tag matches and
     * fail with `TypeMismatch` otherwise; they never convert.
     */

    pub fn as_null(&self) -> Result<()> {
        match self {
            Value::Null => Ok(()),
            other => Err(mismatch("null", other)),
        }
    }

    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("boolean", other)),
        }
    }

    /// Either numeric tag, widened to `f64`.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Integer(i) => Ok(*i as f64),
            Value::Real(r) => Ok(*r),
            other => Err(mismatch("number", other)),
        }
    }

    /// The integer payload. Reals do not qualify; use the conversion
    /// layer for narrowing.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(mismatch("integer", other)),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", other)),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", other)),
        }
    }

    pub fn as_array(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(mismatch("array", other)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(mismatch("array", other)),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(o) => Ok(o),
            other => Err(mismatch("object", other)),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(o) => Ok(o),
            other => Err(mismatch("object", other)),
        }
    }

    /*
     * Truthiness
     */

    /// Null and false are falsy; a number is truthy when nonzero and not
    /// NaN; a string when non-empty; arrays and objects always.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::Real(r) => *r != 0.0 && !r.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /*
     * Read-only lookup. Never mutates: a miss (wrong tag, out-of-range
     * index, absent key) yields Null or the caller-supplied default.
     */

    /// Look up an array element by position or an object member by key.
    pub fn at<I: ValueIndex>(&self, index: I) -> &Value {
        index.lookup(self).unwrap_or(&NULL)
    }

    /// Like [`at`](Value::at), but a miss yields `default` instead of Null.
    pub fn at_or<'v, I: ValueIndex>(&'v self, index: I, default: &'v Value) -> &'v Value {
        index.lookup(self).unwrap_or(default)
    }

    /*
     * Mutable access and structural mutators.
     */

    /// Mutable object indexer: returns the member for `key`, inserting a
    /// Null-valued entry (at its key-sorted position) when absent, so a
    /// subsequent assignment writes through. Fails with `TypeMismatch`
    /// when the value is not an object.
    pub fn entry(&mut self, key: impl Into<String>) -> Result<&mut Value> {
        match self {
            Value::Object(map) => Ok(map.entry(key.into()).or_insert(Value::Null)),
            other => Err(mismatch("object", other)),
        }
    }

    /// Append an element to an array. Chainable:
    /// `v.push(1)?.push("abc")?`.
    pub fn push(&mut self, element: impl Into<Value>) -> Result<&mut Value> {
        match self {
            Value::Array(items) => items.push(element.into()),
            other => return Err(mismatch("array", other)),
        }
        Ok(self)
    }

    /// Remove and return the array element at `index`; `None` when the
    /// value is not an array or the index is out of range.
    pub fn remove_index(&mut self, index: usize) -> Option<Value> {
        match self {
            Value::Array(items) if index < items.len() => Some(items.remove(index)),
            _ => None,
        }
    }

    /// Remove and return the object member for `key`; `None` when the
    /// value is not an object or the key is absent.
    pub fn remove_key(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.remove(key),
            _ => None,
        }
    }

    /// Remove all elements of an array or members of an object. A no-op
    /// on other tags.
    pub fn clear(&mut self) {
        match self {
            Value::Array(items) => items.clear(),
            Value::Object(map) => map.clear(),
            _ => {}
        }
    }

    /// Container length: element count for arrays, member count for
    /// objects, zero for everything else.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the value is an object holding `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Value::Object(map) => map.contains_key(key),
            _ => false,
        }
    }
}

fn mismatch(expected: &'static str, found: &Value) -> Json5Error {
    Json5Error::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

/// Index argument accepted by [`Value::at`]: an array position (`usize`)
/// or an object key (`&str`).
pub trait ValueIndex {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value>;
}

impl ValueIndex for usize {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Array(items) => items.get(*self),
            _ => None,
        }
    }
}

impl ValueIndex for &str {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Object(map) => map.get(*self),
            _ => None,
        }
    }
}

impl ValueIndex for &String {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().lookup(value)
    }
}

/*
 * Construction
 */

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Integer(i64::from(i))
            }
        }
    )*};
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(r: f32) -> Self {
        Value::Real(f64::from(r))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Build an array value from any iterable of element-convertible items.
pub fn array<I>(elements: I) -> Value
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    elements.into_iter().collect()
}

/// Build an object value from key/value pairs. Duplicate keys keep the
/// last value.
pub fn object<I, K, V>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    entries.into_iter().collect()
}

/*
 * Comparisons against native types. These follow strict-extraction
 * semantics: a cross-tag comparison is false (or unordered), never an
 * error.
 */

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

macro_rules! eq_integer {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Value {
            fn eq(&self, other: &$t) -> bool {
                let other = i64::from(*other);
                match self {
                    Value::Integer(i) => *i == other,
                    Value::Real(r) => *r == other as f64,
                    _ => false,
                }
            }
        }

        impl PartialEq<Value> for $t {
            fn eq(&self, other: &Value) -> bool {
                other == self
            }
        }
    )*};
}

eq_integer!(i32, i64);

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Integer(i) => *i as f64 == *other,
            Value::Real(r) => r == other,
            _ => false,
        }
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(s) if s == other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(s) if s == other)
    }
}

impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        *self == other.as_str()
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

macro_rules! ord_number {
    ($($t:ty),*) => {$(
        impl PartialOrd<$t> for Value {
            fn partial_cmp(&self, other: &$t) -> Option<std::cmp::Ordering> {
                match self {
                    Value::Integer(i) => (*i as f64).partial_cmp(&(*other as f64)),
                    Value::Real(r) => r.partial_cmp(&(*other as f64)),
                    _ => None,
                }
            }
        }

        impl PartialOrd<Value> for $t {
            fn partial_cmp(&self, other: &Value) -> Option<std::cmp::Ordering> {
                other.partial_cmp(self).map(std::cmp::Ordering::reverse)
            }
        }
    )*};
}

ord_number!(i32, i64, f64);
