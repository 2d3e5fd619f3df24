//! Field kinds and field values stored in a [`ValueRecord`].
//!
//! Scalars (`Bool`, `Int`, `Float`) have value semantics. `Text`, `List`, and
//! `Record` are reference-semantics: cloning a `FieldValue` clones the `Arc`,
//! so two records built from the same binding share one underlying entity.
//!
//! [`ValueRecord`]: crate::core::record::ValueRecord

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::core::record::ValueRecord;
use crate::core::schema::RecordSchema;

/// Declared type of a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Text,
    List,
    /// A nested record, optionally restricted to one schema.
    ///
    /// A restricted field accepts only records whose schema equals the
    /// declared one (name and field declarations), not just its name.
    Record(Option<Arc<RecordSchema>>),
}

impl FieldKind {
    /// Nested record of exactly `schema`.
    pub fn record(schema: &Arc<RecordSchema>) -> Self {
        FieldKind::Record(Some(Arc::clone(schema)))
    }

    /// True if `value` may be stored in a field of this kind.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (FieldKind::Bool, FieldValue::Bool(_))
            | (FieldKind::Int, FieldValue::Int(_))
            | (FieldKind::Float, FieldValue::Float(_))
            | (FieldKind::Text, FieldValue::Text(_))
            | (FieldKind::List, FieldValue::List(_))
            | (FieldKind::Record(None), FieldValue::Record(_)) => true,
            (FieldKind::Record(Some(schema)), FieldValue::Record(record)) => {
                Arc::ptr_eq(schema, record.schema()) || **schema == **record.schema()
            }
            _ => false,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Int => f.write_str("int"),
            FieldKind::Float => f.write_str("float"),
            FieldKind::Text => f.write_str("text"),
            FieldKind::List => f.write_str("list"),
            FieldKind::Record(None) => f.write_str("record"),
            FieldKind::Record(Some(schema)) => write!(f, "record<{}>", schema.name()),
        }
    }
}

/// A single field value.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Arc<str>),
    List(Arc<[FieldValue]>),
    Record(Arc<ValueRecord>),
}

impl FieldValue {
    /// Kind of this value. Records report their own schema.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::List(_) => FieldKind::List,
            FieldValue::Record(record) => FieldKind::record(record.schema()),
        }
    }

    /// Identity comparison for reference-semantics values.
    ///
    /// Returns true only when both values point at the same allocation.
    /// Scalars carry no identity and always return false.
    pub fn same_entity(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => Arc::ptr_eq(a, b),
            (FieldValue::List(a), FieldValue::List(b)) => Arc::ptr_eq(a, b),
            (FieldValue::Record(a), FieldValue::Record(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(&**value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(values) => Some(&**values),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Arc<ValueRecord>> {
        match self {
            FieldValue::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// Bit pattern used for float equality and hashing.
///
/// All NaNs collapse to one pattern so `Eq` stays reflexive; `0.0` and `-0.0`
/// stay distinct so equal values always share a hash.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => {
                canonical_bits(*a) == canonical_bits(*b)
            }
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            (FieldValue::List(a), FieldValue::List(b)) => a == b,
            (FieldValue::Record(a), FieldValue::Record(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl Eq for FieldValue {}

impl Hash for FieldValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            FieldValue::Bool(value) => value.hash(state),
            FieldValue::Int(value) => value.hash(state),
            FieldValue::Float(value) => canonical_bits(*value).hash(state),
            FieldValue::Text(value) => value.hash(state),
            FieldValue::List(values) => values.hash(state),
            FieldValue::Record(record) => record.hash(state),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Bool(value) => serializer.serialize_bool(*value),
            FieldValue::Int(value) => serializer.serialize_i64(*value),
            FieldValue::Float(value) => serializer.serialize_f64(*value),
            FieldValue::Text(value) => serializer.serialize_str(value),
            FieldValue::List(values) => (**values).serialize(serializer),
            FieldValue::Record(record) => (**record).serialize(serializer),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(Arc::from(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(Arc::from(value))
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(values: Vec<FieldValue>) -> Self {
        FieldValue::List(Arc::from(values))
    }
}

impl From<ValueRecord> for FieldValue {
    fn from(record: ValueRecord) -> Self {
        FieldValue::Record(Arc::new(record))
    }
}

impl From<Arc<ValueRecord>> for FieldValue {
    fn from(record: Arc<ValueRecord>) -> Self {
        FieldValue::Record(record)
    }
}
