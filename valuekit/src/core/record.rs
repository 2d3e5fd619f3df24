//! Immutable structural records.
//!
//! A [`ValueRecord`] pairs a shared [`RecordSchema`] with one [`FieldValue`]
//! per declared field. Equality and hashing are structural: two records are
//! equal when their schemas match and every field compares equal, no matter
//! where either record lives.
//!
//! Copies are shallow. [`ValueRecord::copy_with`] and `Clone` duplicate the
//! field bindings, not the entities behind them, so a nested `Record`, `Text`,
//! or `List` value is shared between the source and the copy (observable via
//! [`FieldValue::same_entity`]).

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::error::RecordError;
use crate::core::field::FieldValue;
use crate::core::schema::RecordSchema;

#[derive(Debug, Clone)]
pub struct ValueRecord {
    schema: Arc<RecordSchema>,
    values: Vec<FieldValue>,
}

impl ValueRecord {
    /// Construct from positional values in declaration order.
    ///
    /// Values are stored verbatim. Fails if the count differs from the schema
    /// or any value does not match its declared kind.
    pub fn new(schema: &Arc<RecordSchema>, values: Vec<FieldValue>) -> Result<Self, RecordError> {
        if values.len() != schema.len() {
            return Err(RecordError::ArityMismatch {
                record: schema.name().to_string(),
                expected: schema.len(),
                found: values.len(),
            });
        }
        for (index, value) in values.iter().enumerate() {
            schema.check_value(index, value)?;
        }
        Ok(Self {
            schema: Arc::clone(schema),
            values,
        })
    }

    /// Named construction that falls back to schema defaults.
    pub fn builder(schema: &Arc<RecordSchema>) -> RecordBuilder {
        RecordBuilder {
            schema: Arc::clone(schema),
            slots: vec![None; schema.len()],
            error: None,
        }
    }

    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    /// Field values in declaration order.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.schema.fields().iter().map(|def| def.name())
    }

    pub fn get(&self, field: &str) -> Result<&FieldValue, RecordError> {
        let index = self.schema.require_index(field)?;
        Ok(&self.values[index])
    }

    /// Positional view of the current field values.
    ///
    /// Each call re-reads the record; reference-semantics values are shared
    /// with the record, not duplicated.
    pub fn destructure(&self) -> Vec<FieldValue> {
        self.values.clone()
    }

    /// New record with the named fields replaced.
    ///
    /// Fields not named in `overrides` keep the source's bindings. The source
    /// is left untouched. Later overrides of the same field win.
    pub fn copy_with<I, K, V>(&self, overrides: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        let mut values = self.values.clone();
        for (field, value) in overrides {
            let index = self.schema.require_index(field.as_ref())?;
            let value = value.into();
            self.schema.check_value(index, &value)?;
            values[index] = value;
        }
        Ok(Self {
            schema: Arc::clone(&self.schema),
            values,
        })
    }

    /// Replace a field declared mutable, returning the previous value.
    pub fn set(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<FieldValue, RecordError> {
        let index = self.schema.require_index(field)?;
        if !self.schema.fields()[index].is_mutable() {
            return Err(RecordError::ImmutableField {
                record: self.schema.name().to_string(),
                field: field.to_string(),
            });
        }
        let value = value.into();
        self.schema.check_value(index, &value)?;
        Ok(std::mem::replace(&mut self.values[index], value))
    }

    /// Deterministic hash of the schema name and every field, in order.
    pub fn hash_value(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for ValueRecord {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.schema, &other.schema) || self.schema == other.schema)
            && self.values == other.values
    }
}

impl Eq for ValueRecord {}

impl Hash for ValueRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.schema.name().hash(state);
        for value in &self.values {
            value.hash(state);
        }
    }
}

impl Serialize for ValueRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.field_names().zip(&self.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Builder returned by [`ValueRecord::builder`].
///
/// The first error encountered is kept and reported by [`RecordBuilder::build`].
#[derive(Debug)]
pub struct RecordBuilder {
    schema: Arc<RecordSchema>,
    slots: Vec<Option<FieldValue>>,
    error: Option<RecordError>,
}

impl RecordBuilder {
    pub fn set(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let value = value.into();
        let checked = self
            .schema
            .require_index(field)
            .and_then(|index| self.schema.check_value(index, &value).map(|()| index));
        match checked {
            Ok(index) => self.slots[index] = Some(value),
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn build(self) -> Result<ValueRecord, RecordError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut values = Vec::with_capacity(self.slots.len());
        for (def, slot) in self.schema.fields().iter().zip(self.slots) {
            match slot.or_else(|| def.default_value().cloned()) {
                Some(value) => values.push(value),
                None => {
                    return Err(RecordError::MissingField {
                        record: self.schema.name().to_string(),
                        field: def.name().to_string(),
                    });
                }
            }
        }
        Ok(ValueRecord {
            schema: self.schema,
            values,
        })
    }
}
