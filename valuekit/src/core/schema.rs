//! Record schemas: the ordered, named, typed field list shared by records.

use std::sync::Arc;

use crate::core::error::RecordError;
use crate::core::field::{FieldKind, FieldValue};

/// One declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    kind: FieldKind,
    mutable: bool,
    default: Option<FieldValue>,
}

impl FieldDef {
    /// Immutable field with no default.
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            mutable: false,
            default: None,
        }
    }

    /// Allow in-place updates through [`ValueRecord::set`].
    ///
    /// [`ValueRecord::set`]: crate::core::record::ValueRecord::set
    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    /// Value used by the builder when the field is not set explicitly.
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    pub fn default_value(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }
}

/// Named, ordered field list.
///
/// Schemas are immutable once built and shared between records via `Arc`.
/// Two schemas are equal when their names and field declarations are equal.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldDef>,
}

impl RecordSchema {
    /// Build a schema, rejecting duplicate names and mistyped defaults.
    pub fn new(name: &str, fields: Vec<FieldDef>) -> Result<Arc<Self>, RecordError> {
        for (index, field) in fields.iter().enumerate() {
            if fields[..index].iter().any(|prev| prev.name == field.name) {
                return Err(RecordError::DuplicateField {
                    record: name.to_string(),
                    field: field.name.clone(),
                });
            }
            if let Some(default) = &field.default {
                if !field.kind.accepts(default) {
                    return Err(RecordError::TypeMismatch {
                        record: name.to_string(),
                        field: field.name.clone(),
                        expected: field.kind.clone(),
                        found: default.kind(),
                    });
                }
            }
        }

        Ok(Arc::new(Self {
            name: name.to_string(),
            fields,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declaration index of `field`, if declared.
    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|def| def.name == field)
    }

    pub(crate) fn require_index(&self, field: &str) -> Result<usize, RecordError> {
        self.index_of(field)
            .ok_or_else(|| RecordError::UnknownField {
                record: self.name.clone(),
                field: field.to_string(),
            })
    }

    /// Check that `value` fits the field declared at `index`.
    pub(crate) fn check_value(&self, index: usize, value: &FieldValue) -> Result<(), RecordError> {
        let def = &self.fields[index];
        if def.kind.accepts(value) {
            return Ok(());
        }
        Err(RecordError::TypeMismatch {
            record: self.name.clone(),
            field: def.name.clone(),
            expected: def.kind.clone(),
            found: value.kind(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_rejects_duplicate_field_names() {
        let err = RecordSchema::new(
            "Point",
            vec![
                FieldDef::new("x", FieldKind::Int),
                FieldDef::new("x", FieldKind::Int),
            ],
        )
        .expect_err("duplicate");
        assert!(matches!(err, RecordError::DuplicateField { ref field, .. } if field == "x"));
    }

    #[test]
    fn schema_rejects_default_of_wrong_kind() {
        let err = RecordSchema::new(
            "Flag",
            vec![FieldDef::new("on", FieldKind::Bool).with_default(1)],
        )
        .expect_err("mistyped default");
        assert_eq!(
            err,
            RecordError::TypeMismatch {
                record: "Flag".to_string(),
                field: "on".to_string(),
                expected: FieldKind::Bool,
                found: FieldKind::Int,
            }
        );
    }

    #[test]
    fn index_of_follows_declaration_order() {
        let schema = RecordSchema::new(
            "Point",
            vec![
                FieldDef::new("x", FieldKind::Int),
                FieldDef::new("y", FieldKind::Int),
            ],
        )
        .expect("schema");
        assert_eq!(schema.index_of("y"), Some(1));
        assert_eq!(schema.index_of("z"), None);
        assert_eq!(schema.len(), 2);
    }
}
