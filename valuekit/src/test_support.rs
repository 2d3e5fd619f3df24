//! Test-only helpers for building records and config files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::field::{FieldKind, FieldValue};
use crate::core::record::ValueRecord;
use crate::core::schema::{FieldDef, RecordSchema};
use crate::io::config::{DEFAULT_CONFIG_PATH, KitConfig, write_config};

/// Schema with one field of every scalar and reference kind.
///
/// `(flag: bool, count: int, ratio: float, label: text, tags: list, note: record)`
pub fn sample_schema() -> Arc<RecordSchema> {
    RecordSchema::new(
        "Sample",
        vec![
            FieldDef::new("flag", FieldKind::Bool),
            FieldDef::new("count", FieldKind::Int),
            FieldDef::new("ratio", FieldKind::Float),
            FieldDef::new("label", FieldKind::Text),
            FieldDef::new("tags", FieldKind::List),
            FieldDef::new("note", FieldKind::record(&note_schema())),
        ],
    )
    .expect("sample schema")
}

/// Schema of the nested `note` field in [`sample_schema`].
pub fn note_schema() -> Arc<RecordSchema> {
    RecordSchema::new("Note", vec![FieldDef::new("text", FieldKind::Text)]).expect("note schema")
}

pub fn note(text: &str) -> ValueRecord {
    ValueRecord::new(&note_schema(), vec![text.into()]).expect("note")
}

/// Field values matching [`sample_schema`], in declaration order.
pub fn sample_values(flag: bool, count: i64, ratio: f64, label: &str) -> Vec<FieldValue> {
    vec![
        flag.into(),
        count.into(),
        ratio.into(),
        label.into(),
        vec![FieldValue::from(label), FieldValue::from(count)].into(),
        note(label).into(),
    ]
}

pub fn sample(flag: bool, count: i64, ratio: f64, label: &str) -> ValueRecord {
    ValueRecord::new(&sample_schema(), sample_values(flag, count, ratio, label)).expect("sample")
}

/// Temporary working directory holding a `valuekit.toml`.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(DEFAULT_CONFIG_PATH)
    }

    pub fn write_config(&self, cfg: &KitConfig) -> Result<()> {
        write_config(&self.config_path(), cfg)
    }
}
