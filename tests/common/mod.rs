//! Common test utilities for sqlschema-names tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tempfile::TempDir;

use sqlschema_names::information_schema::{
    InfoSchemaColumn, InfoSchemaSnapshot, InfoSchemaTable, InfoSchemaTableConstraint,
};

/// Path to a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Deserialize a JSON fixture
pub fn load_fixture<T: DeserializeOwned>(name: &str) -> T {
    let text = fs::read_to_string(fixture_path(name)).expect("Failed to read fixture");
    serde_json::from_str(&text).expect("Failed to parse fixture")
}

pub fn fixture_tables() -> Vec<InfoSchemaTable> {
    load_fixture("info_schema_tables.json")
}

pub fn fixture_columns() -> Vec<InfoSchemaColumn> {
    load_fixture("info_schema_columns.json")
}

pub fn fixture_constraints() -> Vec<InfoSchemaTableConstraint> {
    load_fixture("info_schema_constraints.json")
}

/// Snapshot of the `Shop` fixture database
pub fn shop_snapshot() -> InfoSchemaSnapshot {
    InfoSchemaSnapshot::new(Some("localhost"), "Shop", fixture_tables(), fixture_columns())
}

/// Temporary directory holding SQL resource files
pub struct ResourceDir {
    /// Kept to prevent temp directory cleanup until ResourceDir is dropped
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl ResourceDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write `bytes` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, bytes: &[u8]) -> &Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create resource directory");
        }
        fs::write(&path, bytes).expect("Failed to write resource file");
        self
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}
