//! Bundled INFORMATION_SCHEMA query text
//!
//! Every query accepts two optional parameters: `@QualifiedTableName`
//! (`schema.table`) and `@SCHEMA_NAME`. A NULL parameter disables that
//! filter.

use once_cell::sync::Lazy;

use crate::error::ResourceError;
use crate::resources::{namespace_of, ResourceBundle, SqlQuery};

pub const SELECT_INFO_SCHEMA_TABLES: &str = "SelectInfoSchemaTables.sql";
pub const SELECT_INFO_SCHEMA_COLUMNS: &str = "SelectInfoSchemaColumns.sql";
pub const SELECT_INFO_SCHEMA_TABLE_CONSTRAINTS: &str = "SelectInfoSchemaTableConstraints.sql";

static BUNDLE: Lazy<ResourceBundle> = Lazy::new(|| {
    ResourceBundle::new(namespace_of(module_path!()))
        .with_static(SELECT_INFO_SCHEMA_TABLES, include_bytes!("sql/SelectInfoSchemaTables.sql"))
        .with_static(SELECT_INFO_SCHEMA_COLUMNS, include_bytes!("sql/SelectInfoSchemaColumns.sql"))
        .with_static(
            SELECT_INFO_SCHEMA_TABLE_CONSTRAINTS,
            include_bytes!("sql/SelectInfoSchemaTableConstraints.sql"),
        )
});

/// The bundle holding every query in this module.
pub fn bundle() -> &'static ResourceBundle {
    &BUNDLE
}

pub fn select_info_schema_tables() -> Result<SqlQuery, ResourceError> {
    BUNDLE.read_query(SELECT_INFO_SCHEMA_TABLES)
}

pub fn select_info_schema_columns() -> Result<SqlQuery, ResourceError> {
    BUNDLE.read_query(SELECT_INFO_SCHEMA_COLUMNS)
}

pub fn select_info_schema_table_constraints() -> Result<SqlQuery, ResourceError> {
    BUNDLE.read_query(SELECT_INFO_SCHEMA_TABLE_CONSTRAINTS)
}
