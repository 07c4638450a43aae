//! INFORMATION_SCHEMA rows, query text and the loader seam
//!
//! Nothing here executes SQL. A loader runs the bundled queries from
//! [`queries`], deserializes the rows into the records below, assembles them
//! with [`build_table_tree`] and converts them into metadata entities.

mod loader;
mod mappings;
pub mod queries;
mod rows;

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::model::QualifiedTableName;

pub use loader::{InfoSchemaSnapshot, SchemaLoader};
pub use mappings::{info_schema_column_mappings, INFO_SCHEMA_COLUMNS_COLUMN_NAMES};
pub use rows::{
    InfoSchemaColumn, InfoSchemaColumnCollection, InfoSchemaColumnKey, InfoSchemaColumnRow, InfoSchemaTable,
    InfoSchemaTableCollection, InfoSchemaTableConstraint, InfoSchemaTableConstraintRow, InfoSchemaTableKey,
    InfoSchemaTableRow, TABLE_TYPE_USER_TABLE_TYPE,
};

/// Attaches each column to the table it names.
///
/// Tables keep their input order and duplicate tables are skipped. Columns
/// whose table is not among `tables` are dropped.
pub fn build_table_tree<T, C>(tables: T, columns: C) -> InfoSchemaTableCollection
where
    T: IntoIterator<Item = InfoSchemaTable>,
    C: IntoIterator<Item = InfoSchemaColumn>,
{
    let mut by_table: HashMap<QualifiedTableName, Vec<InfoSchemaColumn>> = HashMap::new();
    for column in columns {
        by_table
            .entry(column.qualified_table_name().clone())
            .or_default()
            .push(column);
    }

    let mut tree = InfoSchemaTableCollection::new();
    for mut table in tables {
        if let Some(columns) = by_table.remove(table.qualified_table_name()) {
            for column in columns {
                let key = column.qualified_column_name().clone();
                if !table.attach_column(column) {
                    trace!(column = %key, "Skipped duplicate column");
                }
            }
        }
        if !tree.try_add(table) {
            trace!("Skipped duplicate table");
        }
    }

    for (table, orphans) in &by_table {
        debug!(table = %table, columns = orphans.len(), "Dropped columns of unknown table");
    }
    tree
}
