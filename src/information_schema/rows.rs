//! INFORMATION_SCHEMA row records
//!
//! Each record wraps the raw row as returned by the bundled queries and adds
//! the qualified names derived from it. The names are computed while
//! deserializing, so a row with a blank table or column name is rejected up
//! front instead of failing later as a lookup key.

use serde::{Deserialize, Serialize};

use crate::collections::{KeyExtractor, KeyedCollection};
use crate::error::{NameError, SchemaMetaError};
use crate::model::{
    ColumnAttributes, ColumnFacts, ColumnInfo, GeneratedAlwaysType, QualifiedTableColumnName,
    QualifiedTableName, SchemaObjectName, TableAttributes, TableFacts, TableInfo, TableTemporalType,
};
use crate::util::eq_ci;

/// `TABLE_TYPE` value reported for user-defined table types.
pub const TABLE_TYPE_USER_TABLE_TYPE: &str = "TABLE TYPE";

fn qualified_table_name(schema: Option<&str>, table: &str) -> Result<QualifiedTableName, NameError> {
    QualifiedTableName::new(schema, table)
}

// ============================================================================
// Tables
// ============================================================================

/// Raw row of `SelectInfoSchemaTables.sql`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct InfoSchemaTableRow {
    pub table_catalog: Option<String>,
    pub table_schema: Option<String>,
    pub table_name: String,
    pub table_type: Option<String>,
    pub table_temporal_type: TableTemporalType,
    pub is_updatable: bool,
    pub is_user_table: bool,
    pub is_temporal_table_type: bool,
    pub is_history_table_for_system_versioned_table: bool,
    pub is_system_versioned_temporal_table: bool,
}

/// A table row plus its derived name and, once assembled, its columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "InfoSchemaTableRow", into = "InfoSchemaTableRow")]
pub struct InfoSchemaTable {
    row: InfoSchemaTableRow,
    qualified_table_name: QualifiedTableName,
    columns: InfoSchemaColumnCollection,
}

impl InfoSchemaTable {
    pub fn new(row: InfoSchemaTableRow) -> Result<Self, NameError> {
        let qualified_table_name = qualified_table_name(row.table_schema.as_deref(), &row.table_name)?;
        Ok(Self {
            row,
            qualified_table_name,
            columns: InfoSchemaColumnCollection::new(),
        })
    }

    pub fn row(&self) -> &InfoSchemaTableRow {
        &self.row
    }

    pub fn qualified_table_name(&self) -> &QualifiedTableName {
        &self.qualified_table_name
    }

    pub fn columns(&self) -> &InfoSchemaColumnCollection {
        &self.columns
    }

    /// Attaches `column` unless a column with the same name is already present.
    pub(crate) fn attach_column(&mut self, column: InfoSchemaColumn) -> bool {
        self.columns.try_add(column)
    }

    pub fn is_user_table_type(&self) -> bool {
        self.row
            .table_type
            .as_deref()
            .is_some_and(|t| eq_ci(t, TABLE_TYPE_USER_TABLE_TYPE))
    }

    /// Facts derived from the row and its attached columns.
    pub fn table_facts(&self) -> TableFacts {
        let key_columns = self.columns.iter().filter(|c| c.row.is_primary_key).count();
        TableFacts {
            is_history_table_for_system_versioned_table: self.row.is_history_table_for_system_versioned_table
                || self.row.table_temporal_type == TableTemporalType::HistoryTableForSystemVersionedTable,
            is_system_versioned_temporal_table: self.row.is_system_versioned_temporal_table
                || self.row.table_temporal_type == TableTemporalType::SystemVersionedTemporalTable,
            is_user_table: self.row.is_user_table,
            is_user_table_type: self.is_user_table_type(),
            is_auto_numbered: self.columns.iter().any(|c| c.row.is_identity),
            is_composite_keyed: key_columns > 1,
        }
    }

    pub fn table_attributes(&self) -> TableAttributes {
        TableAttributes::from_facts(&self.table_facts())
    }

    /// Converts into a [`TableInfo`] with columns in ordinal order.
    pub fn to_table_info(&self) -> Result<TableInfo, SchemaMetaError> {
        let mut table = TableInfo::new(self.qualified_table_name.clone(), self.table_attributes());
        let mut columns: Vec<&InfoSchemaColumn> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.row.ordinal_position);
        for column in columns {
            table.add_column(column.to_column_info()?)?;
        }
        Ok(table)
    }
}

impl TryFrom<InfoSchemaTableRow> for InfoSchemaTable {
    type Error = NameError;

    fn try_from(row: InfoSchemaTableRow) -> Result<Self, Self::Error> {
        Self::new(row)
    }
}

impl From<InfoSchemaTable> for InfoSchemaTableRow {
    fn from(table: InfoSchemaTable) -> Self {
        table.row
    }
}

// ============================================================================
// Columns
// ============================================================================

/// Raw row of `SelectInfoSchemaColumns.sql`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct InfoSchemaColumnRow {
    pub table_catalog: Option<String>,
    pub table_schema: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub ordinal_position: i32,
    pub column_default: Option<String>,
    pub data_type: Option<String>,
    /// Full DDL type, e.g. `nvarchar(50)` or `decimal(18,2)`.
    pub column_declaration: Option<String>,
    pub is_updatable: bool,
    pub is_computed: bool,
    pub is_nullable: bool,
    pub is_row_guid_col: bool,
    pub is_identity: bool,
    pub is_timestamp: bool,
    pub is_column_set: bool,
    pub is_filestream: bool,
    pub is_xml_document: bool,
    pub is_primary_key: bool,
    pub is_unique_key: bool,
    pub is_foreign_key: bool,
    pub character_maximum_length: Option<i32>,
    pub character_octet_length: Option<i32>,
    pub numeric_precision: Option<u8>,
    pub numeric_precision_radix: Option<i16>,
    pub numeric_scale: Option<i32>,
    pub datetime_precision: Option<i16>,
    pub collation_name: Option<String>,
    pub domain_schema: Option<String>,
    pub domain_name: Option<String>,
    pub computed_column_definition: Option<String>,
    pub is_generated_always: bool,
    pub generated_always_type: GeneratedAlwaysType,
}

/// A column row plus its derived table-qualified name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "InfoSchemaColumnRow", into = "InfoSchemaColumnRow")]
pub struct InfoSchemaColumn {
    row: InfoSchemaColumnRow,
    qualified_column_name: QualifiedTableColumnName,
}

impl InfoSchemaColumn {
    pub fn new(row: InfoSchemaColumnRow) -> Result<Self, NameError> {
        let table = qualified_table_name(row.table_schema.as_deref(), &row.table_name)?;
        let qualified_column_name = QualifiedTableColumnName::new(table, &row.column_name)?;
        Ok(Self {
            row,
            qualified_column_name,
        })
    }

    pub fn row(&self) -> &InfoSchemaColumnRow {
        &self.row
    }

    pub fn qualified_table_name(&self) -> &QualifiedTableName {
        self.qualified_column_name.table_name()
    }

    pub fn qualified_column_name(&self) -> &QualifiedTableColumnName {
        &self.qualified_column_name
    }

    pub fn column_facts(&self) -> ColumnFacts {
        let row = &self.row;
        ColumnFacts {
            is_nullable: row.is_nullable,
            is_updatable: row.is_updatable,
            is_primary_key: row.is_primary_key,
            is_unique_key: row.is_unique_key,
            is_auto_number: row.is_identity,
            is_foreign_key: row.is_foreign_key,
            is_indexed: row.is_primary_key || row.is_unique_key,
            is_computed: row.is_computed,
            is_row_guid: row.is_row_guid_col,
            is_generated_always: row.is_generated_always
                || row.generated_always_type != GeneratedAlwaysType::NotGeneratedAlways,
            is_generated_always_at_row_start: row.generated_always_type
                == GeneratedAlwaysType::GeneratedAlwaysAtRowStart,
            is_generated_always_at_row_end: row.generated_always_type == GeneratedAlwaysType::GeneratedAlwaysAtRowEnd,
            is_filestream: row.is_filestream,
            is_xml_document: row.is_xml_document,
            is_column_set: row.is_column_set,
            is_timestamp: row.is_timestamp,
        }
    }

    pub fn column_attributes(&self) -> ColumnAttributes {
        ColumnAttributes::from_facts(&self.column_facts())
    }

    /// The DDL type: the declaration when present, else the bare data type.
    pub fn data_type_definition(&self) -> Option<&str> {
        self.row
            .column_declaration
            .as_deref()
            .or(self.row.data_type.as_deref())
    }

    pub fn to_column_info(&self) -> Result<ColumnInfo, NameError> {
        let column = ColumnInfo::new(
            self.qualified_table_name().clone(),
            self.qualified_column_name.column_name(),
            self.column_attributes(),
        )?;
        Ok(match self.data_type_definition() {
            Some(data_type) => column.with_data_type(data_type),
            None => column,
        })
    }
}

impl TryFrom<InfoSchemaColumnRow> for InfoSchemaColumn {
    type Error = NameError;

    fn try_from(row: InfoSchemaColumnRow) -> Result<Self, Self::Error> {
        Self::new(row)
    }
}

impl From<InfoSchemaColumn> for InfoSchemaColumnRow {
    fn from(column: InfoSchemaColumn) -> Self {
        column.row
    }
}

impl From<&InfoSchemaColumn> for ColumnFacts {
    fn from(column: &InfoSchemaColumn) -> Self {
        column.column_facts()
    }
}

// ============================================================================
// Constraints
// ============================================================================

/// Raw row of `SelectInfoSchemaTableConstraints.sql`: one row per
/// constraint column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct InfoSchemaTableConstraintRow {
    pub constraint_catalog: Option<String>,
    pub constraint_schema: Option<String>,
    pub constraint_name: String,
    pub table_catalog: Option<String>,
    pub table_schema: Option<String>,
    pub table_name: String,
    pub constraint_type: Option<String>,
    pub column_name: Option<String>,
    pub ordinal_position: Option<i32>,
}

/// A constraint row with its table and schema-qualified constraint names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "InfoSchemaTableConstraintRow", into = "InfoSchemaTableConstraintRow")]
pub struct InfoSchemaTableConstraint {
    row: InfoSchemaTableConstraintRow,
    qualified_table_name: QualifiedTableName,
    qualified_constraint_name: SchemaObjectName,
}

impl InfoSchemaTableConstraint {
    pub fn new(row: InfoSchemaTableConstraintRow) -> Result<Self, NameError> {
        let qualified_table_name = qualified_table_name(row.table_schema.as_deref(), &row.table_name)?;
        let constraint_schema = row.constraint_schema.as_deref().or(row.table_schema.as_deref());
        let qualified_constraint_name = SchemaObjectName::new(constraint_schema, &row.constraint_name)?;
        Ok(Self {
            row,
            qualified_table_name,
            qualified_constraint_name,
        })
    }

    pub fn row(&self) -> &InfoSchemaTableConstraintRow {
        &self.row
    }

    pub fn qualified_table_name(&self) -> &QualifiedTableName {
        &self.qualified_table_name
    }

    pub fn qualified_constraint_name(&self) -> &SchemaObjectName {
        &self.qualified_constraint_name
    }

    /// Table-qualified name of the constrained column, when the row has one.
    pub fn qualified_column_name(&self) -> Option<QualifiedTableColumnName> {
        let column = self.row.column_name.as_deref()?;
        QualifiedTableColumnName::new(self.qualified_table_name.clone(), column).ok()
    }

    pub fn is_constraint_type(&self, constraint_type: &str) -> bool {
        self.row
            .constraint_type
            .as_deref()
            .is_some_and(|t| eq_ci(t, constraint_type))
    }
}

impl TryFrom<InfoSchemaTableConstraintRow> for InfoSchemaTableConstraint {
    type Error = NameError;

    fn try_from(row: InfoSchemaTableConstraintRow) -> Result<Self, Self::Error> {
        Self::new(row)
    }
}

impl From<InfoSchemaTableConstraint> for InfoSchemaTableConstraintRow {
    fn from(constraint: InfoSchemaTableConstraint) -> Self {
        constraint.row
    }
}

// ============================================================================
// Collections
// ============================================================================

/// Keys INFORMATION_SCHEMA table rows by their qualified name.
#[derive(Debug)]
pub enum InfoSchemaTableKey {}

impl KeyExtractor<InfoSchemaTable> for InfoSchemaTableKey {
    type Key = QualifiedTableName;

    fn key_for(item: &InfoSchemaTable) -> QualifiedTableName {
        item.qualified_table_name().clone()
    }
}

/// Keys INFORMATION_SCHEMA column rows by their table-qualified name.
#[derive(Debug)]
pub enum InfoSchemaColumnKey {}

impl KeyExtractor<InfoSchemaColumn> for InfoSchemaColumnKey {
    type Key = QualifiedTableColumnName;

    fn key_for(item: &InfoSchemaColumn) -> QualifiedTableColumnName {
        item.qualified_column_name().clone()
    }
}

pub type InfoSchemaTableCollection = KeyedCollection<InfoSchemaTable, InfoSchemaTableKey>;
pub type InfoSchemaColumnCollection = KeyedCollection<InfoSchemaColumn, InfoSchemaColumnKey>;
