//! Table and column metadata entities
//!
//! `*Info` types are what a loader builds from catalog rows; `*Constant` types
//! describe a known schema declared in code. Both expose the same read-only
//! surface through [`TableMetadata`] and [`ColumnMetadata`].

use std::fmt;

use super::attributes::{ColumnAttributes, ColumnFacts, TableAttributes, TableFacts};
use super::column_name::QualifiedTableColumnName;
use super::names::QualifiedTableName;
use crate::collections::{KeyExtractor, KeyedCollection};
use crate::error::{NameError, SchemaMetaError};
use crate::resources::SqlQuery;

/// Read-only view of a column.
pub trait ColumnMetadata {
    fn qualified_column_name(&self) -> &QualifiedTableColumnName;

    fn attributes(&self) -> ColumnAttributes;

    /// Full DDL type (`nvarchar(50)`, `decimal(18,2)`) when known.
    fn data_type_definition(&self) -> Option<&str>;

    fn table_name(&self) -> &QualifiedTableName {
        self.qualified_column_name().table_name()
    }

    fn column_name(&self) -> &str {
        self.qualified_column_name().column_name()
    }

    fn quoted_column_name(&self) -> String {
        self.qualified_column_name().quoted_column_name()
    }

    fn is_nullable(&self) -> bool {
        self.attributes().contains(ColumnAttributes::NULLABLE)
    }

    fn is_updatable(&self) -> bool {
        self.attributes().contains(ColumnAttributes::UPDATABLE)
    }

    fn is_readonly(&self) -> bool {
        !self.is_updatable()
    }

    fn is_primary_key(&self) -> bool {
        self.attributes().contains(ColumnAttributes::PRIMARY_KEY)
    }

    fn is_unique_key(&self) -> bool {
        self.attributes().contains(ColumnAttributes::UNIQUE_KEY)
    }

    fn is_auto_number(&self) -> bool {
        self.attributes().contains(ColumnAttributes::AUTO_NUMBER)
    }

    fn is_foreign_key(&self) -> bool {
        self.attributes().contains(ColumnAttributes::FOREIGN_KEY)
    }

    fn is_indexed(&self) -> bool {
        self.attributes().contains(ColumnAttributes::INDEXED)
    }

    fn is_computed(&self) -> bool {
        self.attributes().contains(ColumnAttributes::COMPUTED)
    }

    fn is_row_guid(&self) -> bool {
        self.attributes().contains(ColumnAttributes::ROW_GUID)
    }

    fn is_generated_always(&self) -> bool {
        self.attributes().contains(ColumnAttributes::GENERATED_ALWAYS)
    }

    fn is_generated_always_at_row_start(&self) -> bool {
        self.attributes().contains(ColumnAttributes::GENERATED_ALWAYS_AT_ROW_START)
    }

    fn is_generated_always_at_row_end(&self) -> bool {
        self.attributes().contains(ColumnAttributes::GENERATED_ALWAYS_AT_ROW_END)
    }

    fn is_filestream(&self) -> bool {
        self.attributes().contains(ColumnAttributes::FILESTREAM)
    }

    fn is_xml_document(&self) -> bool {
        self.attributes().contains(ColumnAttributes::XML_DOCUMENT)
    }

    fn is_column_set(&self) -> bool {
        self.attributes().contains(ColumnAttributes::COLUMN_SET)
    }

    fn is_timestamp(&self) -> bool {
        self.attributes().contains(ColumnAttributes::TIMESTAMP)
    }
}

/// Read-only view of a table and its columns.
pub trait TableMetadata {
    type Column: ColumnMetadata;

    fn table_name(&self) -> &QualifiedTableName;

    fn attributes(&self) -> TableAttributes;

    /// Columns in ordinal order.
    fn columns(&self) -> &[Self::Column];

    fn is_history_table_for_system_versioned_table(&self) -> bool {
        self.attributes()
            .contains(TableAttributes::HISTORY_TABLE_FOR_SYSTEM_VERSIONED_TABLE)
    }

    fn is_system_versioned_temporal_table(&self) -> bool {
        self.attributes()
            .contains(TableAttributes::SYSTEM_VERSIONED_TEMPORAL_TABLE)
    }

    fn is_user_table(&self) -> bool {
        self.attributes().contains(TableAttributes::USER_TABLE)
    }

    fn is_user_table_type(&self) -> bool {
        self.attributes().contains(TableAttributes::USER_TABLE_TYPE)
    }

    fn is_auto_numbered(&self) -> bool {
        self.attributes().contains(TableAttributes::AUTO_NUMBERED)
    }

    fn is_composite_keyed(&self) -> bool {
        self.attributes().contains(TableAttributes::COMPOSITE_KEYED)
    }

    /// `INSERT INTO schema.table ([c1],[c2]) VALUES(@c1,@c2)` over the
    /// updatable columns.
    fn insert_sql(&self) -> SqlQuery {
        let updatable: Vec<&Self::Column> =
            self.columns().iter().filter(|c| c.is_updatable()).collect();
        let insert_list = updatable
            .iter()
            .map(|c| c.quoted_column_name())
            .collect::<Vec<_>>()
            .join(",");
        let value_list = updatable
            .iter()
            .map(|c| format!("@{}", c.column_name()))
            .collect::<Vec<_>>()
            .join(",");
        SqlQuery::new(format!(
            "INSERT INTO {} ({}) VALUES({})",
            self.table_name(),
            insert_list,
            value_list
        ))
    }
}

macro_rules! column_entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            name: QualifiedTableColumnName,
            attributes: ColumnAttributes,
            data_type_definition: Option<String>,
        }

        impl $name {
            pub fn new(
                table_name: QualifiedTableName,
                column_name: &str,
                attributes: ColumnAttributes,
            ) -> Result<Self, NameError> {
                Ok(Self {
                    name: QualifiedTableColumnName::new(table_name, column_name)?,
                    attributes,
                    data_type_definition: None,
                })
            }

            /// A column whose only known attribute is whether it is updatable.
            pub fn with_updatable(
                table_name: QualifiedTableName,
                column_name: &str,
                is_updatable: bool,
            ) -> Result<Self, NameError> {
                let attributes = ColumnAttributes::NONE.set(ColumnAttributes::UPDATABLE, is_updatable);
                Self::new(table_name, column_name, attributes)
            }

            pub fn from_facts(
                table_name: QualifiedTableName,
                column_name: &str,
                facts: &ColumnFacts,
            ) -> Result<Self, NameError> {
                Self::new(table_name, column_name, ColumnAttributes::from_facts(facts))
            }

            pub fn with_data_type(mut self, data_type_definition: impl Into<String>) -> Self {
                self.data_type_definition = Some(data_type_definition.into());
                self
            }
        }

        impl ColumnMetadata for $name {
            fn qualified_column_name(&self) -> &QualifiedTableColumnName {
                &self.name
            }

            fn attributes(&self) -> ColumnAttributes {
                self.attributes
            }

            fn data_type_definition(&self) -> Option<&str> {
                self.data_type_definition.as_deref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name.column_name())
            }
        }
    };
}

column_entity! {
    /// A column loaded from database metadata.
    ColumnInfo
}

column_entity! {
    /// A column of a table declared in code.
    ColumnConstant
}

/// A table loaded from database metadata, with its columns keyed by name.
#[derive(Debug, Clone)]
pub struct TableInfo {
    table_name: QualifiedTableName,
    attributes: TableAttributes,
    columns: ColumnCollection<ColumnInfo>,
}

impl TableInfo {
    pub fn new(table_name: QualifiedTableName, attributes: TableAttributes) -> Self {
        Self {
            table_name,
            attributes,
            columns: ColumnCollection::new(),
        }
    }

    pub fn from_facts(table_name: QualifiedTableName, facts: &TableFacts) -> Self {
        Self::new(table_name, TableAttributes::from_facts(facts))
    }

    /// Parses `qualified` and attaches `(column, attributes)` pairs.
    ///
    /// Duplicate column names are rejected.
    pub fn with_columns<'a, I>(
        qualified: &str,
        attributes: TableAttributes,
        columns: I,
    ) -> Result<Self, SchemaMetaError>
    where
        I: IntoIterator<Item = (&'a str, ColumnAttributes)>,
    {
        let mut table = Self::new(QualifiedTableName::parse(qualified)?, attributes);
        for (name, column_attributes) in columns {
            let column = ColumnInfo::new(table.table_name.clone(), name, column_attributes)?;
            table.add_column(column)?;
        }
        Ok(table)
    }

    /// Like [`TableInfo::with_columns`] with a DDL type per column.
    pub fn with_typed_columns<'a, I>(
        qualified: &str,
        attributes: TableAttributes,
        columns: I,
    ) -> Result<Self, SchemaMetaError>
    where
        I: IntoIterator<Item = (&'a str, ColumnAttributes, &'a str)>,
    {
        let mut table = Self::new(QualifiedTableName::parse(qualified)?, attributes);
        for (name, column_attributes, data_type) in columns {
            let column = ColumnInfo::new(table.table_name.clone(), name, column_attributes)?
                .with_data_type(data_type);
            table.add_column(column)?;
        }
        Ok(table)
    }

    /// Like [`TableInfo::with_columns`] with only an updatable flag per column.
    pub fn with_updatable_columns<'a, I>(
        qualified: &str,
        attributes: TableAttributes,
        columns: I,
    ) -> Result<Self, SchemaMetaError>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut table = Self::new(QualifiedTableName::parse(qualified)?, attributes);
        for (name, is_updatable) in columns {
            let column = ColumnInfo::with_updatable(table.table_name.clone(), name, is_updatable)?;
            table.add_column(column)?;
        }
        Ok(table)
    }

    /// Appends a column; it must belong to this table and not already exist.
    pub fn add_column(&mut self, column: ColumnInfo) -> Result<(), SchemaMetaError> {
        if column.table_name() != &self.table_name {
            return Err(NameError::InvalidIdentifier {
                input: column.qualified_column_name().to_string(),
                message: format!("column does not belong to table {}", self.table_name),
            }
            .into());
        }
        self.columns.add(column)?;
        Ok(())
    }

    pub fn column_collection(&self) -> &ColumnCollection<ColumnInfo> {
        &self.columns
    }

    pub fn column(&self, column_name: &str) -> Option<&ColumnInfo> {
        let key = QualifiedTableColumnName::new(self.table_name.clone(), column_name).ok()?;
        self.columns.get(&key)
    }
}

impl TableMetadata for TableInfo {
    type Column = ColumnInfo;

    fn table_name(&self) -> &QualifiedTableName {
        &self.table_name
    }

    fn attributes(&self) -> TableAttributes {
        self.attributes
    }

    fn columns(&self) -> &[ColumnInfo] {
        self.columns.as_slice()
    }
}

impl fmt::Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table_name, f)
    }
}

impl From<&TableInfo> for QualifiedTableName {
    fn from(table: &TableInfo) -> Self {
        table.table_name.clone()
    }
}

/// A table declared in code.
///
/// Attributes are given as raw bits so declarations can be generated from a
/// live database and pasted in as literals.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConstant {
    table_name: QualifiedTableName,
    attributes: TableAttributes,
    columns: Vec<ColumnConstant>,
}

impl TableConstant {
    pub fn new<'a, I>(qualified: &str, attributes: u32, columns: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let table_name = QualifiedTableName::parse(qualified)?;
        let columns = columns
            .into_iter()
            .map(|(name, bits)| {
                ColumnConstant::new(table_name.clone(), name, ColumnAttributes::from_bits_truncate(bits))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            table_name,
            attributes: TableAttributes::from_bits_truncate(attributes),
            columns,
        })
    }

    pub fn with_typed_columns<'a, I>(
        qualified: &str,
        attributes: u32,
        columns: I,
    ) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = (&'a str, u32, &'a str)>,
    {
        let table_name = QualifiedTableName::parse(qualified)?;
        let columns = columns
            .into_iter()
            .map(|(name, bits, data_type)| {
                ColumnConstant::new(table_name.clone(), name, ColumnAttributes::from_bits_truncate(bits))
                    .map(|c| c.with_data_type(data_type))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            table_name,
            attributes: TableAttributes::from_bits_truncate(attributes),
            columns,
        })
    }

    pub fn with_updatable_columns<'a, I>(
        qualified: &str,
        attributes: u32,
        columns: I,
    ) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let table_name = QualifiedTableName::parse(qualified)?;
        let columns = columns
            .into_iter()
            .map(|(name, is_updatable)| ColumnConstant::with_updatable(table_name.clone(), name, is_updatable))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            table_name,
            attributes: TableAttributes::from_bits_truncate(attributes),
            columns,
        })
    }
}

impl TableMetadata for TableConstant {
    type Column = ColumnConstant;

    fn table_name(&self) -> &QualifiedTableName {
        &self.table_name
    }

    fn attributes(&self) -> TableAttributes {
        self.attributes
    }

    fn columns(&self) -> &[ColumnConstant] {
        &self.columns
    }
}

impl fmt::Display for TableConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table_name, f)
    }
}

impl From<&TableConstant> for QualifiedTableName {
    fn from(table: &TableConstant) -> Self {
        table.table_name.clone()
    }
}

/// Keys tables by their qualified name.
#[derive(Debug)]
pub enum TableNameKey {}

impl<T: TableMetadata> KeyExtractor<T> for TableNameKey {
    type Key = QualifiedTableName;

    fn key_for(item: &T) -> QualifiedTableName {
        item.table_name().clone()
    }
}

/// Keys columns by their table-qualified name.
#[derive(Debug)]
pub enum ColumnNameKey {}

impl<T: ColumnMetadata> KeyExtractor<T> for ColumnNameKey {
    type Key = QualifiedTableColumnName;

    fn key_for(item: &T) -> QualifiedTableColumnName {
        item.qualified_column_name().clone()
    }
}

pub type TableCollection<T = TableInfo> = KeyedCollection<T, TableNameKey>;
pub type ColumnCollection<T = ColumnInfo> = KeyedCollection<T, ColumnNameKey>;
