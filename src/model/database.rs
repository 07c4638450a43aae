//! Database and schema containers

use std::fmt;

use tracing::trace;

use super::elements::{TableCollection, TableInfo, TableMetadata};
use super::names::QualifiedTableName;
use crate::collections::{KeyExtractor, KeyedCollection};
use crate::error::CollectionError;
use crate::util::CiString;

/// A schema and the tables filed under it.
#[derive(Debug, Clone)]
pub struct SchemaInfo {
    schema_name: String,
    tables: TableCollection,
}

impl SchemaInfo {
    pub fn new(schema_name: impl Into<String>) -> Self {
        Self {
            schema_name: schema_name.into(),
            tables: TableCollection::new(),
        }
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn tables(&self) -> &TableCollection {
        &self.tables
    }

    pub fn table(&self, name: &QualifiedTableName) -> Option<&TableInfo> {
        self.tables.get(name)
    }
}

impl fmt::Display for SchemaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.schema_name)
    }
}

/// A database: its tables in load order, grouped by schema.
///
/// Connection details are deliberately absent; loaders own those.
#[derive(Debug, Clone, Default)]
pub struct DatabaseInfo {
    server_name: Option<String>,
    database_name: String,
    tables: TableCollection,
    schemas: SchemaCollection,
}

impl DatabaseInfo {
    pub fn new(server_name: Option<&str>, database_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.map(str::to_string),
            database_name: database_name.into(),
            tables: TableCollection::new(),
            schemas: SchemaCollection::new(),
        }
    }

    pub fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref()
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn tables(&self) -> &TableCollection {
        &self.tables
    }

    pub fn schemas(&self) -> &SchemaCollection {
        &self.schemas
    }

    pub fn table(&self, name: &QualifiedTableName) -> Option<&TableInfo> {
        self.tables.get(name)
    }

    pub fn schema(&self, schema_name: &str) -> Option<&SchemaInfo> {
        self.schemas.get(&CiString::from(schema_name))
    }

    /// Adds `table` and files a copy under its schema, creating the schema
    /// on first use. A table already present is rejected and nothing changes.
    pub fn add_table(&mut self, table: TableInfo) -> Result<(), CollectionError> {
        let schema_key = CiString::from(table.table_name().schema_name());
        let filed = table.clone();
        self.tables.add(table)?;

        match self.schemas.get_mut(&schema_key) {
            Some(schema) => schema.tables.add(filed)?,
            None => {
                trace!(schema = %schema_key, database = %self.database_name, "Created schema");
                let mut schema = SchemaInfo::new(schema_key.into_string());
                schema.tables.add(filed)?;
                self.schemas.add(schema)?;
            }
        }
        Ok(())
    }

    /// Adds every table, stopping at the first duplicate.
    pub fn add_tables<I: IntoIterator<Item = TableInfo>>(&mut self, tables: I) -> Result<(), CollectionError> {
        for table in tables {
            self.add_table(table)?;
        }
        Ok(())
    }
}

impl fmt::Display for DatabaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.server_name {
            Some(server) => write!(f, "{}.{}", server, self.database_name),
            None => f.write_str(&self.database_name),
        }
    }
}

/// Keys schemas by name, case-insensitively.
#[derive(Debug)]
pub enum SchemaNameKey {}

impl KeyExtractor<SchemaInfo> for SchemaNameKey {
    type Key = CiString;

    fn key_for(item: &SchemaInfo) -> CiString {
        CiString::from(item.schema_name())
    }
}

/// Keys databases by name, case-insensitively.
#[derive(Debug)]
pub enum DatabaseNameKey {}

impl KeyExtractor<DatabaseInfo> for DatabaseNameKey {
    type Key = CiString;

    fn key_for(item: &DatabaseInfo) -> CiString {
        CiString::from(item.database_name())
    }
}

pub type SchemaCollection = KeyedCollection<SchemaInfo, SchemaNameKey>;
pub type DatabaseCollection = KeyedCollection<DatabaseInfo, DatabaseNameKey>;
