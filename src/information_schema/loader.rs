//! The loader seam

use tracing::debug;

use super::build_table_tree;
use super::rows::{InfoSchemaColumn, InfoSchemaTable, InfoSchemaTableCollection};
use crate::error::SchemaMetaError;
use crate::model::{ColumnCollection, DatabaseInfo, QualifiedTableName, TableCollection, TableInfo};
use crate::util::eq_ci;

/// Produces metadata entities for a database.
///
/// Implementations own connections and query execution; this crate only
/// supplies the query text and the row-to-entity conversion.
pub trait SchemaLoader {
    type Error;

    fn load_database_info(&self, database_name: &str) -> Result<DatabaseInfo, Self::Error>;

    /// Like [`SchemaLoader::load_database_info`] restricted to `tables`.
    fn load_database_info_with_tables(
        &self,
        database_name: &str,
        tables: &[QualifiedTableName],
    ) -> Result<DatabaseInfo, Self::Error>;

    fn load_table_info(&self, table_name: &QualifiedTableName) -> Result<TableInfo, Self::Error>;

    fn load_tables(&self, database_name: &str) -> Result<TableCollection, Self::Error>;

    fn load_table_columns(&self, table_name: &QualifiedTableName) -> Result<ColumnCollection, Self::Error> {
        Ok(self.load_table_info(table_name)?.column_collection().clone())
    }
}

/// A [`SchemaLoader`] over INFORMATION_SCHEMA rows that were already fetched.
#[derive(Debug, Clone)]
pub struct InfoSchemaSnapshot {
    server_name: Option<String>,
    database_name: String,
    tables: InfoSchemaTableCollection,
}

impl InfoSchemaSnapshot {
    pub fn new<T, C>(server_name: Option<&str>, database_name: &str, tables: T, columns: C) -> Self
    where
        T: IntoIterator<Item = InfoSchemaTable>,
        C: IntoIterator<Item = InfoSchemaColumn>,
    {
        Self {
            server_name: server_name.map(str::to_string),
            database_name: database_name.to_string(),
            tables: build_table_tree(tables, columns),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn tables(&self) -> &InfoSchemaTableCollection {
        &self.tables
    }

    fn check_database(&self, database_name: &str) -> Result<(), SchemaMetaError> {
        if eq_ci(database_name, &self.database_name) {
            Ok(())
        } else {
            Err(SchemaMetaError::NotFound {
                kind: "database",
                name: database_name.to_string(),
            })
        }
    }

    fn database_from<'a, I>(&self, tables: I) -> Result<DatabaseInfo, SchemaMetaError>
    where
        I: IntoIterator<Item = &'a InfoSchemaTable>,
    {
        let mut database = DatabaseInfo::new(self.server_name.as_deref(), self.database_name.as_str());
        for table in tables {
            database.add_table(table.to_table_info()?)?;
        }
        debug!(
            database = %database,
            tables = database.tables().len(),
            "Loaded database info"
        );
        Ok(database)
    }
}

impl SchemaLoader for InfoSchemaSnapshot {
    type Error = SchemaMetaError;

    fn load_database_info(&self, database_name: &str) -> Result<DatabaseInfo, SchemaMetaError> {
        self.check_database(database_name)?;
        self.database_from(&self.tables)
    }

    fn load_database_info_with_tables(
        &self,
        database_name: &str,
        tables: &[QualifiedTableName],
    ) -> Result<DatabaseInfo, SchemaMetaError> {
        self.check_database(database_name)?;
        let selected = tables
            .iter()
            .map(|name| {
                self.tables.get(name).ok_or_else(|| SchemaMetaError::NotFound {
                    kind: "table",
                    name: name.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.database_from(selected)
    }

    fn load_table_info(&self, table_name: &QualifiedTableName) -> Result<TableInfo, SchemaMetaError> {
        match self.tables.get(table_name) {
            Some(table) => table.to_table_info(),
            None => Err(SchemaMetaError::NotFound {
                kind: "table",
                name: table_name.to_string(),
            }),
        }
    }

    fn load_tables(&self, database_name: &str) -> Result<TableCollection, SchemaMetaError> {
        self.check_database(database_name)?;
        let mut tables = TableCollection::new();
        for table in &self.tables {
            tables.add(table.to_table_info()?)?;
        }
        Ok(tables)
    }
}
