//! Table-qualified column names

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::names::QualifiedTableName;
use crate::error::NameError;
use crate::parser::{parse_name_components, quote_name};
use crate::util::{cmp_ci, combine_hashes_ci};

/// A column identified by its table and its own name.
#[derive(Debug, Clone)]
pub struct QualifiedTableColumnName {
    table_name: QualifiedTableName,
    column_name: String,
}

impl QualifiedTableColumnName {
    pub fn new(table_name: QualifiedTableName, column_name: &str) -> Result<Self, NameError> {
        if column_name.trim().is_empty() {
            return Err(NameError::MissingColumnName {
                table: table_name.to_string(),
            });
        }
        Ok(Self {
            table_name,
            column_name: column_name.to_string(),
        })
    }

    pub fn from_parts(schema: Option<&str>, table: &str, column: &str) -> Result<Self, NameError> {
        Self::new(QualifiedTableName::new(schema, table)?, column)
    }

    /// Parses `[schema.]table.column`; the schema defaults to `dbo`.
    pub fn parse(qualified: &str) -> Result<Self, NameError> {
        let parts = parse_name_components(qualified);
        let (schema, table) = match parts.database_name.as_deref() {
            Some(schema) => (Some(schema), parts.schema_name.as_str()),
            None if qualified.contains('.') => (None, parts.schema_name.as_str()),
            None => (None, ""),
        };
        Self::from_parts(schema, table, &parts.object_name)
    }

    pub fn table_name(&self) -> &QualifiedTableName {
        &self.table_name
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// `[column]`
    pub fn quoted_column_name(&self) -> String {
        quote_name(&self.column_name).unwrap_or_default()
    }

    /// `[schema].[table].[column]`
    pub fn to_quoted_sql_string(&self) -> String {
        format!(
            "{}.{}",
            self.table_name.to_quoted_sql_string(),
            self.quoted_column_name()
        )
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.table_name
            .compare(&other.table_name)
            .then_with(|| cmp_ci(&self.column_name, &other.column_name))
    }
}

impl PartialEq for QualifiedTableColumnName {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for QualifiedTableColumnName {}

impl PartialOrd for QualifiedTableColumnName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for QualifiedTableColumnName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for QualifiedTableColumnName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(combine_hashes_ci([
            self.table_name.schema_name(),
            self.table_name.object_name(),
            self.column_name.as_str(),
        ]));
    }
}

impl fmt::Display for QualifiedTableColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table_name, self.column_name)
    }
}
