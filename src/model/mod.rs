//! Schema metadata model: names, identifiers, attributes and entities

mod attributes;
mod column_name;
mod composite_key;
mod database;
mod elements;
mod identifier;
mod names;
mod object_types;

pub use attributes::{ColumnAttributes, ColumnFacts, TableAttributes, TableFacts};
pub use column_name::QualifiedTableColumnName;
pub use composite_key::CompositeKey;
pub use database::{DatabaseCollection, DatabaseInfo, DatabaseNameKey, SchemaCollection, SchemaInfo, SchemaNameKey};
pub use elements::{
    ColumnCollection, ColumnConstant, ColumnInfo, ColumnMetadata, ColumnNameKey, TableCollection, TableConstant,
    TableInfo, TableMetadata, TableNameKey,
};
pub use identifier::DbObjectIdentifier;
pub use names::{
    are_equal, compare_schema_objects, QualifiedTableName, QualifiedViewName, SchemaObject, SchemaObjectName,
};
pub use object_types::{GeneratedAlwaysType, SqlLevelOneType, SqlLevelTwoType, SqlLevelZeroType, TableTemporalType};
