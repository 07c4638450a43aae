//! sqlschema-names: SQL Server schema metadata without a live connection
//!
//! The core is a set of qualified-name identity types that compare, order and
//! hash case-insensitively: [`SchemaObjectName`], [`QualifiedTableName`],
//! [`QualifiedViewName`], [`QualifiedTableColumnName`] and
//! [`DbObjectIdentifier`]. Around them sit T-SQL identifier quoting and
//! `PARSENAME`-style parsing ([`parser`]), keyed collections
//! ([`collections`]), table and column metadata entities ([`model`]), the
//! INFORMATION_SCHEMA loader seam ([`information_schema`]) and property/column
//! name conversion ([`text`]).
//!
//! ```
//! use sqlschema_names::QualifiedTableName;
//!
//! let a = QualifiedTableName::parse("[Sales].[Orders]").unwrap();
//! let b = QualifiedTableName::parse("sales.orders").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_quoted_sql_string(), "[Sales].[Orders]");
//! ```

pub mod collections;
pub mod error;
pub mod information_schema;
pub mod model;
pub mod parser;
pub mod resources;
pub mod text;
pub mod util;

pub use collections::{BiDirectionalMap, KeyExtractor, KeyedCollection};
pub use error::{CollectionError, MappingError, NameError, ResourceError, SchemaMetaError};
pub use information_schema::SchemaLoader;
pub use model::{
    ColumnAttributes, ColumnInfo, ColumnMetadata, DatabaseInfo, DbObjectIdentifier, QualifiedTableColumnName,
    QualifiedTableName, QualifiedViewName, SchemaInfo, SchemaObject, SchemaObjectName, TableAttributes, TableInfo,
    TableMetadata,
};
pub use parser::{parse_name, parse_name_components, quote_name, quote_name_with, remove_quotes, QuoteStyle};
pub use resources::{ResourceBundle, SqlProc, SqlQuery};
pub use text::{camel_case, pascal_case, underscore, WordCase};
