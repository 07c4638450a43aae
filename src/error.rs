//! Error types for sqlschema-names

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing qualified names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Object name is required (input: {input:?})")]
    MissingObjectName { input: String },

    #[error("Column name is required for table {table}")]
    MissingColumnName { table: String },

    #[error("Invalid SQL identifier {input:?}: {message}")]
    InvalidIdentifier { input: String, message: String },
}

/// Errors raised by keyed collections
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("An item with the same key has already been added: {key}")]
    DuplicateKey { key: String },

    #[error("Index {index} is out of range for a collection of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised by the bidirectional property/column map
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Duplicate key or value detected in bidirectional mapping: {detail}")]
    Duplicate { detail: String },

    #[error("Cannot modify a read-only bidirectional map")]
    ReadOnly,

    #[error("Key not found in bidirectional mapping: {key}")]
    NotFound { key: String },

    #[error("Failed to (de)serialize bidirectional mapping: {message}")]
    Json { message: String },
}

/// Errors raised while resolving or reading SQL text resources
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Resource '{name}' not found. Make sure the resource exists and the name is correctly spelled and properly namespaced.")]
    NotFound { name: String },

    #[error("Failed to read resource file: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource '{name}' contains invalid characters")]
    InvalidEncoding { name: String },
}

/// Umbrella error for callers that mix several concerns
#[derive(Error, Debug)]
pub enum SchemaMetaError {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl From<serde_json::Error> for MappingError {
    fn from(err: serde_json::Error) -> Self {
        MappingError::Json {
            message: err.to_string(),
        }
    }
}
