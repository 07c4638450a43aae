//! Property names for INFORMATION_SCHEMA columns

use crate::collections::BiDirectionalMap;
use crate::error::MappingError;
use crate::util::CiString;

/// Columns of `INFORMATION_SCHEMA.COLUMNS` in catalog order.
pub const INFO_SCHEMA_COLUMNS_COLUMN_NAMES: &[&str] = &[
    "TABLE_CATALOG",
    "TABLE_SCHEMA",
    "TABLE_NAME",
    "COLUMN_NAME",
    "ORDINAL_POSITION",
    "COLUMN_DEFAULT",
    "IS_NULLABLE",
    "DATA_TYPE",
    "CHARACTER_MAXIMUM_LENGTH",
    "CHARACTER_OCTET_LENGTH",
    "NUMERIC_PRECISION",
    "NUMERIC_PRECISION_RADIX",
    "NUMERIC_SCALE",
    "DATETIME_PRECISION",
    "CHARACTER_SET_CATALOG",
    "CHARACTER_SET_SCHEMA",
    "CHARACTER_SET_NAME",
    "COLLATION_CATALOG",
    "COLLATION_SCHEMA",
    "COLLATION_NAME",
    "DOMAIN_CATALOG",
    "DOMAIN_SCHEMA",
    "DOMAIN_NAME",
];

/// Read-only, case-insensitive map from property name (`TableCatalog`) to
/// `INFORMATION_SCHEMA.COLUMNS` column name (`TABLE_CATALOG`).
pub fn info_schema_column_mappings() -> Result<BiDirectionalMap<CiString, CiString>, MappingError> {
    BiDirectionalMap::from_column_names(INFO_SCHEMA_COLUMNS_COLUMN_NAMES, true)
}
