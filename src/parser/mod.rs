//! T-SQL name parsing
//!
//! Rust counterparts of the T-SQL `PARSENAME` function. These helpers split on
//! `.` exactly like the server does and never fail; see
//! [`name_reader::split_multipart_name`] for a tokenizer-based split that
//! understands delimited parts containing dots.

pub mod identifier_utils;
pub mod name_reader;

use std::fmt;

pub use identifier_utils::{
    encode_identifier, quote_name, quote_name_as, quote_name_with, remove_quotes, unquote,
    QuoteStyle,
};
pub use name_reader::split_multipart_name;

use crate::util::join_if_not_empty;

/// Schema assumed when a name carries none.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// T-SQL `PARSENAME(name, piece)`.
///
/// `piece` is 1 for the object, 2 for the schema, 3 for the database and 4 for
/// the server. A piece that is out of range or absent from `name` yields `None`.
/// Quotes are left in place.
pub fn parse_name(name: &str, piece: usize) -> Option<&str> {
    if piece == 0 {
        return None;
    }
    name.rsplit('.').nth(piece - 1)
}

/// The parts of a possibly qualified object name, as split by [`parse_name_components`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DbSchemaObjectName {
    pub object_name: String,
    pub schema_name: String,
    pub database_name: Option<String>,
    pub server_name: Option<String>,
}

impl DbSchemaObjectName {
    pub fn is_server_qualified(&self) -> bool {
        self.server_name.is_some()
    }

    pub fn is_database_qualified(&self) -> bool {
        self.database_name.is_some()
    }

    /// Positional access: 0 = object, 1 = schema, 2 = database, 3 = server.
    pub fn part(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(self.object_name.as_str()),
            1 => Some(self.schema_name.as_str()),
            2 => self.database_name.as_deref(),
            3 => self.server_name.as_deref(),
            _ => None,
        }
    }

    /// Bracket-quoted, dot-joined form (`[server].[db].[schema].[object]`).
    pub fn to_quoted_sql_string(&self) -> String {
        join_if_not_empty(
            ".",
            [
                self.server_name.as_deref().and_then(quote_name),
                self.database_name.as_deref().and_then(quote_name),
                quote_name(&self.schema_name),
                quote_name(&self.object_name),
            ],
        )
    }
}

impl fmt::Display for DbSchemaObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_if_not_empty(
            ".",
            [
                self.server_name.as_deref(),
                self.database_name.as_deref(),
                Some(self.schema_name.as_str()),
                Some(self.object_name.as_str()),
            ],
        ))
    }
}

/// Split a qualified name into object, schema, database and server.
///
/// Parts are assigned right to left and each has its delimiters removed.
/// The schema defaults to `dbo`; extra parts beyond the fourth are ignored.
///
/// # Examples
///
/// ```ignore
/// let name = parse_name_components("[Srv].[Db].[Sales].[Orders]");
/// assert_eq!(name.object_name, "Orders");
/// assert!(name.is_server_qualified());
/// ```
pub fn parse_name_components(qualified: &str) -> DbSchemaObjectName {
    let mut name = DbSchemaObjectName::default();
    let mut object = None;
    let mut schema = None;

    for (i, part) in qualified.rsplit('.').enumerate() {
        let part = unquote(part).to_string();
        match i {
            0 => object = Some(part),
            1 => schema = Some(part),
            2 => name.database_name = Some(part),
            3 => name.server_name = Some(part),
            _ => break,
        }
    }

    // rsplit always yields at least one piece
    name.object_name = object.unwrap_or_else(|| qualified.to_string());
    name.schema_name = schema.unwrap_or_else(|| DEFAULT_SCHEMA.to_string());
    name
}
