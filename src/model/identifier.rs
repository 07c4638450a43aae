//! Multi-part database object identifiers

use std::fmt;
use std::hash::{Hash, Hasher};

use sqlparser::ast::ObjectName;

use super::names::SchemaObject;
use crate::error::NameError;
use crate::parser::{encode_identifier, split_multipart_name, unquote};
use crate::util::{combine_hashes_ci, join_if_not_empty, list_eq_ci};

/// An object reference made of any number of name parts.
///
/// Local parts are stored outermost first, as written:
/// `[server, database,] schema, object`. External parts qualify references
/// into another database or server and render before the local parts.
/// Equality is positional and case-insensitive over both lists.
#[derive(Debug, Clone, Default)]
pub struct DbObjectIdentifier {
    parts: Vec<String>,
    external_parts: Option<Vec<String>>,
}

impl DbObjectIdentifier {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
            external_parts: None,
        }
    }

    pub fn from_slice<S: AsRef<str>>(parts: &[S]) -> Self {
        Self::new(parts.iter().map(|p| p.as_ref().to_string()))
    }

    /// `[schema, object]` from any schema-qualified name.
    pub fn from_schema_object<S: SchemaObject + ?Sized>(name: &S) -> Self {
        Self::new([name.schema_name(), name.object_name()])
    }

    /// Local parts plus external qualification. An empty external list is
    /// treated as none.
    pub fn with_external<E, I, S, T>(external: E, parts: I) -> Self
    where
        E: IntoIterator<Item = T>,
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let external: Vec<String> = external.into_iter().map(Into::into).collect();
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
            external_parts: if external.is_empty() { None } else { Some(external) },
        }
    }

    pub fn from_object_name(name: &ObjectName) -> Self {
        Self::new(name.0.iter().map(|ident| ident.value.clone()))
    }

    /// Splits on every `.` and removes delimiters from each part.
    ///
    /// Mirrors `PARSENAME`, so a delimited part that itself contains a dot
    /// is split too; use [`DbObjectIdentifier::parse_sql`] for those.
    pub fn parse(qualified: &str) -> Self {
        Self::new(qualified.split('.').map(|p| unquote(p).to_string()))
    }

    /// Reads the name with the T-SQL tokenizer.
    pub fn parse_sql(qualified: &str) -> Result<Self, NameError> {
        Ok(Self::new(split_multipart_name(qualified)?))
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn external_parts(&self) -> Option<&[String]> {
        self.external_parts.as_deref()
    }

    pub fn has_name(&self) -> bool {
        !self.parts.is_empty()
    }

    pub fn has_external_parts(&self) -> bool {
        self.external_parts.is_some()
    }

    /// The `n`th local part counted from the right, starting at 0.
    fn from_right(&self, n: usize) -> Option<&str> {
        let len = self.parts.len();
        if n < len {
            Some(self.parts[len - 1 - n].as_str())
        } else {
            None
        }
    }

    pub fn object_name(&self) -> Option<&str> {
        self.from_right(0)
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.from_right(1)
    }

    pub fn database_name(&self) -> Option<&str> {
        self.from_right(2)
    }

    pub fn server_name(&self) -> Option<&str> {
        self.from_right(3)
    }
}

impl PartialEq for DbObjectIdentifier {
    fn eq(&self, other: &Self) -> bool {
        list_eq_ci(self.external_parts(), other.external_parts())
            && list_eq_ci(Some(self.parts()), Some(other.parts()))
    }
}

impl Eq for DbObjectIdentifier {}

impl Hash for DbObjectIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let external = combine_hashes_ci(self.external_parts().unwrap_or_default());
        state.write_u64(external);
        state.write_u64(combine_hashes_ci(&self.parts));
    }
}

impl fmt::Display for DbObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let external = self.external_parts().unwrap_or_default();
        let parts = external
            .iter()
            .chain(self.parts.iter())
            .map(|part| Some(encode_identifier(part)));
        f.write_str(&join_if_not_empty(".", parts))
    }
}

impl From<&ObjectName> for DbObjectIdentifier {
    fn from(name: &ObjectName) -> Self {
        Self::from_object_name(name)
    }
}
