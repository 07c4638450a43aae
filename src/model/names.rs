//! Schema-qualified object names
//!
//! [`SchemaObjectName`], [`QualifiedTableName`] and [`QualifiedViewName`] hold a
//! `(schema, object)` pair that compares, orders and hashes case-insensitively,
//! schema first. The table and view types are distinct so one cannot be passed
//! where the other is expected; the [`SchemaObject`] trait lets code handle any
//! of them generically.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use sqlparser::ast::ObjectName;

use crate::error::NameError;
use crate::parser::{parse_name_components, quote_name_as, QuoteStyle, DEFAULT_SCHEMA};
use crate::util::{cmp_ci, combine_hashes_ci};

/// Anything identified by a schema and an object name.
pub trait SchemaObject {
    fn schema_name(&self) -> &str;

    fn object_name(&self) -> &str;

    /// `[schema].[object]`
    fn to_quoted_sql_string(&self) -> String {
        self.to_quoted_sql_string_with(QuoteStyle::Brackets)
    }

    /// Both parts quoted with `style`, dot-joined.
    fn to_quoted_sql_string_with(&self, style: QuoteStyle) -> String {
        let schema = quote_name_as(Some(self.schema_name()), style).unwrap_or_default();
        let object = quote_name_as(Some(self.object_name()), style).unwrap_or_default();
        format!("{}.{}", schema, object)
    }
}

/// Case-insensitive ordering of any two schema objects, schema first.
pub fn compare_schema_objects<A, B>(a: &A, b: &B) -> Ordering
where
    A: SchemaObject + ?Sized,
    B: SchemaObject + ?Sized,
{
    cmp_ci(a.schema_name(), b.schema_name()).then_with(|| cmp_ci(a.object_name(), b.object_name()))
}

/// Case-insensitive equality of any two schema objects.
pub fn are_equal<A, B>(a: &A, b: &B) -> bool
where
    A: SchemaObject + ?Sized,
    B: SchemaObject + ?Sized,
{
    compare_schema_objects(a, b) == Ordering::Equal
}

fn normalize_parts(schema: Option<&str>, object: &str, input: &str) -> Result<(String, String), NameError> {
    if object.trim().is_empty() {
        return Err(NameError::MissingObjectName {
            input: input.to_string(),
        });
    }
    let schema = match schema {
        Some(s) if !s.trim().is_empty() => s,
        _ => DEFAULT_SCHEMA,
    };
    Ok((schema.to_string(), object.to_string()))
}

macro_rules! schema_object_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            schema_name: String,
            object_name: String,
        }

        impl $name {
            /// Builds a name from explicit parts. A missing or blank schema
            /// becomes `dbo`; a blank object is an error.
            pub fn new(schema: Option<&str>, object: &str) -> Result<Self, NameError> {
                let input = match schema {
                    Some(s) => format!("{}.{}", s, object),
                    None => object.to_string(),
                };
                let (schema_name, object_name) = normalize_parts(schema, object, &input)?;
                Ok(Self { schema_name, object_name })
            }

            /// Parses a dot-delimited, optionally quoted name.
            ///
            /// Only the schema and object parts are kept; any database or
            /// server qualification is dropped.
            pub fn parse(qualified: &str) -> Result<Self, NameError> {
                let parts = parse_name_components(qualified);
                let (schema_name, object_name) =
                    normalize_parts(Some(&parts.schema_name), &parts.object_name, qualified)?;
                Ok(Self { schema_name, object_name })
            }

            /// Copies the parts of any other schema object.
            pub fn from_schema_object<S: SchemaObject + ?Sized>(other: &S) -> Self {
                Self {
                    schema_name: other.schema_name().to_string(),
                    object_name: other.object_name().to_string(),
                }
            }

            /// Takes the last two identifiers of a parsed `ObjectName`.
            pub fn from_object_name(name: &ObjectName) -> Result<Self, NameError> {
                let mut idents = name.0.iter().rev();
                let object = idents.next().map(|i| i.value.as_str()).unwrap_or("");
                let schema = idents.next().map(|i| i.value.as_str());
                Self::new(schema, object).map_err(|_| NameError::MissingObjectName {
                    input: name.to_string(),
                })
            }

            pub fn schema_name(&self) -> &str {
                &self.schema_name
            }

            pub fn object_name(&self) -> &str {
                &self.object_name
            }

            /// The single ordering primitive behind `Eq` and `Ord`.
            pub fn compare(&self, other: &Self) -> Ordering {
                compare_schema_objects(self, other)
            }

            pub fn to_quoted_sql_string(&self) -> String {
                SchemaObject::to_quoted_sql_string(self)
            }

            pub fn to_quoted_sql_string_with(&self, style: QuoteStyle) -> String {
                SchemaObject::to_quoted_sql_string_with(self, style)
            }
        }

        impl SchemaObject for $name {
            fn schema_name(&self) -> &str {
                &self.schema_name
            }

            fn object_name(&self) -> &str {
                &self.object_name
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.compare(other) == Ordering::Equal
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.compare(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.compare(other)
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u64(combine_hashes_ci([&self.schema_name, &self.object_name]));
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}", self.schema_name, self.object_name)
            }
        }

        impl FromStr for $name {
            type Err = NameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = NameError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }
    };
}

schema_object_name! {
    /// A schema-qualified name of any kind of object.
    SchemaObjectName
}

schema_object_name! {
    /// A schema-qualified table name.
    QualifiedTableName
}

schema_object_name! {
    /// A schema-qualified view name.
    QualifiedViewName
}

impl QualifiedTableName {
    pub fn table_name(&self) -> &str {
        &self.object_name
    }
}

impl QualifiedViewName {
    pub fn view_name(&self) -> &str {
        &self.object_name
    }
}

impl From<QualifiedTableName> for SchemaObjectName {
    fn from(name: QualifiedTableName) -> Self {
        Self {
            schema_name: name.schema_name,
            object_name: name.object_name,
        }
    }
}

impl From<QualifiedViewName> for SchemaObjectName {
    fn from(name: QualifiedViewName) -> Self {
        Self {
            schema_name: name.schema_name,
            object_name: name.object_name,
        }
    }
}

impl From<SchemaObjectName> for QualifiedTableName {
    fn from(name: SchemaObjectName) -> Self {
        Self {
            schema_name: name.schema_name,
            object_name: name.object_name,
        }
    }
}

impl From<SchemaObjectName> for QualifiedViewName {
    fn from(name: SchemaObjectName) -> Self {
        Self {
            schema_name: name.schema_name,
            object_name: name.object_name,
        }
    }
}
