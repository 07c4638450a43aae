//! Semantic string types for SQL command text

use std::fmt;
use std::ops::Deref;

/// How a data source should interpret command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandType {
    #[default]
    Text,
    StoredProcedure,
}

/// SQL command text tagged with its [`CommandType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqlQuery {
    text: String,
    command_type: CommandType,
}

impl SqlQuery {
    /// Ad-hoc SQL text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            command_type: CommandType::Text,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn command_type(&self) -> CommandType {
        self.command_type
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for SqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for SqlQuery {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<String> for SqlQuery {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for SqlQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<SqlQuery> for String {
    fn from(query: SqlQuery) -> String {
        query.text
    }
}

/// The name of a stored procedure to execute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqlProc(SqlQuery);

impl SqlProc {
    pub fn new(name: impl Into<String>) -> Self {
        Self(SqlQuery {
            text: name.into(),
            command_type: CommandType::StoredProcedure,
        })
    }
}

impl Deref for SqlProc {
    type Target = SqlQuery;

    fn deref(&self) -> &SqlQuery {
        &self.0
    }
}

impl fmt::Display for SqlProc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for SqlProc {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<SqlProc> for SqlQuery {
    fn from(proc: SqlProc) -> Self {
        proc.0
    }
}
