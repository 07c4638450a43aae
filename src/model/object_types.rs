//! Enumerations reported by SQL Server catalog views and used by
//! `sp_addextendedproperty` level arguments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// `sys.columns.generated_always_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GeneratedAlwaysType {
    #[default]
    NotGeneratedAlways = 0,
    GeneratedAlwaysAtRowStart = 1,
    GeneratedAlwaysAtRowEnd = 2,
}

impl TryFrom<u8> for GeneratedAlwaysType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotGeneratedAlways),
            1 => Ok(Self::GeneratedAlwaysAtRowStart),
            2 => Ok(Self::GeneratedAlwaysAtRowEnd),
            other => Err(format!("unknown generated_always_type {}", other)),
        }
    }
}

impl From<GeneratedAlwaysType> for u8 {
    fn from(value: GeneratedAlwaysType) -> u8 {
        value as u8
    }
}

/// `sys.tables.temporal_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TableTemporalType {
    #[default]
    NonTemporalTable = 0,
    HistoryTableForSystemVersionedTable = 1,
    SystemVersionedTemporalTable = 2,
}

impl TryFrom<u8> for TableTemporalType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NonTemporalTable),
            1 => Ok(Self::HistoryTableForSystemVersionedTable),
            2 => Ok(Self::SystemVersionedTemporalTable),
            other => Err(format!("unknown temporal_type {}", other)),
        }
    }
}

impl From<TableTemporalType> for u8 {
    fn from(value: TableTemporalType) -> u8 {
        value as u8
    }
}

macro_rules! level_type {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $sql:literal,)* }) => {
        $(#[$meta])*
        ///
        /// `None` stands for a NULL level argument.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            None,
            $($variant,)*
        }

        impl $name {
            /// The literal passed as the level type argument; `None` for NULL.
            pub fn as_sql_str(self) -> Option<&'static str> {
                match self {
                    $name::None => None,
                    $($name::$variant => Some($sql),)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_sql_str().unwrap_or("NULL"))
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() || s.eq_ignore_ascii_case("NULL") {
                    return Ok($name::None);
                }
                $(
                    if s.eq_ignore_ascii_case($sql) {
                        return Ok($name::$variant);
                    }
                )*
                Err(format!("unknown {} '{}'", stringify!($name), s))
            }
        }
    };
}

level_type! {
    /// `@level0type` of `sp_addextendedproperty`.
    SqlLevelZeroType {
        Assembly => "ASSEMBLY",
        Contract => "CONTRACT",
        EventNotification => "EVENT NOTIFICATION",
        FileGroup => "FILEGROUP",
        MessageType => "MESSAGE TYPE",
        PartitionFunction => "PARTITION FUNCTION",
        PartitionScheme => "PARTITION SCHEME",
        RemoteServiceBinding => "REMOTE SERVICE BINDING",
        Route => "ROUTE",
        Schema => "SCHEMA",
        Service => "SERVICE",
        User => "USER",
        Trigger => "TRIGGER",
        Type => "TYPE",
        PlanGuide => "PLAN GUIDE",
    }
}

level_type! {
    /// `@level1type` of `sp_addextendedproperty`.
    SqlLevelOneType {
        Aggregate => "AGGREGATE",
        Default => "DEFAULT",
        Function => "FUNCTION",
        LogicalFileName => "LOGICAL FILE NAME",
        Procedure => "PROCEDURE",
        Queue => "QUEUE",
        Rule => "RULE",
        Sequence => "SEQUENCE",
        Synonym => "SYNONYM",
        Table => "TABLE",
        TableType => "TABLE_TYPE",
        Type => "TYPE",
        View => "VIEW",
        XmlSchemaCollection => "XML SCHEMA COLLECTION",
    }
}

level_type! {
    /// `@level2type` of `sp_addextendedproperty`.
    SqlLevelTwoType {
        Column => "COLUMN",
        Constraint => "CONSTRAINT",
        EventNotification => "EVENT NOTIFICATION",
        Index => "INDEX",
        Parameter => "PARAMETER",
        Trigger => "TRIGGER",
    }
}
