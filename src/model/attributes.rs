//! Attribute bitsets for tables and columns
//!
//! The bitsets are plain `u32` newtypes. They can be read from loader rows as
//! integers and rebuilt from boolean facts with the pure `from_facts` folds.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::{Deserialize, Serialize};

macro_rules! attribute_bits {
    ($(#[$meta:meta])* $name:ident { $($(#[$flag_meta:meta])* $flag:ident = $value:expr,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const NONE: Self = Self(0);
            $($(#[$flag_meta])* pub const $flag: Self = Self($value);)*

            const ALL_BITS: u32 = 0 $(| $value)*;

            pub const fn bits(self) -> u32 {
                self.0
            }

            /// Keeps only the bits that name a known flag.
            pub const fn from_bits_truncate(bits: u32) -> Self {
                Self(bits & Self::ALL_BITS)
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub const fn contains(self, flag: Self) -> bool {
                self.0 & flag.0 == flag.0
            }

            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// Returns a copy with `flag` set when `on` is true, cleared otherwise.
            #[must_use]
            pub const fn set(self, flag: Self, on: bool) -> Self {
                if on {
                    Self(self.0 | flag.0)
                } else {
                    Self(self.0 & !flag.0)
                }
            }
        }

        impl BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                self.union(rhs)
            }
        }

        impl BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl Not for $name {
            type Output = Self;

            fn not(self) -> Self {
                Self(!self.0 & Self::ALL_BITS)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.0
            }
        }

        impl fmt::Binary for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Binary::fmt(&self.0, f)
            }
        }
    };
}

attribute_bits! {
    /// Table-level characteristics.
    TableAttributes {
        /// History table of a system-versioned temporal table.
        HISTORY_TABLE_FOR_SYSTEM_VERSIONED_TABLE = 1,
        SYSTEM_VERSIONED_TEMPORAL_TABLE = 2,
        USER_TABLE = 4,
        /// Template for table-valued parameters.
        USER_TABLE_TYPE = 8,
        AUTO_NUMBERED = 16,
        COMPOSITE_KEYED = 32,
    }
}

attribute_bits! {
    /// Column-level characteristics.
    ColumnAttributes {
        NULLABLE = 1,
        UPDATABLE = 1 << 1,
        PRIMARY_KEY = 1 << 2,
        UNIQUE_KEY = 1 << 3,
        AUTO_NUMBER = 1 << 4,
        FOREIGN_KEY = 1 << 5,
        INDEXED = 1 << 6,
        COMPUTED = 1 << 7,
        ROW_GUID = 1 << 8,
        GENERATED_ALWAYS = 1 << 9,
        GENERATED_ALWAYS_AT_ROW_START = 1 << 10,
        GENERATED_ALWAYS_AT_ROW_END = 1 << 11,
        FILESTREAM = 1 << 12,
        XML_DOCUMENT = 1 << 13,
        COLUMN_SET = 1 << 14,
        /// `timestamp` / `rowversion`
        TIMESTAMP = 1 << 15,
    }
}

/// Boolean facts about a table, as reported by a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableFacts {
    pub is_history_table_for_system_versioned_table: bool,
    pub is_system_versioned_temporal_table: bool,
    pub is_user_table: bool,
    pub is_user_table_type: bool,
    pub is_auto_numbered: bool,
    pub is_composite_keyed: bool,
}

/// Boolean facts about a column, as reported by a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnFacts {
    pub is_nullable: bool,
    pub is_updatable: bool,
    pub is_primary_key: bool,
    pub is_unique_key: bool,
    pub is_auto_number: bool,
    pub is_foreign_key: bool,
    pub is_indexed: bool,
    pub is_computed: bool,
    pub is_row_guid: bool,
    pub is_generated_always: bool,
    pub is_generated_always_at_row_start: bool,
    pub is_generated_always_at_row_end: bool,
    pub is_filestream: bool,
    pub is_xml_document: bool,
    pub is_column_set: bool,
    pub is_timestamp: bool,
}

impl TableAttributes {
    pub fn from_facts(facts: &TableFacts) -> Self {
        [
            (Self::HISTORY_TABLE_FOR_SYSTEM_VERSIONED_TABLE, facts.is_history_table_for_system_versioned_table),
            (Self::SYSTEM_VERSIONED_TEMPORAL_TABLE, facts.is_system_versioned_temporal_table),
            (Self::USER_TABLE, facts.is_user_table),
            (Self::USER_TABLE_TYPE, facts.is_user_table_type),
            (Self::AUTO_NUMBERED, facts.is_auto_numbered),
            (Self::COMPOSITE_KEYED, facts.is_composite_keyed),
        ]
        .into_iter()
        .fold(Self::NONE, |acc, (flag, on)| acc.set(flag, on))
    }
}

impl ColumnAttributes {
    pub fn from_facts(facts: &ColumnFacts) -> Self {
        [
            (Self::NULLABLE, facts.is_nullable),
            (Self::UPDATABLE, facts.is_updatable),
            (Self::PRIMARY_KEY, facts.is_primary_key),
            (Self::UNIQUE_KEY, facts.is_unique_key),
            (Self::AUTO_NUMBER, facts.is_auto_number),
            (Self::FOREIGN_KEY, facts.is_foreign_key),
            (Self::INDEXED, facts.is_indexed),
            (Self::COMPUTED, facts.is_computed),
            (Self::ROW_GUID, facts.is_row_guid),
            (Self::GENERATED_ALWAYS, facts.is_generated_always),
            (Self::GENERATED_ALWAYS_AT_ROW_START, facts.is_generated_always_at_row_start),
            (Self::GENERATED_ALWAYS_AT_ROW_END, facts.is_generated_always_at_row_end),
            (Self::FILESTREAM, facts.is_filestream),
            (Self::XML_DOCUMENT, facts.is_xml_document),
            (Self::COLUMN_SET, facts.is_column_set),
            (Self::TIMESTAMP, facts.is_timestamp),
        ]
        .into_iter()
        .fold(Self::NONE, |acc, (flag, on)| acc.set(flag, on))
    }
}
