//! Schema-object and column name tests

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};

use pretty_assertions::assert_eq;

use sqlschema_names::error::NameError;
use sqlschema_names::model::{
    are_equal, compare_schema_objects, QualifiedTableColumnName, QualifiedTableName, QualifiedViewName,
    SchemaObject, SchemaObjectName,
};
use sqlschema_names::parser::QuoteStyle;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_parse_two_part_name() {
    let name = SchemaObjectName::parse("Schema.Object").unwrap();
    assert_eq!(name.schema_name(), "Schema");
    assert_eq!(name.object_name(), "Object");
    assert_eq!(name.to_quoted_sql_string(), "[Schema].[Object]");
}

#[test]
fn test_parse_four_part_name_keeps_schema_and_object() {
    let name = SchemaObjectName::parse("Server.Database.Schema.Object").unwrap();
    assert_eq!(name.schema_name(), "Schema");
    assert_eq!(name.object_name(), "Object");
}

#[test]
fn test_parse_defaults_schema() {
    let name = QualifiedTableName::parse("[Orders]").unwrap();
    assert_eq!(name.schema_name(), "dbo");
    assert_eq!(name.table_name(), "Orders");

    let blank_schema = QualifiedTableName::new(Some("  "), "Orders").unwrap();
    assert_eq!(blank_schema.schema_name(), "dbo");
}

#[test]
fn test_missing_object_name_is_rejected() {
    assert!(matches!(
        QualifiedTableName::parse(""),
        Err(NameError::MissingObjectName { .. })
    ));
    assert!(matches!(
        SchemaObjectName::new(Some("dbo"), " "),
        Err(NameError::MissingObjectName { .. })
    ));
    assert!("Sales.".parse::<QualifiedViewName>().is_err());
}

#[test]
fn test_from_str_and_try_from() {
    let parsed: QualifiedViewName = "Reporting.vOrders".parse().unwrap();
    assert_eq!(parsed.view_name(), "vOrders");

    let converted = QualifiedTableName::try_from("Sales.Orders").unwrap();
    assert_eq!(converted.to_string(), "Sales.Orders");
}

#[test]
fn test_copy_between_name_kinds() {
    let table = QualifiedTableName::parse("Sales.Orders").unwrap();
    let generic = SchemaObjectName::from_schema_object(&table);
    assert!(are_equal(&table, &generic));

    let view: QualifiedViewName = SchemaObjectName::from(table.clone()).into();
    assert_eq!(view.to_string(), "Sales.Orders");
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_case_insensitive_identity() {
    for (a, b) in [
        ("dbo.Orders", "DBO.ORDERS"),
        ("Sales.OrderLines", "sales.orderlines"),
        ("Ünits.Größe", "üNITS.GRÖßE"),
    ] {
        let left = SchemaObjectName::parse(a).unwrap();
        let right = SchemaObjectName::parse(b).unwrap();
        assert_eq!(left, right, "{} vs {}", a, b);
        assert_eq!(hash_of(&left), hash_of(&right), "{} vs {}", a, b);
    }
}

#[test]
fn test_multi_char_uppercase_is_not_expanded() {
    // ß uppercases to "SS", which is longer than one char, so it folds to itself
    let left = SchemaObjectName::parse("dbo.Straße").unwrap();
    let right = SchemaObjectName::parse("dbo.STRASSE").unwrap();
    assert_ne!(left, right);
}

#[test]
fn test_hash_is_order_sensitive() {
    let a = SchemaObjectName::new(Some("Orders"), "Sales").unwrap();
    let b = SchemaObjectName::new(Some("Sales"), "Orders").unwrap();
    assert_ne!(a, b);
    assert_ne!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_names_collapse_in_hash_set() {
    let set: HashSet<QualifiedTableName> = ["dbo.Orders", "DBO.orders", "[dbo].[ORDERS]", "Sales.Orders"]
        .into_iter()
        .map(|s| QualifiedTableName::parse(s).unwrap())
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_ordering_schema_first() {
    let names: Vec<SchemaObjectName> = ["b.a", "A.z", "a.B", "dbo.x"]
        .into_iter()
        .map(|s| SchemaObjectName::parse(s).unwrap())
        .collect();
    let sorted: Vec<String> = names
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(sorted, vec!["a.B", "A.z", "b.a", "dbo.x"]);
}

#[test]
fn test_ordering_is_total_and_transitive() {
    let names: Vec<SchemaObjectName> = ["dbo.a", "DBO.B", "sales.a", "Sales.c", "x.y", "dbo.A"]
        .into_iter()
        .map(|s| SchemaObjectName::parse(s).unwrap())
        .collect();

    for a in &names {
        for b in &names {
            let outcomes = [a < b, a == b, a > b];
            assert_eq!(outcomes.iter().filter(|o| **o).count(), 1, "{} vs {}", a, b);
            for c in &names {
                if a < b && b < c {
                    assert!(a < c, "{} < {} < {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn test_compare_across_kinds() {
    let table = QualifiedTableName::parse("dbo.Orders").unwrap();
    let view = QualifiedViewName::parse("dbo.vOrders").unwrap();
    assert!(compare_schema_objects(&table, &view).is_lt());
}

#[test]
fn test_quoted_sql_string_with_style() {
    let name = QualifiedTableName::parse("Sales.Orders").unwrap();
    assert_eq!(name.to_quoted_sql_string_with(QuoteStyle::DoubleQuote), "\"Sales\".\"Orders\"");
    assert_eq!(SchemaObject::to_quoted_sql_string(&name), "[Sales].[Orders]");
}

#[test]
fn test_display_round_trips() {
    for input in ["Sales.Orders", "Db.Sales.Orders", "Srv.Db.Sales.Orders", "[dbo].[Order Lines]"] {
        let name = SchemaObjectName::parse(input).unwrap();
        let reparsed = SchemaObjectName::parse(&name.to_string()).unwrap();
        assert_eq!(name.schema_name(), reparsed.schema_name());
        assert_eq!(name.object_name(), reparsed.object_name());
    }
}

// ============================================================================
// Column names
// ============================================================================

#[test]
fn test_column_name_built_two_ways() {
    let table = QualifiedTableName::parse("dbo.Orders").unwrap();
    let a = QualifiedTableColumnName::new(table, "Id").unwrap();
    let b = QualifiedTableColumnName::from_parts(Some("dbo"), "Orders", "Id").unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(a.to_quoted_sql_string(), "[dbo].[Orders].[Id]");
    assert_eq!(a.quoted_column_name(), "[Id]");
    assert_eq!(a.to_string(), "dbo.Orders.Id");
}

#[test]
fn test_column_name_case_insensitive() {
    let a = QualifiedTableColumnName::parse("dbo.Orders.Id").unwrap();
    let b = QualifiedTableColumnName::parse("DBO.ORDERS.ID").unwrap();
    let c = QualifiedTableColumnName::parse("dbo.Orders.Total").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a < c);
}

#[test]
fn test_column_name_requires_column() {
    let table = QualifiedTableName::parse("dbo.Orders").unwrap();
    assert!(matches!(
        QualifiedTableColumnName::new(table, ""),
        Err(NameError::MissingColumnName { .. })
    ));
}

#[test]
fn test_column_name_parse_defaults_schema() {
    let column = QualifiedTableColumnName::parse("Orders.Id").unwrap();
    assert_eq!(column.table_name().schema_name(), "dbo");
    assert_eq!(column.table_name().table_name(), "Orders");
    assert_eq!(column.column_name(), "Id");
}
