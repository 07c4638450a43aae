//! Multi-part identifier and composite key tests

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pretty_assertions::assert_eq;
use sqlparser::ast::{Ident, ObjectName};

use sqlschema_names::model::{CompositeKey, DbObjectIdentifier, QualifiedTableName};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_identifier_identity_scenario() {
    let a = DbObjectIdentifier::new(["schemaName", "tableName01"]);
    let b = DbObjectIdentifier::new(["SCHEMANAME", "TABLENAME01"]);
    let c = DbObjectIdentifier::new(["SCHEMANAME", "TABLENAME02"]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
}

#[test]
fn test_identifier_positional_accessors() {
    let id = DbObjectIdentifier::parse("[Srv].[Db].[Sales].[Orders]");
    assert_eq!(id.parts(), ["Srv", "Db", "Sales", "Orders"]);
    assert_eq!(id.object_name(), Some("Orders"));
    assert_eq!(id.schema_name(), Some("Sales"));
    assert_eq!(id.database_name(), Some("Db"));
    assert_eq!(id.server_name(), Some("Srv"));

    let short = DbObjectIdentifier::new(["Orders"]);
    assert_eq!(short.object_name(), Some("Orders"));
    assert_eq!(short.schema_name(), None);
}

#[test]
fn test_parse_sql_keeps_dots_inside_delimiters() {
    let id = DbObjectIdentifier::parse_sql("[Sales].[Order.Lines]").unwrap();
    assert_eq!(id.parts(), ["Sales", "Order.Lines"]);
    assert_eq!(id.to_string(), "[Sales].[Order.Lines]");

    let naive = DbObjectIdentifier::parse("[Sales].[Order.Lines]");
    assert_eq!(naive.parts().len(), 3);
}

#[test]
fn test_from_object_name() {
    let name = ObjectName(vec![Ident::new("dbo"), Ident::with_quote('[', "Orders")]);
    let id = DbObjectIdentifier::from(&name);
    assert_eq!(id, DbObjectIdentifier::new(["DBO", "orders"]));

    let table = QualifiedTableName::from_object_name(&name).unwrap();
    assert_eq!(DbObjectIdentifier::from_schema_object(&table), id);
}

#[test]
fn test_external_parts_render_first() {
    let id = DbObjectIdentifier::with_external(["LinkedSrv", "Archive"], ["dbo", "Orders"]);
    assert!(id.has_external_parts());
    assert_eq!(id.external_parts(), Some(&["LinkedSrv".to_string(), "Archive".to_string()][..]));
    assert_eq!(id.to_string(), "[LinkedSrv].[Archive].[dbo].[Orders]");
}

#[test]
fn test_empty_identifier_is_accepted() {
    let id = DbObjectIdentifier::new(Vec::<String>::new());
    assert!(!id.has_name());
    assert_eq!(id.object_name(), None);
    assert_eq!(id.to_string(), "");
    assert_eq!(id, DbObjectIdentifier::default());
}

#[test]
fn test_composite_key() {
    let a = CompositeKey::new(["Sales", "Orders", "1"]).unwrap();
    let b = CompositeKey::new(["Sales", "Orders", "1"]).unwrap();
    let c = CompositeKey::new(["sales", "Orders", "1"]).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
    assert_eq!(a.len(), 3);
    assert_eq!(a.to_string(), "Sales, Orders, 1");

    assert!(CompositeKey::<String>::new(Vec::new()).is_err());
}
