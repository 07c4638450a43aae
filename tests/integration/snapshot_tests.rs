//! Loader tests over the `Shop` fixture rows

use anyhow::Result;
use pretty_assertions::assert_eq;

use sqlschema_names::error::SchemaMetaError;
use sqlschema_names::information_schema::{build_table_tree, SchemaLoader};
use sqlschema_names::model::{
    ColumnAttributes, ColumnMetadata, QualifiedTableName, TableAttributes, TableMetadata,
};

use crate::common::{fixture_columns, fixture_constraints, fixture_tables, shop_snapshot};

fn table_name(name: &str) -> QualifiedTableName {
    QualifiedTableName::parse(name).unwrap()
}

#[test]
fn test_tree_drops_columns_of_unknown_tables() {
    let tree = build_table_tree(fixture_tables(), fixture_columns());
    let column_count: usize = tree.iter().map(|t| t.columns().len()).sum();
    assert_eq!(tree.len(), 3);
    assert_eq!(column_count, 9);
}

#[test]
fn test_load_database_info() -> Result<()> {
    let snapshot = shop_snapshot();
    let db = snapshot.load_database_info("SHOP")?;

    assert_eq!(db.server_name(), Some("localhost"));
    assert_eq!(db.tables().len(), 3);
    let schemas: Vec<&str> = db.schemas().iter().map(|s| s.schema_name()).collect();
    assert_eq!(schemas, vec!["Sales", "dbo"]);
    Ok(())
}

#[test]
fn test_load_table_info_computes_attributes() -> Result<()> {
    let snapshot = shop_snapshot();

    let orders = snapshot.load_table_info(&table_name("sales.orders"))?;
    assert!(orders.is_user_table());
    assert!(orders.is_system_versioned_temporal_table());
    assert!(orders.is_auto_numbered());
    assert!(!orders.is_composite_keyed());

    let lines = snapshot.load_table_info(&table_name("Sales.OrderLines"))?;
    assert_eq!(
        lines.attributes(),
        TableAttributes::USER_TABLE | TableAttributes::COMPOSITE_KEYED
    );
    let ordered: Vec<&str> = lines.columns().iter().map(|c| c.column_name()).collect();
    assert_eq!(ordered, vec!["OrderId", "LineNo"]);
    Ok(())
}

#[test]
fn test_load_table_columns() -> Result<()> {
    let snapshot = shop_snapshot();
    let columns = snapshot.load_table_columns(&table_name("Sales.Orders"))?;
    assert_eq!(columns.len(), 5);

    let id = columns.get_index(0).unwrap();
    assert!(id.is_primary_key());
    assert!(id.is_auto_number());
    assert!(id.is_indexed());
    assert!(id.is_readonly());

    let total = columns.get_index(2).unwrap();
    assert!(total.is_nullable());
    assert_eq!(total.data_type_definition(), Some("decimal(18,2)"));

    let valid_to = columns.get_index(4).unwrap();
    assert_eq!(
        valid_to.attributes(),
        ColumnAttributes::GENERATED_ALWAYS | ColumnAttributes::GENERATED_ALWAYS_AT_ROW_END
    );

    let orders = snapshot.load_table_info(&table_name("Sales.Orders"))?;
    assert_eq!(
        orders.insert_sql().as_str(),
        "INSERT INTO Sales.Orders ([CustomerId],[Total]) VALUES(@CustomerId,@Total)"
    );
    Ok(())
}

#[test]
fn test_load_database_info_with_tables() -> Result<()> {
    let snapshot = shop_snapshot();
    let db = snapshot.load_database_info_with_tables("Shop", &[table_name("dbo.Customers")])?;
    assert_eq!(db.tables().len(), 1);
    assert_eq!(db.schemas().len(), 1);

    let missing = snapshot.load_database_info_with_tables("Shop", &[table_name("dbo.Ghost")]);
    assert!(matches!(missing, Err(SchemaMetaError::NotFound { kind: "table", .. })));
    Ok(())
}

#[test]
fn test_unknown_database_and_table() {
    let snapshot = shop_snapshot();
    assert!(matches!(
        snapshot.load_tables("Warehouse"),
        Err(SchemaMetaError::NotFound { kind: "database", .. })
    ));
    assert!(snapshot.load_table_info(&table_name("dbo.Ghost")).is_err());
}

#[test]
fn test_load_tables_keeps_row_order() -> Result<()> {
    let tables = shop_snapshot().load_tables("Shop")?;
    let names: Vec<String> = tables.iter().map(|t| t.to_string()).collect();
    assert_eq!(names, vec!["Sales.Orders", "Sales.OrderLines", "dbo.Customers"]);
    Ok(())
}

#[test]
fn test_constraint_rows() {
    let constraints = fixture_constraints();
    let primary: Vec<_> = constraints
        .iter()
        .filter(|c| c.is_constraint_type("PRIMARY KEY"))
        .collect();
    assert_eq!(primary.len(), 1);
    assert_eq!(primary[0].qualified_constraint_name().to_string(), "Sales.PK_Orders");
    assert_eq!(
        primary[0].qualified_column_name().unwrap().to_quoted_sql_string(),
        "[Sales].[Orders].[OrderId]"
    );

    let check = constraints.iter().find(|c| c.is_constraint_type("CHECK")).unwrap();
    assert!(check.qualified_column_name().is_none());
    assert_eq!(check.qualified_table_name(), &table_name("Sales.Orders"));
}
