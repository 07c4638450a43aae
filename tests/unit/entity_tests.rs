//! Metadata entity and attribute bitset tests

use pretty_assertions::assert_eq;

use sqlschema_names::model::{
    ColumnAttributes, ColumnFacts, ColumnMetadata, DatabaseInfo, GeneratedAlwaysType, QualifiedTableName,
    SqlLevelOneType, TableAttributes, TableConstant, TableFacts, TableInfo, TableMetadata,
};

// ============================================================================
// Attribute bitsets
// ============================================================================

#[test]
fn test_table_attribute_bits() {
    assert_eq!(TableAttributes::HISTORY_TABLE_FOR_SYSTEM_VERSIONED_TABLE.bits(), 1);
    assert_eq!(TableAttributes::SYSTEM_VERSIONED_TEMPORAL_TABLE.bits(), 2);
    assert_eq!(TableAttributes::USER_TABLE.bits(), 4);
    assert_eq!(TableAttributes::USER_TABLE_TYPE.bits(), 8);
    assert_eq!(TableAttributes::AUTO_NUMBERED.bits(), 16);
    assert_eq!(TableAttributes::COMPOSITE_KEYED.bits(), 32);
}

#[test]
fn test_from_facts_is_or_accumulation() {
    let facts = TableFacts {
        is_user_table: true,
        is_composite_keyed: true,
        ..Default::default()
    };
    let attrs = TableAttributes::from_facts(&facts);
    assert_eq!(attrs, TableAttributes::USER_TABLE | TableAttributes::COMPOSITE_KEYED);
    assert_eq!(TableAttributes::from_facts(&TableFacts::default()), TableAttributes::NONE);
}

#[test]
fn test_set_returns_fresh_value() {
    let base = ColumnAttributes::NULLABLE;
    let with_key = base.set(ColumnAttributes::PRIMARY_KEY, true);
    assert!(!base.contains(ColumnAttributes::PRIMARY_KEY));
    assert!(with_key.contains(ColumnAttributes::PRIMARY_KEY | ColumnAttributes::NULLABLE));

    let cleared = with_key.set(ColumnAttributes::NULLABLE, false);
    assert_eq!(cleared, ColumnAttributes::PRIMARY_KEY);
}

#[test]
fn test_from_bits_truncate_drops_unknown_bits() {
    let attrs = TableAttributes::from_bits_truncate(0xFFFF_FFFF);
    assert_eq!(attrs.bits(), 63);
    assert!((!TableAttributes::USER_TABLE).contains(TableAttributes::AUTO_NUMBERED));
    assert!(!(!TableAttributes::USER_TABLE).contains(TableAttributes::USER_TABLE));
}

#[test]
fn test_attributes_serialize_as_integer() {
    let attrs = ColumnAttributes::NULLABLE | ColumnAttributes::UPDATABLE;
    assert_eq!(serde_json::to_string(&attrs).unwrap(), "3");
    let parsed: ColumnAttributes = serde_json::from_str("3").unwrap();
    assert_eq!(parsed, attrs);
}

// ============================================================================
// Entities
// ============================================================================

#[test]
fn test_column_flags_follow_attributes() {
    let facts = ColumnFacts {
        is_nullable: true,
        is_row_guid: true,
        is_timestamp: true,
        ..Default::default()
    };
    let table = TableInfo::with_columns(
        "dbo.Audit",
        TableAttributes::USER_TABLE,
        [("RowId", ColumnAttributes::from_facts(&facts))],
    )
    .unwrap();
    let column = &table.columns()[0];
    assert!(column.is_nullable());
    assert!(column.is_row_guid());
    assert!(column.is_timestamp());
    assert!(column.is_readonly());
    assert!(!column.is_computed());
}

#[test]
fn test_table_constant_insert_sql() {
    let table = TableConstant::with_updatable_columns(
        "Sales.Customers",
        TableAttributes::USER_TABLE.bits(),
        [("CustomerId", false), ("Name", true), ("Email", true)],
    )
    .unwrap();
    assert_eq!(
        table.insert_sql().as_str(),
        "INSERT INTO Sales.Customers ([Name],[Email]) VALUES(@Name,@Email)"
    );
}

#[test]
fn test_table_constant_typed_columns() {
    let table = TableConstant::with_typed_columns(
        "dbo.Products",
        TableAttributes::USER_TABLE.bits() | TableAttributes::AUTO_NUMBERED.bits(),
        [
            ("ProductId", ColumnAttributes::PRIMARY_KEY.bits() | ColumnAttributes::AUTO_NUMBER.bits(), "int"),
            ("Price", ColumnAttributes::UPDATABLE.bits(), "decimal(18,2)"),
        ],
    )
    .unwrap();
    assert!(table.is_auto_numbered());
    let price = &table.columns()[1];
    assert_eq!(price.data_type_definition(), Some("decimal(18,2)"));
    assert_eq!(price.table_name(), &QualifiedTableName::parse("dbo.products").unwrap());
    assert_eq!(QualifiedTableName::from(&table).to_string(), "dbo.Products");
}

#[test]
fn test_table_constant_rejects_blank_column() {
    assert!(TableConstant::new("dbo.T", 0, [("", 0)]).is_err());
}

#[test]
fn test_table_info_column_lookup_is_case_insensitive() {
    let table = TableInfo::with_updatable_columns(
        "dbo.Orders",
        TableAttributes::USER_TABLE,
        [("OrderId", false), ("Total", true)],
    )
    .unwrap();
    assert!(table.column("TOTAL").unwrap().is_updatable());
    assert!(table.column("Missing").is_none());
    assert_eq!(table.insert_sql().as_str(), "INSERT INTO dbo.Orders ([Total]) VALUES(@Total)");
}

#[test]
fn test_database_groups_tables_by_schema() {
    let mut db = DatabaseInfo::new(None, "Shop");
    for name in ["Sales.Orders", "Sales.OrderLines", "dbo.Customers"] {
        db.add_table(TableInfo::new(QualifiedTableName::parse(name).unwrap(), TableAttributes::USER_TABLE))
            .unwrap();
    }
    let schema_names: Vec<&str> = db.schemas().iter().map(|s| s.schema_name()).collect();
    assert_eq!(schema_names, vec!["Sales", "dbo"]);
    assert_eq!(db.schema("sales").unwrap().tables().len(), 2);
    assert_eq!(db.to_string(), "Shop");
}

#[test]
fn test_object_type_enums() {
    assert_eq!(GeneratedAlwaysType::default(), GeneratedAlwaysType::NotGeneratedAlways);
    assert_eq!(SqlLevelOneType::Table.to_string(), "TABLE");
    assert_eq!("view".parse::<SqlLevelOneType>(), Ok(SqlLevelOneType::View));
}
