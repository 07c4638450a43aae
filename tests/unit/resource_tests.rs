//! SQL text resource tests

use pretty_assertions::assert_eq;

use sqlschema_names::error::ResourceError;
use sqlschema_names::information_schema::queries;
use sqlschema_names::resources::{resolve_name, CommandType, ResourceBundle, SqlProc, SqlQuery};

use crate::common::ResourceDir;

#[test]
fn test_resolution_contract() {
    assert_eq!(
        resolve_name("App.Data", "Sub\\Folder\\File.sql"),
        "App.Data.Sub.Folder.File.sql"
    );
    assert_eq!(resolve_name("App.Data", "app.data.File.sql"), "app.data.File.sql");
}

#[test]
fn test_from_dir_names_files_by_relative_path() {
    let dir = ResourceDir::new();
    dir.write("Tables.sql", b"SELECT * FROM INFORMATION_SCHEMA.TABLES")
        .write("Reports/Daily.sql", b"\xEF\xBB\xBFSELECT 'daily'")
        .write("Legacy/Latin1.sql", b"SELECT 'caf\xE9'");

    let bundle = ResourceBundle::from_dir("App.Data", dir.path()).unwrap();
    let names: Vec<&str> = bundle.resource_names().collect();
    assert_eq!(
        names,
        vec![
            "App.Data.Legacy.Latin1.sql",
            "App.Data.Reports.Daily.sql",
            "App.Data.Tables.sql",
        ]
    );

    assert_eq!(bundle.read_text("Reports\\Daily.sql").unwrap(), "SELECT 'daily'");
    assert_eq!(bundle.read_text("legacy.latin1.SQL").unwrap(), "SELECT 'café'");
    let query = bundle.read_query("App.Data.Tables.sql").unwrap();
    assert_eq!(query.command_type(), CommandType::Text);
}

#[test]
fn test_missing_resource_is_an_error() {
    let dir = ResourceDir::new();
    let bundle = ResourceBundle::from_dir("App.Data", dir.path()).unwrap();
    assert!(bundle.is_empty());
    match bundle.read_text("Nope.sql") {
        Err(ResourceError::NotFound { name }) => assert_eq!(name, "App.Data.Nope.sql"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_from_missing_dir_fails() {
    let dir = ResourceDir::new();
    let missing = dir.path().join("does-not-exist");
    assert!(matches!(
        ResourceBundle::from_dir("App", &missing),
        Err(ResourceError::ReadError { .. })
    ));
}

#[test]
fn test_bundled_information_schema_queries() {
    let tables = queries::select_info_schema_tables().unwrap();
    assert!(tables.as_str().contains("@SCHEMA_NAME"));
    assert!(queries::bundle().contains(queries::SELECT_INFO_SCHEMA_TABLE_CONSTRAINTS));
}

#[test]
fn test_sql_query_and_proc() {
    let query: SqlQuery = "SELECT 1".into();
    assert_eq!(String::from(query.clone()), "SELECT 1");
    assert_eq!(AsRef::<str>::as_ref(&query), "SELECT 1");

    let proc = SqlProc::from("dbo.usp_Refresh");
    assert_eq!(proc.command_type(), CommandType::StoredProcedure);
    assert_eq!(proc.to_string(), "dbo.usp_Refresh");
}
