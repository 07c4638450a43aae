//! Identifier quoting and PARSENAME tests

use pretty_assertions::assert_eq;

use sqlschema_names::parser::{
    encode_identifier, parse_name, parse_name_components, quote_name, quote_name_with, remove_quotes, QuoteStyle,
};

// ============================================================================
// QUOTENAME
// ============================================================================

#[test]
fn test_quote_name_scenarios() {
    assert_eq!(quote_name("Object").as_deref(), Some("[Object]"));
    assert_eq!(quote_name_with(Some("Object"), "'").as_deref(), Some("'Object'"));
    assert_eq!(quote_name_with(Some(""), "[]"), None);
    assert_eq!(quote_name_with(Some("Object"), "??"), None);
}

#[test]
fn test_quote_name_none_and_blank() {
    assert_eq!(quote_name_with(None, "[]"), None);
    assert_eq!(quote_name("   "), None);
}

#[test]
fn test_quote_name_all_styles() {
    let cases = [
        ("[]", "[x]"),
        ("[", "[x]"),
        ("]", "[x]"),
        ("\"", "\"x\""),
        ("()", "(x)"),
        (")", "(x)"),
        ("<>", "<x>"),
        ("><", ">x<"),
        ("{}", "{x}"),
        ("}", "{x}"),
        ("`", "`x`"),
    ];
    for (style, expected) in cases {
        assert_eq!(
            quote_name_with(Some("x"), style).as_deref(),
            Some(expected),
            "quote style {:?}",
            style
        );
    }
}

#[test]
fn test_quote_name_is_idempotent() {
    let once = quote_name("Orders").unwrap();
    let twice = quote_name(&once).unwrap();
    assert_eq!(once, twice);

    let single = quote_name_with(Some("'Orders'"), "'").unwrap();
    assert_eq!(single, "'Orders'");
}

#[test]
fn test_quote_style_display() {
    assert_eq!(QuoteStyle::Brackets.to_string(), "[]");
    assert_eq!(QuoteStyle::SingleQuote.to_string(), "'");
    assert_eq!(QuoteStyle::default(), QuoteStyle::Brackets);
}

#[test]
fn test_remove_quotes_round_trip() {
    for name in ["Orders", "Order Lines", "dbo", "x1", "Ünïcode"] {
        let quoted = quote_name(name).unwrap();
        assert_eq!(remove_quotes(Some(&quoted)).as_deref(), Some(name));
        for style in ["'", "\"", "()", "<>", "{}", "`"] {
            let quoted = quote_name_with(Some(name), style).unwrap();
            assert_eq!(remove_quotes(Some(&quoted)).as_deref(), Some(name), "style {}", style);
        }
    }
}

#[test]
fn test_remove_quotes_edge_cases() {
    assert_eq!(remove_quotes(None), None);
    assert_eq!(remove_quotes(Some("")).as_deref(), Some(""));
    assert_eq!(remove_quotes(Some("[[x]]")).as_deref(), Some("x"));
}

#[test]
fn test_encode_identifier_escapes_closing_bracket() {
    assert_eq!(encode_identifier("Odd]Name"), "[Odd]]Name]");
    assert_eq!(encode_identifier(""), "[]");
}

// ============================================================================
// PARSENAME
// ============================================================================

#[test]
fn test_parse_name_out_of_range() {
    assert_eq!(parse_name("Schema.Object", 0), None);
    assert_eq!(parse_name("Schema.Object", 3), None);
    assert_eq!(parse_name("Object", 1), Some("Object"));
}

#[test]
fn test_parse_name_components_single_part() {
    let name = parse_name_components("Object");
    assert_eq!(name.object_name, "Object");
    assert_eq!(name.schema_name, "dbo");
    assert_eq!(name.database_name, None);
    assert_eq!(name.server_name, None);
    assert!(!name.is_database_qualified());
}

#[test]
fn test_parse_name_components_four_parts() {
    let name = parse_name_components("[Srv].[Db].[Sales].[Orders]");
    assert_eq!(name.part(0), Some("Orders"));
    assert_eq!(name.part(1), Some("Sales"));
    assert_eq!(name.part(2), Some("Db"));
    assert_eq!(name.part(3), Some("Srv"));
    assert_eq!(name.part(4), None);
    assert!(name.is_server_qualified());
    assert_eq!(name.to_string(), "Srv.Db.Sales.Orders");
    assert_eq!(name.to_quoted_sql_string(), "[Srv].[Db].[Sales].[Orders]");
}

#[test]
fn test_parse_name_components_never_fails() {
    let empty = parse_name_components("");
    assert_eq!(empty.object_name, "");
    assert_eq!(empty.schema_name, "dbo");

    let dots = parse_name_components("..");
    assert_eq!(dots.object_name, "");
    assert_eq!(dots.schema_name, "");
    assert_eq!(dots.database_name.as_deref(), Some(""));

    let five = parse_name_components("a.b.c.d.e");
    assert_eq!(five.object_name, "e");
    assert_eq!(five.server_name.as_deref(), Some("b"));
}

#[test]
fn test_parse_name_components_is_idempotent() {
    for input in ["Sales.Orders", "Db.Sales.Orders", "Srv.Db.Sales.Orders"] {
        let first = parse_name_components(input);
        let second = parse_name_components(&first.to_string());
        assert_eq!(first, second, "input {}", input);
    }
}
