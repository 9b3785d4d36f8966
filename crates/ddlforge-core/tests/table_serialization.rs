use ddlforge_core::Table;
use schemars::schema_for;

#[test]
fn serializes_table_deterministically() {
    let table = Table::with_schema("sales", "orders").columns(["customer_id", "status"]);

    let json = serde_json::to_string_pretty(&table).expect("serialize table");
    let expected = r#"{
  "schema": "sales",
  "name": "orders",
  "columns": [
    {
      "name": "customer_id"
    },
    {
      "name": "status"
    }
  ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn round_trips_through_json() {
    let table = Table::new("orders").columns(["customer_id", "status"]);

    let json = serde_json::to_string(&table).expect("serialize table");
    let back: Table = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(back, table);
}

#[test]
fn json_schema_describes_the_table_contract() {
    let generated = schema_for!(Table);
    let json = serde_json::to_value(&generated).expect("serialize generated schema");

    assert_eq!(json["title"], "Table");
    let required = json["required"].as_array().expect("required fields");
    assert!(required.contains(&serde_json::json!("name")));
    assert!(required.contains(&serde_json::json!("columns")));
    assert!(!required.contains(&serde_json::json!("schema")));
}
