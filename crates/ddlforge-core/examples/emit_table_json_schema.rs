use ddlforge_core::Table;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(Table);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
