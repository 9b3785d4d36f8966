use ddlforge_core::{Table, UniqueKey};
use ddlforge_dialect::{DialectRegistry, SchemaExport};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let table = Table::with_schema("sales", "orders").columns(["customer_id", "status"]);
    let mut key = UniqueKey::over(&table, ["customer_id", "status"])?;
    key.assign_generated_name()?;
    println!("-- constraint {}", key.export_identifier());

    let registry = DialectRegistry::with_builtins();
    for dialect in registry.iter() {
        println!("-- {}", dialect.display_name());
        for statement in key.sql_create_strings(dialect)? {
            println!("{statement};");
        }
        for statement in key.sql_drop_strings(dialect)? {
            println!("{statement};");
        }
    }

    Ok(())
}
