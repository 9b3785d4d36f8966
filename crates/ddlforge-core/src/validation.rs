use std::collections::BTreeSet;

use crate::constraint::UniqueKey;
use crate::error::{Error, Result};
use crate::schema::Table;

/// Validate internal consistency of a table definition.
///
/// This checks:
/// - the logical name is present
/// - at least one column is declared
/// - column names are unique
pub fn validate_table(table: &Table) -> Result<()> {
    if table.name.is_empty() {
        return Err(Error::InvalidSchema("table has no name".into()));
    }
    if table.columns.is_empty() {
        return Err(Error::InvalidSchema(format!(
            "table has no columns: {}",
            table.name
        )));
    }

    let mut seen = BTreeSet::new();
    for column in &table.columns {
        if column.name.is_empty() {
            return Err(Error::InvalidSchema(format!(
                "column with empty name: {}",
                table.name
            )));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate column name: {}.{}",
                table.name, column.name
            )));
        }
    }

    Ok(())
}

/// Validate that a unique key can be rendered as DDL.
///
/// Rejects keys whose table has no logical name and keys binding no columns,
/// before any SQL is assembled.
pub fn validate_unique_key(key: &UniqueKey<'_>) -> Result<()> {
    if key.table().name.is_empty() {
        return Err(Error::InvalidSchema(
            "unique key on a table with no name".into(),
        ));
    }
    if key.columns().is_empty() {
        return Err(Error::InvalidSchema(format!(
            "unique key binds no columns: {}",
            key.table().name
        )));
    }

    Ok(())
}
