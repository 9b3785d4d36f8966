use tracing::debug;

use ddlforge_core::{Result, UniqueKey, validate_unique_key};

use crate::dialect::Dialect;
use crate::unique::UniqueKeyData;

/// Schema objects able to render their DDL for a dialect.
///
/// Statements come back in execution order and each is syntactically
/// complete. Nothing is executed here; callers own delivery.
pub trait SchemaExport {
    /// Ordered statements creating the object.
    fn sql_create_strings(&self, dialect: &Dialect) -> Result<Vec<String>>;

    /// Ordered statements dropping the object.
    fn sql_drop_strings(&self, dialect: &Dialect) -> Result<Vec<String>>;
}

impl SchemaExport for UniqueKey<'_> {
    fn sql_create_strings(&self, dialect: &Dialect) -> Result<Vec<String>> {
        validate_unique_key(self)?;
        let name = self.resolved_name()?;
        let table = self.table().qualified_name();
        let data = UniqueKeyData {
            table: &table,
            name: &name,
            columns: self.column_names(),
        };

        let statement = dialect.unique_delegate()?.add_unique_key(&data);
        debug!(
            dialect = %dialect.display_name(),
            constraint = %self.export_identifier(),
            "rendered unique key create"
        );
        Ok(vec![statement])
    }

    fn sql_drop_strings(&self, dialect: &Dialect) -> Result<Vec<String>> {
        validate_unique_key(self)?;
        let name = self.resolved_name()?;
        let table = self.table().qualified_name();
        let data = UniqueKeyData {
            table: &table,
            name: &name,
            columns: self.column_names(),
        };

        let statement = dialect.unique_delegate()?.drop_unique_key(&data);
        debug!(
            dialect = %dialect.display_name(),
            constraint = %self.export_identifier(),
            "rendered unique key drop"
        );
        Ok(vec![statement])
    }
}
