use crate::error::{Error, Result};
use crate::naming;
use crate::schema::{Column, Table};

/// Short tag identifying unique keys in export identifiers.
pub const UNIQUE_KEY_TAG: &str = "UK";

/// A unique key bound to columns of a single table.
///
/// The key borrows its table for its whole lifetime, so a table can never be
/// dropped while constraints still point at it. Column bind order is
/// preserved: generated SQL names ignore it, export identifiers keep it.
#[derive(Debug, Clone)]
pub struct UniqueKey<'a> {
    table: &'a Table,
    name: Option<String>,
    columns: Vec<&'a Column>,
}

impl<'a> UniqueKey<'a> {
    /// Start an unnamed unique key on `table`.
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            name: None,
            columns: Vec::new(),
        }
    }

    /// Start a unique key with an explicit constraint name.
    pub fn named(table: &'a Table, name: impl Into<String>) -> Self {
        Self {
            table,
            name: Some(name.into()),
            columns: Vec::new(),
        }
    }

    /// Build an unnamed unique key over the named columns of `table`.
    ///
    /// Fails with `Error::InvalidSchema` when a column is not declared on the
    /// table.
    pub fn over<I, S>(table: &'a Table, column_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = Self::new(table);
        for name in column_names {
            key.bind(name.as_ref())?;
        }
        Ok(key)
    }

    /// Bind a column in call order. Rebinding an already bound column is a
    /// no-op.
    pub fn bind_column(&mut self, column: &'a Column) {
        if !self.columns.iter().any(|bound| bound.name == column.name) {
            self.columns.push(column);
        }
    }

    /// Look up `column_name` on the table and bind it.
    pub fn bind(&mut self, column_name: &str) -> Result<()> {
        let column = self.table.find_column(column_name).ok_or_else(|| {
            Error::InvalidSchema(format!(
                "no column {} on table {}",
                column_name, self.table.name
            ))
        })?;
        self.bind_column(column);
        Ok(())
    }

    /// Replace the constraint name with an explicit one.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The explicit or previously generated name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    /// Bound columns in bind order.
    pub fn columns(&self) -> &[&'a Column] {
        &self.columns
    }

    /// Bound column names in bind order.
    pub fn column_names(&self) -> Vec<&'a str> {
        self.columns
            .iter()
            .copied()
            .map(|column| column.name.as_str())
            .collect()
    }

    /// Generate and store the deterministic name if the key is still unnamed.
    ///
    /// Meant for the schema-build phase, before the key is shared. Once a
    /// name is present (explicit or generated) later calls keep it.
    pub fn assign_generated_name(&mut self) -> Result<&str> {
        let name = match self.name.take() {
            Some(name) => name,
            None => naming::unique_key_name(&self.table.name, &self.column_names())?,
        };
        Ok(self.name.insert(name))
    }

    /// The name DDL emission uses: the stored name when present, the
    /// deterministic generated name otherwise.
    ///
    /// Generation is a pure function of table and column names, so concurrent
    /// callers resolving a shared unnamed key always agree.
    pub fn resolved_name(&self) -> Result<String> {
        match &self.name {
            Some(name) => Ok(name.clone()),
            None => naming::unique_key_name(&self.table.name, &self.column_names()),
        }
    }

    /// Identifier used to address this key in logs and diagnostics, e.g.
    /// `orders.UK_customer_id_status`. Preserves bind order and never reaches
    /// emitted SQL.
    pub fn export_identifier(&self) -> String {
        naming::export_identifier(
            &self.table.qualified_name(),
            UNIQUE_KEY_TAG,
            &self.column_names(),
        )
    }
}
