use std::fmt;

/// Renders a vendor's identity (auto-increment) column DDL.
pub trait IdentityColumnStrategy: fmt::Debug + Send + Sync {
    /// Whether [`column_fragment`](Self::column_fragment) embeds the column
    /// data type. Callers composing column DDL must not restate the type when
    /// this is true.
    fn includes_data_type(&self) -> bool {
        true
    }

    /// Column definition fragment marking the column as identity-generated,
    /// e.g. `bigint not null auto_increment`.
    fn column_fragment(&self, data_type: &str) -> String;

    /// Vendor query retrieving the last generated key for `table.column`,
    /// when the vendor exposes one outside the insert itself.
    fn post_insert_query(&self, table: &str, column: &str) -> Option<String>;
}

/// PostgreSQL identity columns (`generated by default as identity`).
#[derive(Debug)]
pub struct PostgresIdentity;

impl IdentityColumnStrategy for PostgresIdentity {
    fn column_fragment(&self, data_type: &str) -> String {
        format!("{data_type} generated by default as identity")
    }

    fn post_insert_query(&self, table: &str, column: &str) -> Option<String> {
        Some(format!("select currval('{table}_{column}_seq')"))
    }
}

/// MySQL identity columns (`auto_increment`).
#[derive(Debug)]
pub struct MySqlIdentity;

impl IdentityColumnStrategy for MySqlIdentity {
    fn column_fragment(&self, data_type: &str) -> String {
        format!("{data_type} not null auto_increment")
    }

    fn post_insert_query(&self, _table: &str, _column: &str) -> Option<String> {
        Some("select last_insert_id()".into())
    }
}

/// SQL Server identity columns (`identity`).
#[derive(Debug)]
pub struct SqlServerIdentity;

impl IdentityColumnStrategy for SqlServerIdentity {
    fn column_fragment(&self, data_type: &str) -> String {
        format!("{data_type} identity not null")
    }

    fn post_insert_query(&self, _table: &str, _column: &str) -> Option<String> {
        Some("select scope_identity()".into())
    }
}

/// Oracle 12c identity columns (`generated as identity`).
///
/// Generated keys come back from the insert itself, so there is no
/// post-insert query.
#[derive(Debug)]
pub struct OracleIdentity;

impl IdentityColumnStrategy for OracleIdentity {
    fn column_fragment(&self, data_type: &str) -> String {
        format!("{data_type} generated as identity")
    }

    fn post_insert_query(&self, _table: &str, _column: &str) -> Option<String> {
        None
    }
}
