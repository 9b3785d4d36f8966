use std::fmt;

/// Plain constraint data handed to unique delegates.
///
/// Strategies see resolved names and a qualified table name, never the
/// constraint model itself, which keeps them free of schema-model coupling.
#[derive(Debug, Clone)]
pub struct UniqueKeyData<'a> {
    /// Qualified table name as it should appear in DDL.
    pub table: &'a str,
    /// Resolved constraint name.
    pub name: &'a str,
    /// Column names in bind order.
    pub columns: Vec<&'a str>,
}

/// Renders a vendor's unique constraint DDL.
///
/// Each method returns one syntactically complete statement.
pub trait UniqueDelegate: fmt::Debug + Send + Sync {
    /// `alter table` statement adding the unique key.
    fn add_unique_key(&self, key: &UniqueKeyData<'_>) -> String;

    /// Statement dropping the unique key.
    fn drop_unique_key(&self, key: &UniqueKeyData<'_>) -> String;
}

/// ANSI-style unique constraints (`add constraint` / `drop constraint`).
#[derive(Debug)]
pub struct AnsiUniqueDelegate;

impl UniqueDelegate for AnsiUniqueDelegate {
    fn add_unique_key(&self, key: &UniqueKeyData<'_>) -> String {
        format!(
            "alter table {} add constraint {} unique ({})",
            key.table,
            key.name,
            key.columns.join(", ")
        )
    }

    fn drop_unique_key(&self, key: &UniqueKeyData<'_>) -> String {
        format!("alter table {} drop constraint {}", key.table, key.name)
    }
}

/// MySQL unique constraints: added like ANSI, dropped as an index.
#[derive(Debug)]
pub struct MySqlUniqueDelegate;

impl UniqueDelegate for MySqlUniqueDelegate {
    fn add_unique_key(&self, key: &UniqueKeyData<'_>) -> String {
        format!(
            "alter table {} add constraint {} unique ({})",
            key.table,
            key.name,
            key.columns.join(", ")
        )
    }

    fn drop_unique_key(&self, key: &UniqueKeyData<'_>) -> String {
        format!("alter table {} drop index {}", key.table, key.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key<'a>() -> UniqueKeyData<'a> {
        UniqueKeyData {
            table: "sales.orders",
            name: "UK_0123456789abcdef01234567",
            columns: vec!["customer_id", "status"],
        }
    }

    #[test]
    fn ansi_delegate_uses_add_and_drop_constraint() {
        let key = key();
        assert_eq!(
            AnsiUniqueDelegate.add_unique_key(&key),
            "alter table sales.orders add constraint UK_0123456789abcdef01234567 \
             unique (customer_id, status)"
        );
        assert_eq!(
            AnsiUniqueDelegate.drop_unique_key(&key),
            "alter table sales.orders drop constraint UK_0123456789abcdef01234567"
        );
    }

    #[test]
    fn mysql_delegate_drops_by_index() {
        let key = key();
        assert_eq!(
            MySqlUniqueDelegate.add_unique_key(&key),
            AnsiUniqueDelegate.add_unique_key(&key)
        );
        assert_eq!(
            MySqlUniqueDelegate.drop_unique_key(&key),
            "alter table sales.orders drop index UK_0123456789abcdef01234567"
        );
    }
}
