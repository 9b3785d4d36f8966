use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Prefix carried by generated unique key names.
pub const UNIQUE_KEY_PREFIX: &str = "UK_";

/// Digest bytes kept in generated names (24 hex characters once encoded).
const DIGEST_BYTES: usize = 12;

/// Generate a deterministic constraint name from a table and its columns.
///
/// The name is a pure function of the table logical name and the column name
/// set: columns are sorted before hashing, so bind order does not matter, and
/// repeated calls always agree. Table and column names are wrapped in
/// backtick-delimited tags before hashing, which keeps adjacent identifiers
/// from running together (`("a", ["bc"])` and `("ab", ["c"])` hash
/// differently).
///
/// The digest is the first 12 bytes of SHA-256 over the tagged string,
/// lowercase hex. Generated names end up persisted in database
/// catalogs, so the digest construction is a compatibility surface and must
/// not change between releases. Truncation leaves a residual chance that two
/// distinct column sets share a name; no runtime detection is attempted.
pub fn constraint_name(prefix: &str, table_name: &str, column_names: &[&str]) -> Result<String> {
    if table_name.is_empty() {
        return Err(Error::InvalidSchema(
            "cannot generate a constraint name for an unnamed table".into(),
        ));
    }
    if column_names.is_empty() {
        return Err(Error::InvalidSchema(format!(
            "constraint on {table_name} binds no columns"
        )));
    }

    let mut ordered: Vec<&str> = column_names.to_vec();
    ordered.sort_unstable();

    let mut canonical = format!("table`{table_name}`");
    for column in ordered {
        canonical.push_str("column`");
        canonical.push_str(column);
        canonical.push('`');
    }

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    Ok(format!("{prefix}{}", hex::encode(&digest[..DIGEST_BYTES])))
}

/// Generate the name for a unique key over `column_names`.
///
/// See [`constraint_name`] for the determinism and stability guarantees.
pub fn unique_key_name(table_name: &str, column_names: &[&str]) -> Result<String> {
    constraint_name(UNIQUE_KEY_PREFIX, table_name, column_names)
}

/// Build the loggable export identifier for a constraint.
///
/// Unlike generated names this preserves the column bind order, so two keys
/// over the same columns bound in different orders stay distinguishable in
/// diagnostics. Export identifiers never reach emitted SQL.
pub fn export_identifier(table_qualifier: &str, kind: &str, column_names: &[&str]) -> String {
    let mut id = format!("{table_qualifier}.{kind}");
    for column in column_names {
        id.push('_');
        id.push_str(column);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_name_ignores_bind_order() {
        let forward = unique_key_name("orders", &["customer_id", "status"])
            .expect("expected generated name");
        let reversed = unique_key_name("orders", &["status", "customer_id"])
            .expect("expected generated name");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn generated_name_has_fixed_shape() {
        let name = unique_key_name("orders", &["customer_id"]).expect("expected generated name");
        assert!(name.starts_with(UNIQUE_KEY_PREFIX));
        assert_eq!(name.len(), UNIQUE_KEY_PREFIX.len() + DIGEST_BYTES * 2);
        assert!(
            name[UNIQUE_KEY_PREFIX.len()..]
                .chars()
                .all(|c| c.is_ascii_hexdigit())
        );
    }

    #[test]
    fn tagging_keeps_adjacent_identifiers_apart() {
        let split_one = unique_key_name("a", &["bc"]).expect("expected generated name");
        let split_two = unique_key_name("ab", &["c"]).expect("expected generated name");
        assert_ne!(split_one, split_two);
    }

    #[test]
    fn distinct_column_sets_get_distinct_names() {
        let narrow = unique_key_name("orders", &["customer_id"]).expect("expected generated name");
        let wide = unique_key_name("orders", &["customer_id", "status"])
            .expect("expected generated name");
        assert_ne!(narrow, wide);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert!(unique_key_name("", &["customer_id"]).is_err());
        assert!(unique_key_name("orders", &[]).is_err());
    }

    #[test]
    fn export_identifier_preserves_bind_order() {
        let forward = export_identifier("orders", "UK", &["customer_id", "status"]);
        let reversed = export_identifier("orders", "UK", &["status", "customer_id"]);
        assert_eq!(forward, "orders.UK_customer_id_status");
        assert_eq!(reversed, "orders.UK_status_customer_id");
        assert_ne!(forward, reversed);
    }
}
