use std::collections::BTreeMap;

use ddlforge_core::{Error, Result};

use crate::dialect::Dialect;
use crate::vendor::{mssql, mysql, oracle, postgres};

/// Catalog of resolved dialects keyed by vendor and version.
///
/// Registries are built explicitly; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct DialectRegistry {
    dialects: BTreeMap<(String, String), Dialect>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in vendor dialect registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(postgres::dialect());
        registry.register(mysql::dialect());
        registry.register(mssql::dialect_2008());
        registry.register(mssql::dialect_2012());
        registry.register(oracle::dialect_10g());
        registry.register(oracle::dialect_12c());
        registry
    }

    /// Register a dialect. A later registration for the same vendor and
    /// version replaces the earlier one.
    pub fn register(&mut self, dialect: Dialect) {
        let key = (dialect.vendor().to_string(), dialect.version().to_string());
        self.dialects.insert(key, dialect);
    }

    pub fn get(&self, vendor: &str, version: &str) -> Option<&Dialect> {
        self.dialects
            .get(&(vendor.to_string(), version.to_string()))
    }

    /// Like [`get`](Self::get) but failing with `Error::Unsupported` when no
    /// dialect is registered for the pair.
    pub fn require(&self, vendor: &str, version: &str) -> Result<&Dialect> {
        self.get(vendor, version).ok_or_else(|| {
            Error::Unsupported(format!("no dialect registered for {vendor} {version}"))
        })
    }

    /// The highest registered version for `vendor`, comparing version labels
    /// lexicographically.
    pub fn latest(&self, vendor: &str) -> Option<&Dialect> {
        self.dialects
            .iter()
            .filter(|((candidate, _), _)| candidate == vendor)
            .map(|(_, dialect)| dialect)
            .next_back()
    }

    /// Iterate registered dialects in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Dialect> {
        self.dialects.values()
    }

    /// Display names of every registered dialect, in key order.
    pub fn names(&self) -> Vec<String> {
        self.dialects.values().map(Dialect::display_name).collect()
    }
}
