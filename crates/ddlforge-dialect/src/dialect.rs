use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use ddlforge_core::{Error, Result};

use crate::identity::IdentityColumnStrategy;
use crate::pagination::PaginationStrategy;
use crate::unique::UniqueDelegate;

/// Well-known default property names.
pub mod flags {
    /// Whether batched updates may include versioned rows.
    pub const BATCH_VERSIONED_DATA: &str = "batch_versioned_data";
    /// Whether inserts should rely on driver-returned generated keys.
    pub const USE_GENERATED_KEYS_ON_INSERT: &str = "use_generated_keys_on_insert";
    /// Suggested driver fetch size for statements.
    pub const STATEMENT_FETCH_SIZE: &str = "statement_fetch_size";
    /// Whether binary values should be read and written through streams.
    pub const USE_STREAMS_FOR_BINARY: &str = "use_streams_for_binary";
}

/// Capability bundle for one database vendor and version.
///
/// A dialect is resolved once from its layer chain and immutable afterwards;
/// it can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Dialect {
    vendor: String,
    version: String,
    pagination: Option<Arc<dyn PaginationStrategy>>,
    identity: Option<Arc<dyn IdentityColumnStrategy>>,
    unique: Option<Arc<dyn UniqueDelegate>>,
    defaults: BTreeMap<String, String>,
    open_quote: char,
    close_quote: char,
}

impl Dialect {
    /// Resolve a dialect from an override chain, applied base to derived.
    ///
    /// Later layers win on conflicts: a capability or default set by a
    /// derived layer replaces whatever a base layer installed.
    pub fn from_layers(
        vendor: impl Into<String>,
        version: impl Into<String>,
        layers: &[&dyn DialectLayer],
    ) -> Self {
        let mut builder = DialectBuilder::new();
        for layer in layers {
            layer.apply(&mut builder);
        }

        let dialect = builder.build(vendor, version);
        debug!(
            dialect = %dialect.display_name(),
            layers = layers.len(),
            "dialect resolved"
        );
        dialect
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Loggable `vendor version` label.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.vendor, self.version)
    }

    /// The pagination strategy, or `Error::Unsupported` when the dialect has
    /// none.
    pub fn pagination_strategy(&self) -> Result<&dyn PaginationStrategy> {
        self.pagination.as_deref().ok_or_else(|| {
            Error::Unsupported(format!(
                "dialect {} has no pagination strategy",
                self.display_name()
            ))
        })
    }

    /// The identity column strategy, or `Error::Unsupported` when the dialect
    /// has none.
    pub fn identity_strategy(&self) -> Result<&dyn IdentityColumnStrategy> {
        self.identity.as_deref().ok_or_else(|| {
            Error::Unsupported(format!(
                "dialect {} has no identity column strategy",
                self.display_name()
            ))
        })
    }

    /// The unique constraint delegate, or `Error::Unsupported` when the
    /// dialect has none.
    pub fn unique_delegate(&self) -> Result<&dyn UniqueDelegate> {
        self.unique.as_deref().ok_or_else(|| {
            Error::Unsupported(format!(
                "dialect {} has no unique constraint delegate",
                self.display_name()
            ))
        })
    }

    /// Default properties frozen at construction.
    pub fn default_properties(&self) -> &BTreeMap<String, String> {
        &self.defaults
    }

    pub fn default_property(&self, key: &str) -> Option<&str> {
        self.defaults.get(key).map(String::as_str)
    }

    /// Quote `ident` with the dialect's identifier quote characters, doubling
    /// any embedded close quote.
    pub fn quote(&self, ident: &str) -> String {
        let mut quoted = String::with_capacity(ident.len() + 2);
        quoted.push(self.open_quote);
        for ch in ident.chars() {
            quoted.push(ch);
            if ch == self.close_quote {
                quoted.push(ch);
            }
        }
        quoted.push(self.close_quote);
        quoted
    }
}

/// One level of a dialect override chain.
///
/// A layer describes what one vendor level contributes: the capabilities it
/// installs or removes and the defaults it sets.
pub trait DialectLayer {
    fn apply(&self, builder: &mut DialectBuilder);
}

/// Mutable state a dialect is resolved through.
///
/// The builder is single-writer by construction: layers receive it
/// exclusively and in order, then [`build`](Self::build) freezes the result.
#[derive(Debug)]
pub struct DialectBuilder {
    pagination: Option<Arc<dyn PaginationStrategy>>,
    identity: Option<Arc<dyn IdentityColumnStrategy>>,
    unique: Option<Arc<dyn UniqueDelegate>>,
    defaults: BTreeMap<String, String>,
    open_quote: char,
    close_quote: char,
}

impl DialectBuilder {
    pub fn new() -> Self {
        Self {
            pagination: None,
            identity: None,
            unique: None,
            defaults: BTreeMap::new(),
            open_quote: '"',
            close_quote: '"',
        }
    }

    pub fn set_pagination(&mut self, strategy: Arc<dyn PaginationStrategy>) -> &mut Self {
        self.pagination = Some(strategy);
        self
    }

    pub fn set_identity(&mut self, strategy: Arc<dyn IdentityColumnStrategy>) -> &mut Self {
        self.identity = Some(strategy);
        self
    }

    /// Remove the identity capability, even when a base layer installed one.
    pub fn clear_identity(&mut self) -> &mut Self {
        self.identity = None;
        self
    }

    pub fn set_unique_delegate(&mut self, delegate: Arc<dyn UniqueDelegate>) -> &mut Self {
        self.unique = Some(delegate);
        self
    }

    /// Set a default property; later writes to the same key win.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    pub fn set_quotes(&mut self, open: char, close: char) -> &mut Self {
        self.open_quote = open;
        self.close_quote = close;
        self
    }

    /// Freeze the accumulated state into an immutable dialect.
    pub fn build(self, vendor: impl Into<String>, version: impl Into<String>) -> Dialect {
        Dialect {
            vendor: vendor.into(),
            version: version.into(),
            pagination: self.pagination,
            identity: self.identity,
            unique: self.unique,
            defaults: self.defaults,
            open_quote: self.open_quote,
            close_quote: self.close_quote,
        }
    }
}

impl Default for DialectBuilder {
    fn default() -> Self {
        Self::new()
    }
}
