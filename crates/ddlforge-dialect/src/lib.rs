//! Dialect capability resolution and DDL rendering for ddlforge.
//!
//! A [`Dialect`] bundles the capability strategies one vendor and version
//! speak: pagination clauses, identity column DDL, and unique constraint
//! statements. Dialects are resolved from explicit override chains and
//! immutable afterwards; the [`SchemaExport`] seam renders constraint DDL
//! through them.

pub mod dialect;
pub mod export;
pub mod identity;
pub mod pagination;
pub mod registry;
pub mod unique;
pub mod vendor;

pub use dialect::{Dialect, DialectBuilder, DialectLayer, flags};
pub use export::SchemaExport;
pub use identity::{
    IdentityColumnStrategy, MySqlIdentity, OracleIdentity, PostgresIdentity, SqlServerIdentity,
};
pub use pagination::{
    Limit, LimitOffsetPagination, OffsetFetchPagination, PaginationStrategy, RownumPagination,
    TopPagination,
};
pub use registry::DialectRegistry;
pub use unique::{AnsiUniqueDelegate, MySqlUniqueDelegate, UniqueDelegate, UniqueKeyData};
