//! Core contracts and helpers for ddlforge.
//!
//! This crate defines the database-agnostic table and column descriptors,
//! the unique key constraint model, the deterministic constraint naming
//! engine, and validation helpers shared with the dialect layer.

pub mod constraint;
pub mod error;
pub mod naming;
pub mod schema;
pub mod validation;

pub use constraint::{UNIQUE_KEY_TAG, UniqueKey};
pub use error::{Error, Result};
pub use naming::{UNIQUE_KEY_PREFIX, constraint_name, export_identifier, unique_key_name};
pub use schema::{Column, Table};
pub use validation::{validate_table, validate_unique_key};
