use thiserror::Error;

/// Core error type shared across ddlforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema object violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// The dialect does not provide a requested capability.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Convenience alias for results returned by ddlforge crates.
pub type Result<T> = std::result::Result<T, Error>;
