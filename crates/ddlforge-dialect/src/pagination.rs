use std::fmt;
use std::sync::{Arc, LazyLock};

use ddlforge_core::{Error, Result};

/// Row window requested from a pagination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// Maximum number of rows to return.
    pub fetch: u64,
    /// Rows to skip before the window starts, when requested.
    pub offset: Option<u64>,
}

impl Limit {
    pub fn rows(fetch: u64) -> Self {
        Self {
            fetch,
            offset: None,
        }
    }

    pub fn window(fetch: u64, offset: u64) -> Self {
        Self {
            fetch,
            offset: Some(offset),
        }
    }
}

/// Renders a vendor's row-limiting clause around a complete query.
///
/// Strategies are stateless and shared between dialects; a dialect holds at
/// most one.
pub trait PaginationStrategy: fmt::Debug + Send + Sync {
    /// Whether the rendered clause can skip leading rows.
    fn supports_offset(&self) -> bool;

    /// Render `sql` with the requested row window applied.
    ///
    /// Fails with `Error::Unsupported` when `limit` carries an offset and the
    /// strategy has no offset form. The window is never silently narrowed.
    fn paginate(&self, sql: &str, limit: &Limit) -> Result<String>;
}

/// SQL:2008 `offset ... fetch` pagination.
#[derive(Debug)]
pub struct OffsetFetchPagination;

static OFFSET_FETCH: LazyLock<Arc<OffsetFetchPagination>> =
    LazyLock::new(|| Arc::new(OffsetFetchPagination));

impl OffsetFetchPagination {
    /// Single instance shared by every dialect speaking the standard form.
    pub fn shared() -> Arc<Self> {
        OFFSET_FETCH.clone()
    }
}

impl PaginationStrategy for OffsetFetchPagination {
    fn supports_offset(&self) -> bool {
        true
    }

    fn paginate(&self, sql: &str, limit: &Limit) -> Result<String> {
        Ok(match limit.offset {
            Some(offset) => format!(
                "{sql} offset {offset} rows fetch next {} rows only",
                limit.fetch
            ),
            None => format!("{sql} fetch first {} rows only", limit.fetch),
        })
    }
}

/// `limit`/`offset` pagination as spoken by PostgreSQL and MySQL.
#[derive(Debug)]
pub struct LimitOffsetPagination;

static LIMIT_OFFSET: LazyLock<Arc<LimitOffsetPagination>> =
    LazyLock::new(|| Arc::new(LimitOffsetPagination));

impl LimitOffsetPagination {
    /// Single instance shared by every dialect speaking `limit`/`offset`.
    pub fn shared() -> Arc<Self> {
        LIMIT_OFFSET.clone()
    }
}

impl PaginationStrategy for LimitOffsetPagination {
    fn supports_offset(&self) -> bool {
        true
    }

    fn paginate(&self, sql: &str, limit: &Limit) -> Result<String> {
        Ok(match limit.offset {
            Some(offset) => format!("{sql} limit {} offset {offset}", limit.fetch),
            None => format!("{sql} limit {}", limit.fetch),
        })
    }
}

/// ROWNUM subquery pagination for Oracle releases without `offset`/`fetch`.
///
/// An offset request wraps the query twice so the outer level can discard
/// the skipped rows.
#[derive(Debug)]
pub struct RownumPagination;

impl PaginationStrategy for RownumPagination {
    fn supports_offset(&self) -> bool {
        true
    }

    fn paginate(&self, sql: &str, limit: &Limit) -> Result<String> {
        let sql = sql.trim();
        Ok(match limit.offset {
            Some(offset) => format!(
                "select * from ( select row_.*, rownum rownum_ from ( {sql} ) row_ \
                 where rownum <= {} ) where rownum_ > {offset}",
                offset.saturating_add(limit.fetch)
            ),
            None => format!("select * from ( {sql} ) where rownum <= {}", limit.fetch),
        })
    }
}

/// `select top N` pagination for SQL Server releases without `offset`/`fetch`.
#[derive(Debug)]
pub struct TopPagination;

impl PaginationStrategy for TopPagination {
    fn supports_offset(&self) -> bool {
        false
    }

    fn paginate(&self, sql: &str, limit: &Limit) -> Result<String> {
        if limit.offset.is_some() {
            return Err(Error::Unsupported(
                "top pagination cannot skip rows".into(),
            ));
        }

        let sql = sql.trim_start();
        let lowered = sql.to_lowercase();
        let insert_at = if lowered.starts_with("select distinct ") {
            "select distinct ".len()
        } else if lowered.starts_with("select ") {
            "select ".len()
        } else {
            return Err(Error::Unsupported(format!(
                "top pagination requires a select statement: {sql}"
            )));
        };

        Ok(format!(
            "{}top {} {}",
            &sql[..insert_at],
            limit.fetch,
            &sql[insert_at..]
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_fetch_renders_standard_clauses() {
        let strategy = OffsetFetchPagination;
        assert_eq!(
            strategy
                .paginate("select * from orders", &Limit::rows(10))
                .expect("expected clause"),
            "select * from orders fetch first 10 rows only"
        );
        assert_eq!(
            strategy
                .paginate("select * from orders", &Limit::window(10, 20))
                .expect("expected clause"),
            "select * from orders offset 20 rows fetch next 10 rows only"
        );
    }

    #[test]
    fn limit_offset_renders_postgres_style_clauses() {
        let strategy = LimitOffsetPagination;
        assert_eq!(
            strategy
                .paginate("select * from orders", &Limit::rows(10))
                .expect("expected clause"),
            "select * from orders limit 10"
        );
        assert_eq!(
            strategy
                .paginate("select * from orders", &Limit::window(10, 20))
                .expect("expected clause"),
            "select * from orders limit 10 offset 20"
        );
    }

    #[test]
    fn rownum_wraps_once_without_offset() {
        let strategy = RownumPagination;
        assert_eq!(
            strategy
                .paginate("select * from orders", &Limit::rows(10))
                .expect("expected clause"),
            "select * from ( select * from orders ) where rownum <= 10"
        );
    }

    #[test]
    fn rownum_wraps_twice_with_offset() {
        let strategy = RownumPagination;
        let sql = strategy
            .paginate("select * from orders", &Limit::window(10, 20))
            .expect("expected clause");
        assert_eq!(
            sql,
            "select * from ( select row_.*, rownum rownum_ from ( select * from orders ) row_ \
             where rownum <= 30 ) where rownum_ > 20"
        );
    }

    #[test]
    fn rownum_saturates_oversized_windows() {
        let strategy = RownumPagination;
        let sql = strategy
            .paginate("select * from orders", &Limit::window(u64::MAX, 1))
            .expect("expected clause");
        assert!(sql.contains(&format!("rownum <= {}", u64::MAX)));
        assert!(sql.ends_with("where rownum_ > 1"));
    }

    #[test]
    fn top_rewrites_the_select_list() {
        let strategy = TopPagination;
        assert_eq!(
            strategy
                .paginate("select * from orders", &Limit::rows(10))
                .expect("expected clause"),
            "select top 10 * from orders"
        );
        assert_eq!(
            strategy
                .paginate("select distinct status from orders", &Limit::rows(5))
                .expect("expected clause"),
            "select distinct top 5 status from orders"
        );
    }

    #[test]
    fn top_rejects_offsets() {
        let strategy = TopPagination;
        assert!(!strategy.supports_offset());
        let err = strategy
            .paginate("select * from orders", &Limit::window(10, 20))
            .expect_err("expected unsupported offset");
        assert!(err.to_string().contains("cannot skip rows"));
    }

    #[test]
    fn shared_instances_are_reused() {
        assert!(Arc::ptr_eq(
            &OffsetFetchPagination::shared(),
            &OffsetFetchPagination::shared()
        ));
        assert!(Arc::ptr_eq(
            &LimitOffsetPagination::shared(),
            &LimitOffsetPagination::shared()
        ));
    }
}
