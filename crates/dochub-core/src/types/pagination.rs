//! Limit/offset pagination for list endpoints.
//!
//! List endpoints accept raw `limit` and `offset` query parameters and
//! return a [`PageMeta`] block alongside the rows. The metadata formula
//! is part of the external API contract and is preserved exactly,
//! including its odd final-page behavior (see [`PageMeta::compute`]).

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default number of rows returned when `limit` is absent.
const DEFAULT_LIMIT: u64 = 10;

/// Validated limit/offset pair for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Maximum rows to return.
    pub limit: u64,
    /// Rows to skip before the first returned row.
    pub offset: u64,
}

impl ListQuery {
    /// Parse raw query-string values into a validated query.
    ///
    /// Both parameters are optional. Values that are present but do not
    /// parse as non-negative integers are rejected with the message the
    /// API has always returned. A zero limit is rejected as well since
    /// the page arithmetic divides by it.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Result<Self, AppError> {
        let limit = match limit {
            Some(raw) => parse_param(raw)?,
            None => DEFAULT_LIMIT,
        };
        let offset = match offset {
            Some(raw) => parse_param(raw)?,
            None => 0,
        };

        if limit == 0 {
            return Err(AppError::validation("Limit must be greater than zero"));
        }

        Ok(Self { limit, offset })
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

fn parse_param(raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| AppError::validation("Offset/Limit must be an integer"))
}

/// Page metadata derived from a limit/offset query and a total row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total matching rows across all pages.
    pub total_count: u64,
    /// 1-based page the offset falls on.
    pub current_page: u64,
    /// Total number of pages.
    pub page_count: u64,
    /// Rows on the current page.
    pub page_size: u64,
}

impl PageMeta {
    /// Compute page metadata for a query against `total_count` rows.
    ///
    /// `limit` must be positive; [`ListQuery::parse`] guarantees that
    /// upstream. Limit and offset are clamped to `total_count` when they
    /// exceed it.
    ///
    /// The final page size is derived from the remainder against the
    /// *offset* rather than the limit. For offsets that are not a
    /// multiple of the limit this looks wrong, but it is what existing
    /// clients were built against, so it stays.
    pub fn compute(limit: u64, offset: u64, total_count: u64) -> Self {
        if total_count == 0 {
            return Self {
                total_count: 0,
                current_page: 1,
                page_count: 0,
                page_size: 0,
            };
        }

        let limit = limit.min(total_count);
        let offset = offset.min(total_count);

        let current_page = offset / limit + 1;
        let page_count = total_count.div_ceil(limit);

        let page_size = if current_page == page_count && offset != 0 {
            let remainder = total_count % offset;
            if remainder == 0 {
                total_count - offset
            } else {
                remainder
            }
        } else {
            limit
        };

        Self {
            total_count,
            current_page,
            page_count,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_full_page() {
        let meta = PageMeta::compute(2, 0, 2);
        assert_eq!(meta.total_count, 2);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.page_count, 1);
        assert_eq!(meta.page_size, 2);
    }

    #[test]
    fn test_final_partial_page() {
        let meta = PageMeta::compute(3, 3, 4);
        assert_eq!(meta.total_count, 4);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.page_count, 2);
        assert_eq!(meta.page_size, 1);
    }

    #[test]
    fn test_final_page_with_zero_remainder() {
        // 4 % 2 == 0, so the final page size falls back to total - offset.
        let meta = PageMeta::compute(2, 2, 4);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.page_count, 2);
        assert_eq!(meta.page_size, 2);
    }

    #[test]
    fn test_limit_exceeds_total() {
        let meta = PageMeta::compute(50, 0, 7);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.page_count, 1);
        assert_eq!(meta.page_size, 7);
    }

    #[test]
    fn test_offset_exceeds_total() {
        // Offset clamps to the total; the query lands past the last row,
        // so the remainder rule yields an empty final page.
        let meta = PageMeta::compute(2, 100, 5);
        assert_eq!(meta.total_count, 5);
        assert_eq!(meta.current_page, 3);
        assert_eq!(meta.page_count, 3);
        assert_eq!(meta.page_size, 0);
    }

    #[test]
    fn test_zero_total() {
        let meta = PageMeta::compute(10, 0, 0);
        assert_eq!(meta.total_count, 0);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.page_count, 0);
        assert_eq!(meta.page_size, 0);
    }

    #[test]
    fn test_first_page_of_many() {
        let meta = PageMeta::compute(10, 0, 95);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.page_count, 10);
        assert_eq!(meta.page_size, 10);
    }

    #[test]
    fn test_middle_page_uses_limit() {
        let meta = PageMeta::compute(10, 10, 95);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.page_count, 10);
        assert_eq!(meta.page_size, 10);
    }

    #[test]
    fn test_page_count_invariants() {
        // offset == total is excluded: an offset equal to the row count
        // can land one past the last page when the limit divides the
        // total evenly (e.g. limit 2, offset 4, total 4).
        for total in 1..40u64 {
            for limit in 1..10u64 {
                for offset in 0..total {
                    let meta = PageMeta::compute(limit, offset, total);
                    assert_eq!(meta.page_count, total.div_ceil(limit.min(total)));
                    assert!(meta.current_page >= 1);
                    assert!(meta.current_page <= meta.page_count);
                }
            }
        }
    }

    #[test]
    fn test_parse_defaults() {
        let q = ListQuery::parse(None, None).unwrap();
        assert_eq!(q.limit, 10);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn test_parse_values() {
        let q = ListQuery::parse(Some("25"), Some("50")).unwrap();
        assert_eq!(q.limit, 25);
        assert_eq!(q.offset, 50);
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let err = ListQuery::parse(Some("ten"), None).unwrap_err();
        assert_eq!(err.message, "Offset/Limit must be an integer");

        let err = ListQuery::parse(None, Some("3.5")).unwrap_err();
        assert_eq!(err.message, "Offset/Limit must be an integer");

        let err = ListQuery::parse(Some("-1"), None).unwrap_err();
        assert_eq!(err.message, "Offset/Limit must be an integer");
    }

    #[test]
    fn test_parse_rejects_zero_limit() {
        let err = ListQuery::parse(Some("0"), None).unwrap_err();
        assert_eq!(err.message, "Limit must be greater than zero");
    }
}
