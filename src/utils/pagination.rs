//! Pagination arithmetic shared by list endpoints.

/// Offset of the first record on `page`, for 1-based pages.
///
/// Saturates instead of overflowing: a page number near `i64::MAX`
/// yields a huge offset and an empty slice, not a panic or a negative
/// offset reaching SQL.
pub fn offset(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Number of pages needed to cover `total` records at `limit` per page.
///
/// An empty result set has zero pages, not one.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total == 0 {
        0
    } else {
        // Stable equivalent of `total.div_ceil(limit)`; signed div_ceil
        // is unstable (int_roundings).
        let (q, r) = (total / limit, total % limit);
        if (r > 0 && limit > 0) || (r < 0 && limit < 0) {
            q + 1
        } else {
            q
        }
    }
}
