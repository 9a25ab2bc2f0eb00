/// Default page size for listings.
pub const DEFAULT_PAGE_LIMIT: u64 = 20;

/// Largest limit or offset SQLite binds; larger requests are clamped to it.
pub const MAX_PAGE_BOUND: u64 = i64::MAX as u64;

/// Offset-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl PageRequest {
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_BOUND),
            offset: offset.unwrap_or(0).min(MAX_PAGE_BOUND),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// A page of items plus the total number of matches ignoring pagination.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            limit: request.limit,
            offset: request.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_twenty_from_start() {
        let page = PageRequest::default();
        assert_eq!(page.limit, 20);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn limit_is_not_capped() {
        let page = PageRequest::new(Some(10_000), Some(40));
        assert_eq!(page.limit, 10_000);
        assert_eq!(page.offset, 40);
    }

    #[test]
    fn clamps_to_signed_range() {
        let page = PageRequest::new(Some(u64::MAX), Some(i64::MAX as u64 + 1));
        assert_eq!(page.limit, i64::MAX as u64);
        assert_eq!(page.offset, i64::MAX as u64);
    }
}
