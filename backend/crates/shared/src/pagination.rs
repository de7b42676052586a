//! Pagination
//!
//! Length-aware page shape returned by every listing endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Default page size for listings
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Requested page (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Page numbers below 1 clamp to 1, a zero page size falls back to the default
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: if per_page == 0 {
                DEFAULT_PER_PAGE
            } else {
                per_page
            },
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Row offset for `OFFSET`
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// `?page=N` query string
///
/// Values below 1 clamp to 1; anything that is not an integer is ignored.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<u32>,
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.trim().parse::<i64>().ok())
        .map(|page| u32::try_from(page.max(1)).unwrap_or(u32::MAX)))
}

impl PageQuery {
    pub fn with_per_page(self, per_page: u32) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), per_page)
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
    /// 1-based index of the first item on this page, `None` when empty
    pub from: Option<u64>,
    /// 1-based index of the last item on this page, `None` when empty
    pub to: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, request: PageRequest) -> Self {
        let per_page = u64::from(request.per_page());
        let last_page = u32::try_from(total.div_ceil(per_page).max(1)).unwrap_or(u32::MAX);

        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            let first = request.offset() + 1;
            (Some(first), Some(first + data.len() as u64 - 1))
        };

        Self {
            current_page: request.page(),
            data,
            per_page: request.per_page(),
            total,
            last_page,
            from,
            to,
        }
    }

    /// Convert the items while keeping the page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            current_page: self.current_page,
            data: self.data.into_iter().map(f).collect(),
            per_page: self.per_page,
            total: self.total,
            last_page: self.last_page,
            from: self.from,
            to: self.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), DEFAULT_PER_PAGE);
        assert_eq!(request.offset(), 0);

        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_page_query_is_lenient() {
        let page = |value: serde_json::Value| {
            serde_json::from_value::<PageQuery>(value)
                .unwrap()
                .with_per_page(DEFAULT_PER_PAGE)
                .page()
        };

        assert_eq!(page(serde_json::json!({ "page": "3" })), 3);
        assert_eq!(page(serde_json::json!({ "page": "0" })), 1);
        assert_eq!(page(serde_json::json!({ "page": "-1" })), 1);
        assert_eq!(page(serde_json::json!({ "page": "abc" })), 1);
        assert_eq!(page(serde_json::json!({})), 1);
    }

    #[test]
    fn test_page_bounds() {
        let page = Page::new(vec![1, 2, 3], 23, PageRequest::new(3, 10));
        assert_eq!(page.last_page, 3);
        assert_eq!(page.from, Some(21));
        assert_eq!(page.to, Some(23));
    }

    #[test]
    fn test_empty_page() {
        let page: Page<i32> = Page::new(Vec::new(), 0, PageRequest::default());
        assert_eq!(page.last_page, 1);
        assert_eq!(page.from, None);
        assert_eq!(page.to, None);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 12, PageRequest::new(2, 10)).map(|n| n * 10);
        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total, 12);
    }
}
