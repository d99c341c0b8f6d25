//! Shared pieces of the paginated list envelope.
//!
//! Every list endpoint answers with
//! `{success, data, pagination, query}`; the resource-specific total field
//! (`totalAdmins`, `totalProducts`, `totalOrders`) lives in each handler's
//! pagination struct, flattened around [`PageInfo`].

use serde::{Deserialize, Serialize};
use shopfront_store::{ListQuery, Page, SortOrder};

/// Pagination metadata common to every list response.
///
/// `total_pages` is `ceil(total / page_size)`, so an empty result set reports
/// zero pages while `has_previous_page` still reflects the requested page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The 1-based page that was served.
    pub current_page: u64,
    /// Records per page after normalization.
    pub page_size: u64,
    /// Total number of pages for the filtered set.
    pub total_pages: u64,
    /// Whether records exist beyond this page.
    pub has_next_page: bool,
    /// Whether this page has predecessors.
    pub has_previous_page: bool,
}

impl PageInfo {
    /// Computes metadata for an executed list query.
    pub fn new<T>(query: &ListQuery, page: &Page<T>) -> Self {
        Self {
            current_page: query.page,
            page_size: query.limit,
            total_pages: page.total_pages(query.limit),
            has_next_page: page.has_next(query.page, query.limit),
            has_previous_page: page.has_previous(query.page),
        }
    }
}

/// Resolved query parameters echoed back to the client.
///
/// Echoes the values the server actually used, not the raw request: an
/// unknown `sortBy` echoes the resource default and `sortOrder` is always
/// `asc` or `desc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEcho {
    /// Trimmed search needle.
    pub search: String,
    /// Resolved sort field.
    pub sort_by: String,
    /// Resolved sort direction.
    pub sort_order: SortOrder,
}

impl From<&ListQuery> for QueryEcho {
    fn from(query: &ListQuery) -> Self {
        Self {
            search: query.search.clone(),
            sort_by: query.sort_by.to_owned(),
            sort_order: query.sort_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use shopfront_store::ListParams;

    use super::*;

    const SCHEMA: shopfront_store::QuerySchema = shopfront_store::QuerySchema {
        searchable: &["id"],
        sortable: &["id", "createdAt"],
        default_sort: "createdAt",
    };

    #[test]
    fn page_info_for_middle_page() {
        let params = ListParams {
            page: Some("2".to_owned()),
            limit: Some("10".to_owned()),
            ..Default::default()
        };
        let query = params.normalize(&SCHEMA);
        let page: Page<()> = Page::new(vec![(); 10], 25);

        let info = PageInfo::new(&query, &page);
        assert_eq!(info.current_page, 2);
        assert_eq!(info.page_size, 10);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_next_page);
        assert!(info.has_previous_page);
    }

    #[test]
    fn page_info_for_empty_set() {
        let query = ListParams::default().normalize(&SCHEMA);
        let page: Page<()> = Page::empty();

        let info = PageInfo::new(&query, &page);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next_page);
        assert!(!info.has_previous_page);
    }

    #[test]
    fn echo_reflects_resolved_values() {
        let params = ListParams {
            search: Some("  mouse ".to_owned()),
            sort_by: Some("nonexistent_field".to_owned()),
            sort_order: Some("upwards".to_owned()),
            ..Default::default()
        };
        let query = params.normalize(&SCHEMA);

        let echo = QueryEcho::from(&query);
        assert_eq!(echo.search, "mouse");
        assert_eq!(echo.sort_by, "createdAt");
        assert_eq!(echo.sort_order, SortOrder::Desc);
    }

    #[test]
    fn echo_serializes_camel_case() {
        let query = ListParams::default().normalize(&SCHEMA);
        let json = serde_json::to_value(QueryEcho::from(&query)).unwrap();
        assert_eq!(json["sortBy"], serde_json::json!("createdAt"));
        assert_eq!(json["sortOrder"], serde_json::json!("desc"));
    }
}
