//! List-parameter normalization.
//!
//! Raw query-string parameters come in as optional strings and are resolved
//! into a [`ListQuery`] against a per-resource [`QuerySchema`]. Normalization
//! never fails: invalid values fall back to defaults instead of raising
//! errors, so list endpoints always answer 200 for well-formed requests.

use serde::{Deserialize, Serialize};

/// Page sizes clients are allowed to request.
pub const ALLOWED_PAGE_SIZES: [u64; 3] = [10, 20, 50];

/// Page size used when the requested one is invalid or absent.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Per-resource query configuration.
///
/// Fixed allow-lists keep sorting and searching restricted to known fields,
/// preventing clients from probing arbitrary record contents.
#[derive(Debug, Clone, Copy)]
pub struct QuerySchema {
    /// Fields matched by search predicates.
    pub searchable: &'static [&'static str],
    /// Fields accepted as `sortBy` values.
    pub sortable: &'static [&'static str],
    /// Sort field used when `sortBy` is absent or not allowed.
    pub default_sort: &'static str,
}

/// Sort direction for list queries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order (the default).
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the lowercase wire representation.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Raw list parameters as they arrive on the query string.
///
/// Every field is optional and kept as a string so that deserialization
/// cannot reject a request; resolution happens in [`ListParams::normalize`].
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Requested 1-based page number.
    pub page: Option<String>,
    /// Requested page size.
    pub limit: Option<String>,
    /// Substring to search for across the resource's searchable fields.
    pub search: Option<String>,
    /// Field to sort by.
    pub sort_by: Option<String>,
    /// `"asc"` or `"desc"`.
    pub sort_order: Option<String>,
}

impl ListParams {
    /// Resolves raw parameters into a [`ListQuery`] for the given schema.
    ///
    /// - `page`: parse failure, absence, or value ≤ 0 becomes 1.
    /// - `limit`: anything outside [`ALLOWED_PAGE_SIZES`] becomes
    ///   [`DEFAULT_PAGE_SIZE`].
    /// - `search`: trimmed; absent becomes the empty (match-all) needle.
    /// - `sortBy`: unknown fields become `schema.default_sort`.
    /// - `sortOrder`: anything other than `"asc"` sorts descending.
    pub fn normalize(&self, schema: &QuerySchema) -> ListQuery {
        let page = self
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1) as u64;

        let limit = self
            .limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|limit| ALLOWED_PAGE_SIZES.contains(limit))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned();

        let sort_by = self
            .sort_by
            .as_deref()
            .and_then(|requested| {
                schema
                    .sortable
                    .iter()
                    .copied()
                    .find(|field| *field == requested)
            })
            .unwrap_or(schema.default_sort);

        let sort_order = match self.sort_order.as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        };

        ListQuery {
            page,
            limit,
            search,
            sort_by,
            sort_order,
        }
    }
}

/// A validated list query ready for execution against a collection.
///
/// Only produced by [`ListParams::normalize`], which guarantees `page ≥ 1`,
/// `limit` ∈ [`ALLOWED_PAGE_SIZES`], and `sort_by` within the schema's
/// allow-list.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u64,
    /// Records per page.
    pub limit: u64,
    /// Trimmed search needle; empty means no filter.
    pub search: String,
    /// Resolved sort field (an entry of the schema's allow-list).
    pub sort_by: &'static str,
    /// Resolved sort direction.
    pub sort_order: SortOrder,
}

impl ListQuery {
    /// Number of matching records to skip before the first returned one.
    ///
    /// Saturates instead of overflowing: `page` is clamped to be positive
    /// but otherwise unbounded, so arbitrarily large values must still
    /// resolve to a (necessarily empty) page.
    #[inline]
    pub const fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}
