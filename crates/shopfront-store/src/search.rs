//! Search predicates over record fields.

use regex::{Regex, RegexBuilder};

use crate::query::QuerySchema;
use crate::record::Record;

/// Case-insensitive substring filter across a resource's searchable fields.
///
/// The needle is regex-escaped before compilation, so search input is always
/// treated literally. An empty needle produces a match-all filter.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    pattern: Option<Regex>,
    fields: &'static [&'static str],
}

impl SearchFilter {
    /// Builds a filter for the given trimmed needle and schema.
    pub fn new(needle: &str, schema: &QuerySchema) -> Self {
        let pattern = if needle.is_empty() {
            None
        } else {
            // Escaped literals always compile.
            RegexBuilder::new(&regex::escape(needle))
                .case_insensitive(true)
                .build()
                .ok()
        };

        Self {
            pattern,
            fields: schema.searchable,
        }
    }

    /// Returns whether this filter matches every record.
    #[inline]
    pub fn is_match_all(&self) -> bool {
        self.pattern.is_none()
    }

    /// Returns whether any searchable field of `record` contains the needle.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let Some(pattern) = &self.pattern else {
            return true;
        };

        self.fields.iter().any(|field| {
            record.field(field).is_some_and(|value| {
                value
                    .as_text()
                    .is_some_and(|text| pattern.is_match(text))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;

    const SCHEMA: QuerySchema = QuerySchema {
        searchable: &["id", "name", "category"],
        sortable: &["id", "name"],
        default_sort: "id",
    };

    struct Item {
        id: &'static str,
        name: &'static str,
        category: &'static str,
        price: f64,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "id" => Some(self.id.into()),
                "name" => Some(self.name.into()),
                "category" => Some(self.category.into()),
                "price" => Some(self.price.into()),
                _ => None,
            }
        }
    }

    const ITEM: Item = Item {
        id: "P-100",
        name: "Wireless Mouse",
        category: "Electronics",
        price: 59.0,
    };

    #[test]
    fn empty_needle_matches_everything() {
        let filter = SearchFilter::new("", &SCHEMA);
        assert!(filter.is_match_all());
        assert!(filter.matches(&ITEM));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        for needle in ["mouse", "MOUSE", "eLeCtRo", "p-10"] {
            let filter = SearchFilter::new(needle, &SCHEMA);
            assert!(filter.matches(&ITEM), "needle {needle:?} should match");
        }
    }

    #[test]
    fn non_matching_needle() {
        let filter = SearchFilter::new("keyboard", &SCHEMA);
        assert!(!filter.matches(&ITEM));
    }

    #[test]
    fn needle_is_treated_literally() {
        let filter = SearchFilter::new(".*", &SCHEMA);
        assert!(!filter.matches(&ITEM));
    }

    #[test]
    fn only_searchable_fields_are_considered() {
        // "59" appears in the price, which is not in the searchable set.
        let filter = SearchFilter::new("59", &SCHEMA);
        assert!(!filter.matches(&ITEM));
    }
}
