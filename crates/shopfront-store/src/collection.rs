//! In-memory record collections with `count`/`find` primitives.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::page::Page;
use crate::query::{ListQuery, QuerySchema, SortOrder};
use crate::record::Record;
use crate::search::SearchFilter;

/// Tracing target for collection operations.
const TRACING_TARGET: &str = "shopfront_store::collection";

/// A named, shareable in-memory collection of records.
///
/// Every operation takes the read-write lock exactly once, so `count`
/// followed by `find` is not atomic: under a concurrent write the reported
/// total and the fetched page can disagree. That gap is accepted for
/// dashboard-style workloads.
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Collection<T>
where
    T: Record + Clone,
{
    /// Creates a new empty collection.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the collection name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Inserts a record, rejecting duplicate identifiers.
    pub async fn insert(&self, record: T) -> Result<T> {
        let mut records = self.records.write().await;

        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(Error::Duplicate {
                resource: self.name,
                field: "id",
            });
        }

        records.push(record.clone());
        Ok(record)
    }

    /// Returns the record with the given identifier.
    pub async fn get(&self, id: &str) -> Result<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or(Error::NotFound {
                resource: self.name,
            })
    }

    /// Returns the first record satisfying `predicate`, if any.
    pub async fn find_one<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .find(|record| predicate(record))
            .cloned()
    }

    /// Applies `apply` to the record with the given identifier and returns
    /// the updated record.
    pub async fn update<F>(&self, id: &str, apply: F) -> Result<T>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;

        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(Error::NotFound {
                resource: self.name,
            })?;

        apply(record);
        Ok(record.clone())
    }

    /// Removes and returns the record with the given identifier.
    pub async fn remove(&self, id: &str) -> Result<T> {
        let mut records = self.records.write().await;

        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(Error::NotFound {
                resource: self.name,
            })?;

        Ok(records.remove(index))
    }

    /// Counts records matching the filter.
    pub async fn count(&self, filter: &SearchFilter) -> u64 {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| filter.matches(*record))
            .count() as u64
    }

    /// Returns up to `limit` matching records sorted by `sort_by`, skipping
    /// the first `skip` matches.
    ///
    /// The sort is stable, so records with equal keys keep insertion order in
    /// practice; callers must not rely on that tie-break. Records lacking the
    /// sort field order before every record that has it.
    pub async fn find(
        &self,
        filter: &SearchFilter,
        sort_by: &str,
        sort_order: SortOrder,
        limit: u64,
        skip: u64,
    ) -> Vec<T> {
        let records = self.records.read().await;

        let mut matched: Vec<&T> = records
            .iter()
            .filter(|record| filter.matches(*record))
            .collect();

        matched.sort_by(|lhs, rhs| {
            let ordering = lhs.field(sort_by).cmp(&rhs.field(sort_by));
            match sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        matched
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }

    /// Executes a normalized list query: count, then fetch one page.
    pub async fn page(&self, query: &ListQuery, schema: &QuerySchema) -> Page<T> {
        let filter = SearchFilter::new(&query.search, schema);

        let total = self.count(&filter).await;
        let items = self
            .find(
                &filter,
                query.sort_by,
                query.sort_order,
                query.limit,
                query.offset(),
            )
            .await;

        tracing::debug!(
            target: TRACING_TARGET,
            collection = self.name,
            total,
            returned = items.len(),
            page = query.page,
            limit = query.limit,
            sort_by = query.sort_by,
            "list query executed"
        );

        Page::new(items, total)
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns whether the collection holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListParams;
    use crate::record::FieldValue;

    const SCHEMA: QuerySchema = QuerySchema {
        searchable: &["id", "name"],
        sortable: &["id", "name", "rank"],
        default_sort: "rank",
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
        rank: i64,
    }

    impl Item {
        fn new(id: &str, name: &str, rank: i64) -> Self {
            Self {
                id: id.to_owned(),
                name: name.to_owned(),
                rank,
            }
        }
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "id" => Some(self.id.as_str().into()),
                "name" => Some(self.name.as_str().into()),
                "rank" => Some(self.rank.into()),
                _ => None,
            }
        }
    }

    async fn seeded(count: i64) -> Collection<Item> {
        let collection = Collection::new("item");
        for n in 0..count {
            collection
                .insert(Item::new(&format!("ITEM-{n:03}"), &format!("Item {n}"), n))
                .await
                .unwrap();
        }
        collection
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let collection = seeded(1).await;
        let error = collection
            .insert(Item::new("ITEM-000", "Duplicate", 9))
            .await
            .unwrap_err();
        assert_eq!(
            error,
            Error::Duplicate {
                resource: "item",
                field: "id"
            }
        );
    }

    #[tokio::test]
    async fn get_update_remove_roundtrip() {
        let collection = seeded(3).await;

        let fetched = collection.get("ITEM-001").await.unwrap();
        assert_eq!(fetched.name, "Item 1");

        let updated = collection
            .update("ITEM-001", |item| item.name = "Renamed".to_owned())
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed");

        let removed = collection.remove("ITEM-001").await.unwrap();
        assert_eq!(removed.name, "Renamed");
        assert!(collection.get("ITEM-001").await.is_err());
        assert_eq!(collection.len().await, 2);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let collection = seeded(1).await;
        let error = collection.get("ITEM-999").await.unwrap_err();
        assert_eq!(error, Error::NotFound { resource: "item" });
    }

    #[tokio::test]
    async fn find_sorts_and_paginates() {
        let collection = seeded(5).await;
        let filter = SearchFilter::new("", &SCHEMA);

        let items = collection
            .find(&filter, "rank", SortOrder::Desc, 2, 1)
            .await;
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["ITEM-003", "ITEM-002"]);
    }

    #[tokio::test]
    async fn page_scenario_twenty_five_records() {
        let collection = seeded(25).await;
        let params = ListParams {
            page: Some("2".to_owned()),
            limit: Some("10".to_owned()),
            ..Default::default()
        };
        let query = params.normalize(&SCHEMA);

        let page = collection.page(&query, &SCHEMA).await;
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages(query.limit), 3);
        assert!(page.has_next(query.page, query.limit));
        assert!(page.has_previous(query.page));
    }

    #[tokio::test]
    async fn page_with_search_filters_total() {
        let collection = seeded(25).await;
        let params = ListParams {
            search: Some("ITEM-01".to_owned()),
            ..Default::default()
        };
        let query = params.normalize(&SCHEMA);

        // ITEM-010 through ITEM-019.
        let page = collection.page(&query, &SCHEMA).await;
        assert_eq!(page.total, 10);
        assert_eq!(page.items.len(), 10);
    }

    #[tokio::test]
    async fn empty_collection_yields_empty_page() {
        let collection: Collection<Item> = Collection::new("item");
        let query = ListParams::default().normalize(&SCHEMA);

        let page = collection.page(&query, &SCHEMA).await;
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages(query.limit), 0);
        assert!(!page.has_next(query.page, query.limit));
        assert!(!page.has_previous(query.page));
    }

    #[tokio::test]
    async fn out_of_range_page_returns_no_items() {
        let collection = seeded(5).await;
        let params = ListParams {
            page: Some("4".to_owned()),
            ..Default::default()
        };
        let query = params.normalize(&SCHEMA);

        let page = collection.page(&query, &SCHEMA).await;
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }
}
