//! Top-level store aggregating the three resource collections.

use crate::collection::Collection;
use crate::model::{Admin, Order, Product};

/// The in-memory document store backing the admin API.
///
/// Cloning is cheap: collections share their underlying storage, so handlers
/// can hold clones of the same store.
#[derive(Debug, Clone)]
pub struct Store {
    /// Administrator accounts.
    pub admins: Collection<Admin>,
    /// Product catalog.
    pub products: Collection<Product>,
    /// Customer orders.
    pub orders: Collection<Order>,
}

impl Store {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            admins: Collection::new("admin"),
            products: Collection::new("product"),
            orders: Collection::new("order"),
        }
    }
}

impl Default for Store {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewProduct;

    #[tokio::test]
    async fn clones_share_storage() {
        let store = Store::new();
        let clone = store.clone();

        store
            .products
            .insert(Product::from(NewProduct {
                name: "Desk Lamp".to_owned(),
                ..Default::default()
            }))
            .await
            .unwrap();

        assert_eq!(clone.products.len().await, 1);
    }
}
