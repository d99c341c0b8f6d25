//! Customer order records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::query::QuerySchema;
use crate::record::{FieldValue, Record};

/// Query configuration for the orders collection.
pub const ORDER_SCHEMA: QuerySchema = QuerySchema {
    searchable: &["id", "customer", "status"],
    sortable: &["id", "customer", "date", "total", "status"],
    default_sort: "date",
};

/// Lifecycle status of an order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum OrderStatus {
    /// Order received, not yet picked up for handling.
    #[default]
    Pending,
    /// Order is being prepared or shipped.
    Processing,
    /// Order fulfilled.
    Completed,
}

impl OrderStatus {
    /// Returns the wire representation.
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A single line item within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_name: String,
    pub product_id: String,
    pub product_quantity: u64,
}

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    /// Order date as an ISO `YYYY-MM-DD` string, kept textual because it is
    /// displayed and sorted as-is.
    pub date: String,
    pub total: f64,
    pub status: OrderStatus,
    pub products: Vec<OrderItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for inserting a new order.
#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    pub customer: String,
    pub date: String,
    pub total: f64,
    pub status: Option<OrderStatus>,
    pub products: Vec<OrderItem>,
}

impl From<NewOrder> for Order {
    fn from(new_order: NewOrder) -> Self {
        let now = Timestamp::now();
        Self {
            id: format!("ORDER-{}", Uuid::new_v4()),
            customer: new_order.customer.trim().to_owned(),
            date: new_order.date,
            total: new_order.total,
            status: new_order.status.unwrap_or_default(),
            products: new_order.products,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "customer" => Some(self.customer.as_str().into()),
            "date" => Some(self.date.as_str().into()),
            "total" => Some(self.total.into()),
            "status" => Some(self.status.as_str().into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_defaults_to_pending() {
        let order = Order::from(NewOrder {
            customer: "Aminah Binti Hassan".to_owned(),
            date: "2026-01-15".to_owned(),
            total: 129.5,
            ..Default::default()
        });

        assert!(order.id.starts_with("ORDER-"));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn status_round_trips_through_serde() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");

        let status: OrderStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(status, OrderStatus::Completed);

        assert!(serde_json::from_str::<OrderStatus>("\"Shipped\"").is_err());
    }

    #[test]
    fn status_is_searchable_text() {
        let order = Order::from(NewOrder {
            customer: "Lim Wei Jie".to_owned(),
            date: "2026-02-01".to_owned(),
            status: Some(OrderStatus::Processing),
            ..Default::default()
        });

        assert_eq!(order.field("status"), Some(FieldValue::from("Processing")));
    }
}
