//! Product catalog records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::QuerySchema;
use crate::record::{FieldValue, Record};

/// Query configuration for the products collection.
pub const PRODUCT_SCHEMA: QuerySchema = QuerySchema {
    searchable: &["id", "name", "category"],
    sortable: &["id", "name", "category", "price", "stock", "createdAt"],
    default_sort: "createdAt",
};

/// Placeholder image used when a product is created without one.
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/1/14/No_Image_Available.jpg";

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u64,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for inserting a new product.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u64,
    pub image: Option<String>,
}

impl From<NewProduct> for Product {
    fn from(new_product: NewProduct) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: new_product.name.trim().to_owned(),
            description: new_product.description.trim().to_owned(),
            price: new_product.price,
            category: new_product.category,
            stock: new_product.stock,
            image: new_product
                .image
                .as_deref()
                .map(str::trim)
                .filter(|image| !image.is_empty())
                .unwrap_or(DEFAULT_PRODUCT_IMAGE)
                .to_owned(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "price" => Some(self.price.into()),
            "stock" => Some((self.stock as f64).into()),
            "createdAt" => Some(self.created_at.into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_gets_placeholder_image() {
        let product = Product::from(NewProduct {
            name: "Wireless Mouse".to_owned(),
            category: "Electronics".to_owned(),
            price: 59.9,
            stock: 12,
            ..Default::default()
        });

        assert_eq!(product.image, DEFAULT_PRODUCT_IMAGE);
        assert!(Uuid::parse_str(&product.id).is_ok());
    }

    #[test]
    fn numeric_fields_sort_numerically() {
        let cheap = Product::from(NewProduct {
            name: "A".to_owned(),
            price: 9.0,
            ..Default::default()
        });
        let pricey = Product::from(NewProduct {
            name: "B".to_owned(),
            price: 100.0,
            ..Default::default()
        });

        // Lexicographic ordering would put "100.0" before "9.0".
        assert!(cheap.field("price") < pricey.field("price"));
    }
}
