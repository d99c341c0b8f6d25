//! Domain records stored by the admin API.

mod admin;
mod order;
mod product;

pub use admin::{ADMIN_SCHEMA, Admin, DEFAULT_ADMIN_ROLE, NewAdmin};
pub use order::{NewOrder, ORDER_SCHEMA, Order, OrderItem, OrderStatus};
pub use product::{DEFAULT_PRODUCT_IMAGE, NewProduct, PRODUCT_SCHEMA, Product};
