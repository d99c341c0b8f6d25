//! Customer order handlers.
//!
//! Orders enter the store through data imports, not through this API; the
//! HTTP surface is read-only except for status transitions.

use axum::Router;
use axum::extract::State;
use axum::routing::{get, patch};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use shopfront_store::Store;
use shopfront_store::model::{ORDER_SCHEMA, Order, OrderItem, OrderStatus};
use shopfront_store::{ListParams, ListQuery, Page};

use crate::extract::{Json, Path, Query};
use crate::handler::{PageInfo, QueryEcho, Result};
use crate::service::ServiceState;

/// Tracing target for order operations.
const TRACING_TARGET: &str = "shopfront_server::handler::orders";

/// `Path` param for `/orders/{id}` handlers.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderPathParams {
    /// Unique identifier of the order.
    pub id: String,
}

/// An order as exposed over HTTP.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderData {
    pub id: String,
    pub customer: String,
    pub date: String,
    pub total: f64,
    pub status: OrderStatus,
    pub products: Vec<OrderItemData>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A single line item within an order response.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderItemData {
    pub product_name: String,
    pub product_id: String,
    pub product_quantity: u64,
}

impl From<OrderItem> for OrderItemData {
    fn from(item: OrderItem) -> Self {
        Self {
            product_name: item.product_name,
            product_id: item.product_id,
            product_quantity: item.product_quantity,
        }
    }
}

impl From<Order> for OrderData {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer: order.customer,
            date: order.date,
            total: order.total,
            status: order.status,
            products: order.products.into_iter().map(OrderItemData::from).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Pagination block of the orders list envelope.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderPagination {
    #[serde(flatten)]
    pub info: PageInfo,
    pub total_orders: u64,
}

/// Response envelope for `GET /orders`.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListOrdersResponse {
    pub success: bool,
    pub data: Vec<OrderData>,
    pub pagination: OrderPagination,
    pub query: QueryEcho,
}

impl ListOrdersResponse {
    fn new(query: &ListQuery, page: Page<Order>) -> Self {
        let info = PageInfo::new(query, &page);
        Self {
            success: true,
            pagination: OrderPagination {
                info,
                total_orders: page.total,
            },
            query: QueryEcho::from(query),
            data: page.items.into_iter().map(OrderData::from).collect(),
        }
    }
}

/// Response envelope for single-order reads and writes.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderResponse {
    pub success: bool,
    pub data: OrderData,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            success: true,
            data: order.into(),
        }
    }
}

/// Request payload for updating an order's status.
///
/// Deserialization restricts `status` to the order status enum, so an unknown
/// value rejects the request before the handler runs.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Lists orders with pagination, search, and sorting.
#[tracing::instrument(skip_all)]
async fn list_orders(
    State(store): State<Store>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListOrdersResponse>> {
    let query = params.normalize(&ORDER_SCHEMA);
    let page = store.orders.page(&query, &ORDER_SCHEMA).await;

    Ok(Json(ListOrdersResponse::new(&query, page)))
}

/// Returns a single order.
#[tracing::instrument(skip_all)]
async fn get_order(
    State(store): State<Store>,
    Path(params): Path<OrderPathParams>,
) -> Result<Json<OrderResponse>> {
    let order = store.orders.get(&params.id).await?;
    Ok(Json(order.into()))
}

/// Moves an order to a new lifecycle status.
#[tracing::instrument(skip_all)]
async fn update_order_status(
    State(store): State<Store>,
    Path(params): Path<OrderPathParams>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>> {
    let order = store
        .orders
        .update(&params.id, |order| {
            order.status = request.status;
            order.updated_at = Timestamp::now();
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        order_id = %order.id,
        status = order.status.as_str(),
        "order status updated"
    );

    Ok(Json(order.into()))
}

/// Returns a [`Router`] with all order routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/status", patch(update_order_status))
}
