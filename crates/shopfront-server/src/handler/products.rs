//! Product catalog handlers.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use shopfront_store::Store;
use shopfront_store::model::{NewProduct, PRODUCT_SCHEMA, Product};
use shopfront_store::{ListParams, ListQuery, Page};
use validator::Validate;

use crate::extract::{Json, Path, Query, ValidateJson};
use crate::handler::{PageInfo, QueryEcho, Result};
use crate::service::ServiceState;

/// Tracing target for product operations.
const TRACING_TARGET: &str = "shopfront_server::handler::products";

/// `Path` param for `/products/{id}` handlers.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductPathParams {
    /// Unique identifier of the product.
    pub id: String,
}

/// A product as exposed over HTTP.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductData {
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

impl From<Product> for ProductData {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            stock: product.stock,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Pagination block of the products list envelope.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductPagination {
    #[serde(flatten)]
    pub info: PageInfo,
    pub total_products: u64,
}

/// Response envelope for `GET /products`.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListProductsResponse {
    pub success: bool,
    pub data: Vec<ProductData>,
    pub pagination: ProductPagination,
    pub query: QueryEcho,
}

impl ListProductsResponse {
    fn new(query: &ListQuery, page: Page<Product>) -> Self {
        let info = PageInfo::new(query, &page);
        Self {
            success: true,
            pagination: ProductPagination {
                info,
                total_products: page.total,
            },
            query: QueryEcho::from(query),
            data: page.items.into_iter().map(ProductData::from).collect(),
        }
    }
}

/// Response envelope for single-product reads and writes.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductResponse {
    pub success: bool,
    pub data: ProductData,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            success: true,
            data: product.into(),
        }
    }
}

/// Request payload for creating a new product.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: u64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Request payload for updating an existing product.
///
/// Absent fields keep their stored values.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateProductRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: Option<u64>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Lists products with pagination, search, and sorting.
#[tracing::instrument(skip_all)]
async fn list_products(
    State(store): State<Store>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListProductsResponse>> {
    let query = params.normalize(&PRODUCT_SCHEMA);
    let page = store.products.page(&query, &PRODUCT_SCHEMA).await;

    Ok(Json(ListProductsResponse::new(&query, page)))
}

/// Creates a new product.
#[tracing::instrument(skip_all)]
async fn create_product(
    State(store): State<Store>,
    ValidateJson(request): ValidateJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let product = Product::from(NewProduct {
        name: request.name,
        description: request.description.unwrap_or_default(),
        price: request.price,
        category: request.category.unwrap_or_default(),
        stock: request.stock,
        image: request.image,
    });

    let product = store.products.insert(product).await?;
    tracing::info!(target: TRACING_TARGET, product_id = %product.id, "product created");

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Returns a single product.
#[tracing::instrument(skip_all)]
async fn get_product(
    State(store): State<Store>,
    Path(params): Path<ProductPathParams>,
) -> Result<Json<ProductResponse>> {
    let product = store.products.get(&params.id).await?;
    Ok(Json(product.into()))
}

/// Replaces the updatable fields of a product.
#[tracing::instrument(skip_all)]
async fn update_product(
    State(store): State<Store>,
    Path(params): Path<ProductPathParams>,
    ValidateJson(request): ValidateJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>> {
    let product = store
        .products
        .update(&params.id, |product| {
            if let Some(name) = request.name {
                product.name = name.trim().to_owned();
            }
            if let Some(description) = request.description {
                product.description = description.trim().to_owned();
            }
            if let Some(price) = request.price {
                product.price = price;
            }
            if let Some(category) = request.category {
                product.category = category;
            }
            if let Some(stock) = request.stock {
                product.stock = stock;
            }
            if let Some(image) = request.image {
                product.image = image;
            }
            product.updated_at = Timestamp::now();
        })
        .await?;

    tracing::info!(target: TRACING_TARGET, product_id = %product.id, "product updated");
    Ok(Json(product.into()))
}

/// Deletes a product.
#[tracing::instrument(skip_all)]
async fn delete_product(
    State(store): State<Store>,
    Path(params): Path<ProductPathParams>,
) -> Result<Json<ProductResponse>> {
    let product = store.products.remove(&params.id).await?;
    tracing::info!(target: TRACING_TARGET, product_id = %product.id, "product deleted");
    Ok(Json(product.into()))
}

/// Returns a [`Router`] with all product catalog routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
