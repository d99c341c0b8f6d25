//! Admin account management handlers.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use shopfront_store::Store;
use shopfront_store::model::{ADMIN_SCHEMA, Admin, NewAdmin};
use shopfront_store::{ListParams, ListQuery, Page};
use validator::Validate;

use crate::extract::{Json, Path, Query, ValidateJson};
use crate::handler::{ErrorKind, PageInfo, QueryEcho, Result};
use crate::service::{AuthHasher, ServiceState};

/// Tracing target for admin operations.
const TRACING_TARGET: &str = "shopfront_server::handler::admins";

/// `Path` param for `/admins/{id}` handlers.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminPathParams {
    /// Unique identifier of the admin.
    pub id: String,
}

/// An admin account as exposed over HTTP.
///
/// The stored password hash never appears here.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdminData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub profile_picture: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Admin> for AdminData {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            email: admin.email,
            phone_number: admin.phone_number,
            role: admin.role,
            first_name: admin.first_name,
            last_name: admin.last_name,
            address: admin.address,
            profile_picture: admin.profile_picture,
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}

/// Pagination block of the admins list envelope.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminPagination {
    #[serde(flatten)]
    pub info: PageInfo,
    pub total_admins: u64,
}

/// Response envelope for `GET /admins`.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListAdminsResponse {
    pub success: bool,
    pub data: Vec<AdminData>,
    pub pagination: AdminPagination,
    pub query: QueryEcho,
}

impl ListAdminsResponse {
    fn new(query: &ListQuery, page: Page<Admin>) -> Self {
        let info = PageInfo::new(query, &page);
        Self {
            success: true,
            pagination: AdminPagination {
                info,
                total_admins: page.total,
            },
            query: QueryEcho::from(query),
            data: page.items.into_iter().map(AdminData::from).collect(),
        }
    }
}

/// Response envelope for single-admin reads and writes.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminResponse {
    pub success: bool,
    pub data: AdminData,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            success: true,
            data: admin.into(),
        }
    }
}

/// Request payload for creating a new admin.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateAdminRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Request payload for updating an existing admin.
///
/// Absent fields keep their stored values.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpdateAdminRequest {
    #[serde(default)]
    #[validate(length(min = 3, max = 64))]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Request payload for the availability check.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateAdminRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Per-field availability errors.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateAdminErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl ValidateAdminErrors {
    fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.phone_number.is_none()
    }
}

/// Response envelope for `POST /admins/validate`.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateAdminResponse {
    pub success: bool,
    pub errors: ValidateAdminErrors,
}

/// Rejects the request if username, email, or phone number is already taken.
///
/// Pass `exclude_id` when updating so the record does not collide with
/// itself. An empty phone number is not subject to uniqueness.
pub(super) async fn ensure_admin_available(
    store: &Store,
    username: &str,
    email: &str,
    phone_number: &str,
    exclude_id: Option<&str>,
) -> Result<()> {
    let excluded = |admin: &Admin| exclude_id.is_some_and(|id| admin.id == id);

    if store
        .admins
        .find_one(|admin| admin.username == username && !excluded(admin))
        .await
        .is_some()
    {
        return Err(ErrorKind::Conflict
            .with_resource("admin")
            .with_context("duplicate username")
            .into_static());
    }

    if store
        .admins
        .find_one(|admin| admin.email == email && !excluded(admin))
        .await
        .is_some()
    {
        return Err(ErrorKind::Conflict
            .with_resource("admin")
            .with_context("duplicate email")
            .into_static());
    }

    if !phone_number.is_empty()
        && store
            .admins
            .find_one(|admin| admin.phone_number == phone_number && !excluded(admin))
            .await
            .is_some()
    {
        return Err(ErrorKind::Conflict
            .with_resource("admin")
            .with_context("duplicate phone number")
            .into_static());
    }

    Ok(())
}

/// Lists admin accounts with pagination, search, and sorting.
#[tracing::instrument(skip_all)]
async fn list_admins(
    State(store): State<Store>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListAdminsResponse>> {
    let query = params.normalize(&ADMIN_SCHEMA);
    let page = store.admins.page(&query, &ADMIN_SCHEMA).await;

    Ok(Json(ListAdminsResponse::new(&query, page)))
}

/// Creates a new admin account.
#[tracing::instrument(skip_all)]
async fn create_admin(
    State(store): State<Store>,
    State(auth_hasher): State<AuthHasher>,
    ValidateJson(request): ValidateJson<CreateAdminRequest>,
) -> Result<(StatusCode, Json<AdminResponse>)> {
    let username = request.username.trim().to_owned();
    let email = request.email.trim().to_lowercase();
    let phone_number = request
        .phone_number
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_owned();

    ensure_admin_available(&store, &username, &email, &phone_number, None).await?;

    let password = auth_hasher.hash_password(&request.password)?;
    let admin = Admin::from(NewAdmin {
        username,
        email,
        password,
        phone_number,
        first_name: request.first_name.unwrap_or_default(),
        last_name: request.last_name.unwrap_or_default(),
        address: request.address.unwrap_or_default(),
        role: request.role,
        profile_picture: request.profile_picture,
    });

    let admin = store.admins.insert(admin).await?;
    tracing::info!(target: TRACING_TARGET, admin_id = %admin.id, "admin created");

    Ok((StatusCode::CREATED, Json(admin.into())))
}

/// Returns a single admin account.
#[tracing::instrument(skip_all)]
async fn get_admin(
    State(store): State<Store>,
    Path(params): Path<AdminPathParams>,
) -> Result<Json<AdminResponse>> {
    let admin = store.admins.get(&params.id).await?;
    Ok(Json(admin.into()))
}

/// Replaces the updatable fields of an admin account.
#[tracing::instrument(skip_all)]
async fn update_admin(
    State(store): State<Store>,
    State(auth_hasher): State<AuthHasher>,
    Path(params): Path<AdminPathParams>,
    ValidateJson(request): ValidateJson<UpdateAdminRequest>,
) -> Result<Json<AdminResponse>> {
    let current = store.admins.get(&params.id).await?;

    let username = request
        .username
        .as_deref()
        .map(str::trim)
        .map(str::to_owned)
        .unwrap_or_else(|| current.username.clone());
    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .map(str::to_lowercase)
        .unwrap_or_else(|| current.email.clone());
    let phone_number = request
        .phone_number
        .as_deref()
        .map(str::trim)
        .map(str::to_owned)
        .unwrap_or_else(|| current.phone_number.clone());

    ensure_admin_available(&store, &username, &email, &phone_number, Some(&params.id)).await?;

    let password = match request.password.as_deref() {
        Some(plaintext) => Some(auth_hasher.hash_password(plaintext)?),
        None => None,
    };

    let admin = store
        .admins
        .update(&params.id, |admin| {
            admin.username = username;
            admin.email = email;
            admin.phone_number = phone_number;
            if let Some(password) = password {
                admin.password = password;
            }
            if let Some(first_name) = request.first_name {
                admin.first_name = first_name.trim().to_owned();
            }
            if let Some(last_name) = request.last_name {
                admin.last_name = last_name.trim().to_owned();
            }
            if let Some(address) = request.address {
                admin.address = address.trim().to_owned();
            }
            if let Some(role) = request.role {
                admin.role = role.trim().to_owned();
            }
            if let Some(profile_picture) = request.profile_picture {
                admin.profile_picture = profile_picture;
            }
            admin.updated_at = Timestamp::now();
        })
        .await?;

    tracing::info!(target: TRACING_TARGET, admin_id = %admin.id, "admin updated");
    Ok(Json(admin.into()))
}

/// Deletes an admin account.
#[tracing::instrument(skip_all)]
async fn delete_admin(
    State(store): State<Store>,
    Path(params): Path<AdminPathParams>,
) -> Result<Json<AdminResponse>> {
    let admin = store.admins.remove(&params.id).await?;
    tracing::info!(target: TRACING_TARGET, admin_id = %admin.id, "admin deleted");
    Ok(Json(admin.into()))
}

/// Checks username, email, and phone number availability without writing.
#[tracing::instrument(skip_all)]
async fn validate_admin(
    State(store): State<Store>,
    Json(request): Json<ValidateAdminRequest>,
) -> Result<Json<ValidateAdminResponse>> {
    let mut errors = ValidateAdminErrors::default();

    if let Some(username) = request.username.as_deref().map(str::trim)
        && !username.is_empty()
        && store
            .admins
            .find_one(|admin| admin.username == username)
            .await
            .is_some()
    {
        errors.username = Some("Username is already taken".to_owned());
    }

    if let Some(email) = request.email.as_deref().map(str::trim).map(str::to_lowercase)
        && !email.is_empty()
        && store
            .admins
            .find_one(|admin| admin.email == email)
            .await
            .is_some()
    {
        errors.email = Some("Email is already registered".to_owned());
    }

    if let Some(phone_number) = request.phone_number.as_deref().map(str::trim)
        && !phone_number.is_empty()
        && store
            .admins
            .find_one(|admin| admin.phone_number == phone_number)
            .await
            .is_some()
    {
        errors.phone_number = Some("Phone number is already registered".to_owned());
    }

    Ok(Json(ValidateAdminResponse {
        success: errors.is_empty(),
        errors,
    }))
}

/// Returns a [`Router`] with all admin management routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/admins", get(list_admins).post(create_admin))
        .route("/admins/validate", post(validate_admin))
        .route(
            "/admins/{id}",
            get(get_admin).put(update_admin).delete(delete_admin),
        )
}
