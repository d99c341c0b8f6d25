//! Authentication handlers: register, login, current profile.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use shopfront_store::model::{Admin, NewAdmin};
use shopfront_store::Store;
use validator::Validate;

use crate::extract::{AuthClaims, AuthState, Json, ValidateJson};
use crate::handler::admins::AdminData;
use crate::handler::{ErrorKind, Result};
use crate::service::{AuthHasher, AuthKeys, ServiceState};

/// Tracing target for authentication operations.
const TRACING_TARGET: &str = "shopfront_server::handler::authentication";

/// Request payload for registering a new admin account.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
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

/// Request payload for logging in.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response returned after a successful registration or login.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    pub success: bool,
    pub user: AdminData,
    pub token: String,
}

impl AuthResponse {
    /// Issues a token for the admin and assembles the response.
    fn issue(admin: Admin, keys: &AuthKeys) -> Result<Self> {
        let claims = AuthClaims::new(&admin.id, &admin.email, &admin.role, keys)?;
        let token = claims.encode(keys)?;

        Ok(Self {
            success: true,
            user: AdminData::from(admin),
            token,
        })
    }
}

/// Response returned by the current-profile endpoint.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    pub success: bool,
    pub data: AdminData,
}

/// Registers a new admin account and issues a session token.
#[tracing::instrument(skip_all)]
async fn register(
    State(store): State<Store>,
    State(auth_hasher): State<AuthHasher>,
    State(auth_keys): State<AuthKeys>,
    ValidateJson(request): ValidateJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let email = request.email.trim().to_lowercase();
    let username = request.username.trim().to_owned();
    let phone_number = request
        .phone_number
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_owned();

    super::admins::ensure_admin_available(&store, &username, &email, &phone_number, None).await?;

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
    tracing::info!(
        target: TRACING_TARGET,
        admin_id = %admin.id,
        "admin account registered"
    );

    let response = AuthResponse::issue(admin, &auth_keys)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Authenticates an admin by email and password.
#[tracing::instrument(skip_all)]
async fn login(
    State(store): State<Store>,
    State(auth_hasher): State<AuthHasher>,
    State(auth_keys): State<AuthKeys>,
    ValidateJson(request): ValidateJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let email = request.email.trim().to_lowercase();

    // Unknown accounts and wrong passwords are indistinguishable to callers.
    let admin = store
        .admins
        .find_one(|admin| admin.email == email)
        .await
        .ok_or_else(|| {
            ErrorKind::Unauthorized
                .with_message("Invalid credentials")
                .into_static()
        })?;

    auth_hasher.verify_password(&request.password, &admin.password)?;

    tracing::info!(
        target: TRACING_TARGET,
        admin_id = %admin.id,
        "admin logged in"
    );

    let response = AuthResponse::issue(admin, &auth_keys)?;
    Ok(Json(response))
}

/// Returns the profile of the admin identified by the bearer token.
#[tracing::instrument(skip_all)]
async fn current_profile(
    State(store): State<Store>,
    AuthState(claims): AuthState,
) -> Result<Json<ProfileResponse>> {
    // The account may have been deleted after the token was issued.
    let admin = store.admins.get(&claims.sub).await?;

    Ok(Json(ProfileResponse {
        success: true,
        data: AdminData::from(admin),
    }))
}

/// Returns a [`Router`] with the public authentication routes.
///
/// [`Router`]: axum::routing::Router
pub fn public_routes() -> Router<ServiceState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Returns a [`Router`] with the authenticated profile route.
///
/// [`Router`]: axum::routing::Router
pub fn private_routes() -> Router<ServiceState> {
    Router::new().route("/auth/me", get(current_profile))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::handler::test::{authenticate, create_test_server};

    #[tokio::test]
    async fn register_returns_user_and_token() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "username": "aminah",
                "email": "Aminah@Example.COM",
                "password": "a very long password",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body = response.json::<Value>();
        assert_eq!(body["success"], json!(true));
        assert!(body["token"].is_string());
        assert_eq!(body["user"]["email"], json!("aminah@example.com"));
        assert_eq!(body["user"]["role"], json!("Current Admin"));
        assert!(body["user"].get("password").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() -> anyhow::Result<()> {
        let server = create_test_server()?;
        authenticate(&server).await?;

        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "username": "someone-else",
                "email": "test-admin@example.com",
                "password": "a very long password",
            }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_invalid_payload() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/auth/register")
            .json(&json!({
                "username": "ab",
                "email": "not-an-email",
                "password": "short",
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn login_roundtrip() -> anyhow::Result<()> {
        let server = create_test_server()?;
        authenticate(&server).await?;

        let response = server
            .post("/api/auth/login")
            .json(&json!({
                "email": "test-admin@example.com",
                "password": "correct horse battery staple",
            }))
            .await;
        response.assert_status_success();

        let body = response.json::<Value>();
        assert_eq!(body["success"], json!(true));
        assert!(body["token"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() -> anyhow::Result<()> {
        let server = create_test_server()?;
        authenticate(&server).await?;

        let response = server
            .post("/api/auth/login")
            .json(&json!({
                "email": "test-admin@example.com",
                "password": "wrong password entirely",
            }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_unknown_email() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/api/auth/login")
            .json(&json!({
                "email": "nobody@example.com",
                "password": "whatever it takes",
            }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn current_profile_reflects_registration() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let token = authenticate(&server).await?;

        let response = server.get("/api/auth/me").authorization_bearer(&token).await;
        response.assert_status_success();

        let body = response.json::<Value>();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["username"], json!("test-admin"));
        assert!(body["data"]["id"].as_str().is_some_and(|id| id.starts_with("ADMIN-")));
        Ok(())
    }
}
