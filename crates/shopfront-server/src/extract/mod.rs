//! Enhanced HTTP request extractors.
//!
//! Drop-in replacements for the default axum extractors with detailed,
//! client-safe error responses, plus the bearer-token authentication
//! extractors.

// Authentication
pub mod auth;

// Request Data Extraction
pub mod reject;

pub use crate::extract::auth::{AuthClaims, AuthState};
pub use crate::extract::reject::{Json, Path, Query, ValidateJson};
