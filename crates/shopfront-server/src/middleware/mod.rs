//! Custom [`axum`] middlewares.

mod auth;

pub use auth::require_authentication;
