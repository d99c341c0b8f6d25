//! Bearer-token authentication extractors.

mod auth_state;
mod claims;

pub use auth_state::AuthState;
pub use claims::AuthClaims;
