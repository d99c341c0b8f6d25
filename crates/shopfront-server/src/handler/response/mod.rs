//! Response types shared across handlers.

mod error_response;
mod pagination;

pub use error_response::ErrorResponse;
pub use pagination::{PageInfo, QueryEcho};
