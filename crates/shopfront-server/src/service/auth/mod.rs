//! Authentication services: password hashing and session token keys.

mod hasher;
mod keys;

pub use hasher::AuthHasher;
pub use keys::AuthKeys;
