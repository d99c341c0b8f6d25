//! Application state and dependency injection.

use shopfront_store::Store;

use crate::service::{AuthHasher, AuthKeys, Result, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    store: Store,

    auth_hasher: AuthHasher,
    auth_keys: AuthKeys,
}

impl ServiceState {
    /// Initializes application state from configuration.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            store: Store::new(),

            auth_hasher: AuthHasher::new()?,
            auth_keys: AuthKeys::from_config(config),
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(store: Store);

impl_di!(auth_hasher: AuthHasher);
impl_di!(auth_keys: AuthKeys);
