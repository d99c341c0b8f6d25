//! JSON extractor with payload validation.

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::extract::Json;
use crate::handler::{Error, ErrorKind};

/// JSON extractor that also runs [`validator`] checks on the payload.
///
/// Deserialization failures surface through [`Json`]; validation failures
/// return a `Bad Request` whose context lists the offending fields.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Creates a new [`ValidateJson`] wrapper around the provided value.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(request, state).await?;
        if let Err(report) = payload.validate() {
            tracing::debug!(
                target: "shopfront_server::extract::json",
                error = %report,
                "payload validation failed"
            );

            return Err(ErrorKind::BadRequest
                .with_message("Request payload failed validation")
                .with_context(report.to_string())
                .into_static());
        }

        Ok(ValidateJson(payload))
    }
}
