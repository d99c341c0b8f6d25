//! Enhanced path parameter extractor.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced path parameter extractor.
///
/// Produces the structured error body when a captured path segment cannot be
/// deserialized into the handler's parameter type.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Creates a new [`Path`] wrapper around the provided parameters.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(path)) => Ok(Path(path)),
            Err(rejection) => Err(enhance_path_error(rejection)),
        }
    }
}

/// Converts a raw path rejection into a structured error.
fn enhance_path_error(rejection: PathRejection) -> Error<'static> {
    tracing::debug!(
        target: "shopfront_server::extract::path",
        error = %rejection,
        "path parameter parsing failed"
    );

    ErrorKind::BadRequest
        .with_message("Path parameters could not be parsed")
        .with_context(rejection.body_text())
        .into_static()
}
