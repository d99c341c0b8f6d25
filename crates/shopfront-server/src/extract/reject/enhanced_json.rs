//! Enhanced JSON extractor with improved error handling.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use derive_more::{Deref, DerefMut, From};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced JSON extractor and response wrapper.
///
/// On extraction failure it produces the structured error body instead of
/// axum's plain-text rejection; as a response it behaves like `axum::Json`.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Creates a new [`Json`] wrapper around the provided value.
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

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(request, state).await {
            Ok(axum::Json(payload)) => Ok(Json(payload)),
            Err(rejection) => Err(enhance_json_error(rejection)),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    #[inline]
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Converts a raw JSON rejection into a structured error.
fn enhance_json_error(rejection: JsonRejection) -> Error<'static> {
    tracing::debug!(
        target: "shopfront_server::extract::json",
        error = %rejection,
        "JSON body extraction failed"
    );

    match rejection {
        JsonRejection::JsonDataError(error) => ErrorKind::BadRequest
            .with_message("Request body does not match the expected structure")
            .with_context(error.body_text())
            .into_static(),
        JsonRejection::JsonSyntaxError(error) => ErrorKind::BadRequest
            .with_message("Request body is not valid JSON")
            .with_context(error.body_text())
            .into_static(),
        JsonRejection::MissingJsonContentType(_) => ErrorKind::BadRequest
            .with_message("Expected a request with `Content-Type: application/json`")
            .into_static(),
        _ => ErrorKind::BadRequest
            .with_message("Failed to read the request body")
            .into_static(),
    }
}
