//! Store error types.

/// A specialized [`Result`] type for store operations.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type for collection operations.
///
/// List queries never fail: invalid parameters are clamped during
/// normalization, so only single-record writes and lookups produce errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested record does not exist.
    #[error("{resource} not found")]
    NotFound {
        /// Name of the collection that was queried.
        resource: &'static str,
    },

    /// A unique field already holds the given value.
    #[error("{resource} with the same {field} already exists")]
    Duplicate {
        /// Name of the collection that rejected the write.
        resource: &'static str,
        /// The field whose uniqueness constraint was violated.
        field: &'static str,
    },
}

impl Error {
    /// Returns the collection name this error refers to.
    #[inline]
    pub const fn resource(&self) -> &'static str {
        match self {
            Self::NotFound { resource } => resource,
            Self::Duplicate { resource, .. } => resource,
        }
    }
}
