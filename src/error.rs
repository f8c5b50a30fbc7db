use std::collections::TryReserveError;

/// Errors returned by [`Tree`][crate::Tree] operations.
///
/// A missing key is not an error: lookups and deletions report it with `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Memory for a new node (or a requested capacity) could not be obtained. The tree is left
    /// exactly as it was before the call.
    #[error("failed to allocate tree node storage")]
    AllocationFailure(#[from] TryReserveError),
}

/// Shorthand for results whose error defaults to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
