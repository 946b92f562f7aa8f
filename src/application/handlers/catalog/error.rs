//! Errors surfaced by catalog queries.

use thiserror::Error;

use crate::domain::catalog::{MalformedReferenceError, PageError};
use crate::ports::UpstreamFetchError;

/// Any failure while answering a catalog query.
///
/// Partial results are never returned: if one upstream read fails, the whole
/// query fails with that error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogQueryError {
    #[error(transparent)]
    Upstream(#[from] UpstreamFetchError),

    #[error(transparent)]
    MalformedReference(#[from] MalformedReferenceError),

    #[error("Invalid page: {0}")]
    InvalidPage(#[from] PageError),
}
