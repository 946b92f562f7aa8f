//! Reference URL parsing.
//!
//! The upstream links records to each other with URLs such as
//! `https://pokeapi.co/api/v2/pokemon/6/`. The numeric item id is the last
//! non-empty path segment. This is the only place that convention is encoded.

use thiserror::Error;

use super::ItemId;

/// A reference URL did not end in a positive decimal id segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed item reference: '{reference}'")]
pub struct MalformedReferenceError {
    pub reference: String,
}

impl MalformedReferenceError {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

/// Extracts the item id from an upstream reference URL.
///
/// Query strings and fragments are ignored, a trailing slash is tolerated.
pub fn parse_reference_id(reference: &str) -> Result<ItemId, MalformedReferenceError> {
    let path = reference
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let segment = path
        .split('/')
        .rfind(|s| !s.is_empty())
        .ok_or_else(|| MalformedReferenceError::new(reference))?;

    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedReferenceError::new(reference));
    }

    segment
        .parse::<ItemId>()
        .map_err(|_| MalformedReferenceError::new(reference))
}
