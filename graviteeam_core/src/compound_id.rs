//! Compound identifiers
//!
//! A compound identifier packs several hierarchical keys into one string,
//! e.g. `organizationId:environmentId:domainId`. Segments are positional
//! and must all be non-empty.
//!

use thiserror::Error;

/// Separator between the segments of a compound identifier.
pub const SEPARATOR: &str = ":";

/// Returned when a string does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected format of ID ({id}), expected {expected}")]
pub struct CompoundIdError {
    /// The offending input.
    pub id: String,
    /// The expected shape, e.g. `organizationId:environmentId`.
    pub expected: String,
}

/// Split `id` into exactly `N` non-empty segments.
///
/// `shape` names each segment and is only used in the error message.
pub fn parse<const N: usize>(id: &str, shape: [&str; N]) -> Result<[String; N], CompoundIdError> {
    let err = || CompoundIdError {
        id: id.to_owned(),
        expected: shape.join(SEPARATOR),
    };

    let parts = id.split(SEPARATOR).collect::<Vec<_>>();
    if parts.len() != N || parts.iter().any(|p| p.is_empty()) {
        return Err(err());
    }

    let parts: [String; N] = parts
        .into_iter()
        .map(str::to_owned)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| err())?;
    Ok(parts)
}

/// Join segments into a compound identifier.
pub fn format(parts: &[&str]) -> String {
    parts.join(SEPARATOR)
}
