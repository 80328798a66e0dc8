// SPDX-License-Identifier: MPL-2.0
//! `Accept-Language` header parsing.
//!
//! Deliberately minimal: entries are considered in the order the client sent
//! them and quality parameters are stripped without any reordering. Full
//! BCP-47 range matching and quality-weighted selection are out of scope;
//! callers that need them can negotiate upstream and pass the winner to
//! [`crate::registry::Registry::translate`] directly.

/// Extracts the bare language tag from one header entry.
///
/// `"en-GB;q=0.8"` becomes `"en-GB"`; surrounding whitespace is trimmed
/// before the quality parameter is split off.
pub fn bare_tag(entry: &str) -> &str {
    let entry = entry.trim();
    match entry.split_once(';') {
        Some((tag, _params)) => tag,
        None => entry,
    }
}

/// Iterates the bare tags of a comma-separated `Accept-Language` value,
/// preserving the order given in the header.
pub fn preferred_tags(header: &str) -> impl Iterator<Item = &str> {
    header.split(',').map(bare_tag)
}
