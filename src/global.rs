// SPDX-License-Identifier: MPL-2.0
//! Process-wide registry facade.
//!
//! Hosts that want one shared translation table for the whole process use
//! this module instead of carrying a [`Registry`] around. Before
//! [`init_locales`] succeeds every lookup degrades to a zero value (empty
//! string, empty list, `"en"` for detection) and never panics; the lock
//! makes re-initialization safe against concurrent readers.

use crate::error::{Error, Result};
use crate::registry::{Registry, FALLBACK_LOCALE};
use parking_lot::RwLock;
use std::path::Path;

static REGISTRY: RwLock<Option<Registry>> = RwLock::new(None);

/// Builds the process-wide registry from a directory of `<tag>.json` files,
/// replacing any previous one wholesale.
///
/// The previous registry is discarded before loading starts; when the load
/// fails the slot stays empty, so readers can never observe a partial or
/// stale table after a failed re-initialization.
///
/// # Errors
///
/// Same as [`Registry::from_dir`].
pub fn init_locales(dir: impl AsRef<Path>) -> Result<()> {
    let mut slot = REGISTRY.write();
    *slot = None;
    *slot = Some(Registry::from_dir(dir)?);
    Ok(())
}

/// Whether [`init_locales`] has completed successfully.
pub fn is_initialized() -> bool {
    REGISTRY.read().is_some()
}

/// Resolves `key` for `locale` through the process-wide registry.
///
/// Returns an empty string when the registry is uninitialized; otherwise
/// behaves like [`Registry::translate`].
pub fn translate(locale: &str, key: &str) -> String {
    match REGISTRY.read().as_ref() {
        Some(registry) => registry.translate(locale, key).to_string(),
        None => String::new(),
    }
}

/// Resolves `key` for the default locale, or an empty string when the
/// registry is uninitialized.
pub fn translate_default(key: &str) -> String {
    match REGISTRY.read().as_ref() {
        Some(registry) => registry.translate_default(key).to_string(),
        None => String::new(),
    }
}

/// Replaces the default locale of the process-wide registry.
///
/// # Errors
///
/// [`Error::NotInitialized`] before [`init_locales`],
/// [`Error::LocaleNotFound`] for a tag that was never loaded.
pub fn set_default_locale(tag: &str) -> Result<()> {
    match REGISTRY.write().as_mut() {
        Some(registry) => registry.set_default_locale(tag),
        None => Err(Error::NotInitialized),
    }
}

/// The current default locale, or an empty string when uninitialized.
pub fn default_locale() -> String {
    match REGISTRY.read().as_ref() {
        Some(registry) => registry.default_locale().to_string(),
        None => String::new(),
    }
}

/// Snapshot of the loaded locale tags, empty when uninitialized.
pub fn locales() -> Vec<String> {
    match REGISTRY.read().as_ref() {
        Some(registry) => registry.locales().to_vec(),
        None => Vec::new(),
    }
}

/// Exact membership test against the loaded locales.
pub fn has_locale(tag: &str) -> bool {
    match REGISTRY.read().as_ref() {
        Some(registry) => registry.has_locale(tag),
        None => false,
    }
}

/// First-match language negotiation against the loaded locales; `"en"` when
/// nothing matches or the registry is uninitialized.
pub fn detect_language(header: &str) -> String {
    match REGISTRY.read().as_ref() {
        Some(registry) => registry.detect_language(header).to_string(),
        None => FALLBACK_LOCALE.to_string(),
    }
}
