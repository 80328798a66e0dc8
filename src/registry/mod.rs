// SPDX-License-Identifier: MPL-2.0
//! In-memory translation registry: per-locale tables, default-locale
//! selection, fallback lookup, and `Accept-Language` negotiation.
//!
//! A [`Registry`] is an ordinary owned value. Build one per process, per
//! test, or per tenant; nothing here touches shared state. The process-wide
//! singleton lives in [`crate::global`].

mod loader;

use crate::error::{Error, Result};
use crate::negotiate;
use std::collections::HashMap;
use std::path::Path;

/// Locale every lookup falls back to, and the tag that always wins the
/// default-locale tie-break.
pub const FALLBACK_LOCALE: &str = "en";

/// All loaded locale tables plus the default-locale setting.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Locale tags in load order (file names sorted at discovery).
    locales: Vec<String>,
    /// Invariant: every tag in `locales` has an entry here.
    tables: HashMap<String, HashMap<String, String>>,
    /// Empty only while the registry holds no locales at all.
    default_locale: String,
}

impl Registry {
    /// Builds a registry from a directory of `<tag>.json` files.
    ///
    /// The first failing file aborts the whole load; a partially populated
    /// registry is never returned.
    ///
    /// # Errors
    ///
    /// [`Error::NoTranslationsFound`] when the directory contains no
    /// translation files, [`Error::FileRead`] when the directory or a file
    /// cannot be read, [`Error::Parse`] when a file is not a flat JSON
    /// object of strings.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut registry = Self::default();
        for path in loader::discover(dir)? {
            let (tag, table) = loader::load_file(&path)?;
            registry.insert(tag, table);
        }
        tracing::info!(
            locales = registry.locales.len(),
            default = %registry.default_locale,
            "translation registry loaded"
        );
        Ok(registry)
    }

    fn insert(&mut self, tag: String, table: HashMap<String, String>) {
        if prefer_as_default(&self.default_locale, &tag) {
            self.default_locale = tag.clone();
        }
        self.tables.insert(tag.clone(), table);
        self.locales.push(tag);
    }

    /// Resolves `key` for `locale` through the fallback chain: the requested
    /// table, then the literal `"en"` table, then the key itself.
    ///
    /// Misses are not errors; an unresolved key comes back unchanged so it
    /// stays identifiable in rendered output.
    pub fn translate<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        if let Some(value) = self.tables.get(locale).and_then(|table| table.get(key)) {
            return value;
        }
        if let Some(value) = self
            .tables
            .get(FALLBACK_LOCALE)
            .and_then(|table| table.get(key))
        {
            return value;
        }
        key
    }

    /// Resolves `key` for the current default locale.
    pub fn translate_default<'a>(&'a self, key: &'a str) -> &'a str {
        self.translate(&self.default_locale, key)
    }

    /// Replaces the default locale.
    ///
    /// # Errors
    ///
    /// [`Error::LocaleNotFound`] when `tag` was never loaded.
    pub fn set_default_locale(&mut self, tag: &str) -> Result<()> {
        if !self.has_locale(tag) {
            return Err(Error::LocaleNotFound(tag.to_string()));
        }
        self.default_locale = tag.to_string();
        Ok(())
    }

    /// The locale used by [`Registry::translate_default`].
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Loaded locale tags in load order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Exact, case-sensitive membership test. No tag normalization.
    pub fn has_locale(&self, tag: &str) -> bool {
        self.locales.iter().any(|known| known == tag)
    }

    /// Picks the first locale out of an `Accept-Language` header value that
    /// is actually loaded, or [`FALLBACK_LOCALE`] when none is.
    ///
    /// Entries are taken in header order; quality parameters are ignored
    /// rather than sorted on.
    pub fn detect_language<'a>(&self, header: &'a str) -> &'a str {
        negotiate::preferred_tags(header)
            .find(|tag| self.has_locale(tag))
            .unwrap_or(FALLBACK_LOCALE)
    }
}

/// Default-locale policy: the first loaded locale becomes the default,
/// unless the tag is literally `"en"`, which takes over regardless of load
/// order.
fn prefer_as_default(current: &str, loaded: &str) -> bool {
    current.is_empty() || loaded == FALLBACK_LOCALE
}
