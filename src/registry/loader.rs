// SPDX-License-Identifier: MPL-2.0
//! Translation file discovery and parsing.
//!
//! A translation file is `<locale-tag>.json`: a flat JSON object whose keys
//! are translation keys and whose values are strings. Anything else (nested
//! objects, arrays, non-string scalars) is rejected as a parse failure.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension that marks a file as a translation table.
pub(crate) const TRANSLATION_EXTENSION: &str = "json";

/// Finds every translation file in `dir`.
///
/// The result is sorted by file name so load order (and therefore the
/// first-loaded default locale) is stable across platforms. Discovery is
/// total: every matching file is returned and will be attempted.
pub(crate) fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|err| Error::FileRead {
        path: dir.to_path_buf(),
        message: err.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| Error::FileRead {
            path: dir.to_path_buf(),
            message: err.to_string(),
        })?;
        let path = entry.path();
        if path
            .extension()
            .is_some_and(|ext| ext == TRANSLATION_EXTENSION)
        {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(Error::NoTranslationsFound(dir.to_path_buf()));
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Reads and parses one translation file, returning the locale tag derived
/// from the file name together with its table.
pub(crate) fn load_file(path: &Path) -> Result<(String, HashMap<String, String>)> {
    let tag = locale_tag(path).ok_or_else(|| Error::FileRead {
        path: path.to_path_buf(),
        message: "file has no base name".to_string(),
    })?;

    let content = fs::read_to_string(path).map_err(|err| Error::FileRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let table: HashMap<String, String> =
        serde_json::from_str(&content).map_err(|err| Error::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    tracing::debug!(tag = %tag, entries = table.len(), "loaded translation file");
    Ok((tag, table))
}

/// Derives the locale tag from a translation file path: the base name minus
/// the recognized extension.
fn locale_tag(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
