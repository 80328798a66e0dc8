// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

/// Errors reported while building a translation registry or changing its
/// default locale.
///
/// Lookup misses are never errors; they resolve through the fallback chain
/// in [`crate::registry::Registry::translate`].
#[derive(Debug, Clone)]
pub enum Error {
    /// The directory was scanned but contained no translation files.
    NoTranslationsFound(PathBuf),

    /// A directory or translation file could not be read.
    FileRead { path: PathBuf, message: String },

    /// File content was not a flat JSON object of string-to-string pairs,
    /// or a settings file could not be serialized.
    Parse { path: PathBuf, message: String },

    /// An operation that needs the process-wide registry ran before
    /// `init_locales` succeeded.
    NotInitialized,

    /// The referenced locale tag is not present in the registry.
    LocaleNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoTranslationsFound(dir) => {
                write!(f, "no translation files found in {}", dir.display())
            }
            Error::FileRead { path, message } => {
                write!(f, "failed to read {}: {}", path.display(), message)
            }
            Error::Parse { path, message } => {
                write!(f, "failed to parse {}: {}", path.display(), message)
            }
            Error::NotInitialized => write!(f, "translations are not initialized"),
            Error::LocaleNotFound(tag) => write!(f, "locale \"{}\" is not loaded", tag),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_no_translations_found() {
        let err = Error::NoTranslationsFound(PathBuf::from("/tmp/langs"));
        assert_eq!(
            format!("{}", err),
            "no translation files found in /tmp/langs"
        );
    }

    #[test]
    fn display_formats_file_read() {
        let err = Error::FileRead {
            path: PathBuf::from("langs/en.json"),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "failed to read langs/en.json: permission denied"
        );
    }

    #[test]
    fn display_formats_parse() {
        let err = Error::Parse {
            path: PathBuf::from("langs/ru.json"),
            message: "expected value at line 3".to_string(),
        };
        assert!(format!("{}", err).starts_with("failed to parse langs/ru.json"));
    }

    #[test]
    fn display_formats_locale_not_found() {
        let err = Error::LocaleNotFound("de".to_string());
        assert_eq!(format!("{}", err), "locale \"de\" is not loaded");
    }

    #[test]
    fn display_formats_not_initialized() {
        assert_eq!(
            format!("{}", Error::NotInitialized),
            "translations are not initialized"
        );
    }
}
