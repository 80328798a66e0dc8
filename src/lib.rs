// SPDX-License-Identifier: MPL-2.0
//! `phrasebook` is a small localization lookup library.
//!
//! Translation tables live on disk as one flat JSON file per locale
//! (`en.json`, `ru.json`, ...); keys map to translated strings. A loaded
//! [`registry::Registry`] resolves a key through a fixed fallback chain
//! (requested locale, then `"en"`, then the key itself) and negotiates a
//! locale from an `Accept-Language`-style header by first exact match,
//! ignoring quality values.
//!
//! ```no_run
//! use phrasebook::registry::Registry;
//!
//! # fn main() -> phrasebook::error::Result<()> {
//! let registry = Registry::from_dir("langs")?;
//! let locale = registry.detect_language("ru, en-GB;q=0.8, en;q=0.7");
//! println!("{}", registry.translate(locale, "hello_world"));
//! # Ok(())
//! # }
//! ```
//!
//! Hosts that want one shared table for the whole process can use the
//! [`global`] facade instead of passing a registry around.

#![doc(html_root_url = "https://docs.rs/phrasebook/0.2.0")]

pub mod config;
pub mod error;
pub mod global;
pub mod negotiate;
pub mod registry;
