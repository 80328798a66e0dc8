// SPDX-License-Identifier: MPL-2.0
use phrasebook::config::{self, Settings};
use phrasebook::registry::Registry;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_TRANSLATIONS_DIR: &str = "langs";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let dir: Option<PathBuf> = args.opt_value_from_str("--dir").unwrap();
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap();
    let header: Option<String> = args.opt_value_from_str("--header").unwrap();
    let keys: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();

    if keys.is_empty() {
        eprintln!("usage: phrasebook [--dir <path>] [--lang <tag>] [--header <accept-language>] <key>...");
        return ExitCode::FAILURE;
    }

    let settings = config::load().unwrap_or_default();
    let dir = dir
        .or_else(|| settings.translations_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSLATIONS_DIR));

    let registry = match Registry::from_dir(&dir) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let locale = match header {
        Some(header) => registry.detect_language(&header).to_string(),
        None => resolve_locale(lang, &settings, &registry),
    };

    for key in &keys {
        println!("{}", registry.translate(&locale, key));
    }
    ExitCode::SUCCESS
}

/// Picks the display locale: CLI flag, then config file, then the OS
/// locale, then whatever the registry chose as its default. Unknown tags
/// are skipped at every step.
fn resolve_locale(cli_lang: Option<String>, settings: &Settings, registry: &Registry) -> String {
    if let Some(lang) = cli_lang {
        if registry.has_locale(&lang) {
            return lang;
        }
    }

    if let Some(lang) = &settings.language {
        if registry.has_locale(lang) {
            return lang.clone();
        }
    }

    if let Some(os_locale) = sys_locale::get_locale() {
        if registry.has_locale(&os_locale) {
            return os_locale;
        }
    }

    registry.default_locale().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_registry() -> Registry {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("en.json"), "{}").expect("failed to write en.json");
        fs::write(temp_dir.path().join("fr.json"), "{}").expect("failed to write fr.json");
        Registry::from_dir(temp_dir.path()).expect("failed to build registry")
    }

    #[test]
    fn resolve_locale_prefers_cli_flag() {
        let registry = sample_registry();
        let settings = Settings {
            language: Some("en".to_string()),
            translations_dir: None,
        };
        let locale = resolve_locale(Some("fr".to_string()), &settings, &registry);
        assert_eq!(locale, "fr");
    }

    #[test]
    fn resolve_locale_falls_back_to_settings() {
        let registry = sample_registry();
        let settings = Settings {
            language: Some("fr".to_string()),
            translations_dir: None,
        };
        let locale = resolve_locale(None, &settings, &registry);
        assert_eq!(locale, "fr");
    }

    #[test]
    fn resolve_locale_skips_unknown_tags() {
        let registry = sample_registry();
        let settings = Settings {
            language: Some("de".to_string()),
            translations_dir: None,
        };
        // Neither the flag nor the config names a loaded locale; the result
        // comes from the OS cascade or the registry default, both of which
        // are loaded locales (or the default "en").
        let locale = resolve_locale(Some("pt-BR".to_string()), &settings, &registry);
        assert!(registry.has_locale(&locale));
    }
}
