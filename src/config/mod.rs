//! Configuration management for the ordo application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It locates the calendar dataset and the
//! scripture datasets, and names the translations to load.
//!
//! # Environment Variables
//!
//! - `ORDO_CALENDAR_PATH`: Path to the calendar dataset (defaults to `ordo_data/ordo_2025.json`)
//! - `ORDO_BIBLE_DIR`: Directory holding one `<Translation>.json` per translation
//!   (defaults to `bible_data/formats/json`)
//! - `ORDO_TRANSLATIONS`: Comma-separated translation names (defaults to `DRC,Vulgate,VulgClementine`)

use crate::constants::{
    DEFAULT_BIBLE_DIR, DEFAULT_CALENDAR_PATH, DEFAULT_TRANSLATIONS, ENV_VAR_BIBLE_DIR,
    ENV_VAR_CALENDAR_PATH, ENV_VAR_TRANSLATIONS, READING_CITATION_KEY, REDACTED_PLACEHOLDER,
    TRANSLATION_FILE_EXTENSION, TRANSLATION_FORBIDDEN_CHARS,
};
use crate::errors::{AppError, AppResult};
use std::collections::HashSet;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the ordo application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use ordo::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     calendar_path: PathBuf::from("/data/ordo_2025.json"),
///     bible_dir: PathBuf::from("/data/bibles"),
///     translations: vec!["DRC".to_string()],
/// };
/// assert_eq!(config.translation_path("DRC"), PathBuf::from("/data/bibles/DRC.json"));
/// ```
#[derive(Clone)]
pub struct Config {
    /// Path to the calendar dataset.
    pub calendar_path: PathBuf,

    /// Directory holding the scripture datasets.
    pub bible_dir: PathBuf,

    /// Translations to load, in the order they appear in readings output.
    pub translations: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("calendar_path", &REDACTED_PLACEHOLDER)
            .field("bible_dir", &REDACTED_PLACEHOLDER)
            .field("translations", &self.translations)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values.
    fn default() -> Self {
        Config {
            calendar_path: PathBuf::from(DEFAULT_CALENDAR_PATH),
            bible_dir: PathBuf::from(DEFAULT_BIBLE_DIR),
            translations: DEFAULT_TRANSLATIONS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Paths are expanded with `shellexpand`, so `~` and `$VAR` references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// configuration does not pass [`Config::validate`].
    pub fn load() -> AppResult<Self> {
        let calendar_path = expand_path(
            &env::var(ENV_VAR_CALENDAR_PATH).unwrap_or_else(|_| DEFAULT_CALENDAR_PATH.to_string()),
        )?;
        let bible_dir = expand_path(
            &env::var(ENV_VAR_BIBLE_DIR).unwrap_or_else(|_| DEFAULT_BIBLE_DIR.to_string()),
        )?;

        let translations = match env::var(ENV_VAR_TRANSLATIONS) {
            Ok(list) => parse_translation_list(&list),
            Err(_) => Config::default().translations,
        };

        let config = Config {
            calendar_path,
            bible_dir,
            translations,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a path is empty, no translation is
    /// configured, a translation is listed twice, a translation name could
    /// escape the scripture directory, or a name collides with the citation
    /// key of a serialized reading.
    pub fn validate(&self) -> AppResult<()> {
        if self.calendar_path.as_os_str().is_empty() {
            return Err(AppError::Config("Calendar path is empty".to_string()));
        }

        if self.bible_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Scripture directory path is empty".to_string(),
            ));
        }

        if self.translations.is_empty() {
            return Err(AppError::Config(
                "At least one translation must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.translations {
            if name.is_empty() {
                return Err(AppError::Config("Translation name is empty".to_string()));
            }
            if let Some(ch) = name.chars().find(|c| TRANSLATION_FORBIDDEN_CHARS.contains(c)) {
                return Err(AppError::Config(format!(
                    "Translation name '{}' cannot contain '{}'",
                    name, ch
                )));
            }
            if name == READING_CITATION_KEY {
                return Err(AppError::Config(format!(
                    "Translation name '{}' is reserved",
                    name
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(AppError::Config(format!(
                    "Translation '{}' is listed more than once",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Path of the dataset for translation `name`.
    pub fn translation_path(&self, name: &str) -> PathBuf {
        self.bible_dir
            .join(name)
            .with_extension(TRANSLATION_FILE_EXTENSION)
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn parse_translation_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn setup() {
        env::remove_var(ENV_VAR_CALENDAR_PATH);
        env::remove_var(ENV_VAR_BIBLE_DIR);
        env::remove_var(ENV_VAR_TRANSLATIONS);
    }

    #[test]
    fn test_debug_impl_redacts_paths() {
        let config = Config {
            calendar_path: PathBuf::from("/home/username/private/ordo.json"),
            bible_dir: PathBuf::from("/home/username/private/bibles"),
            translations: vec!["DRC".to_string()],
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(debug_output.contains("DRC"));
        assert!(!debug_output.contains("/home/username/private"));
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        setup();

        let config = Config::load().unwrap();
        assert_eq!(config.calendar_path, PathBuf::from(DEFAULT_CALENDAR_PATH));
        assert_eq!(config.bible_dir, PathBuf::from(DEFAULT_BIBLE_DIR));
        assert_eq!(config.translations, vec!["DRC", "Vulgate", "VulgClementine"]);
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        setup();

        env::set_var(ENV_VAR_CALENDAR_PATH, "/srv/ordo/ordo_2026.json");
        env::set_var(ENV_VAR_BIBLE_DIR, "/srv/ordo/bibles");
        env::set_var(ENV_VAR_TRANSLATIONS, " DRC , Vulgate,,");

        let config = Config::load();
        setup();

        let config = config.unwrap();
        assert_eq!(config.calendar_path, PathBuf::from("/srv/ordo/ordo_2026.json"));
        assert_eq!(config.bible_dir, PathBuf::from("/srv/ordo/bibles"));
        assert_eq!(config.translations, vec!["DRC", "Vulgate"]);
    }

    #[test]
    #[serial]
    fn test_load_expands_env_references() {
        setup();
        env::set_var("ORDO_TEST_ROOT", "/srv/data");
        env::set_var(ENV_VAR_BIBLE_DIR, "$ORDO_TEST_ROOT/bibles");

        let config = Config::load();
        setup();
        env::remove_var("ORDO_TEST_ROOT");

        assert_eq!(config.unwrap().bible_dir, PathBuf::from("/srv/data/bibles"));
    }

    #[test]
    #[serial]
    fn test_load_rejects_empty_translation_list() {
        setup();
        env::set_var(ENV_VAR_TRANSLATIONS, " , ");

        let result = Config::load();
        setup();

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("At least one translation")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_duplicates_and_paths() {
        let mut config = Config {
            translations: vec!["DRC".to_string(), "DRC".to_string()],
            ..Config::default()
        };
        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("more than once")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        config.translations = vec!["../secrets".to_string()];
        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("cannot contain")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_reserved_name() {
        let config = Config {
            translations: vec!["DRC".to_string(), "citation".to_string()],
            ..Config::default()
        };
        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("reserved")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_paths() {
        let config = Config {
            calendar_path: PathBuf::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            bible_dir: PathBuf::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_translation_path() {
        let config = Config {
            bible_dir: PathBuf::from("/data/json"),
            ..Config::default()
        };
        assert_eq!(
            config.translation_path("VulgClementine"),
            PathBuf::from("/data/json/VulgClementine.json")
        );
    }
}
