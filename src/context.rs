//! Application context: every dataset the queries need, loaded once.
//!
//! An `AppContext` is built during startup and handed by reference to each
//! query. It is never mutated afterwards, so one instance (behind an `Arc` if
//! needed) can serve any number of concurrent readers.

use crate::calendar::CalendarStore;
use crate::config::Config;
use crate::errors::AppResult;
use crate::scripture::ScriptureStore;
use tracing::info;

/// The loaded calendar and scripture translations.
#[derive(Debug)]
pub struct AppContext {
    calendar: CalendarStore,
    translations: Vec<ScriptureStore>,
}

impl AppContext {
    /// Assembles a context from already loaded stores. Translations are
    /// consulted, and reported, in the order given.
    pub fn new(calendar: CalendarStore, translations: Vec<ScriptureStore>) -> Self {
        AppContext {
            calendar,
            translations,
        }
    }

    /// Loads every dataset named by `config`.
    ///
    /// # Errors
    ///
    /// Fails on the first dataset that cannot be read or parsed; no context is
    /// produced from partial data.
    pub fn load(config: &Config) -> AppResult<Self> {
        config.validate()?;

        let calendar = CalendarStore::load(&config.calendar_path)?;
        let translations = config
            .translations
            .iter()
            .map(|name| ScriptureStore::load(name, &config.translation_path(name)))
            .collect::<AppResult<Vec<_>>>()?;

        info!(
            "Application context ready with {} translations",
            translations.len()
        );
        Ok(Self::new(calendar, translations))
    }

    /// The calendar store.
    pub fn calendar(&self) -> &CalendarStore {
        &self.calendar
    }

    /// The translation stores, in configuration order.
    pub fn translations(&self) -> &[ScriptureStore] {
        &self.translations
    }
}
