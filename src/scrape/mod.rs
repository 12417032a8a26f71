//! Lectionary citation index scraper.
//!
//! Fetches the Sunday and weekday lectionary index pages, collects the text of
//! every list item, and writes `{ "sundays": [...], "weekdays": [...] }`.
//! Either page failing aborts the run before anything is written, and the
//! output file is replaced atomically, so a failed run never leaves a partial
//! file behind.

use crate::constants::{
    LECTIONARY_SUNDAYS_PAGE, LECTIONARY_WEEKDAYS_PAGE, SCRAPER_TIMEOUT_SECS, SCRAPER_USER_AGENT,
};
use crate::errors::{AppError, AppResult, ScrapeError};
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// The scraped citation index, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationIndex {
    /// List items from the Sunday index page.
    pub sundays: Vec<String>,
    /// List items from the weekday index page.
    pub weekdays: Vec<String>,
}

/// Client for the lectionary index pages.
pub struct LectionaryScraper {
    base_url: String,
    client: Client,
}

impl LectionaryScraper {
    /// Creates a scraper for the index pages under `base_url`
    /// (e.g. `https://catholic-resources.org/Lectionary`).
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::Fetch` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .user_agent(SCRAPER_USER_AGENT)
            .timeout(Duration::from_secs(SCRAPER_TIMEOUT_SECS))
            .build()
            .map_err(|source| ScrapeError::Fetch {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self { base_url, client })
    }

    fn page_url(&self, page: &str) -> String {
        format!("{}/{}", self.base_url, page)
    }

    fn fetch(&self, page: &str) -> AppResult<String> {
        let url = self.page_url(page);
        info!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| ScrapeError::Fetch {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url,
                status: status.as_u16(),
            }
            .into());
        }

        response
            .text()
            .map_err(|source| ScrapeError::Fetch { url, source }.into())
    }

    /// Fetches both index pages and extracts their list items.
    ///
    /// # Errors
    ///
    /// Returns a `ScrapeError` if either page cannot be fetched or answers
    /// with a non-success status.
    pub fn scrape(&self) -> AppResult<CitationIndex> {
        let sundays = extract_list_items(&self.fetch(LECTIONARY_SUNDAYS_PAGE)?)?;
        debug!("Found {} Sunday citations", sundays.len());

        let weekdays = extract_list_items(&self.fetch(LECTIONARY_WEEKDAYS_PAGE)?)?;
        debug!("Found {} weekday citations", weekdays.len());

        Ok(CitationIndex { sundays, weekdays })
    }
}

/// Returns the text of every `<li>` in `html`, in document order, with
/// whitespace collapsed. Items without text are skipped.
///
/// # Examples
///
/// ```
/// use ordo::scrape::extract_list_items;
///
/// let html = "<ul><li> Genesis 1:1 </li><li></li><li><b>Exodus</b> 3:14</li></ul>";
/// assert_eq!(extract_list_items(html).unwrap(), vec!["Genesis 1:1", "Exodus 3:14"]);
/// ```
pub fn extract_list_items(html: &str) -> AppResult<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("li").map_err(|e| ScrapeError::Selector(e.to_string()))?;

    Ok(document
        .select(&selector)
        .map(|item| {
            let text: String = item.text().collect();
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect())
}

/// Writes `index` as pretty-printed JSON to `path`, creating parent
/// directories. The file appears only once fully written.
pub fn write_index(index: &CitationIndex, path: &Path) -> AppResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    serde_json::to_writer_pretty(&mut file, index)?;
    file.write_all(b"\n")?;
    file.persist(path).map_err(|e| AppError::Io(e.error))?;

    info!("Saved {}", path.display());
    Ok(())
}

/// Scrapes the index pages under `base_url` and writes the result to `output`.
pub fn run(base_url: &str, output: &Path) -> AppResult<CitationIndex> {
    let scraper = LectionaryScraper::new(base_url)?;
    let index = scraper.scrape()?;
    write_index(&index, output)?;
    Ok(index)
}
