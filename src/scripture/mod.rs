//! In-memory scripture translations.
//!
//! Each translation is loaded once from a JSON document of the shape
//! `{ "books": [ { "name", "chapters": [ { "chapter", "verses": [ { "verse", "text" } ] } ] } ] }`
//! and answers point lookups by book, chapter and verse. A missing verse is an
//! ordinary `None`, never an error.

use crate::errors::{AppResult, DatasetError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct BibleDocument {
    books: Vec<BookRecord>,
}

#[derive(Debug, Deserialize)]
struct BookRecord {
    name: String,
    chapters: Vec<ChapterRecord>,
}

#[derive(Debug, Deserialize)]
struct ChapterRecord {
    chapter: u32,
    verses: Vec<VerseRecord>,
}

#[derive(Debug, Deserialize)]
struct VerseRecord {
    verse: u32,
    text: String,
}

/// A book's chapters, indexed by chapter then verse number.
#[derive(Debug, Default)]
struct Book {
    chapters: HashMap<u32, HashMap<u32, String>>,
}

/// One loaded translation, e.g. "DRC".
///
/// # Examples
///
/// ```
/// use ordo::scripture::ScriptureStore;
///
/// let json = r#"{"books":[{"name":"Genesis","chapters":[
///     {"chapter":1,"verses":[{"verse":1,"text":"In the beginning"}]}]}]}"#;
/// let store = ScriptureStore::from_json_str("DRC", json).unwrap();
///
/// assert_eq!(store.lookup("genesis", 1, 1), Some("In the beginning"));
/// assert_eq!(store.lookup("Genesis", 1, 2), None);
/// ```
#[derive(Debug)]
pub struct ScriptureStore {
    name: String,
    // Keyed by lowercased book name.
    books: HashMap<String, Book>,
}

impl ScriptureStore {
    /// Loads a translation from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Read` if the file cannot be read,
    /// `DatasetError::Malformed` if it is not a scripture document, and
    /// `DatasetError::Invalid` if a book, chapter or verse appears twice.
    pub fn load(name: &str, path: &Path) -> AppResult<Self> {
        debug!("Loading translation {} from {:?}", name, path);

        let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::parse(name, &content, path)?;
        info!(
            "Loaded translation {} ({} books)",
            store.name,
            store.book_count()
        );
        Ok(store)
    }

    /// Builds a translation from an in-memory JSON document.
    pub fn from_json_str(name: &str, json: &str) -> AppResult<Self> {
        Self::parse(name, json, Path::new("<memory>"))
    }

    fn parse(name: &str, json: &str, path: &Path) -> AppResult<Self> {
        let document: BibleDocument =
            serde_json::from_str(json).map_err(|source| DatasetError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let invalid = |reason: String| DatasetError::Invalid {
            path: path.to_path_buf(),
            reason,
        };

        let mut books = HashMap::with_capacity(document.books.len());
        for record in document.books {
            let mut book = Book::default();
            for chapter in record.chapters {
                let mut verses = HashMap::with_capacity(chapter.verses.len());
                for verse in chapter.verses {
                    if verses.insert(verse.verse, verse.text).is_some() {
                        return Err(invalid(format!(
                            "duplicate verse {} {}:{}",
                            record.name, chapter.chapter, verse.verse
                        ))
                        .into());
                    }
                }
                if book.chapters.insert(chapter.chapter, verses).is_some() {
                    return Err(invalid(format!(
                        "duplicate chapter {} {}",
                        record.name, chapter.chapter
                    ))
                    .into());
                }
            }

            if books.insert(record.name.to_lowercase(), book).is_some() {
                return Err(invalid(format!("duplicate book '{}'", record.name)).into());
            }
        }

        Ok(ScriptureStore {
            name: name.to_string(),
            books,
        })
    }

    /// The translation's identifier, used as its key in readings output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a verse. Book names match case-insensitively; chapter and
    /// verse numbers match exactly.
    pub fn lookup(&self, book: &str, chapter: u32, verse: u32) -> Option<&str> {
        self.books
            .get(&book.to_lowercase())?
            .chapters
            .get(&chapter)?
            .get(&verse)
            .map(String::as_str)
    }

    /// Number of books in the translation.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}
