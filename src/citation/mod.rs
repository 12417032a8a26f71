//! Parsing of free-text scripture citations.
//!
//! The grammar is deliberately small: `<Book> <Chapter>:<Verse>`, one verse
//! only. Ranges (`1:1-5`) and lists (`1:1,3`) are rejected rather than
//! partially parsed. A leading ordinal (`1`, `II`, ...) is kept with the word
//! after it, so `1 Corinthians 13:4` names the book "1 Corinthians". Other
//! multi-word book names such as "Song of Songs" are not recognised.

use crate::constants::BOOK_ORDINAL_PREFIXES;
use crate::errors::CitationError;
use std::fmt;

/// A structured single-verse reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// Book name as written in the citation (matched case-insensitively later).
    pub book: String,
    /// Chapter number, 1-based.
    pub chapter: u32,
    /// Verse number, 1-based.
    pub verse: u32,
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Parses a citation such as `"Genesis 1:1"`.
///
/// # Errors
///
/// Returns a `CitationError` when the book and chapter are not separated by
/// whitespace, when the remainder does not contain exactly one `:`, or when
/// either side of the `:` is not a positive integer.
///
/// # Examples
///
/// ```
/// use ordo::citation::parse;
///
/// let citation = parse("Genesis 1:1").unwrap();
/// assert_eq!(citation.book, "Genesis");
/// assert_eq!((citation.chapter, citation.verse), (1, 1));
///
/// assert!(parse("Psalm 23").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Citation, CitationError> {
    let trimmed = raw.trim();

    let (book, rest) = split_book(trimmed).ok_or_else(|| CitationError::MissingSeparator {
        raw: raw.to_string(),
    })?;

    let mut parts = rest.split(':');
    let chapter = parts.next().unwrap_or_default();
    let verse = match (parts.next(), parts.next()) {
        (Some(verse), None) => verse,
        (None, _) => {
            return Err(CitationError::MissingVerse {
                raw: raw.to_string(),
            })
        }
        (Some(_), Some(_)) => {
            return Err(CitationError::TooManySeparators {
                raw: raw.to_string(),
            })
        }
    };

    Ok(Citation {
        book: book.to_string(),
        chapter: parse_number(raw, chapter)?,
        verse: parse_number(raw, verse)?,
    })
}

/// Splits off the book name at the first whitespace run, keeping an ordinal
/// prefix together with the following word.
fn split_book(citation: &str) -> Option<(&str, &str)> {
    let (first, rest) = split_first_word(citation)?;

    if BOOK_ORDINAL_PREFIXES.contains(&first) {
        if let Some((second, remainder)) = split_first_word(rest) {
            if !second.contains(':') {
                let book_end = citation.len() - rest.len() + second.len();
                return Some((&citation[..book_end], remainder));
            }
        }
    }

    Some((first, rest))
}

fn split_first_word(s: &str) -> Option<(&str, &str)> {
    let idx = s.find(char::is_whitespace)?;
    let rest = s[idx..].trim_start();
    if rest.is_empty() {
        return None;
    }
    Some((&s[..idx], rest))
}

fn parse_number(raw: &str, token: &str) -> Result<u32, CitationError> {
    let token = token.trim();
    match token.parse::<u32>() {
        Ok(n) if n > 0 && token.bytes().all(|b| b.is_ascii_digit()) => Ok(n),
        _ => Err(CitationError::InvalidNumber {
            raw: raw.to_string(),
            token: token.to_string(),
        }),
    }
}
