//! Resolution of a day's citations against every loaded translation.
//!
//! For each calendar entry of the day, each citation is parsed and looked up
//! in every translation. Citations that do not parse are dropped; verses a
//! translation lacks come back as `null` for that translation. Neither case
//! fails the query.

use crate::calendar::CalendarEntry;
use crate::citation;
use crate::constants::READING_CITATION_KEY;
use crate::context::AppContext;
use crate::dates::DateKey;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::debug;

/// A citation together with its text in each translation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedReading {
    /// The citation exactly as it appears in the calendar.
    pub citation: String,
    /// `(translation name, verse text)` in translation order; `None` when the
    /// translation has no such verse.
    pub texts: Vec<(String, Option<String>)>,
}

impl ResolvedReading {
    /// The text found in translation `name`, if that translation has the verse.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|(translation, _)| translation == name)
            .and_then(|(_, text)| text.as_deref())
    }
}

impl Serialize for ResolvedReading {
    /// Serializes as `{ "citation": ..., "<Translation>": text-or-null, ... }`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.texts.len() + 1))?;
        map.serialize_entry(READING_CITATION_KEY, &self.citation)?;
        for (translation, text) in &self.texts {
            map.serialize_entry(translation, text)?;
        }
        map.end()
    }
}

/// One calendar entry with its resolved readings.
#[derive(Debug, Clone, Serialize)]
pub struct DayReadings<'a> {
    /// The day queried.
    pub date: DateKey,
    /// The calendar entry, unchanged.
    pub entry: &'a CalendarEntry,
    /// Readings for the entry's citations that parsed, in citation order.
    pub readings: Vec<ResolvedReading>,
}

/// Resolves the readings for every entry scheduled on `date`.
///
/// The result has one element per calendar entry, in calendar order, even for
/// entries without citations. A day with nothing scheduled yields an empty
/// vector.
pub fn resolve_readings(context: &AppContext, date: DateKey) -> Vec<DayReadings<'_>> {
    context
        .calendar()
        .entries_for_date(date)
        .iter()
        .map(|entry| DayReadings {
            date,
            entry,
            readings: resolve_entry(context, entry),
        })
        .collect()
}

/// Resolves the citations of a single entry.
pub fn resolve_entry(context: &AppContext, entry: &CalendarEntry) -> Vec<ResolvedReading> {
    entry
        .citations
        .iter()
        .filter_map(|raw| match citation::parse(raw) {
            Ok(parsed) => Some(ResolvedReading {
                citation: raw.clone(),
                texts: context
                    .translations()
                    .iter()
                    .map(|store| {
                        let text = store
                            .lookup(&parsed.book, parsed.chapter, parsed.verse)
                            .map(str::to_string);
                        (store.name().to_string(), text)
                    })
                    .collect(),
            }),
            Err(e) => {
                debug!("Skipping citation: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarStore;
    use crate::scripture::ScriptureStore;

    const DRC: &str = r#"{"books":[
        {"name":"Genesis","chapters":[{"chapter":1,"verses":[{"verse":1,"text":"In the beginning"}]}]},
        {"name":"Exodus","chapters":[{"chapter":3,"verses":[{"verse":14,"text":"I AM WHO AM"}]}]}
    ]}"#;

    const VULGATE: &str = r#"{"books":[
        {"name":"Genesis","chapters":[{"chapter":1,"verses":[{"verse":1,"text":"In principio"}]}]}
    ]}"#;

    fn context(calendar: &str) -> AppContext {
        AppContext::new(
            CalendarStore::from_json_str(calendar).unwrap(),
            vec![
                ScriptureStore::from_json_str("DRC", DRC).unwrap(),
                ScriptureStore::from_json_str("Vulgate", VULGATE).unwrap(),
            ],
        )
    }

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_bad_citations_are_omitted_in_order() {
        let context = context(
            r#"{"2025-01-06": [{"citations": ["Genesis 1:1", "BadCitation", "Exodus 3:14"]}]}"#,
        );

        let days = resolve_readings(&context, key("2025-01-06"));
        assert_eq!(days.len(), 1);

        let readings = &days[0].readings;
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].citation, "Genesis 1:1");
        assert_eq!(readings[1].citation, "Exodus 3:14");
    }

    #[test]
    fn test_missing_verse_is_null_per_translation() {
        let context = context(r#"{"2025-01-06": [{"citations": ["Exodus 3:14"]}]}"#);

        let days = resolve_readings(&context, key("2025-01-06"));
        let reading = &days[0].readings[0];
        assert_eq!(reading.text("DRC"), Some("I AM WHO AM"));
        assert_eq!(reading.text("Vulgate"), None);
        assert_eq!(
            reading.texts,
            vec![
                ("DRC".to_string(), Some("I AM WHO AM".to_string())),
                ("Vulgate".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_entries_without_citations_are_kept() {
        let context = context(
            r#"{"2025-01-06": [{"id": "first"}, {"id": "second", "citations": ["genesis 1:1"]}]}"#,
        );

        let days = resolve_readings(&context, key("2025-01-06"));
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].entry.id(), Some("first"));
        assert!(days[0].readings.is_empty());
        assert_eq!(days[1].readings[0].text("Vulgate"), Some("In principio"));
    }

    #[test]
    fn test_absent_date_is_empty() {
        let context = context(r#"{"2025-01-06": [{"citations": ["Genesis 1:1"]}]}"#);
        assert!(resolve_readings(&context, key("2025-01-07")).is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let context = context(
            r#"{"2025-01-06": [{"id": "epiphany", "citations": ["Genesis 1:1", "Exodus 3:14"]}]}"#,
        );

        let days = resolve_readings(&context, key("2025-01-06"));
        let json = serde_json::to_value(&days).unwrap();

        assert_eq!(json[0]["date"], "2025-01-06");
        assert_eq!(json[0]["entry"]["id"], "epiphany");
        assert_eq!(json[0]["readings"][0]["citation"], "Genesis 1:1");
        assert_eq!(json[0]["readings"][0]["DRC"], "In the beginning");
        assert_eq!(json[0]["readings"][0]["Vulgate"], "In principio");
        assert!(json[0]["readings"][1]["Vulgate"].is_null());
    }

    #[test]
    fn test_serialization_keeps_translation_order() {
        let reading = ResolvedReading {
            citation: "Genesis 1:1".to_string(),
            texts: vec![
                ("Vulgate".to_string(), None),
                ("DRC".to_string(), Some("x".to_string())),
            ],
        };

        let text = serde_json::to_string(&reading).unwrap();
        assert_eq!(text, r#"{"citation":"Genesis 1:1","Vulgate":null,"DRC":"x"}"#);
    }
}
