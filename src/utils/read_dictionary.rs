use crate::models::{Dictionary, Error};
use crate::types::{Keyword, ThemeName};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct DictionaryRecord {
    theme: ThemeName,
    words: Vec<Keyword>,
}

/// Parses a dictionary from JSON of the form
/// `[{"theme": "sports", "words": ["ball", "goal"]}, ...]`.
///
/// Any entry with a missing or mistyped `theme` or `words` field fails the whole load with
/// [`Error::MalformedDictionary`]; no partial dictionary is returned.
pub fn read_dictionary_from_string(json: &str) -> Result<Dictionary, Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json).map_err(|e| {
        Error::MalformedDictionary(format!("Expected a JSON array of themes: {}", e))
    })?;

    let mut records = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let record: DictionaryRecord = serde_json::from_value(value).map_err(|e| {
            Error::MalformedDictionary(format!("Invalid entry at index {}: {}", index, e))
        })?;

        records.push((record.theme, record.words));
    }

    Dictionary::new(records)
}

/// Reads and parses a JSON dictionary file.
pub fn read_dictionary_from_path<P: AsRef<Path>>(path: P) -> Result<Dictionary, Error> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|e| {
        Error::InputUnavailable(format!(
            "Failed to read dictionary {}: {}",
            path.display(),
            e
        ))
    })?;

    read_dictionary_from_string(&json)
}
