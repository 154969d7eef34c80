//! Raw content records handed to the engine
//!
//! Records stay loosely typed (`serde_json::Value`); the normalizer reads
//! only the fields it knows and ignores the rest.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The five dated collections the timeline is built from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSources {
    /// `experience.json`
    pub experience: Vec<Value>,
    /// `competitions.json`
    pub competitions: Vec<Value>,
    /// `certificates.json`
    pub certificates: Vec<Value>,
    /// `projects.json`
    pub projects: Vec<Value>,
    /// `courses.json`
    pub courses: Vec<Value>,
}

impl TimelineSources {
    /// Total number of records across all collections
    pub fn len(&self) -> usize {
        self.experience.len()
            + self.competitions.len()
            + self.certificates.len()
            + self.projects.len()
            + self.courses.len()
    }

    /// Whether every collection is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pick display text from a plain string or a language-keyed object
///
/// Tries `language`, then `en`, then the first non-empty string value.
/// Blank strings count as missing.
pub fn localized(value: Option<&Value>, language: &str) -> Option<String> {
    match value? {
        Value::String(s) => non_blank(s),
        Value::Object(map) => map
            .get(language)
            .and_then(Value::as_str)
            .and_then(non_blank)
            .or_else(|| map.get("en").and_then(Value::as_str).and_then(non_blank))
            .or_else(|| map.values().filter_map(Value::as_str).find_map(non_blank)),
        _ => None,
    }
}

/// First non-blank string among several record fields
pub(crate) fn first_text(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .filter_map(Value::as_str)
        .find_map(non_blank)
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
