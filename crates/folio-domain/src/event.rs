//! Event module - the uniform shape every source record is reduced to

use crate::EventKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier for a normalized event
///
/// Built from the kind prefix and the record's index in its source array
/// (`exp-0`, `prj-2`), so the same content always yields the same ids and a
/// renderer can refer back to an event across re-layouts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Build the id for record `index` of the given kind
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_domain::{EventId, EventKind};
    ///
    /// let id = EventId::new(EventKind::Project, 2);
    /// assert_eq!(id.as_str(), "prj-2");
    /// ```
    pub fn new(kind: EventKind, index: usize) -> Self {
        Self(format!("{}-{}", kind.id_prefix(), index))
    }

    /// Wrap an id received back from a rendering layer
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Borrow the id text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A portfolio item reduced to a start/end instant plus display metadata
///
/// Invariant: `start <= end`. Point events have `start == end`.
/// Events are created once per layout pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// Stable, kind-prefixed identifier
    pub id: EventId,

    /// Source collection
    pub kind: EventKind,

    /// Display title (already localized)
    pub title: String,

    /// Start instant (epoch seconds)
    pub start: i64,

    /// End instant (epoch seconds), equal to `start` for points
    pub end: i64,

    /// True only when the record claims "present" and `start <= now <= end`
    pub ongoing: bool,

    /// Organization, team, location, issuer...
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl NormalizedEvent {
    /// Whether this event is a single instant
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Check if the event intersects the closed interval `[from, to]`
    pub fn overlaps(&self, from: i64, to: i64) -> bool {
        self.end >= from && self.start <= to
    }

    /// Look up a metadata value
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: i64, end: i64) -> NormalizedEvent {
        NormalizedEvent {
            id: EventId::new(EventKind::Experience, 0),
            kind: EventKind::Experience,
            title: "Engineer".to_string(),
            start,
            end,
            ongoing: false,
            metadata: BTreeMap::new(),
        }
    }

    #[test]
    fn test_event_id_format() {
        assert_eq!(EventId::new(EventKind::Certificate, 7).to_string(), "crt-7");
        assert_eq!(EventId::from_string("cmp-1"), EventId::new(EventKind::Competition, 1));
    }

    #[test]
    fn test_point() {
        assert!(event(100, 100).is_point());
        assert!(!event(100, 200).is_point());
    }

    #[test]
    fn test_overlaps_is_inclusive() {
        let ev = event(100, 200);
        assert!(ev.overlaps(200, 300));
        assert!(ev.overlaps(0, 100));
        assert!(ev.overlaps(150, 160));
        assert!(!ev.overlaps(201, 300));
        assert!(!ev.overlaps(0, 99));
    }

    #[test]
    fn test_empty_metadata_not_serialized() {
        let json = serde_json::to_value(event(1, 2)).unwrap();
        assert!(json.get("metadata").is_none());
        assert_eq!(json["id"], "exp-0");
    }
}
