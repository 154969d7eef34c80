//! Event normalization
//!
//! Maps the five record kinds onto [`NormalizedEvent`]. Ranged kinds read a
//! start/end pair and a `present` flag; instant kinds read one date field.

use crate::date::{normalize_date, Zone};
use crate::sources::{first_text, localized, TimelineSources};
use folio_domain::{EventId, EventKind, NormalizedEvent};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Record fields the normalizer reads for one kind
struct FieldMap {
    start: &'static [&'static str],
    end: &'static [&'static str],
    title: &'static [&'static str],
    metadata: &'static [(&'static str, &'static [&'static str])],
}

fn fields(kind: EventKind) -> FieldMap {
    match kind {
        EventKind::Experience => FieldMap {
            start: &["start"],
            end: &["end"],
            title: &["title"],
            metadata: &[
                ("organization", &["organization"]),
                ("team", &["team"]),
                ("location", &["location"]),
            ],
        },
        EventKind::Competition => FieldMap {
            start: &["start"],
            end: &["end"],
            title: &["name", "title"],
            metadata: &[
                ("organization", &["organization", "organizer"]),
                ("team", &["team", "team_name"]),
            ],
        },
        EventKind::Project => FieldMap {
            start: &["start_unix", "start"],
            end: &["end_unix", "end"],
            title: &["title"],
            metadata: &[("organization", &["organization"]), ("team", &["team"])],
        },
        EventKind::Certificate => FieldMap {
            start: &["issued_at_unix", "issued_at_iso", "issued_at"],
            end: &[],
            title: &["name"],
            metadata: &[("organization", &["issuer"])],
        },
        EventKind::Course => FieldMap {
            start: &["date"],
            end: &[],
            title: &["name"],
            metadata: &[("organization", &["issuer"])],
        },
    }
}

/// Reduces raw records to uniform events
///
/// # Examples
///
/// ```
/// use folio_timeline::{EventNormalizer, TimelineSources};
/// use folio_timeline::date::Zone;
/// use serde_json::json;
///
/// let sources = TimelineSources {
///     experience: vec![json!({"title": {"en": "Intern"}, "start": "2024-06", "end": "2024-09"})],
///     ..Default::default()
/// };
/// let events = EventNormalizer::new(Zone::utc(), "en").normalize(&sources, 1_735_689_600);
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].id.as_str(), "exp-0");
/// assert_eq!(events[0].title, "Intern");
/// ```
#[derive(Debug, Clone)]
pub struct EventNormalizer {
    zone: Zone,
    language: String,
}

impl EventNormalizer {
    /// Create a normalizer reading naive dates in `zone`
    pub fn new(zone: Zone, language: impl Into<String>) -> Self {
        Self {
            zone,
            language: language.into(),
        }
    }

    /// Normalize every collection
    ///
    /// Output order: experience, competitions, projects, certificates,
    /// courses, each in source order. Records without any usable date are
    /// dropped.
    pub fn normalize(&self, sources: &TimelineSources, now: i64) -> Vec<NormalizedEvent> {
        self.normalize_with_dropped(sources, now).0
    }

    /// Normalize every collection, also returning the ids of dropped records
    pub fn normalize_with_dropped(
        &self,
        sources: &TimelineSources,
        now: i64,
    ) -> (Vec<NormalizedEvent>, Vec<EventId>) {
        let collections: [(EventKind, &[Value]); 5] = [
            (EventKind::Experience, &sources.experience),
            (EventKind::Competition, &sources.competitions),
            (EventKind::Project, &sources.projects),
            (EventKind::Certificate, &sources.certificates),
            (EventKind::Course, &sources.courses),
        ];

        let mut out = Vec::with_capacity(sources.len());
        let mut dropped = Vec::new();
        for (kind, records) in collections {
            for (index, record) in records.iter().enumerate() {
                match self.normalize_record(kind, index, record, now) {
                    Some(event) => out.push(event),
                    None => {
                        let id = EventId::new(kind, index);
                        debug!("Dropping {}: no usable date", id);
                        dropped.push(id);
                    }
                }
            }
        }
        debug!("Normalized {} of {} records", out.len(), sources.len());
        (out, dropped)
    }

    /// Normalize one record; `None` when it carries no usable date
    pub fn normalize_record(
        &self,
        kind: EventKind,
        index: usize,
        record: &Value,
        now: i64,
    ) -> Option<NormalizedEvent> {
        let map = fields(kind);
        let (start, end, ongoing) = if kind.is_instant() {
            let when = self.first_date(record, map.start)?;
            (when, when, false)
        } else {
            self.ranged_bounds(record, &map, now)?
        };

        let title = map
            .title
            .iter()
            .find_map(|key| localized(record.get(*key), &self.language))
            .unwrap_or_else(|| kind.label().to_string());

        let metadata: BTreeMap<String, String> = map
            .metadata
            .iter()
            .filter_map(|(name, keys)| first_text(record, keys).map(|v| (name.to_string(), v)))
            .collect();

        Some(NormalizedEvent {
            id: EventId::new(kind, index),
            kind,
            title,
            start,
            end,
            ongoing,
            metadata,
        })
    }

    fn ranged_bounds(&self, record: &Value, map: &FieldMap, now: i64) -> Option<(i64, i64, bool)> {
        let start = self.first_date(record, map.start);
        let explicit_end = self.first_date(record, map.end);
        if start.is_none() && explicit_end.is_none() {
            return None;
        }
        let present = claims_present(record);

        let mut end = explicit_end;
        if present && end.is_none() {
            end = Some(now);
        }
        // Upcoming and marked present: a single marker at the start,
        // not a range drawn backwards from now
        if let Some(s) = start {
            if present && s > now && explicit_end.is_none() {
                end = Some(s);
            }
        }

        let mut start_at = start.or(end)?;
        let mut end_at = end.or(start)?;
        if start_at > end_at {
            std::mem::swap(&mut start_at, &mut end_at);
        }

        let ongoing = present && start_at <= now && now <= end_at;
        Some((start_at, end_at, ongoing))
    }

    fn first_date(&self, record: &Value, keys: &[&str]) -> Option<i64> {
        keys.iter()
            .filter_map(|key| record.get(*key))
            .find_map(|value| normalize_date(value, &self.zone))
    }
}

/// Normalize all collections with a throwaway [`EventNormalizer`]
pub fn normalize_events(
    sources: &TimelineSources,
    now: i64,
    zone: Zone,
    language: &str,
) -> Vec<NormalizedEvent> {
    EventNormalizer::new(zone, language).normalize(sources, now)
}

/// Whether a record claims to be ongoing (`present` or `ongoing`)
fn claims_present(record: &Value) -> bool {
    ["present", "ongoing"]
        .iter()
        .filter_map(|key| record.get(*key))
        .any(|value| match value {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
            _ => false,
        })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        /// Property: any pair of dates normalizes to start <= end
        #[test]
        fn test_start_never_after_end(
            a in 0i64..4_000_000_000,
            b in 0i64..4_000_000_000,
            present: bool,
            now in 0i64..4_000_000_000,
        ) {
            let record = json!({"start": a, "end": b, "present": present});
            let ev = EventNormalizer::new(Zone::utc(), "en")
                .normalize_record(EventKind::Experience, 0, &record, now)
                .unwrap();
            prop_assert!(ev.start <= ev.end);
            prop_assert_eq!(ev.start, a.min(b));
            prop_assert_eq!(ev.end, a.max(b));
        }

        /// Property: ongoing implies the range covers now
        #[test]
        fn test_ongoing_covers_now(
            start in 0i64..4_000_000_000,
            now in 0i64..4_000_000_000,
        ) {
            let record = json!({"start": start, "present": true});
            let ev = EventNormalizer::new(Zone::utc(), "en")
                .normalize_record(EventKind::Project, 0, &record, now)
                .unwrap();
            prop_assert!(ev.start <= ev.end);
            if ev.ongoing {
                prop_assert!(ev.start <= now && now <= ev.end);
            }
        }
    }
}
