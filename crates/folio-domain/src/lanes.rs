//! Lane assignment module

use crate::EventId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from `(event, row)` to the lane its segment occupies
///
/// Lanes are unique per row: two segments sharing a lane in the same row
/// never overlap horizontally. Serialized as a flat list of entries so the
/// JSON stays readable for a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneAssignment {
    lanes: BTreeMap<(EventId, usize), usize>,
}

/// One serialized lane entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneEntry {
    /// Owning event
    pub event_id: EventId,
    /// Grid row
    pub row_index: usize,
    /// Lane within the row (0 = on the rail)
    pub lane: usize,
}

impl LaneAssignment {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the lane of an event's segment in a row
    pub fn insert(&mut self, event_id: EventId, row_index: usize, lane: usize) {
        self.lanes.insert((event_id, row_index), lane);
    }

    /// Lane of an event's segment in a row, if it has one there
    pub fn lane_of(&self, event_id: &EventId, row_index: usize) -> Option<usize> {
        self.lanes.get(&(event_id.clone(), row_index)).copied()
    }

    /// Number of lanes opened in a row (0 for a row without segments)
    pub fn lane_count(&self, row_index: usize) -> usize {
        self.lanes
            .iter()
            .filter(|((_, row), _)| *row == row_index)
            .map(|(_, lane)| lane + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of recorded segments
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Whether nothing has been assigned
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Iterate entries ordered by event id then row
    pub fn entries(&self) -> impl Iterator<Item = LaneEntry> + '_ {
        self.lanes.iter().map(|((event_id, row_index), lane)| LaneEntry {
            event_id: event_id.clone(),
            row_index: *row_index,
            lane: *lane,
        })
    }
}

impl Serialize for LaneAssignment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}

impl<'de> Deserialize<'de> for LaneAssignment {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<LaneEntry>::deserialize(deserializer)?;
        let mut lanes = LaneAssignment::new();
        for entry in entries {
            lanes.insert(entry.event_id, entry.row_index, entry.lane);
        }
        Ok(lanes)
    }
}
