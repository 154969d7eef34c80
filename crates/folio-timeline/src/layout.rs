//! End-to-end layout
//!
//! [`TimelineLayout::compute`] runs the whole pipeline: normalize, build
//! the grid, plan segments, assign lanes, place points, then derive
//! connectors and label anchors from the results.

use crate::canvas::Canvas;
use crate::config::TimelineConfig;
use crate::date::Zone;
use crate::error::Result;
use crate::grid::MonthGrid;
use crate::lanes::assign_all_lanes;
use crate::normalize::EventNormalizer;
use crate::points::place_points;
use crate::segment::{plan_segments, SegmentPlan};
use crate::sources::TimelineSources;
use folio_domain::{
    Clock, Connector, EventId, GridMonth, LabelAnchor, LaneAssignment, NormalizedEvent, Point,
    Segment,
};
use serde::Serialize;
use tracing::{debug, info};

/// Everything a renderer needs to draw the timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    /// Instant the layout was computed against
    pub now: i64,

    /// Normalized events in normalization order
    pub events: Vec<NormalizedEvent>,

    /// Grid months in chronological order
    pub months: Vec<GridMonth>,

    /// Months per row
    pub columns_per_row: usize,

    /// Number of grid rows
    pub rows: usize,

    /// Bands, grouped by event in event order
    pub segments: Vec<Segment>,

    /// Lane of every segment
    pub lanes: LaneAssignment,

    /// Markers for point events
    pub points: Vec<Point>,

    /// Row-wrap links
    pub connectors: Vec<Connector>,

    /// Title positions for banded events
    pub labels: Vec<LabelAnchor>,

    /// Canvas width
    pub width: f64,

    /// Canvas height
    pub height: f64,

    #[serde(skip)]
    zone: Zone,
}

impl TimelineLayout {
    /// Compute a layout against an explicit `now`
    ///
    /// Fails only on an invalid config.
    pub fn compute(sources: &TimelineSources, now: i64, config: &TimelineConfig) -> Result<Self> {
        config.validate()?;
        let zone = config.zone()?;

        let events = EventNormalizer::new(zone, config.language.as_str()).normalize(sources, now);
        let grid = MonthGrid::build(
            &events,
            config.columns_per_row,
            config.default_year_range,
            config.direction,
            zone,
        );
        let geometry = &config.geometry;
        let canvas = Canvas::new(&grid, geometry);

        let mut banded: Vec<(&NormalizedEvent, Vec<Segment>)> = Vec::new();
        let mut point_events: Vec<&NormalizedEvent> = Vec::new();
        for event in &events {
            match plan_segments(event, &canvas) {
                SegmentPlan::Segments(segments) => banded.push((event, segments)),
                SegmentPlan::Point { .. } => point_events.push(event),
                SegmentPlan::Unplaced => debug!("Cannot place {} on the grid", event.id),
            }
        }

        let segments: Vec<Segment> = banded
            .iter()
            .flat_map(|(_, segments)| segments.iter().cloned())
            .collect();
        let lanes = assign_all_lanes(&segments, geometry.min_gap);
        let points = place_points(&point_events, &canvas);

        let mut connectors = Vec::new();
        let mut labels = Vec::new();
        for (event, event_segments) in &banded {
            connectors.extend(connectors_for(event_segments, &lanes, &canvas));
            if let Some(anchor) = label_anchor(&event.id, event_segments, &lanes, &canvas) {
                labels.push(anchor);
            }
        }

        let layout = Self {
            now,
            columns_per_row: grid.columns_per_row(),
            rows: grid.rows(),
            width: canvas.width(),
            height: canvas.height(),
            months: grid.months().to_vec(),
            events,
            segments,
            lanes,
            points,
            connectors,
            labels,
            zone,
        };
        info!(
            "Laid out {} events over {} months ({} segments, {} points)",
            layout.events.len(),
            layout.months.len(),
            layout.segments.len(),
            layout.points.len()
        );
        Ok(layout)
    }

    /// Compute a layout reading `now` from a clock
    pub fn compute_with_clock(
        sources: &TimelineSources,
        clock: &impl Clock,
        config: &TimelineConfig,
    ) -> Result<Self> {
        Self::compute(sources, clock.now(), config)
    }

    /// Zone the layout was computed in
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Look up an event by id
    pub fn event(&self, id: &EventId) -> Option<&NormalizedEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Events overlapping a grid month, sorted by start
    pub fn events_in_month(&self, index: usize) -> Vec<&NormalizedEvent> {
        let Some(month) = self.months.get(index) else {
            return Vec::new();
        };
        let Some(last_second) = self.zone.end_of_month(month.year, month.month) else {
            return Vec::new();
        };
        let mut hits: Vec<&NormalizedEvent> = self
            .events
            .iter()
            .filter(|e| e.overlaps(month.epoch_of_first_day, last_second))
            .collect();
        hits.sort_by_key(|e| e.start);
        hits
    }

    /// Grid index of a `YYYY-MM` key
    pub fn month_index(&self, key: &str) -> Option<usize> {
        self.months.iter().position(|m| m.key == key)
    }

    /// Number of lanes used in a row
    pub fn lane_count(&self, row: usize) -> usize {
        self.lanes.lane_count(row)
    }

    /// Segments belonging to one event
    pub fn segments_of(&self, id: &EventId) -> impl Iterator<Item = &Segment> + '_ {
        let id = id.clone();
        self.segments.iter().filter(move |s| s.event_id == id)
    }

    /// Marker of a point event
    pub fn point_of(&self, id: &EventId) -> Option<&Point> {
        self.points.iter().find(|p| &p.event_id == id)
    }
}

fn lane_y(canvas: &Canvas<'_>, lanes: &LaneAssignment, id: &EventId, row: usize) -> f64 {
    canvas.lane_y(row, lanes.lane_of(id, row).unwrap_or(0))
}

/// One connector per row wrap, from the upper row's trailing edge to the
/// lower row's leading edge
fn connectors_for(
    segments: &[Segment],
    lanes: &LaneAssignment,
    canvas: &Canvas<'_>,
) -> Vec<Connector> {
    segments
        .iter()
        .filter(|s| s.continues_into_next_row)
        .map(|s| {
            let row_to = s.row_index + 1;
            Connector {
                event_id: s.event_id.clone(),
                x: canvas.row_trailing_edge(s.row_index),
                x_to: canvas.row_leading_edge(row_to),
                row_from: s.row_index,
                row_to,
                y_from: lane_y(canvas, lanes, &s.event_id, s.row_index),
                y_to: lane_y(canvas, lanes, &s.event_id, row_to),
            }
        })
        .collect()
}

/// Length-weighted centre of an event's bands, `label_offset` below them
fn label_anchor(
    id: &EventId,
    segments: &[Segment],
    lanes: &LaneAssignment,
    canvas: &Canvas<'_>,
) -> Option<LabelAnchor> {
    let total: f64 = segments.iter().map(Segment::width).sum();
    if total <= 0.0 {
        return None;
    }
    let x = segments.iter().map(|s| s.midpoint() * s.width()).sum::<f64>() / total;
    let y = segments
        .iter()
        .map(|s| lane_y(canvas, lanes, id, s.row_index) * s.width())
        .sum::<f64>()
        / total;
    Some(LabelAnchor {
        event_id: id.clone(),
        x,
        y: y + canvas.geometry().label_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RowDirection;
    use folio_domain::FixedClock;
    use serde_json::json;

    const NOW: i64 = 1_718_409_600; // 2024-06-15

    fn sources() -> TimelineSources {
        TimelineSources {
            experience: vec![json!({
                "title": {"en": "Engineer"},
                "start": "2024-01-15",
                "end": "2024-08-20"
            })],
            certificates: vec![json!({"name": "Cert", "issued_at": "2024-03-05"})],
            ..Default::default()
        }
    }

    #[test]
    fn test_compute_basic_shape() {
        let layout = TimelineLayout::compute(&sources(), NOW, &TimelineConfig::default()).unwrap();
        assert_eq!(layout.events.len(), 2);
        assert_eq!(layout.months.len(), 36);
        assert_eq!(layout.rows, 6);
        assert_eq!(layout.segments.len(), 2);
        assert_eq!(layout.points.len(), 1);
        assert_eq!(layout.connectors.len(), 1);
        assert_eq!(layout.labels.len(), 1);
        assert_eq!(layout.width, 32.0 * 2.0 + 6.0 * 170.0);
        assert_eq!(layout.height, 28.0 * 2.0 + 6.0 * 180.0);
    }

    #[test]
    fn test_connector_at_trailing_edge() {
        let layout = TimelineLayout::compute(&sources(), NOW, &TimelineConfig::default()).unwrap();
        let c = &layout.connectors[0];
        assert_eq!((c.row_from, c.row_to), (0, 1));
        assert_eq!(c.x, 32.0 + 1020.0);
        assert_eq!(c.x_to, c.x);
        assert!(c.is_vertical());
        assert_eq!(c.y_from, 28.0 + 90.0);
        assert_eq!(c.y_to, 28.0 + 180.0 + 90.0);
    }

    #[test]
    fn test_left_to_right_connector_elbows_to_next_row_start() {
        let config = TimelineConfig {
            direction: RowDirection::LeftToRight,
            ..Default::default()
        };
        let layout = TimelineLayout::compute(&sources(), NOW, &config).unwrap();
        let id = EventId::new(folio_domain::EventKind::Experience, 0);
        let segs: Vec<&Segment> = layout.segments_of(&id).collect();
        let c = &layout.connectors[0];
        assert_eq!(c.x, segs[0].x_end);
        assert_eq!(c.x_to, segs[1].x_start);
        assert_eq!((c.x, c.x_to), (32.0 + 1020.0, 32.0));
        assert!(!c.is_vertical());
    }

    #[test]
    fn test_label_sits_below_weighted_rail() {
        let layout = TimelineLayout::compute(&sources(), NOW, &TimelineConfig::default()).unwrap();
        let id = EventId::new(folio_domain::EventKind::Experience, 0);
        let segs: Vec<&Segment> = layout.segments_of(&id).collect();
        let (w0, w1) = (segs[0].width(), segs[1].width());
        let rail0 = 28.0 + 90.0;
        let rail1 = rail0 + 180.0;
        let expected_y = (rail0 * w0 + rail1 * w1) / (w0 + w1) + 18.0;
        assert!((layout.labels[0].y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn test_events_in_month_sorted() {
        let layout = TimelineLayout::compute(&sources(), NOW, &TimelineConfig::default()).unwrap();
        let march = layout.month_index("2024-03").unwrap();
        let hits = layout.events_in_month(march);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].start <= hits[1].start);

        let december = layout.month_index("2024-12").unwrap();
        assert!(layout.events_in_month(december).is_empty());
        assert!(layout.events_in_month(999).is_empty());
    }

    #[test]
    fn test_event_lookup_and_lanes() {
        let layout = TimelineLayout::compute(&sources(), NOW, &TimelineConfig::default()).unwrap();
        let id = EventId::new(folio_domain::EventKind::Certificate, 0);
        assert_eq!(layout.event(&id).map(|e| e.title.as_str()), Some("Cert"));
        assert!(layout.point_of(&id).is_some());
        assert_eq!(layout.lane_count(0), 1);
        assert_eq!(layout.lane_count(4), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TimelineConfig {
            columns_per_row: 0,
            ..Default::default()
        };
        assert!(TimelineLayout::compute(&sources(), NOW, &config).is_err());
    }

    #[test]
    fn test_clock_matches_explicit_now() {
        let config = TimelineConfig::default();
        let a = TimelineLayout::compute(&sources(), NOW, &config).unwrap();
        let b = TimelineLayout::compute_with_clock(&sources(), &FixedClock(NOW), &config).unwrap();
        assert_eq!(a, b);
    }
}
