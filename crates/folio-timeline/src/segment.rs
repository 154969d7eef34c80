//! Segment planning
//!
//! An event's month range is cut at every row wrap. Each row it crosses
//! gets one segment; the first starts at the event's own start position,
//! the last stops at its end position, and everything in between runs edge
//! to edge.

use crate::canvas::Canvas;
use folio_domain::{NormalizedEvent, Segment};

/// What an event turns into on the grid
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentPlan {
    /// A band, one entry per row crossed
    Segments(Vec<Segment>),
    /// A single-instant marker, placed later by point placement
    Point {
        /// Grid row
        row_index: usize,
        /// Horizontal position
        x: f64,
    },
    /// The grid is empty or the instant is outside the calendar range
    Unplaced,
}

impl SegmentPlan {
    /// Segments of the plan, empty for points
    pub fn segments(&self) -> &[Segment] {
        match self {
            SegmentPlan::Segments(segments) => segments,
            _ => &[],
        }
    }

    /// Whether the event became a point
    pub fn is_point(&self) -> bool {
        matches!(self, SegmentPlan::Point { .. })
    }
}

/// Split an event into row segments, or mark it as a point
pub fn plan_segments(event: &NormalizedEvent, canvas: &Canvas<'_>) -> SegmentPlan {
    let grid = canvas.grid();
    let (Some(mut from), Some(mut to)) = (grid.locate(event.start), grid.locate(event.end)) else {
        return SegmentPlan::Unplaced;
    };
    if from.index > to.index {
        std::mem::swap(&mut from, &mut to);
    }

    if event.start == event.end && from.index == to.index {
        return SegmentPlan::Point {
            row_index: grid.row_of(from.index),
            x: canvas.x_at(&from),
        };
    }

    let first_row = grid.row_of(from.index);
    let last_row = grid.row_of(to.index);
    let start_x = canvas.x_at(&from);
    let end_x = canvas.x_at(&to);

    let segments = (first_row..=last_row)
        .map(|row| Segment {
            event_id: event.id.clone(),
            row_index: row,
            x_start: if row == first_row {
                start_x
            } else {
                canvas.row_leading_edge(row)
            },
            x_end: if row == last_row {
                end_x
            } else {
                canvas.row_trailing_edge(row)
            },
            continues_into_previous_row: row != first_row,
            continues_into_next_row: row != last_row,
        })
        .collect();

    SegmentPlan::Segments(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeometryConfig, RowDirection};
    use crate::date::{parse_date_str, Zone};
    use crate::grid::MonthGrid;
    use folio_domain::{EventId, EventKind};
    use std::collections::BTreeMap;

    fn event(start: &str, end: &str) -> NormalizedEvent {
        let utc = Zone::utc();
        NormalizedEvent {
            id: EventId::new(EventKind::Experience, 0),
            kind: EventKind::Experience,
            title: "Job".to_string(),
            start: parse_date_str(start, &utc).unwrap(),
            end: parse_date_str(end, &utc).unwrap(),
            ongoing: false,
            metadata: BTreeMap::new(),
        }
    }

    fn plan(ev: &NormalizedEvent, direction: RowDirection) -> SegmentPlan {
        let grid = MonthGrid::build(&[], 6, (2024, 2026), direction, Zone::utc());
        let geometry = GeometryConfig::default();
        plan_segments(ev, &Canvas::new(&grid, &geometry))
    }

    #[test]
    fn test_two_row_event() {
        let plan = plan(&event("2024-01-15", "2024-08-20"), RowDirection::Serpentine);
        let segs = plan.segments();
        assert_eq!(segs.len(), 2);
        assert!(segs[0].continues_into_next_row && !segs[0].continues_into_previous_row);
        assert!(segs[1].continues_into_previous_row && !segs[1].continues_into_next_row);

        // First row runs to the right edge; the reversed second row enters
        // from the right and ends inside August
        assert_eq!(segs[0].x_end, 32.0 + 1020.0);
        assert_eq!(segs[1].x_start, 32.0 + 1020.0);
        assert!(segs[1].x_end < segs[1].x_start);
    }

    #[test]
    fn test_middle_rows_run_edge_to_edge() {
        let plan = plan(&event("2024-02-10", "2025-03-10"), RowDirection::LeftToRight);
        let segs = plan.segments();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[1].x_start, 32.0);
        assert_eq!(segs[1].x_end, 32.0 + 1020.0);
        assert!(segs[1].continues_into_previous_row && segs[1].continues_into_next_row);
    }

    #[test]
    fn test_same_month_range_is_a_segment() {
        let plan = plan(&event("2024-03-01", "2024-03-10"), RowDirection::Serpentine);
        let segs = plan.segments();
        assert_eq!(segs.len(), 1);
        assert!(!segs[0].continues_into_previous_row && !segs[0].continues_into_next_row);
        assert!(segs[0].x_end > segs[0].x_start);
    }

    #[test]
    fn test_instant_is_a_point() {
        let plan = plan(&event("2024-03-01", "2024-03-01"), RowDirection::Serpentine);
        assert!(plan.is_point());
        assert!(plan.segments().is_empty());
        match plan {
            SegmentPlan::Point { row_index, x } => {
                assert_eq!(row_index, 0);
                assert!((x - (32.0 + 2.0 * 170.0 + 170.0 / 31.0)).abs() < 1e-9);
            }
            other => panic!("expected point, got {:?}", other),
        }
    }

    #[test]
    fn test_start_before_window_clamps() {
        let plan = plan(&event("2019-05-05", "2024-02-15"), RowDirection::Serpentine);
        let segs = plan.segments();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].x_start, 32.0);
    }

    #[test]
    fn test_end_after_window_clamps() {
        let plan = plan(&event("2026-11-01", "2031-01-01"), RowDirection::Serpentine);
        let segs = plan.segments();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].row_index, 5);
        // Row 5 is reversed; the clamped end sits at its trailing (left) edge
        assert_eq!(segs[0].x_end, 32.0);
    }

    #[test]
    fn test_empty_grid_unplaced() {
        let grid = MonthGrid::build(&[], 6, (2024, 2024), RowDirection::Serpentine, Zone::utc());
        let empty: MonthGrid = MonthGrid::build(&[], 6, (2025, 2024), RowDirection::Serpentine, Zone::utc());
        assert!(!grid.is_empty());
        assert!(empty.is_empty());
        let geometry = GeometryConfig::default();
        let plan = plan_segments(&event("2024-01-01", "2024-02-01"), &Canvas::new(&empty, &geometry));
        assert_eq!(plan, SegmentPlan::Unplaced);
    }
}
