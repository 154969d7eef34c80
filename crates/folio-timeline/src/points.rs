//! Point placement for single-instant events
//!
//! Points landing on the same row and rounded x form a cluster; members
//! fan out vertically from the rail in input order.

use crate::canvas::Canvas;
use folio_domain::{NormalizedEvent, Point};
use std::collections::HashMap;

/// Vertical offsets handed to cluster members: `0, +k, -k, +2k, -2k, ...`
///
/// Stops at `depth` multiples of `k`; callers wrap around after that.
pub fn fan_offsets(step: f64, depth: usize) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(1 + depth * 2);
    offsets.push(0.0);
    for k in 1..=depth {
        offsets.push(k as f64 * step);
        offsets.push(-(k as f64) * step);
    }
    offsets
}

/// Place point events on the canvas
///
/// Events the grid cannot place (empty grid) are skipped.
pub fn place_points(point_events: &[&NormalizedEvent], canvas: &Canvas<'_>) -> Vec<Point> {
    let grid = canvas.grid();
    let geometry = canvas.geometry();
    let offsets = fan_offsets(geometry.point_offset_step, geometry.point_fan_depth);

    let mut cluster_sizes: HashMap<(usize, i64), usize> = HashMap::new();
    let mut points = Vec::with_capacity(point_events.len());

    for event in point_events {
        let Some(position) = grid.locate(event.start) else {
            continue;
        };
        let row_index = grid.row_of(position.index);
        let x = canvas.x_at(&position);

        let members = cluster_sizes.entry((row_index, x.round() as i64)).or_insert(0);
        let cluster_index = *members;
        *members += 1;

        points.push(Point {
            event_id: event.id.clone(),
            row_index,
            x,
            y: canvas.row_center_y(row_index) + offsets[cluster_index % offsets.len()],
            cluster_index,
        });
    }

    points
}
