//! Pixel geometry of the grid
//!
//! Maps month positions to canvas x and rows to canvas y. In a reversed
//! row the month cells are mirrored and time flows from right to left, so
//! a row's leading edge is its right side.

use crate::config::{GeometryConfig, LaneStacking};
use crate::grid::{MonthGrid, MonthPosition};

/// A month grid paired with the pixel constants it is drawn with
#[derive(Debug, Clone, Copy)]
pub struct Canvas<'a> {
    grid: &'a MonthGrid,
    geometry: &'a GeometryConfig,
}

impl<'a> Canvas<'a> {
    /// Pair a grid with geometry
    pub fn new(grid: &'a MonthGrid, geometry: &'a GeometryConfig) -> Self {
        Self { grid, geometry }
    }

    /// The underlying grid
    pub fn grid(&self) -> &'a MonthGrid {
        self.grid
    }

    /// The pixel constants
    pub fn geometry(&self) -> &'a GeometryConfig {
        self.geometry
    }

    /// Total canvas width
    pub fn width(&self) -> f64 {
        self.geometry.margin_x * 2.0 + self.grid.columns_per_row() as f64 * self.geometry.cell_width
    }

    /// Total canvas height
    pub fn height(&self) -> f64 {
        self.geometry.margin_y * 2.0 + self.grid.rows() as f64 * self.geometry.row_height
    }

    /// Left x of a month cell
    pub fn cell_left(&self, index: usize) -> f64 {
        let visual_column = self
            .grid
            .get(index)
            .map(|m| m.visual_column)
            .unwrap_or(index % self.grid.columns_per_row());
        self.geometry.margin_x + visual_column as f64 * self.geometry.cell_width
    }

    /// x of a located instant along its row's direction
    pub fn x_at(&self, position: &MonthPosition) -> f64 {
        let left = self.cell_left(position.index);
        let offset = position.fraction * self.geometry.cell_width;
        if self.grid.is_reversed_row(self.grid.row_of(position.index)) {
            left + self.geometry.cell_width - offset
        } else {
            left + offset
        }
    }

    /// x where time enters a row
    pub fn row_leading_edge(&self, row: usize) -> f64 {
        if self.grid.is_reversed_row(row) {
            self.rail_right()
        } else {
            self.geometry.margin_x
        }
    }

    /// x where time leaves a row
    pub fn row_trailing_edge(&self, row: usize) -> f64 {
        if self.grid.is_reversed_row(row) {
            self.geometry.margin_x
        } else {
            self.rail_right()
        }
    }

    /// Centerline y of a row (its rail)
    pub fn row_center_y(&self, row: usize) -> f64 {
        self.geometry.margin_y
            + row as f64 * self.geometry.row_height
            + self.geometry.row_height / 2.0
    }

    /// y of a lane in a row
    pub fn lane_y(&self, row: usize, lane: usize) -> f64 {
        self.row_center_y(row) + lane_offset(lane, self.geometry.lane_step, self.geometry.lane_stacking)
    }

    fn rail_right(&self) -> f64 {
        self.geometry.margin_x + self.grid.columns_per_row() as f64 * self.geometry.cell_width
    }
}

/// Vertical offset of a lane from the rail
///
/// Lane 0 sits on the rail. Negative y is up.
pub fn lane_offset(lane: usize, step: f64, stacking: LaneStacking) -> f64 {
    if lane == 0 {
        return 0.0;
    }
    match stacking {
        LaneStacking::Up => -(lane as f64) * step,
        LaneStacking::Down => lane as f64 * step,
        LaneStacking::Alternate => {
            let k = lane.div_ceil(2) as f64;
            if lane % 2 == 1 {
                -k * step
            } else {
                k * step
            }
        }
    }
}
