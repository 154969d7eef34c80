//! Geometry module - grid cells and the shapes a renderer draws

use crate::EventId;
use serde::{Deserialize, Serialize};

/// One calendar month placed on the wrapped grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMonth {
    /// Chronological position, 0-based and gapless
    pub index: usize,

    /// Epoch seconds of local midnight on the 1st
    pub epoch_of_first_day: i64,

    /// `index / columns_per_row`
    pub row_index: usize,

    /// `index % columns_per_row`, in reading order along the row
    pub column_index: usize,

    /// Left-to-right slot after applying row direction
    pub visual_column: usize,

    /// Calendar year
    pub year: i32,

    /// Calendar month, 1-12
    pub month: u32,

    /// `YYYY-MM`
    pub key: String,

    /// Short label such as `Jan ’24`
    pub label: String,
}

impl GridMonth {
    /// Whether this month's row reads right to left
    pub fn is_reversed(&self) -> bool {
        self.visual_column != self.column_index
    }
}

/// One row-bounded horizontal piece of an event's band
///
/// `x_start` is where the band enters the row along its reading direction
/// and `x_end` where it leaves, so in a right-to-left row `x_start >= x_end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Owning event
    pub event_id: EventId,

    /// Grid row
    pub row_index: usize,

    /// Entry x along the row direction
    pub x_start: f64,

    /// Exit x along the row direction
    pub x_end: f64,

    /// Band arrives from the row above
    pub continues_into_previous_row: bool,

    /// Band carries on into the row below
    pub continues_into_next_row: bool,
}

impl Segment {
    /// Smaller x of the two ends
    pub fn left(&self) -> f64 {
        self.x_start.min(self.x_end)
    }

    /// Larger x of the two ends
    pub fn right(&self) -> f64 {
        self.x_start.max(self.x_end)
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        (self.x_end - self.x_start).abs()
    }

    /// Center x
    pub fn midpoint(&self) -> f64 {
        (self.x_start + self.x_end) / 2.0
    }
}

/// Marker for a zero-duration event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Owning event
    pub event_id: EventId,

    /// Grid row
    pub row_index: usize,

    /// Horizontal position
    pub x: f64,

    /// Vertical position including the cluster offset
    pub y: f64,

    /// Position within its co-located cluster (0 = on the rail)
    pub cluster_index: usize,
}

/// Link between an event's segments on consecutive rows
///
/// With serpentine rows `x == x_to` and the link is a vertical line. When
/// the lower row starts on the opposite side, the renderer draws an elbow
/// from `(x, y_from)` to `(x_to, y_to)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Owning event
    pub event_id: EventId,

    /// Trailing edge of the upper row
    pub x: f64,

    /// Leading edge of the lower row
    pub x_to: f64,

    /// Upper row
    pub row_from: usize,

    /// Lower row
    pub row_to: usize,

    /// Lane y in the upper row
    pub y_from: f64,

    /// Lane y in the lower row
    pub y_to: f64,
}

/// Where an event's title is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    /// Owning event
    pub event_id: EventId,

    /// Horizontal position
    pub x: f64,

    /// Vertical position
    pub y: f64,
}

impl Connector {
    /// Whether the link runs straight down
    pub fn is_vertical(&self) -> bool {
        self.x == self.x_to
    }
}
