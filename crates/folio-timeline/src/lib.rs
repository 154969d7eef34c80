//! Folio Timeline Engine
//!
//! Turns heterogeneous portfolio records into a drawable, wrapped monthly
//! timeline. The pipeline runs in one direction:
//!
//! 1. [`normalize`]: raw records → [`NormalizedEvent`](folio_domain::NormalizedEvent)
//! 2. [`grid`]: events → a gapless month sequence folded into rows
//! 3. [`segment`]: each event → per-row segments, or a point
//! 4. [`lanes`]: overlapping segments in a row → distinct lanes
//! 5. [`points`]: co-located points → a vertical fan
//!
//! [`TimelineLayout::compute`] runs all of it. Everything is a pure
//! function of the input records, `now` and the [`TimelineConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canvas;
pub mod config;
pub mod date;
pub mod error;
pub mod format;
pub mod grid;
pub mod lanes;
pub mod layout;
pub mod normalize;
pub mod points;
pub mod segment;
pub mod sources;
pub mod style;

pub use config::{GeometryConfig, LaneStacking, RowDirection, TimelineConfig};
pub use date::Zone;
pub use error::{Result, TimelineError};
pub use grid::{build_month_grid, MonthGrid, MonthPosition};
pub use lanes::{assign_all_lanes, assign_lanes};
pub use layout::TimelineLayout;
pub use normalize::{normalize_events, EventNormalizer};
pub use points::place_points;
pub use segment::{plan_segments, SegmentPlan};
pub use sources::TimelineSources;
