//! Month grid construction
//!
//! The grid is the gapless month sequence from January of the earliest
//! year to December of the latest, folded into rows of `columns_per_row`.

use crate::config::RowDirection;
use crate::date::{next_month, Zone};
use crate::format::month_label;
use folio_domain::{GridMonth, NormalizedEvent};

/// Where an instant lands on the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthPosition {
    /// Grid month index
    pub index: usize,
    /// Fraction of that month elapsed, `[0, 1]`
    pub fraction: f64,
    /// The instant fell outside the window and was clamped
    pub clamped: bool,
}

/// The wrapped month sequence plus lookup helpers
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    months: Vec<GridMonth>,
    columns_per_row: usize,
    direction: RowDirection,
    zone: Zone,
}

impl MonthGrid {
    /// Build the grid covering every event and the default year range
    ///
    /// `columns_per_row` of 0 is treated as 1; configs are validated
    /// before they reach here.
    pub fn build(
        events: &[NormalizedEvent],
        columns_per_row: usize,
        default_year_range: (i32, i32),
        direction: RowDirection,
        zone: Zone,
    ) -> Self {
        let columns_per_row = columns_per_row.max(1);
        let (base_start, base_end) = default_year_range;

        let first_year = events
            .iter()
            .filter_map(|e| zone.year_of(e.start))
            .fold(base_start, i32::min);
        let last_year = events
            .iter()
            .filter_map(|e| zone.year_of(e.end))
            .fold(base_end, i32::max);

        let mut months = Vec::new();
        let (mut year, mut month) = (first_year, 1);
        while year <= last_year {
            if let Some(epoch) = zone.first_of_month(year, month) {
                let index = months.len();
                let row_index = index / columns_per_row;
                let column_index = index % columns_per_row;
                let visual_column = if is_reversed_row(direction, row_index) {
                    columns_per_row - 1 - column_index
                } else {
                    column_index
                };
                months.push(GridMonth {
                    index,
                    epoch_of_first_day: epoch,
                    row_index,
                    column_index,
                    visual_column,
                    year,
                    month,
                    key: format!("{:04}-{:02}", year, month),
                    label: month_label(year, month),
                });
            }
            (year, month) = next_month(year, month);
        }

        Self {
            months,
            columns_per_row,
            direction,
            zone,
        }
    }

    /// Months in chronological order
    pub fn months(&self) -> &[GridMonth] {
        &self.months
    }

    /// Consume the grid, keeping only its months
    pub fn into_months(self) -> Vec<GridMonth> {
        self.months
    }

    /// Month at an index
    pub fn get(&self, index: usize) -> Option<&GridMonth> {
        self.months.get(index)
    }

    /// Number of months
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Whether the grid has no months
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Months per row
    pub fn columns_per_row(&self) -> usize {
        self.columns_per_row
    }

    /// Number of rows, counting a partial last row
    pub fn rows(&self) -> usize {
        self.months.len().div_ceil(self.columns_per_row)
    }

    /// Row of a month index
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns_per_row
    }

    /// Whether a row reads right to left
    pub fn is_reversed_row(&self, row: usize) -> bool {
        is_reversed_row(self.direction, row)
    }

    /// Locate an instant, clamping to the window edges
    ///
    /// Before the first month → first month at fraction 0; after the last
    /// month → last month at fraction 1. `None` only for an empty grid or
    /// an instant outside the calendar's range.
    pub fn locate(&self, epoch: i64) -> Option<MonthPosition> {
        let first = self.months.first()?;
        let (year, month) = self.zone.year_month_of(epoch)?;
        let offset = (year as i64 - first.year as i64) * 12 + (month as i64 - first.month as i64);

        if offset < 0 {
            return Some(MonthPosition {
                index: 0,
                fraction: 0.0,
                clamped: true,
            });
        }
        if offset as usize >= self.months.len() {
            return Some(MonthPosition {
                index: self.months.len() - 1,
                fraction: 1.0,
                clamped: true,
            });
        }
        Some(MonthPosition {
            index: offset as usize,
            fraction: self.zone.month_fraction(epoch)?,
            clamped: false,
        })
    }
}

fn is_reversed_row(direction: RowDirection, row: usize) -> bool {
    direction == RowDirection::Serpentine && row % 2 == 1
}

/// Build the month sequence for a set of events
pub fn build_month_grid(
    events: &[NormalizedEvent],
    columns_per_row: usize,
    default_year_range: (i32, i32),
    direction: RowDirection,
    zone: Zone,
) -> Vec<GridMonth> {
    MonthGrid::build(events, columns_per_row, default_year_range, direction, zone).into_months()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::{EventId, EventKind};
    use std::collections::BTreeMap;

    fn event(start: i64, end: i64) -> NormalizedEvent {
        NormalizedEvent {
            id: EventId::new(EventKind::Project, 0),
            kind: EventKind::Project,
            title: "P".to_string(),
            start,
            end,
            ongoing: false,
            metadata: BTreeMap::new(),
        }
    }

    fn utc_epoch(s: &str) -> i64 {
        crate::date::parse_date_str(s, &Zone::utc()).unwrap()
    }

    #[test]
    fn test_default_window_without_events() {
        let grid = MonthGrid::build(&[], 6, (2024, 2026), RowDirection::LeftToRight, Zone::utc());
        assert_eq!(grid.len(), 36);
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.months()[0].key, "2024-01");
        assert_eq!(grid.months()[35].key, "2026-12");
    }

    #[test]
    fn test_events_widen_window() {
        let events = [event(utc_epoch("2021-05-01"), utc_epoch("2027-02-01"))];
        let grid = MonthGrid::build(&events, 6, (2024, 2026), RowDirection::LeftToRight, Zone::utc());
        assert_eq!(grid.months()[0].key, "2021-01");
        assert_eq!(grid.months().last().unwrap().key, "2027-12");
        assert_eq!(grid.len(), 7 * 12);
    }

    #[test]
    fn test_rows_and_columns() {
        let grid = MonthGrid::build(&[], 5, (2024, 2024), RowDirection::LeftToRight, Zone::utc());
        let m = &grid.months()[7];
        assert_eq!((m.row_index, m.column_index, m.visual_column), (1, 2, 2));
        assert_eq!(grid.rows(), 3);
        for (i, month) in grid.months().iter().enumerate() {
            assert_eq!(month.index, i);
        }
    }

    #[test]
    fn test_serpentine_reverses_odd_rows() {
        let grid = MonthGrid::build(&[], 6, (2024, 2024), RowDirection::Serpentine, Zone::utc());
        let july = &grid.months()[6];
        assert_eq!((july.row_index, july.column_index, july.visual_column), (1, 0, 5));
        assert!(july.is_reversed());
        assert!(!grid.months()[0].is_reversed());
        assert!(grid.is_reversed_row(1));
    }

    #[test]
    fn test_contiguous_epochs() {
        let grid = MonthGrid::build(&[], 6, (2024, 2025), RowDirection::LeftToRight, Zone::utc());
        for pair in grid.months().windows(2) {
            let end = Zone::utc().end_of_month(pair[0].year, pair[0].month).unwrap();
            assert_eq!(end + 1, pair[1].epoch_of_first_day);
        }
    }

    #[test]
    fn test_locate_clamps() {
        let grid = MonthGrid::build(&[], 6, (2024, 2024), RowDirection::LeftToRight, Zone::utc());

        let before = grid.locate(utc_epoch("2019-06-10")).unwrap();
        assert_eq!((before.index, before.fraction, before.clamped), (0, 0.0, true));

        let after = grid.locate(utc_epoch("2030-01-10")).unwrap();
        assert_eq!((after.index, after.fraction, after.clamped), (11, 1.0, true));

        let inside = grid.locate(utc_epoch("2024-04-15")).unwrap();
        assert_eq!(inside.index, 3);
        assert!((inside.fraction - 0.5).abs() < 1e-9);
        assert!(!inside.clamped);
    }

    #[test]
    fn test_build_month_grid_labels() {
        let months = build_month_grid(&[], 6, (2024, 2024), RowDirection::LeftToRight, Zone::utc());
        assert_eq!(months[0].label, "Jan ’24");
        assert_eq!(months[11].label, "Dec ’24");
    }
}
