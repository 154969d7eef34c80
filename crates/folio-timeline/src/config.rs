//! Configuration for the timeline layout
//!
//! The month window, wrap width and every geometry constant are inputs so
//! the engine can lay out differently-scoped content sets.

use crate::date::Zone;
use crate::error::{Result, TimelineError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reading direction of grid rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowDirection {
    /// Every row reads left to right
    LeftToRight,
    /// Odd rows read right to left (boustrophedon)
    Serpentine,
}

impl Default for RowDirection {
    fn default() -> Self {
        RowDirection::Serpentine
    }
}

/// Which way extra lanes open from a row's centerline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneStacking {
    /// Lanes 1, 2, ... sit above the rail
    Up,
    /// Lanes 1, 2, ... sit below the rail
    Down,
    /// Lanes alternate above and below: -1, +1, -2, +2, ... steps
    Alternate,
}

impl Default for LaneStacking {
    fn default() -> Self {
        LaneStacking::Up
    }
}

/// Pixel-space constants of the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Width of one month cell
    pub cell_width: f64,

    /// Height of one grid row
    pub row_height: f64,

    /// Horizontal canvas margin
    pub margin_x: f64,

    /// Vertical canvas margin
    pub margin_y: f64,

    /// Vertical distance between adjacent lanes
    pub lane_step: f64,

    /// Direction new lanes open in
    pub lane_stacking: LaneStacking,

    /// Horizontal clearance two segments in one lane must keep
    pub min_gap: f64,

    /// Vertical step between fanned-out co-located points
    pub point_offset_step: f64,

    /// How many steps a point cluster fans out to on each side
    pub point_fan_depth: usize,

    /// Distance of an event label below its band
    pub label_offset: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            cell_width: 170.0,
            row_height: 180.0,
            margin_x: 32.0,
            margin_y: 28.0,
            lane_step: 12.0,
            lane_stacking: LaneStacking::Up,
            min_gap: 2.0,
            point_offset_step: 10.0,
            point_fan_depth: 3,
            label_offset: 18.0,
        }
    }
}

/// Configuration for a timeline layout pass
///
/// # Examples
///
/// ```
/// use folio_timeline::TimelineConfig;
///
/// let config = TimelineConfig::default();
/// assert_eq!(config.columns_per_row, 6);
/// assert_eq!(config.default_year_range, (2024, 2026));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Months per grid row
    pub columns_per_row: usize,

    /// Baseline window `[start year, end year]`, widened by event dates
    pub default_year_range: (i32, i32),

    /// Row reading direction
    pub direction: RowDirection,

    /// Fixed UTC offset naive dates are interpreted in
    pub utc_offset_minutes: i32,

    /// Preferred language for localized titles
    pub language: String,

    /// Pixel constants
    pub geometry: GeometryConfig,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            columns_per_row: 6,
            default_year_range: (2024, 2026),
            direction: RowDirection::Serpentine,
            utc_offset_minutes: 0,
            language: "en".to_string(),
            geometry: GeometryConfig::default(),
        }
    }
}

impl TimelineConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: TimelineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Time zone naive dates are read in
    pub fn zone(&self) -> Result<Zone> {
        Zone::from_offset_minutes(self.utc_offset_minutes).ok_or_else(|| {
            TimelineError::InvalidConfig(format!(
                "utc_offset_minutes {} is outside ±1439",
                self.utc_offset_minutes
            ))
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.columns_per_row == 0 {
            return Err(TimelineError::InvalidConfig(
                "columns_per_row must be greater than 0".to_string(),
            ));
        }
        let (start, end) = self.default_year_range;
        if start > end {
            return Err(TimelineError::InvalidConfig(format!(
                "default_year_range start {} is after end {}",
                start, end
            )));
        }
        self.zone()?;

        let g = &self.geometry;
        if !(g.cell_width > 0.0) || !(g.row_height > 0.0) {
            return Err(TimelineError::InvalidConfig(
                "cell_width and row_height must be positive".to_string(),
            ));
        }
        if !(g.min_gap >= 0.0) {
            return Err(TimelineError::InvalidConfig(
                "min_gap cannot be negative".to_string(),
            ));
        }
        for (name, value) in [
            ("margin_x", g.margin_x),
            ("margin_y", g.margin_y),
            ("lane_step", g.lane_step),
            ("point_offset_step", g.point_offset_step),
            ("label_offset", g.label_offset),
        ] {
            if !value.is_finite() {
                return Err(TimelineError::InvalidConfig(format!("{} must be finite", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TimelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.direction, RowDirection::Serpentine);
        assert_eq!(config.geometry.min_gap, 2.0);
    }

    #[test]
    fn test_zero_columns_rejected() {
        let config = TimelineConfig {
            columns_per_row: 0,
            ..TimelineConfig::default()
        };
        assert!(matches!(config.validate(), Err(TimelineError::InvalidConfig(_))));
    }

    #[test]
    fn test_inverted_year_range_rejected() {
        let config = TimelineConfig {
            default_year_range: (2026, 2020),
            ..TimelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_offset_out_of_range_rejected() {
        let config = TimelineConfig {
            utc_offset_minutes: 24 * 60,
            ..TimelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
            columns_per_row = 4
            default_year_range = [2020, 2022]
            direction = "left_to_right"
            utc_offset_minutes = 180

            [geometry]
            lane_stacking = "alternate"
            cell_width = 120.0
        "#;

        let config = TimelineConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.columns_per_row, 4);
        assert_eq!(config.default_year_range, (2020, 2022));
        assert_eq!(config.direction, RowDirection::LeftToRight);
        assert_eq!(config.geometry.lane_stacking, LaneStacking::Alternate);
        assert_eq!(config.geometry.cell_width, 120.0);
        // Untouched fields keep defaults
        assert_eq!(config.geometry.row_height, 180.0);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_invalid_toml_value_rejected() {
        let result = TimelineConfig::from_toml_str("columns_per_row = 0");
        assert!(matches!(result, Err(TimelineError::InvalidConfig(_))));
    }
}
