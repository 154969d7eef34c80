//! Date normalization and calendar helpers
//!
//! Content files spell dates many ways. Everything is reduced to epoch
//! seconds here, with string patterns tried in a fixed order:
//!
//! 1. `YYYY-MM-DD` / `YYYY/MM/DD` / `YYYY.MM.DD`
//! 2. `DD/MM/YYYY` (day first, never month first)
//! 3. `YYYY-MM` → 1st of the month
//! 4. `YYYY` → January 1
//! 5. RFC 3339, RFC 2822, then naive `YYYY-MM-DD[T ]HH:MM[:SS]`
//!
//! A pattern that matches but names an impossible day (`2024-02-30`)
//! yields `None` instead of rolling over into the next month.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

static YEAR_MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})[/.\-](\d{1,2})[/.\-](\d{1,2})$").expect("valid y-m-d regex")
});
static DAY_MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4})$").expect("valid d-m-y regex")
});
static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})[/.\-](\d{1,2})$").expect("valid y-m regex"));
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").expect("valid year regex"));
static MONTH_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[/.\-](\d{4})$").expect("valid m-y regex"));

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Numbers above this are epoch milliseconds
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Fixed-offset time zone that naive dates and calendar math are read in
///
/// A fixed offset keeps results independent of the host's zone database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    offset: FixedOffset,
}

impl Default for Zone {
    fn default() -> Self {
        Self::utc()
    }
}

impl Zone {
    /// UTC
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Zone `minutes` east of UTC; `None` outside ±1439
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(minutes.checked_mul(60)?)?;
        Some(Self { offset })
    }

    /// Offset east of UTC in minutes
    pub fn offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// Epoch seconds at local midnight of a calendar day
    pub fn midnight(&self, year: i32, month: u32, day: u32) -> Option<i64> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        self.naive_to_epoch(&naive)
    }

    /// Epoch seconds of a local wall-clock time
    pub fn naive_to_epoch(&self, naive: &NaiveDateTime) -> Option<i64> {
        self.offset
            .from_local_datetime(naive)
            .single()
            .map(|dt| dt.timestamp())
    }

    /// Local date-time of an instant
    pub fn local(&self, epoch: i64) -> Option<DateTime<FixedOffset>> {
        self.offset.timestamp_opt(epoch, 0).single()
    }

    /// Local calendar year of an instant
    pub fn year_of(&self, epoch: i64) -> Option<i32> {
        self.local(epoch).map(|dt| dt.year())
    }

    /// Local `(year, month)` of an instant
    pub fn year_month_of(&self, epoch: i64) -> Option<(i32, u32)> {
        self.local(epoch).map(|dt| (dt.year(), dt.month()))
    }

    /// First second of a month
    pub fn first_of_month(&self, year: i32, month: u32) -> Option<i64> {
        self.midnight(year, month, 1)
    }

    /// Last second of a month
    pub fn end_of_month(&self, year: i32, month: u32) -> Option<i64> {
        let (next_year, next_month) = next_month(year, month);
        self.first_of_month(next_year, next_month).map(|next| next - 1)
    }

    /// `day_of_month / days_in_month` of an instant, clamped to `[0, 1]`
    pub fn month_fraction(&self, epoch: i64) -> Option<f64> {
        let dt = self.local(epoch)?;
        let days = days_in_month(dt.year(), dt.month())?;
        Some((dt.day() as f64 / days.max(1) as f64).clamp(0.0, 1.0))
    }
}

/// Month following `(year, month)`
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Number of days in a calendar month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next) = next_month(year, month);
    let following = NaiveDate::from_ymd_opt(next_year, next, 1)?;
    Some(following.signed_duration_since(first).num_days() as u32)
}

/// Normalize a JSON date value to epoch seconds
///
/// Numbers are epoch seconds, or milliseconds when above `1e12`. Strings
/// go through [`parse_date_str`]. Anything else is "date unknown".
///
/// # Examples
///
/// ```
/// use folio_timeline::date::{normalize_date, Zone};
/// use serde_json::json;
///
/// let utc = Zone::utc();
/// assert_eq!(normalize_date(&json!("2024-02"), &utc), Some(1_706_745_600));
/// assert_eq!(normalize_date(&json!(1_706_745_600_000_i64), &utc), Some(1_706_745_600));
/// assert_eq!(normalize_date(&json!(null), &utc), None);
/// ```
pub fn normalize_date(value: &Value, zone: &Zone) -> Option<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(from_epoch_int(i)),
            None => n.as_f64().and_then(from_epoch_number),
        },
        Value::String(s) => parse_date_str(s, zone),
        _ => None,
    }
}

/// Epoch seconds from an integer that may be seconds or milliseconds
pub fn from_epoch_int(value: i64) -> i64 {
    if value > MILLIS_THRESHOLD {
        value.div_euclid(1000)
    } else {
        value
    }
}

/// Epoch seconds from a float that may be seconds or milliseconds
pub fn from_epoch_number(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let secs = if value > MILLIS_THRESHOLD as f64 {
        (value / 1000.0).floor()
    } else {
        value.floor()
    };
    Some(secs as i64)
}

/// Parse a date string to epoch seconds
pub fn parse_date_str(input: &str, zone: &Zone) -> Option<i64> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = YEAR_MONTH_DAY_RE.captures(s) {
        return zone.midnight(capture(&caps, 1)?, capture(&caps, 2)?, capture(&caps, 3)?);
    }
    if let Some(caps) = DAY_MONTH_YEAR_RE.captures(s) {
        return zone.midnight(capture(&caps, 3)?, capture(&caps, 2)?, capture(&caps, 1)?);
    }
    if let Some(caps) = YEAR_MONTH_RE.captures(s) {
        return zone.first_of_month(capture(&caps, 1)?, capture(&caps, 2)?);
    }
    if let Some(caps) = YEAR_RE.captures(s) {
        return zone.first_of_month(capture(&caps, 1)?, 1);
    }

    parse_free_form(s, zone)
}

/// Calendar parts a content string spells out, without picking an instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    /// Year
    pub year: i32,
    /// Month 1-12, when given
    pub month: Option<u32>,
    /// Day of month, when given
    pub day: Option<u32>,
}

/// Split a content date string into the parts it actually states
///
/// Used for display, where `2024-03` should read "Mar 2024" rather than
/// "01 Mar 2024". Also accepts `MM/YYYY`.
pub fn parse_date_parts(input: &str) -> Option<DateParts> {
    let s = input.trim();
    let (year, month, day) = if let Some(caps) = YEAR_MONTH_DAY_RE.captures(s) {
        (capture(&caps, 1)?, Some(capture(&caps, 2)?), Some(capture(&caps, 3)?))
    } else if let Some(caps) = DAY_MONTH_YEAR_RE.captures(s) {
        (capture(&caps, 3)?, Some(capture(&caps, 2)?), Some(capture(&caps, 1)?))
    } else if let Some(caps) = YEAR_MONTH_RE.captures(s) {
        (capture(&caps, 1)?, Some(capture(&caps, 2)?), None)
    } else if let Some(caps) = MONTH_YEAR_RE.captures(s) {
        (capture(&caps, 2)?, Some(capture(&caps, 1)?), None)
    } else if let Some(caps) = YEAR_RE.captures(s) {
        (capture(&caps, 1)?, None, None)
    } else {
        return None;
    };

    match (month, day) {
        (Some(m), Some(d)) => {
            NaiveDate::from_ymd_opt(year, m, d)?;
        }
        (Some(m), None) if !(1..=12).contains(&m) => return None,
        _ => {}
    }
    Some(DateParts { year, month, day })
}

fn parse_free_form(s: &str, zone: &Zone) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|naive| zone.naive_to_epoch(&naive))
}

fn capture<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}
