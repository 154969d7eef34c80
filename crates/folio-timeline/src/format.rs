//! Display formatting for dates and ranges
//!
//! Month names are fixed English abbreviations so output never depends on
//! the host locale.

use crate::date::{parse_date_parts, Zone};
use chrono::Datelike;
use folio_domain::NormalizedEvent;

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn abbr(month: u32) -> &'static str {
    MONTH_ABBR
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("???")
}

/// Grid label such as `Jan ’24`
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} ’{:02}", abbr(month), year.rem_euclid(100))
}

/// Grid label of the month containing an instant
pub fn month_label_at(epoch: i64, zone: &Zone) -> String {
    match zone.year_month_of(epoch) {
        Some((year, month)) => month_label(year, month),
        None => String::new(),
    }
}

/// `15 Jan 2024`; empty for instants the calendar cannot represent
pub fn format_date(epoch: i64, zone: &Zone) -> String {
    match zone.local(epoch) {
        Some(dt) => format!("{:02} {} {}", dt.day(), abbr(dt.month()), dt.year()),
        None => String::new(),
    }
}

/// Tooltip range: `15 Jan 2024 → 20 Aug 2024`, `... → Present` when
/// ongoing, a single date for points
pub fn format_range(event: &NormalizedEvent, zone: &Zone) -> String {
    let start = format_date(event.start, zone);
    if event.is_point() {
        return start;
    }
    let end = if event.ongoing {
        "Present".to_string()
    } else {
        format_date(event.end, zone)
    };
    format!("{} → {}", start, end)
}

/// Raw content date as `Mar 2024` (or `2024` for a bare year)
///
/// Empty when the string is not a recognizable date.
pub fn format_year_month(input: &str) -> String {
    match parse_date_parts(input) {
        Some(parts) => match parts.month {
            Some(month) => format!("{} {}", abbr(month), parts.year),
            None => parts.year.to_string(),
        },
        None => String::new(),
    }
}

/// Raw content date as `05 Mar 2024`, falling back to [`format_year_month`]
pub fn format_date_str(input: &str) -> String {
    match parse_date_parts(input) {
        Some(parts) => match (parts.month, parts.day) {
            (Some(month), Some(day)) => format!("{:02} {} {}", day, abbr(month), parts.year),
            _ => format_year_month(input),
        },
        None => String::new(),
    }
}
