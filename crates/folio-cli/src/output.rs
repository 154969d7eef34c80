//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use folio_content::{LoadIssue, Section};
use folio_domain::{EventId, EventKind, NormalizedEvent};
use folio_timeline::format::format_range;
use folio_timeline::{TimelineLayout, Zone};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Outcome of `folio check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Content root that was read
    pub root: String,
    /// Documents that fell back to defaults
    pub issues: Vec<LoadIssue>,
    /// Resolved section order
    pub sections: Vec<Section>,
    /// Timeline records found
    pub records: usize,
    /// Records that became events
    pub events: usize,
    /// Records dropped for lack of a usable date
    pub dropped: Vec<EventId>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a layout: full JSON, or a per-row summary table.
    pub fn format_layout(&self, layout: &TimelineLayout) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(layout)?),
            OutputFormat::Table => Ok(self.format_layout_table(layout)),
        }
    }

    fn format_layout_table(&self, layout: &TimelineLayout) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Row", "Months", "Segments", "Lanes", "Points"]);

        for row in 0..layout.rows {
            let months: Vec<_> = layout.months.iter().filter(|m| m.row_index == row).collect();
            let span = match (months.first(), months.last()) {
                (Some(first), Some(last)) => format!("{} – {}", first.label, last.label),
                _ => String::new(),
            };
            let segments = layout.segments.iter().filter(|s| s.row_index == row).count();
            let points = layout.points.iter().filter(|p| p.row_index == row).count();
            builder.push_record([
                row.to_string(),
                span,
                segments.to_string(),
                layout.lane_count(row).to_string(),
                points.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\n{}",
            table,
            self.info(&format!(
                "{} events, {} months, canvas {:.0}×{:.0}",
                layout.events.len(),
                layout.months.len(),
                layout.width,
                layout.height
            ))
        )
    }

    /// Format a list of events.
    pub fn format_events(&self, events: &[&NormalizedEvent], zone: &Zone) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(events)?),
            OutputFormat::Table => Ok(self.format_events_table(events, zone)),
        }
    }

    fn format_events_table(&self, events: &[&NormalizedEvent], zone: &Zone) -> String {
        if events.is_empty() {
            return self.colorize("No events found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Kind", "Title", "Dates", "Organization"]);

        for event in events {
            let kind = format!("{} {}", event.kind.emoji(), event.kind.label());
            let mut dates = format_range(event, zone);
            if event.ongoing {
                dates = self.colorize(&dates, "green");
            }
            builder.push_record([
                event.id.to_string(),
                self.colorize(&kind, kind_color(event.kind)),
                event.title.clone(),
                dates,
                event.meta("organization").unwrap_or("").to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a content check report.
    pub fn format_check(&self, report: &CheckReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_check_table(report)),
        }
    }

    fn format_check_table(&self, report: &CheckReport) -> String {
        let mut lines = Vec::new();

        if report.issues.is_empty() {
            lines.push(self.success(&format!("All documents loaded from {}", report.root)));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Document", "Problem"]);
            for issue in &report.issues {
                builder.push_record([issue.document.to_string(), issue.problem.to_string()]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            lines.push(table.to_string());
            lines.push(self.warning(&format!(
                "{} document(s) fell back to defaults",
                report.issues.len()
            )));
        }

        lines.push(self.info(&format!(
            "{} of {} timeline records dated",
            report.events, report.records
        )));
        if !report.dropped.is_empty() {
            let ids: Vec<&str> = report.dropped.iter().map(EventId::as_str).collect();
            lines.push(self.warning(&format!("Dropped: {}", ids.join(", "))));
        }

        let sections: Vec<&str> = report.sections.iter().map(Section::as_str).collect();
        lines.push(self.info(&format!("Sections: {}", sections.join(" → "))));

        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Terminal color closest to a kind's base color.
fn kind_color(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Experience => "cyan",
        EventKind::Competition => "magenta",
        EventKind::Project => "green",
        EventKind::Certificate => "yellow",
        EventKind::Course => "blue",
    }
}
