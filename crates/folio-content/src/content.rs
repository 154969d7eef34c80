//! Loaded portfolio content
//!
//! Documents that failed to load are already replaced by their empty
//! defaults here; [`PortfolioContent::issues`] says which ones and why.

use crate::document::{Document, Shape};
use folio_timeline::TimelineSources;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Why a document fell back to its default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LoadProblem {
    /// File does not exist
    Missing,
    /// File exists but could not be read
    Unreadable(String),
    /// Contents are not valid JSON
    InvalidJson(String),
    /// Valid JSON of the wrong shape
    WrongShape(Shape),
}

impl fmt::Display for LoadProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadProblem::Missing => write!(f, "missing"),
            LoadProblem::Unreadable(e) => write!(f, "unreadable: {}", e),
            LoadProblem::InvalidJson(e) => write!(f, "invalid JSON: {}", e),
            LoadProblem::WrongShape(expected) => write!(f, "expected a JSON {}", expected),
        }
    }
}

/// A document that fell back to its default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadIssue {
    /// Affected document
    pub document: Document,
    /// What went wrong
    pub problem: LoadProblem,
}

/// A page section the renderer lays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Profile header
    Info,
    /// Work history
    Experience,
    /// Project cards
    Projects,
    /// Competitions
    Competitions,
    /// Certificates
    Certificates,
    /// Courses
    Courses,
    /// Technology stack
    Stack,
    /// Social links
    Socials,
    /// The timeline itself
    Timeline,
}

impl Section {
    /// Order used when `order.json` is absent or empty
    pub const DEFAULT_ORDER: [Section; 9] = [
        Section::Info,
        Section::Experience,
        Section::Projects,
        Section::Competitions,
        Section::Certificates,
        Section::Courses,
        Section::Stack,
        Section::Socials,
        Section::Timeline,
    ];

    /// Section name as written in `order.json`
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Info => "info",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Competitions => "competitions",
            Section::Certificates => "certificates",
            Section::Courses => "courses",
            Section::Stack => "stack",
            Section::Socials => "socials",
            Section::Timeline => "timeline",
        }
    }

    /// Parse a section name, ignoring case and surrounding space
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::DEFAULT_ORDER.into_iter().find(|section| section.as_str() == s)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything read from a content root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Profile object
    pub info: Option<Value>,
    /// Project records
    pub projects: Vec<Value>,
    /// Experience records
    pub experience: Vec<Value>,
    /// Competition records
    pub competitions: Vec<Value>,
    /// Certificate records
    pub certificates: Vec<Value>,
    /// Stack entries
    pub stack: Vec<Value>,
    /// Course records
    pub courses: Vec<Value>,
    /// Social links
    pub socials: Vec<Value>,
    /// Raw section order override
    pub order: Option<Vec<String>>,
    /// Documents that fell back to defaults
    pub issues: Vec<LoadIssue>,
}

impl PortfolioContent {
    /// The five dated collections the timeline is built from
    pub fn timeline_sources(&self) -> TimelineSources {
        TimelineSources {
            experience: self.experience.clone(),
            competitions: self.competitions.clone(),
            certificates: self.certificates.clone(),
            projects: self.projects.clone(),
            courses: self.courses.clone(),
        }
    }

    /// Display order of page sections
    ///
    /// Uses `order.json` when it names at least one known section,
    /// otherwise [`Section::DEFAULT_ORDER`]. Unknown names are dropped and
    /// repeats are kept once.
    pub fn section_order(&self) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();
        for name in self.order.iter().flatten() {
            if let Some(section) = Section::parse(name) {
                if !sections.contains(&section) {
                    sections.push(section);
                }
            }
        }
        if sections.is_empty() {
            Section::DEFAULT_ORDER.to_vec()
        } else {
            sections
        }
    }

    /// Whether every document loaded cleanly
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue recorded for one document, if any
    pub fn issue(&self, document: Document) -> Option<&LoadIssue> {
        self.issues.iter().find(|i| i.document == document)
    }
}

/// Stable sort by each record's `order_index`; records without one go last
pub fn sorted_by_order_index(records: &[Value]) -> Vec<&Value> {
    let mut sorted: Vec<&Value> = records.iter().collect();
    sorted.sort_by(|a, b| order_index(a).total_cmp(&order_index(b)));
    sorted
}

fn order_index(record: &Value) -> f64 {
    record
        .get("order_index")
        .and_then(Value::as_f64)
        .unwrap_or(f64::INFINITY)
}
