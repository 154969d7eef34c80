//! The documents a content root holds

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One JSON document under the content root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Document {
    /// `info.json`: profile object
    Info,
    /// `projects.json`
    Projects,
    /// `experience.json`
    Experience,
    /// `competitions.json`
    Competitions,
    /// `certificates.json`
    Certificates,
    /// `stack.json`
    Stack,
    /// `courses.json`
    Courses,
    /// `socials.json`
    Socials,
    /// `order.json`: section order override
    Order,
}

/// JSON shape a document must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A JSON object
    Object,
    /// A JSON array
    Array,
}

impl Shape {
    /// Whether a value has this shape
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Shape::Object => value.is_object(),
            Shape::Array => value.is_array(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Object => "object",
            Shape::Array => "array",
        })
    }
}

impl Document {
    /// Every document, in load-report order
    pub const ALL: [Document; 9] = [
        Document::Info,
        Document::Projects,
        Document::Experience,
        Document::Competitions,
        Document::Certificates,
        Document::Stack,
        Document::Courses,
        Document::Socials,
        Document::Order,
    ];

    /// File name under the content root
    pub fn file_name(&self) -> &'static str {
        match self {
            Document::Info => "info.json",
            Document::Projects => "projects.json",
            Document::Experience => "experience.json",
            Document::Competitions => "competitions.json",
            Document::Certificates => "certificates.json",
            Document::Stack => "stack.json",
            Document::Courses => "courses.json",
            Document::Socials => "socials.json",
            Document::Order => "order.json",
        }
    }

    /// Required shape
    pub fn shape(&self) -> Shape {
        match self {
            Document::Info => Shape::Object,
            _ => Shape::Array,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
