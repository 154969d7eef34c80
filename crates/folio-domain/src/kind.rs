//! Event kind module - the five source record collections

use serde::{Deserialize, Serialize};

/// Kind of portfolio item an event was normalized from
///
/// Ranged kinds carry a start and an end; instant kinds carry a single
/// date and always render as points:
/// - Experience, Competition, Project: ranged
/// - Certificate, Course: instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Jobs and internships
    Experience,

    /// Hackathons and contests
    Competition,

    /// Personal or team projects
    Project,

    /// Issued certificates (instant)
    Certificate,

    /// Completed courses (instant)
    Course,
}

impl EventKind {
    /// All kinds in normalization order
    pub const ALL: [EventKind; 5] = [
        EventKind::Experience,
        EventKind::Competition,
        EventKind::Project,
        EventKind::Certificate,
        EventKind::Course,
    ];

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Experience => "experience",
            EventKind::Competition => "competition",
            EventKind::Project => "project",
            EventKind::Certificate => "certificate",
            EventKind::Course => "course",
        }
    }

    /// Parse a kind from a string (accepts the plural collection names too)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "experience" | "experiences" => Some(EventKind::Experience),
            "competition" | "competitions" => Some(EventKind::Competition),
            "project" | "projects" => Some(EventKind::Project),
            "certificate" | "certificates" => Some(EventKind::Certificate),
            "course" | "courses" => Some(EventKind::Course),
            _ => None,
        }
    }

    /// Prefix used when building stable event ids (`exp-0`, `crt-3`, ...)
    pub fn id_prefix(&self) -> &'static str {
        match self {
            EventKind::Experience => "exp",
            EventKind::Competition => "cmp",
            EventKind::Project => "prj",
            EventKind::Certificate => "crt",
            EventKind::Course => "crs",
        }
    }

    /// Whether events of this kind are single instants
    pub fn is_instant(&self) -> bool {
        matches!(self, EventKind::Certificate | EventKind::Course)
    }

    /// Display label, also the fallback title for untitled records
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Experience => "Experience",
            EventKind::Competition => "Competition",
            EventKind::Project => "Project",
            EventKind::Certificate => "Certificate",
            EventKind::Course => "Course",
        }
    }

    /// Emoji shown next to the label in tooltips
    pub fn emoji(&self) -> &'static str {
        match self {
            EventKind::Experience => "💼",
            EventKind::Competition => "🏆",
            EventKind::Project => "🧪",
            EventKind::Certificate => "📜",
            EventKind::Course => "📚",
        }
    }

    /// Base band/dot color as `#rrggbb`
    pub fn base_color(&self) -> &'static str {
        match self {
            EventKind::Experience => "#38bdf8",
            EventKind::Competition => "#e879f9",
            EventKind::Project => "#34d399",
            EventKind::Certificate => "#fbbf24",
            EventKind::Course => "#a78bfa",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid event kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!("Courses".parse::<EventKind>(), Ok(EventKind::Course));
        assert!("talk".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_instant_kinds() {
        assert!(EventKind::Certificate.is_instant());
        assert!(EventKind::Course.is_instant());
        assert!(!EventKind::Experience.is_instant());
        assert!(!EventKind::Project.is_instant());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&EventKind::Competition).unwrap();
        assert_eq!(json, "\"competition\"");
    }
}
