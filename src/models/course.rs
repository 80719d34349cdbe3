use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of the course whose lessons are listed.
///
/// Supplied once by the host when the table is mounted and never changed
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(CourseId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Total number of lessons, used as the paginator length
    #[serde(default)]
    pub lessons_count: Option<usize>,
}

impl Course {
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self {
            id: CourseId(id),
            description: description.into(),
            long_description: None,
            icon_url: None,
            category: None,
            lessons_count: None,
        }
    }

    pub fn with_lessons_count(mut self, count: usize) -> Self {
        self.lessons_count = Some(count);
        self
    }
}
