use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a lesson row.
///
/// Selection and expansion match rows by this value only; two `Lesson`
/// values with the same id are the same row even if other fields differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(pub u64);

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single lesson as returned by the lessons endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    /// Position of the lesson inside its course
    pub seq_no: u32,
    pub description: String,
    /// Display duration, e.g. "4:17"
    #[serde(default)]
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<u64>,
}

impl Lesson {
    pub fn new(id: u64, seq_no: u32, description: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            id: LessonId(id),
            seq_no,
            description: description.into(),
            duration: duration.into(),
            course_id: None,
        }
    }

    pub fn with_course_id(mut self, course_id: u64) -> Self {
        self.course_id = Some(course_id);
        self
    }
}
