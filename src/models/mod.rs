mod course;
mod lesson;
mod query;

pub use course::{Course, CourseId};
pub use lesson::{Lesson, LessonId};
pub use query::{
    QueryParameters, SortDirection, SortField, UnknownValue, DEFAULT_PAGE_SIZE,
};

use serde::{Deserialize, Serialize};

/// Envelope returned by the lessons endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LessonsPayload {
    #[serde(default)]
    pub payload: Vec<Lesson>,
}
