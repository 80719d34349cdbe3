//! Single-row expansion.

use crate::models::{Lesson, LessonId};

/// At most one expanded row; expanding another collapses the previous one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionController {
    expanded: Option<LessonId>,
}

impl ExpansionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `lesson` if it is the expanded row, otherwise expand it.
    pub fn toggle(&mut self, lesson: &Lesson) -> Option<LessonId> {
        self.expanded = match self.expanded {
            Some(current) if current == lesson.id => None,
            _ => Some(lesson.id),
        };
        self.expanded
    }

    pub fn expanded(&self) -> Option<LessonId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: LessonId) -> bool {
        self.expanded == Some(id)
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Collapse if the expanded row is no longer among `rows`.
    pub fn retain_visible(&mut self, rows: &[Lesson]) {
        if let Some(id) = self.expanded {
            if !rows.iter().any(|lesson| lesson.id == id) {
                self.expanded = None;
            }
        }
    }
}
