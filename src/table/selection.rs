//! Multi-row selection scoped to the visible page.

use std::collections::HashSet;

use crate::models::{Lesson, LessonId};

/// Selected lesson identities.
///
/// Always a subset of the current rows: the fetch coordinator clears it
/// whenever rows are replaced. That ordering is what keeps the size-based
/// [`is_all_selected`](Self::is_all_selected) check correct.
#[derive(Debug, Default, Clone)]
pub struct SelectionController {
    selected: HashSet<LessonId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `lesson`. Returns whether it is now selected.
    pub fn toggle(&mut self, lesson: &Lesson) -> bool {
        if self.selected.remove(&lesson.id) {
            false
        } else {
            self.selected.insert(lesson.id);
            true
        }
    }

    pub fn is_selected(&self, id: LessonId) -> bool {
        self.selected.contains(&id)
    }

    /// Non-empty and as large as the row set.
    pub fn is_all_selected(&self, rows: &[Lesson]) -> bool {
        !self.selected.is_empty() && self.selected.len() == rows.len()
    }

    /// Some, but not all, rows are selected.
    pub fn is_partially_selected(&self, rows: &[Lesson]) -> bool {
        !self.selected.is_empty() && !self.is_all_selected(rows)
    }

    /// Clear when everything is selected, otherwise select every row.
    pub fn toggle_all(&mut self, rows: &[Lesson]) {
        if self.is_all_selected(rows) {
            self.selected.clear();
        } else {
            self.selected.extend(rows.iter().map(|lesson| lesson.id));
        }
    }

    /// Selected lessons in row order.
    pub fn selected_items<'a>(&self, rows: &'a [Lesson]) -> Vec<&'a Lesson> {
        rows.iter()
            .filter(|lesson| self.selected.contains(&lesson.id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
