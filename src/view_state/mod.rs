//! View state for decoupling rendering from the table.
//!
//! Rendering is a pure function of [`TableViewState`], a borrowed
//! projection built by [`crate::table::LessonTable::view_state`]. The UI
//! never reaches into the controllers directly.

mod paginator;

pub use paginator::PaginatorView;

use crate::models::{Lesson, SortDirection, SortField};

/// One visible row with its checkbox and expansion state.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub lesson: &'a Lesson,
    pub selected: bool,
    pub expanded: bool,
}

/// State of the select-all checkbox in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    Unchecked,
    Indeterminate,
    Checked,
}

#[derive(Debug, Clone)]
pub struct TableViewState<'a> {
    pub rows: Vec<RowView<'a>>,
    pub loading: bool,
    pub all_selected: bool,
    pub partially_selected: bool,
    pub selected_count: usize,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub paginator: PaginatorView,
}

impl TableViewState<'_> {
    pub fn header_checkbox(&self) -> HeaderCheckbox {
        if self.all_selected {
            HeaderCheckbox::Checked
        } else if self.partially_selected {
            HeaderCheckbox::Indeterminate
        } else {
            HeaderCheckbox::Unchecked
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The expanded row, if it is on this page.
    pub fn expanded_row(&self) -> Option<&RowView<'_>> {
        self.rows.iter().find(|row| row.expanded)
    }
}

/// Everything one frame needs: the table projection plus host chrome.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub title: &'a str,
    pub table: TableViewState<'a>,
    pub cursor: usize,
    pub error: Option<String>,
    pub tick: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(all: bool, partial: bool) -> TableViewState<'static> {
        TableViewState {
            rows: Vec::new(),
            loading: false,
            all_selected: all,
            partially_selected: partial,
            selected_count: 0,
            sort_field: SortField::SeqNo,
            sort_direction: SortDirection::Asc,
            paginator: PaginatorView::default(),
        }
    }

    #[test]
    fn test_header_checkbox() {
        assert_eq!(state(false, false).header_checkbox(), HeaderCheckbox::Unchecked);
        assert_eq!(state(false, true).header_checkbox(), HeaderCheckbox::Indeterminate);
        assert_eq!(state(true, false).header_checkbox(), HeaderCheckbox::Checked);
        assert!(state(false, false).is_empty());
    }
}
