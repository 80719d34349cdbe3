//! Sort and pagination state.
//!
//! Every mutation returns the freshly composed [`QueryParameters`], which the
//! table passes straight to the fetch coordinator. A sort change and the page
//! reset it implies are one change and yield one set of parameters.

use tracing::warn;

use crate::models::{CourseId, QueryParameters, SortDirection, SortField, DEFAULT_PAGE_SIZE};

/// One discrete user-visible change to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    Sort {
        field: SortField,
        direction: SortDirection,
    },
    Page {
        index: usize,
        size: usize,
    },
}

#[derive(Debug, Clone)]
pub struct ViewStateController {
    course_id: CourseId,
    sort_field: SortField,
    sort_direction: SortDirection,
    page_index: usize,
    page_size: usize,
    total_items: Option<usize>,
}

impl ViewStateController {
    pub fn new(course_id: CourseId) -> Self {
        Self::with_page_size(course_id, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(course_id: CourseId, page_size: usize) -> Self {
        Self {
            course_id,
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page_index: 0,
            page_size: sanitize_page_size(page_size),
            total_items: None,
        }
    }

    pub fn current_parameters(&self) -> QueryParameters {
        QueryParameters {
            course_id: self.course_id,
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }

    /// Change the sort and go back to the first page.
    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) -> QueryParameters {
        self.sort_field = field;
        self.sort_direction = direction;
        self.page_index = 0;
        self.current_parameters()
    }

    /// Move to `index` with `size` rows per page. The sort is untouched.
    pub fn set_page(&mut self, index: usize, size: usize) -> QueryParameters {
        self.page_index = index;
        self.page_size = sanitize_page_size(size);
        self.current_parameters()
    }

    pub fn apply(&mut self, change: ViewChange) -> QueryParameters {
        match change {
            ViewChange::Sort { field, direction } => self.set_sort(field, direction),
            ViewChange::Page { index, size } => self.set_page(index, size),
        }
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn sort(&self) -> (SortField, SortDirection) {
        (self.sort_field, self.sort_direction)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> Option<usize> {
        self.total_items
    }

    /// Paginator length. Does not trigger a fetch.
    pub fn set_total_items(&mut self, total: Option<usize>) {
        self.total_items = total;
    }

    /// Number of pages, when the total is known. An empty list still has
    /// one (empty) page.
    pub fn page_count(&self) -> Option<usize> {
        self.total_items
            .map(|total| total.div_ceil(self.page_size).max(1))
    }

    /// Header click on `field`: the active column flips direction, any other
    /// column starts ascending.
    pub fn cycle_sort(&self, field: SortField) -> ViewChange {
        let direction = if field == self.sort_field {
            self.sort_direction.reversed()
        } else {
            SortDirection::Asc
        };
        ViewChange::Sort { field, direction }
    }

    /// `None` on the last page, when the last page is known.
    pub fn next_page(&self) -> Option<ViewChange> {
        let next = self.page_index + 1;
        if let Some(count) = self.page_count() {
            if next >= count {
                return None;
            }
        }
        Some(ViewChange::Page {
            index: next,
            size: self.page_size,
        })
    }

    pub fn previous_page(&self) -> Option<ViewChange> {
        self.page_index.checked_sub(1).map(|index| ViewChange::Page {
            index,
            size: self.page_size,
        })
    }

    /// Resize pages so the first visible row stays on screen.
    pub fn change_page_size(&self, size: usize) -> ViewChange {
        let size = sanitize_page_size(size);
        let first_row = self.page_index * self.page_size;
        ViewChange::Page {
            index: first_row / size,
            size,
        }
    }
}

fn sanitize_page_size(size: usize) -> usize {
    if size == 0 {
        warn!("page size 0 requested, using 1");
        1
    } else {
        size
    }
}
