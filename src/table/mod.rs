//! The lesson table: sort/page state, fetch coordination, selection and
//! expansion for one mounted course.
//!
//! ## Event flow
//!
//! ```text
//! sort / page change ──▶ ViewStateController::apply ──▶ QueryParameters
//!                                                         │
//!                              FetchCoordinator::begin ◀──┘ (loading = true)
//!                                         │
//!                                 tokio::spawn(fetch_page)
//!                                         │
//!                    TableMessage ◀───────┘ (mpsc, tagged with token)
//!                         │
//!  LessonTable::handle_message ──▶ FetchCoordinator::complete
//!                                   (rows + selection clear, or notify)
//! ```
//!
//! All state is mutated through `&mut self` on the event-loop thread; only
//! the remote fetch runs elsewhere, and it sees nothing but an immutable
//! snapshot of the query parameters.

mod expansion;
mod fetch;
mod selection;
mod view;

pub use expansion::ExpansionController;
pub use fetch::{FetchCoordinator, FetchOutcome, RequestToken};
pub use selection::SelectionController;
pub use view::{ViewChange, ViewStateController};

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::models::{Lesson, LessonId, QueryParameters, SortDirection, SortField};
use crate::traits::{ErrorNotifier, LessonSource};
use crate::view_state::{PaginatorView, RowView, TableViewState};

/// Completion of a spawned page fetch.
#[derive(Debug, Clone)]
pub enum TableMessage {
    PageLoaded {
        token: RequestToken,
        lessons: Vec<Lesson>,
    },
    PageLoadFailed {
        token: RequestToken,
        error: FetchError,
    },
}

impl TableMessage {
    pub fn token(&self) -> RequestToken {
        match self {
            TableMessage::PageLoaded { token, .. } | TableMessage::PageLoadFailed { token, .. } => {
                *token
            }
        }
    }

    fn into_parts(self) -> (RequestToken, FetchResult<Vec<Lesson>>) {
        match self {
            TableMessage::PageLoaded { token, lessons } => (token, Ok(lessons)),
            TableMessage::PageLoadFailed { token, error } => (token, Err(error)),
        }
    }
}

pub struct LessonTable<S, N> {
    source: Arc<S>,
    notifier: N,
    view: ViewStateController,
    fetch: FetchCoordinator,
    selection: SelectionController,
    expansion: ExpansionController,
    message_tx: mpsc::UnboundedSender<TableMessage>,
}

impl<S, N> LessonTable<S, N>
where
    S: LessonSource + 'static,
    N: ErrorNotifier,
{
    /// Mount a table. Fetch completions arrive on the returned receiver and
    /// must be passed back through [`handle_message`](Self::handle_message).
    ///
    /// Nothing is fetched until [`load`](Self::load) or a view change.
    pub fn new(
        view: ViewStateController,
        source: Arc<S>,
        notifier: N,
    ) -> (Self, mpsc::UnboundedReceiver<TableMessage>) {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let table = Self {
            source,
            notifier,
            view,
            fetch: FetchCoordinator::new(),
            selection: SelectionController::new(),
            expansion: ExpansionController::new(),
            message_tx,
        };
        (table, message_rx)
    }

    /// Fetch the page for the current parameters.
    pub fn load(&mut self) -> RequestToken {
        let params = self.view.current_parameters();
        self.dispatch(params)
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) -> RequestToken {
        self.apply(ViewChange::Sort { field, direction })
    }

    pub fn set_page(&mut self, index: usize, size: usize) -> RequestToken {
        self.apply(ViewChange::Page { index, size })
    }

    /// Single entry point for view changes: exactly one fetch per change.
    pub fn apply(&mut self, change: ViewChange) -> RequestToken {
        debug!(?change, "view change");
        let params = self.view.apply(change);
        self.dispatch(params)
    }

    pub fn cycle_sort(&mut self, field: SortField) -> RequestToken {
        let change = self.view.cycle_sort(field);
        self.apply(change)
    }

    pub fn next_page(&mut self) -> Option<RequestToken> {
        let change = self.view.next_page()?;
        Some(self.apply(change))
    }

    pub fn previous_page(&mut self) -> Option<RequestToken> {
        let change = self.view.previous_page()?;
        Some(self.apply(change))
    }

    /// `None` when `size` is already the page size.
    pub fn change_page_size(&mut self, size: usize) -> Option<RequestToken> {
        if size == self.view.page_size() {
            return None;
        }
        let change = self.view.change_page_size(size);
        Some(self.apply(change))
    }

    fn dispatch(&mut self, params: QueryParameters) -> RequestToken {
        let token = self.fetch.begin(params.clone());
        let source = Arc::clone(&self.source);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match source.fetch_page(&params).await {
                Ok(lessons) => TableMessage::PageLoaded { token, lessons },
                Err(error) => TableMessage::PageLoadFailed { token, error },
            };
            // Receiver is gone once the table is unmounted.
            let _ = message_tx.send(message);
        });

        token
    }

    /// Apply a fetch completion received from the channel.
    pub fn handle_message(&mut self, message: TableMessage) -> FetchOutcome {
        let (token, result) = message.into_parts();
        let outcome = self
            .fetch
            .complete(token, result, &mut self.selection, &self.notifier);
        if let FetchOutcome::Applied { .. } = outcome {
            self.expansion.retain_visible(self.fetch.rows());
        }
        outcome
    }

    /// Toggle the checkbox of a visible row. Unknown ids are ignored.
    pub fn toggle_lesson(&mut self, id: LessonId) -> bool {
        match self.fetch.rows().iter().find(|lesson| lesson.id == id) {
            Some(lesson) => self.selection.toggle(lesson),
            None => {
                debug!(%id, "ignoring selection toggle for row not on this page");
                false
            }
        }
    }

    pub fn toggle_all(&mut self) {
        self.selection.toggle_all(self.fetch.rows());
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.fetch.rows())
    }

    pub fn selected_lessons(&self) -> Vec<&Lesson> {
        self.selection.selected_items(self.fetch.rows())
    }

    /// Expand or collapse a visible row. Unknown ids leave expansion as is.
    pub fn toggle_expand(&mut self, id: LessonId) -> Option<LessonId> {
        if let Some(lesson) = self.fetch.rows().iter().find(|lesson| lesson.id == id) {
            self.expansion.toggle(lesson);
        }
        self.expansion.expanded()
    }

    pub fn expanded(&self) -> Option<LessonId> {
        self.expansion.expanded()
    }

    pub fn rows(&self) -> &[Lesson] {
        self.fetch.rows()
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    pub fn current_parameters(&self) -> QueryParameters {
        self.view.current_parameters()
    }

    pub fn view(&self) -> &ViewStateController {
        &self.view
    }

    /// Paginator length, typically the course's lesson count.
    pub fn set_total_items(&mut self, total: Option<usize>) {
        self.view.set_total_items(total);
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Read-only projection for rendering.
    pub fn view_state(&self) -> TableViewState<'_> {
        let rows = self.fetch.rows();
        let (sort_field, sort_direction) = self.view.sort();
        TableViewState {
            rows: rows
                .iter()
                .map(|lesson| RowView {
                    lesson,
                    selected: self.selection.is_selected(lesson.id),
                    expanded: self.expansion.is_expanded(lesson.id),
                })
                .collect(),
            loading: self.fetch.is_loading(),
            all_selected: self.selection.is_all_selected(rows),
            partially_selected: self.selection.is_partially_selected(rows),
            selected_count: self.selection.len(),
            sort_field,
            sort_direction,
            paginator: PaginatorView {
                page_index: self.view.page_index(),
                page_size: self.view.page_size(),
                page_count: self.view.page_count(),
                total_items: self.view.total_items(),
                visible_rows: rows.len(),
            },
        }
    }
}
