//! Application state for the terminal front end.
//!
//! `App` owns the mounted [`LessonTable`] plus the purely presentational
//! state around it (row cursor, redraw flag, spinner tick). Keys are mapped
//! to [`Command`]s and executed against the table; fetch completions are fed
//! back through [`App::handle_message`].

use crossterm::event::KeyEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::adapters::StatusLineNotifier;
use crate::config::Config;
use crate::input::{Command, KeybindingConfig};
use crate::models::{Course, LessonId};
use crate::table::{FetchOutcome, LessonTable, TableMessage, ViewStateController};
use crate::traits::LessonSource;
use crate::view_state::RenderContext;

pub struct App<S> {
    pub table: LessonTable<S, StatusLineNotifier>,
    /// Shared with the table; the UI reads the banner from here
    pub status: StatusLineNotifier,
    pub course: Course,
    pub config: Config,
    keybindings: KeybindingConfig,
    /// Row under the cursor, index into the visible rows
    pub cursor: usize,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,
    /// Taken by the event loop so it can `select!` on it
    pub message_rx: Option<mpsc::UnboundedReceiver<TableMessage>>,
}

impl<S: LessonSource + 'static> App<S> {
    pub fn new(config: Config, course: Course, source: Arc<S>) -> Self {
        let mut view = ViewStateController::with_page_size(course.id, config.page_size);
        view.set_total_items(course.lessons_count);

        let status = StatusLineNotifier::new();
        let (table, message_rx) = LessonTable::new(view, source, status.clone());

        Self {
            table,
            status,
            course,
            config,
            keybindings: KeybindingConfig::new(),
            cursor: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
        }
    }

    /// Issue the first fetch.
    pub fn start(&mut self) {
        self.table.load();
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns false when the key is not bound.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.keybindings.command_for(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    pub fn execute(&mut self, command: Command) {
        debug!(?command, "execute");
        match command {
            Command::Quit => self.should_quit = true,
            Command::DismissError => self.status.dismiss(),
            Command::Reload => {
                self.table.load();
            }
            Command::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Command::CursorDown => {
                if self.cursor + 1 < self.table.rows().len() {
                    self.cursor += 1;
                }
            }
            Command::ToggleRow => {
                if let Some(id) = self.cursor_lesson_id() {
                    self.table.toggle_lesson(id);
                }
            }
            Command::ToggleAll => self.table.toggle_all(),
            Command::ToggleExpand => {
                if let Some(id) = self.cursor_lesson_id() {
                    self.table.toggle_expand(id);
                }
            }
            Command::SortBy(field) => {
                self.table.cycle_sort(field);
            }
            Command::NextPage => {
                self.table.next_page();
            }
            Command::PreviousPage => {
                self.table.previous_page();
            }
            Command::LargerPageSize => {
                let size = self.config.next_page_size(self.table.view().page_size());
                self.table.change_page_size(size);
            }
            Command::SmallerPageSize => {
                let size = self.config.previous_page_size(self.table.view().page_size());
                self.table.change_page_size(size);
            }
        }
        self.mark_dirty();
    }

    pub fn handle_message(&mut self, message: TableMessage) -> FetchOutcome {
        let outcome = self.table.handle_message(message);
        match outcome {
            FetchOutcome::Applied { .. } => {
                self.cursor = 0;
                self.mark_dirty();
            }
            FetchOutcome::Failed(_) => self.mark_dirty(),
            FetchOutcome::Stale => {}
        }
        outcome
    }

    /// Spinner tick; only redraws while a fetch is outstanding.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.table.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn cursor_lesson_id(&self) -> Option<LessonId> {
        self.table.rows().get(self.cursor).map(|lesson| lesson.id)
    }

    pub fn error_banner(&self) -> Option<String> {
        self.status.current()
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            title: &self.course.description,
            table: self.table.view_state(),
            cursor: self.cursor,
            error: self.error_banner(),
            tick: self.tick_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockLessonSource;
    use crate::error::FetchError;
    use crate::traits::HttpError;
    use crate::models::{Lesson, SortDirection, SortField};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn paged_source() -> MockLessonSource {
        MockLessonSource::from_fn(|params| {
            let start = params.offset() as u64;
            let end = (start + params.page_size as u64).min(10);
            Ok((start..end)
                .map(|i| Lesson::new(i + 1, i as u32 + 1, format!("Lesson {}", i + 1), "1:00"))
                .collect())
        })
    }

    async fn started(source: MockLessonSource) -> App<MockLessonSource> {
        let course = Course::new(1, "Angular Material Course").with_lessons_count(10);
        let mut app = App::new(Config::default(), course, Arc::new(source));
        app.start();
        drain(&mut app).await;
        app
    }

    async fn drain(app: &mut App<MockLessonSource>) {
        let mut rx = app.message_rx.take().unwrap();
        while app.table.is_loading() {
            let message = rx.recv().await.unwrap();
            app.handle_message(message);
        }
        app.message_rx = Some(rx);
    }

    #[tokio::test]
    async fn test_start_loads_first_page() {
        let app = started(paged_source()).await;
        assert_eq!(app.table.rows().len(), 3);
        assert_eq!(app.cursor_lesson_id(), Some(LessonId(1)));
    }

    #[tokio::test]
    async fn test_cursor_selection_and_expand() {
        let mut app = started(paged_source()).await;

        app.handle_key(key('j'));
        app.handle_key(key(' '));
        assert_eq!(app.table.selected_lessons()[0].id, LessonId(2));

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.table.expanded(), Some(LessonId(2)));

        app.handle_key(key('j'));
        app.handle_key(key('j'));
        assert_eq!(app.cursor, 2);

        app.handle_key(key('a'));
        assert!(app.table.is_all_selected());
    }

    #[tokio::test]
    async fn test_sort_key_resets_to_first_page() {
        let source = paged_source();
        let mut app = started(source.clone()).await;

        app.handle_key(key('n'));
        drain(&mut app).await;
        assert_eq!(app.table.current_parameters().page_index, 1);

        app.handle_key(key('2'));
        drain(&mut app).await;
        let last = source.last_call().unwrap();
        assert_eq!(last.sort_field, SortField::Description);
        assert_eq!(last.sort_direction, SortDirection::Asc);
        assert_eq!(last.page_index, 0);
        assert_eq!(source.call_count(), 3);
    }

    #[tokio::test]
    async fn test_page_size_keys_cycle_options() {
        let source = paged_source();
        let mut app = started(source.clone()).await;

        app.handle_key(key('+'));
        drain(&mut app).await;
        assert_eq!(app.table.rows().len(), 5);

        app.handle_key(key('-'));
        drain(&mut app).await;
        assert_eq!(source.last_call().unwrap().page_size, 3);
    }

    #[tokio::test]
    async fn test_failure_sets_banner_and_esc_dismisses() {
        let source = paged_source();
        let mut app = started(source.clone()).await;

        source.push_result(Err(FetchError::Transport(HttpError::ConnectionFailed("offline".to_string()))));
        app.handle_key(key('r'));
        drain(&mut app).await;

        assert_eq!(app.error_banner().as_deref(), Some("Error Loading Lessons."));
        assert_eq!(app.table.rows().len(), 3);

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.error_banner().is_none());
    }

    #[tokio::test]
    async fn test_quit_and_unbound_keys() {
        let mut app = started(paged_source()).await;
        assert!(!app.handle_key(key('z')));
        assert!(app.handle_key(key('q')));
        assert!(app.should_quit);
    }
}
