//! Shared fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{mount, paged_source, settle};
//!
//! let source = paged_source(10);
//! let (mut table, mut rx, notifier) = mount(&source, 3);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use lesson_table::models::{Course, CourseId, Lesson};
use lesson_table::table::{FetchOutcome, LessonTable, TableMessage, ViewStateController};
use lesson_table::traits::{ErrorNotifier, LessonSource};
use tokio::sync::mpsc::UnboundedReceiver;

pub const COURSE_ID: CourseId = CourseId(11);

/// `count` lessons with ids and seq numbers starting at 1.
pub fn lessons(count: u64) -> Vec<Lesson> {
    (1..=count).map(lesson).collect()
}

pub fn lesson(id: u64) -> Lesson {
    Lesson::new(id, id as u32, format!("Lesson {}", id), format!("{}:00", id))
        .with_course_id(COURSE_ID.0)
}

pub fn test_course(lessons_count: usize) -> Course {
    Course::new(COURSE_ID.0, "Angular Material Course").with_lessons_count(lessons_count)
}

/// Receive the next completion and apply it.
pub async fn apply_next<S, N>(
    table: &mut LessonTable<S, N>,
    rx: &mut UnboundedReceiver<TableMessage>,
) -> FetchOutcome
where
    S: LessonSource + 'static,
    N: ErrorNotifier,
{
    let message = rx.recv().await.expect("table dropped its sender");
    table.handle_message(message)
}

/// Apply completions until nothing is outstanding.
pub async fn settle<S, N>(table: &mut LessonTable<S, N>, rx: &mut UnboundedReceiver<TableMessage>)
where
    S: LessonSource + 'static,
    N: ErrorNotifier,
{
    while table.is_loading() {
        apply_next(table, rx).await;
    }
}

/// Receive `n` completions without applying them, ordered by token.
pub async fn collect_messages(
    rx: &mut UnboundedReceiver<TableMessage>,
    n: usize,
) -> Vec<TableMessage> {
    let mut messages = Vec::with_capacity(n);
    for _ in 0..n {
        messages.push(rx.recv().await.expect("table dropped its sender"));
    }
    messages.sort_by_key(|message| message.token());
    messages
}

pub fn view(page_size: usize) -> ViewStateController {
    ViewStateController::with_page_size(COURSE_ID, page_size)
}
