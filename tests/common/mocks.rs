//! Lesson sources shaped like the real endpoint.

use lesson_table::adapters::mock::{MockLessonSource, RecordingNotifier};
use lesson_table::models::{Lesson, QueryParameters, SortDirection, SortField};
use lesson_table::table::{LessonTable, TableMessage};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

use super::{lessons, view};

/// Serves `total` lessons, sorted and paged like the server does.
pub fn paged_source(total: u64) -> MockLessonSource {
    let all = lessons(total);
    MockLessonSource::from_fn(move |params| Ok(page_of(&all, params)))
}

pub fn page_of(all: &[Lesson], params: &QueryParameters) -> Vec<Lesson> {
    let mut sorted = all.to_vec();
    match params.sort_field {
        SortField::SeqNo => sorted.sort_by_key(|lesson| lesson.seq_no),
        SortField::Description => sorted.sort_by(|a, b| a.description.cmp(&b.description)),
        SortField::Duration => sorted.sort_by(|a, b| a.duration.cmp(&b.duration)),
    }
    if params.sort_direction == SortDirection::Desc {
        sorted.reverse();
    }
    sorted
        .into_iter()
        .skip(params.offset())
        .take(params.page_size)
        .collect()
}

pub type TestTable = LessonTable<MockLessonSource, RecordingNotifier>;

/// Mount a table over `source` with a recording notifier.
pub fn mount(
    source: &MockLessonSource,
    page_size: usize,
) -> (TestTable, UnboundedReceiver<TableMessage>, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let (table, rx) = LessonTable::new(view(page_size), Arc::new(source.clone()), notifier.clone());
    (table, rx, notifier)
}
