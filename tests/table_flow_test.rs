//! End-to-end flows through `LessonTable`: view changes issue fetches,
//! completions arrive over the channel and are applied on this task.

mod common;

use common::*;
use lesson_table::adapters::mock::MockLessonSource;
use lesson_table::error::{FetchError, LOAD_ERROR_MESSAGE};
use lesson_table::models::{LessonId, SortDirection, SortField};
use lesson_table::table::FetchOutcome;
use lesson_table::traits::HttpError;

fn ids(rows: &[lesson_table::models::Lesson]) -> Vec<u64> {
    rows.iter().map(|lesson| lesson.id.0).collect()
}

// ============================================================================
// Fetch issuing
// ============================================================================

#[tokio::test]
async fn test_one_fetch_per_change_with_current_parameters() {
    let source = paged_source(10);
    let (mut table, mut rx, _notifier) = mount(&source, 3);

    table.load();
    settle(&mut table, &mut rx).await;
    assert_eq!(source.call_count(), 1);
    assert_eq!(ids(table.rows()), vec![1, 2, 3]);

    table.set_page(2, 3);
    settle(&mut table, &mut rx).await;
    assert_eq!(source.call_count(), 2);
    let call = source.last_call().unwrap();
    assert_eq!(call.course_id, COURSE_ID);
    assert_eq!(call.page_index, 2);
    assert_eq!(call.page_size, 3);
    assert_eq!(ids(table.rows()), vec![7, 8, 9]);
}

#[tokio::test]
async fn test_sort_after_paging_resets_to_first_page() {
    let source = paged_source(10);
    let (mut table, mut rx, _notifier) = mount(&source, 3);

    table.set_page(2, 3);
    settle(&mut table, &mut rx).await;
    table.set_sort(SortField::Description, SortDirection::Desc);
    settle(&mut table, &mut rx).await;

    let call = source.last_call().unwrap();
    assert_eq!(call.page_index, 0);
    assert_eq!(call.sort_field, SortField::Description);
    assert_eq!(call.sort_direction, SortDirection::Desc);
    assert_eq!(call.page_size, 3);
    // Lexical order: "Lesson 10" sorts right after "Lesson 1"
    assert_eq!(ids(table.rows()), vec![9, 8, 7]);
}

#[tokio::test]
async fn test_loading_spans_issue_to_completion() {
    let source = paged_source(10);
    let (mut table, mut rx, _notifier) = mount(&source, 3);
    assert!(!table.is_loading());

    table.load();
    assert!(table.is_loading());
    assert!(table.view_state().loading);

    let outcome = apply_next(&mut table, &mut rx).await;
    assert!(matches!(outcome, FetchOutcome::Applied { rows: 3 }));
    assert!(!table.is_loading());
}

// ============================================================================
// Failure handling
// ============================================================================

#[tokio::test]
async fn test_failed_fetch_keeps_rows_and_notifies_once() {
    let source = MockLessonSource::with_rows(lessons(2));
    let (mut table, mut rx, notifier) = mount(&source, 3);
    table.load();
    settle(&mut table, &mut rx).await;

    source.push_result(Err(FetchError::Status {
        status: 500,
        message: "boom".to_string(),
    }));
    table.load();
    assert!(table.is_loading());

    let outcome = apply_next(&mut table, &mut rx).await;
    assert!(matches!(outcome, FetchOutcome::Failed(FetchError::Status { status: 500, .. })));
    assert_eq!(ids(table.rows()), vec![1, 2]);
    assert!(!table.is_loading());
    assert_eq!(notifier.messages(), vec![LOAD_ERROR_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_failure_keeps_selection() {
    let source = MockLessonSource::with_rows(lessons(3));
    let (mut table, mut rx, _notifier) = mount(&source, 3);
    table.load();
    settle(&mut table, &mut rx).await;
    table.toggle_lesson(LessonId(1));

    source.push_result(Err(FetchError::Transport(HttpError::ConnectionFailed("offline".to_string()))));
    table.load();
    settle(&mut table, &mut rx).await;

    assert_eq!(table.selected_lessons().len(), 1);
}

// ============================================================================
// Selection and expansion
// ============================================================================

#[tokio::test]
async fn test_reload_clears_selection() {
    let source = MockLessonSource::with_rows(lessons(3));
    let (mut table, mut rx, _notifier) = mount(&source, 3);
    table.load();
    settle(&mut table, &mut rx).await;

    assert!(table.toggle_lesson(LessonId(2)));
    assert_eq!(table.selected_lessons()[0].id, LessonId(2));

    table.load();
    settle(&mut table, &mut rx).await;
    assert!(table.selected_lessons().is_empty());
    assert!(!table.view_state().rows[1].selected);
}

#[tokio::test]
async fn test_select_all_round_trip() {
    let source = MockLessonSource::with_rows(lessons(3));
    let (mut table, mut rx, _notifier) = mount(&source, 3);

    // Nothing loaded yet
    assert!(!table.is_all_selected());

    table.load();
    settle(&mut table, &mut rx).await;

    table.toggle_lesson(LessonId(3));
    assert!(!table.is_all_selected());
    table.toggle_all();
    assert!(table.is_all_selected());
    assert_eq!(table.selected_lessons().len(), 3);

    table.toggle_all();
    assert!(!table.is_all_selected());
    assert!(table.selected_lessons().is_empty());
}

#[tokio::test]
async fn test_select_all_with_duplicate_ids_still_clears() {
    let source = MockLessonSource::with_rows(vec![lesson(1), lesson(1), lesson(2)]);
    let (mut table, mut rx, _notifier) = mount(&source, 3);
    table.load();
    settle(&mut table, &mut rx).await;
    assert_eq!(ids(table.rows()), vec![1, 2]);

    table.toggle_all();
    assert!(table.is_all_selected());
    table.toggle_all();
    assert!(!table.is_all_selected());
    assert!(table.selected_lessons().is_empty());
}

#[tokio::test]
async fn test_toggle_unknown_row_is_ignored() {
    let source = MockLessonSource::with_rows(lessons(3));
    let (mut table, mut rx, _notifier) = mount(&source, 3);
    table.load();
    settle(&mut table, &mut rx).await;

    assert!(!table.toggle_lesson(LessonId(42)));
    assert!(table.selected_lessons().is_empty());
    assert_eq!(table.toggle_expand(LessonId(42)), None);
}

#[tokio::test]
async fn test_expand_collapse_sequence() {
    let source = MockLessonSource::with_rows(lessons(3));
    let (mut table, mut rx, _notifier) = mount(&source, 3);
    table.load();
    settle(&mut table, &mut rx).await;

    assert_eq!(table.toggle_expand(LessonId(1)), Some(LessonId(1)));
    assert_eq!(table.toggle_expand(LessonId(2)), Some(LessonId(2)));
    assert_eq!(table.toggle_expand(LessonId(2)), None);
}

#[tokio::test]
async fn test_expansion_survives_reload_but_not_page_change() {
    let source = paged_source(10);
    let (mut table, mut rx, _notifier) = mount(&source, 3);
    table.load();
    settle(&mut table, &mut rx).await;

    table.toggle_expand(LessonId(2));
    table.load();
    settle(&mut table, &mut rx).await;
    assert_eq!(table.expanded(), Some(LessonId(2)));

    table.next_page();
    settle(&mut table, &mut rx).await;
    assert_eq!(table.expanded(), None);
}

// ============================================================================
// Stale completions
// ============================================================================

#[tokio::test]
async fn test_older_completion_after_newer_is_discarded() {
    let source = paged_source(10);
    let (mut table, mut rx, _notifier) = mount(&source, 3);

    let first = table.set_page(1, 3);
    let second = table.set_page(2, 3);
    assert!(first < second);

    let messages = collect_messages(&mut rx, 2).await;
    let mut messages = messages.into_iter();
    let older = messages.next().unwrap();
    let newer = messages.next().unwrap();

    assert!(matches!(table.handle_message(newer), FetchOutcome::Applied { .. }));
    assert!(table.handle_message(older).is_stale());
    assert_eq!(ids(table.rows()), vec![7, 8, 9]);
    assert!(!table.is_loading());
}

#[tokio::test]
async fn test_older_completion_before_newer_keeps_loading() {
    let source = paged_source(10);
    let (mut table, mut rx, _notifier) = mount(&source, 3);
    table.load();
    settle(&mut table, &mut rx).await;

    table.set_page(1, 3);
    table.set_page(2, 3);
    let mut messages = collect_messages(&mut rx, 2).await.into_iter();
    let older = messages.next().unwrap();
    let newer = messages.next().unwrap();

    assert!(table.handle_message(older).is_stale());
    assert!(table.is_loading());
    assert_eq!(ids(table.rows()), vec![1, 2, 3]);

    table.handle_message(newer);
    assert!(!table.is_loading());
    assert_eq!(ids(table.rows()), vec![7, 8, 9]);
}

#[tokio::test]
async fn test_stale_failure_does_not_notify() {
    let all = lessons(10);
    let source = MockLessonSource::from_fn(move |params| {
        if params.page_index == 1 {
            Err(FetchError::Transport(HttpError::Timeout("slow replica".to_string())))
        } else {
            Ok(page_of(&all, params))
        }
    });
    let (mut table, mut rx, notifier) = mount(&source, 3);

    table.set_page(1, 3);
    table.set_page(2, 3);
    let mut messages = collect_messages(&mut rx, 2).await.into_iter();
    let failing = messages.next().unwrap();
    let newer = messages.next().unwrap();

    table.handle_message(newer);
    assert!(table.handle_message(failing).is_stale());
    assert_eq!(notifier.count(), 0);
}

// ============================================================================
// Paginator navigation
// ============================================================================

#[tokio::test]
async fn test_next_page_stops_at_known_total() {
    let source = paged_source(10);
    let (mut table, mut rx, _notifier) = mount(&source, 3);
    table.set_total_items(Some(10));

    table.set_page(3, 3);
    settle(&mut table, &mut rx).await;
    assert_eq!(ids(table.rows()), vec![10]);

    assert!(table.next_page().is_none());
    assert_eq!(source.call_count(), 1);

    assert!(table.previous_page().is_some());
    settle(&mut table, &mut rx).await;
    assert_eq!(table.current_parameters().page_index, 2);
}

#[tokio::test]
async fn test_page_size_change_keeps_first_row_visible() {
    let source = paged_source(10);
    let (mut table, mut rx, _notifier) = mount(&source, 3);

    table.set_page(2, 3);
    settle(&mut table, &mut rx).await;
    assert_eq!(ids(table.rows()), vec![7, 8, 9]);

    assert!(table.change_page_size(5).is_some());
    settle(&mut table, &mut rx).await;
    assert_eq!(table.current_parameters().page_index, 1);
    assert_eq!(ids(table.rows()), vec![6, 7, 8, 9, 10]);

    assert!(table.change_page_size(5).is_none());
    assert_eq!(source.call_count(), 2);
}
